use crate::config::CorrectorConfig;
use crate::core::corrector::Corrector;
use crate::core::model::FrequencyModel;
use crate::core::types::{Count, ModelSource, Suggestion, Word};
use crate::error::{CorrectorError, Result};
use crate::learning::{model_from_file, Trainer};
use crate::persistence::ModelCache;
use parking_lot::{Mutex, RwLock};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use tracing::{error, info, warn};

const BUILD_THREAD_NAME: &str = "spell-model-build";

/// State shared between the engine and its background build thread.
struct Shared {
    model: RwLock<FrequencyModel>,
    ready: AtomicBool,
}

impl Shared {
    /// Swaps a finished model in; readers never see a partial build.
    fn install(&self, model: FrequencyModel) {
        *self.model.write() = model;
        self.ready.store(true, Ordering::Release);
    }
}

type CompletionFn = Box<dyn FnOnce(bool) + Send + 'static>;

/// A completion callback that can be fired at most once, from whichever
/// thread gets to it first.
#[derive(Clone)]
struct Completion(Arc<Mutex<Option<CompletionFn>>>);

impl Completion {
    fn new(callback: impl FnOnce(bool) + Send + 'static) -> Self {
        let callback: CompletionFn = Box::new(callback);
        Self(Arc::new(Mutex::new(Some(callback))))
    }

    fn fire(&self, success: bool) {
        // Take the callback out before calling it so the lock is not held
        // while user code runs.
        let callback = self.0.lock().take();
        if let Some(callback) = callback {
            callback(success);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelStats {
    /// Distinct words.
    pub words: usize,
    /// Total observations.
    pub total: Count,
}

/// The public face of the corrector: bound to a corpus, it builds or loads a
/// frequency model and answers correction queries against it.
///
/// Queries take a shared read lock and may run from many threads at once.
/// A build prepares the new model off to the side and swaps it in under the
/// write lock when complete.
pub struct SpellingEngine {
    corpus_path: PathBuf,
    cache: ModelCache,
    corrector: Corrector,
    shared: Arc<Shared>,
}

impl SpellingEngine {
    /// Binds the engine to a corpus. Nothing is read until a build is requested.
    pub fn new(corpus_path: impl Into<PathBuf>) -> Self {
        let corpus_path = corpus_path.into();
        Self {
            cache: ModelCache::beside(&corpus_path),
            corpus_path,
            corrector: Corrector::default(),
            shared: Arc::new(Shared {
                model: RwLock::new(FrequencyModel::new()),
                ready: AtomicBool::new(false),
            }),
        }
    }

    pub fn with_cache_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cache = ModelCache::new(path);
        self
    }

    pub fn with_config(mut self, config: CorrectorConfig) -> Self {
        self.corrector = Corrector::new(config);
        self
    }

    pub fn corpus_path(&self) -> &Path {
        &self.corpus_path
    }

    pub fn cache(&self) -> &ModelCache {
        &self.cache
    }

    pub fn config(&self) -> &CorrectorConfig {
        self.corrector.config()
    }

    /// Loads the cached model or tokenizes the corpus, then calls
    /// `on_complete` exactly once with the outcome.
    ///
    /// When `invalidate_cache` is false and a usable cache exists, the model is
    /// installed and `on_complete(true)` runs synchronously on the calling
    /// thread before this method returns. Otherwise the corpus is tokenized on
    /// a background thread, the cache is rewritten, and `on_complete` runs on
    /// that thread. On failure the current model is left untouched.
    pub fn build_model<F>(&self, invalidate_cache: bool, on_complete: F)
    where
        F: FnOnce(bool) + Send + 'static,
    {
        let completion = Completion::new(on_complete);

        if !invalidate_cache {
            if let Some(model) = self.cache.load() {
                info!(path = %self.cache.path().display(), words = model.len(), "model loaded from cache");
                self.shared.install(model);
                completion.fire(true);
                return;
            }
        }

        let corpus_path = self.corpus_path.clone();
        let cache = self.cache.clone();
        let shared = Arc::clone(&self.shared);
        let worker_completion = completion.clone();

        let spawned = thread::Builder::new()
            .name(BUILD_THREAD_NAME.to_string())
            .spawn(move || {
                let outcome = rebuild(&corpus_path, &cache, &shared);
                if let Err(e) = &outcome {
                    error!(error = %e, "model build failed");
                }
                worker_completion.fire(outcome.is_ok());
            });

        if let Err(e) = spawned {
            error!(error = %CorrectorError::BuildThread(e.to_string()), "model build failed");
            completion.fire(false);
        }
    }

    /// Runs the same load-or-tokenize sequence as [`SpellingEngine::build_model`]
    /// on the calling thread and reports the error detail.
    pub fn build_model_blocking(&self, invalidate_cache: bool) -> Result<ModelSource> {
        if !invalidate_cache {
            if let Some(model) = self.cache.load() {
                info!(path = %self.cache.path().display(), words = model.len(), "model loaded from cache");
                self.shared.install(model);
                return Ok(ModelSource::Cache);
            }
        }
        rebuild(&self.corpus_path, &self.cache, &self.shared)?;
        Ok(ModelSource::Corpus)
    }

    /// True once the live model holds words: after a successful build or
    /// cache load, or after [`SpellingEngine::learn_text`] added some.
    /// [`SpellingEngine::invalidate`] clears it.
    pub fn is_ready(&self) -> bool {
        self.shared.ready.load(Ordering::Acquire)
    }

    /// Ranked corrections for `word`. Before the first successful build this
    /// runs against an empty model and falls through to the fallback policy.
    pub fn correct(&self, word: &str) -> Vec<Word> {
        self.corrector.correct(&self.shared.model.read(), word)
    }

    pub fn suggest(&self, word: &str) -> Vec<Suggestion> {
        self.corrector.suggest(&self.shared.model.read(), word)
    }

    pub fn best(&self, word: &str) -> Word {
        self.corrector.best(&self.shared.model.read(), word)
    }

    pub fn count(&self, word: &str) -> Count {
        self.shared.model.read().count(word)
    }

    pub fn stats(&self) -> ModelStats {
        let model = self.shared.model.read();
        ModelStats { words: model.len(), total: model.total() }
    }

    /// Adds the words of `text` to the live model on top of existing counts.
    /// The cache is not touched; call [`SpellingEngine::save_model`] to keep them.
    pub fn learn_text(&self, text: &str) {
        let mut model = self.shared.model.write();
        Trainer::new(&mut *model).learn_text(text);
        if !model.is_empty() {
            self.shared.ready.store(true, Ordering::Release);
        }
    }

    /// Persists the live model to the cache.
    pub fn save_model(&self) -> Result<()> {
        self.cache.save(&self.shared.model.read())
    }

    /// Zeroes the live model. Queries fall back until the next build.
    pub fn invalidate(&self) {
        self.shared.model.write().invalidate();
        self.shared.ready.store(false, Ordering::Release);
    }
}

fn rebuild(corpus: &Path, cache: &ModelCache, shared: &Shared) -> Result<()> {
    let model = model_from_file(corpus)?;
    if let Err(e) = cache.save(&model) {
        // A cache write failure does not fail the build.
        warn!(error = %e, "could not write model cache");
    }
    shared.install(model);
    Ok(())
}
