// File: src/cli.rs
//! Options and setup shared by the `spellcorrect` and `spell_batch` binaries.
use crate::config::CorrectorConfig;
use crate::core::engine::SpellingEngine;
use crate::error::Result;
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

const APP_DIR: &str = "spelling-corrector";

#[derive(Args, Debug, Clone)]
pub struct EngineArgs {
    /// Plain-text corpus the word frequencies are learned from
    pub corpus: PathBuf,

    /// Model cache file [default: <cache dir>/spelling-corrector/<corpus>-<path hash>.freq.bin]
    #[arg(long)]
    pub cache: Option<PathBuf>,

    /// JSON file with corrector settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Ignore any cached model and re-tokenize the corpus
    #[arg(long)]
    pub rebuild: bool,

    /// Maximum number of suggestions per word (0 = unlimited)
    #[arg(long)]
    pub max_results: Option<usize>,
}

impl EngineArgs {
    pub fn corrector_config(&self) -> Result<CorrectorConfig> {
        let config = match &self.config {
            Some(path) => CorrectorConfig::from_json_file(path)?,
            None => CorrectorConfig::default(),
        };
        Ok(match self.max_results {
            Some(n) => config.with_max_results(n),
            None => config,
        })
    }

    pub fn cache_path(&self) -> Option<PathBuf> {
        self.cache
            .clone()
            .or_else(|| default_cache_path(&self.corpus))
    }

    /// An engine configured from these options. The model is not built yet.
    pub fn engine(&self) -> Result<SpellingEngine> {
        let mut engine = SpellingEngine::new(&self.corpus).with_config(self.corrector_config()?);
        if let Some(path) = self.cache_path() {
            engine = engine.with_cache_path(path);
        }
        Ok(engine)
    }
}

/// Per-user cache location keyed by the corpus file name and a hash of its
/// canonical path, so same-named corpora in different directories get
/// separate caches.
pub fn default_cache_path(corpus: &Path) -> Option<PathBuf> {
    let stem = corpus.file_stem()?.to_string_lossy().into_owned();
    let canonical = fs::canonicalize(corpus).unwrap_or_else(|_| corpus.to_path_buf());
    let mut path = dirs::cache_dir()?;
    path.push(APP_DIR);
    path.push(format!("{stem}-{:016x}.freq.bin", path_hash(&canonical)));
    Some(path)
}

// 64-bit FNV-1a over the path bytes.
fn path_hash(path: &Path) -> u64 {
    path.as_os_str()
        .as_encoded_bytes()
        .iter()
        .fold(0xcbf2_9ce4_8422_2325, |hash, &byte| {
            (hash ^ u64::from(byte)).wrapping_mul(0x0100_0000_01b3)
        })
}

/// Logs go to stderr so they never mix with suggestions on stdout.
/// Filtered by `RUST_LOG`, `warn` by default.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
