// File: src/c_api.rs
//! C ABI over a single process-wide [`SpellingEngine`].
//!
//! Strings cross the boundary as NUL-terminated UTF-8. Suggestions are returned
//! as a JSON array that the caller must release with
//! [`spell_corrector_free_string`]. Panics never unwind into the caller.
use crate::config::CorrectorConfig;
use crate::core::corrector::Corrector;
use crate::core::model::FrequencyModel;
use crate::SpellingEngine;
use parking_lot::RwLock;
use std::ffi::{c_char, CStr, CString};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;
use std::sync::Arc;
use tracing::error;

/// Completion callback for [`spell_corrector_build`].
pub type SpellBuildCallback = Option<extern "C" fn(success: bool)>;

static ENGINE: RwLock<Option<Arc<SpellingEngine>>> = parking_lot::const_rwlock(None);

fn current_engine() -> Option<Arc<SpellingEngine>> {
    ENGINE.read().clone()
}

unsafe fn str_arg<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    CStr::from_ptr(ptr).to_str().ok()
}

/// Binds the engine to a corpus file, replacing any previous engine.
/// Nothing is tokenized until [`spell_corrector_build`] is called.
///
/// # Safety
/// `corpus_path` must be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn spell_corrector_init(corpus_path: *const c_char) -> bool {
    let Some(path) = str_arg(corpus_path) else {
        return false;
    };
    let result = catch_unwind(|| {
        *ENGINE.write() = Some(Arc::new(SpellingEngine::new(path)));
    });
    if result.is_err() {
        error!("panic while initializing the spelling engine");
    }
    result.is_ok()
}

/// Loads the cached model or tokenizes the corpus in the background.
///
/// `callback` is invoked exactly once. With a usable cache and
/// `invalidate_cache == false` it runs on the calling thread before this
/// function returns; otherwise it runs on the build thread. Returns false,
/// after reporting failure through `callback`, if the engine was never
/// initialized.
#[no_mangle]
pub extern "C" fn spell_corrector_build(invalidate_cache: bool, callback: SpellBuildCallback) -> bool {
    let notify = move |ok: bool| {
        if let Some(callback) = callback {
            callback(ok);
        }
    };
    let Some(engine) = current_engine() else {
        notify(false);
        return false;
    };
    let result = catch_unwind(AssertUnwindSafe(|| engine.build_model(invalidate_cache, notify)));
    if result.is_err() {
        error!("panic while building the spelling model");
    }
    result.is_ok()
}

/// Returns the suggestions for `word` as a JSON array of strings, or null if
/// `word` is not valid UTF-8. Before a build completes this answers from an
/// empty model.
///
/// # Safety
/// `word` must be null or point to a NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn spell_corrector_correct(word: *const c_char) -> *mut c_char {
    let Some(word) = str_arg(word) else {
        return ptr::null_mut();
    };
    let result = catch_unwind(|| {
        let suggestions = match current_engine() {
            Some(engine) => engine.correct(word),
            None => Corrector::new(CorrectorConfig::default()).correct(&FrequencyModel::new(), word),
        };
        serde_json::to_string(&suggestions).unwrap_or_else(|_| "[]".to_string())
    });
    let json = result.unwrap_or_else(|_| {
        error!("panic while correcting a word");
        "[]".to_string()
    });
    // serde_json escapes control characters, so there is no interior NUL.
    CString::new(json).map_or(ptr::null_mut(), CString::into_raw)
}

/// Releases a string returned by [`spell_corrector_correct`].
///
/// # Safety
/// `s` must be null or a pointer obtained from this library that has not
/// been freed yet.
#[no_mangle]
pub unsafe extern "C" fn spell_corrector_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}

/// Drops the engine. A build still running keeps its own handle to the model
/// and finishes in the background.
#[no_mangle]
pub extern "C" fn spell_corrector_destroy() {
    ENGINE.write().take();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static SUCCESSES: AtomicUsize = AtomicUsize::new(0);
    static FAILURES: AtomicUsize = AtomicUsize::new(0);

    extern "C" fn record(ok: bool) {
        if ok {
            SUCCESSES.fetch_add(1, Ordering::SeqCst);
        } else {
            FAILURES.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn correct_json(word: &str) -> Vec<String> {
        let word = CString::new(word).unwrap();
        unsafe {
            let raw = spell_corrector_correct(word.as_ptr());
            assert!(!raw.is_null());
            let json = CStr::from_ptr(raw).to_str().unwrap().to_string();
            spell_corrector_free_string(raw);
            serde_json::from_str(&json).unwrap()
        }
    }

    // One test owns the process-wide engine so parallel tests cannot race on it.
    #[test]
    fn full_lifecycle_through_the_c_abi() {
        assert!(!spell_corrector_build(false, Some(record)));
        assert_eq!(FAILURES.load(Ordering::SeqCst), 1);
        assert_eq!(correct_json("Helo"), ["Helo"]);

        let dir = tempfile::tempdir().unwrap();
        let corpus = dir.path().join("corpus.txt");
        std::fs::write(&corpus, "hello hello help world").unwrap();
        let c_path = CString::new(corpus.to_str().unwrap()).unwrap();
        assert!(unsafe { spell_corrector_init(c_path.as_ptr()) });

        // Seed the cache so the next build completes synchronously.
        current_engine().unwrap().build_model_blocking(true).unwrap();
        assert!(spell_corrector_build(false, Some(record)));
        assert_eq!(SUCCESSES.load(Ordering::SeqCst), 1);

        assert_eq!(correct_json("helo"), ["hello", "help"]);
        assert_eq!(correct_json("world"), ["world"]);

        assert!(unsafe { spell_corrector_correct(ptr::null()) }.is_null());
        assert!(!unsafe { spell_corrector_init(ptr::null()) });

        spell_corrector_destroy();
        assert!(current_engine().is_none());
    }
}
