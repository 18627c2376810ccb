// File: src/persistence.rs
use crate::core::model::FrequencyModel;
use crate::core::types::{Count, Word};
use crate::error::{CorrectorError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, warn};

const CACHE_MAGIC: [u8; 4] = *b"SPFM";
const CACHE_FORMAT_VERSION: u32 = 1;

/// On-disk layout, borrowed when saving.
#[derive(Serialize)]
struct CacheFileRef<'a> {
    magic: [u8; 4],
    format_version: u32,
    counts: &'a HashMap<Word, Count>,
}

#[derive(Deserialize)]
struct CacheFile {
    magic: [u8; 4],
    format_version: u32,
    counts: HashMap<Word, Count>,
}

/// Persists a [`FrequencyModel`] so a large corpus is tokenized only once.
#[derive(Debug, Clone)]
pub struct ModelCache {
    path: PathBuf,
}

impl ModelCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The cache that sits next to `corpus`: `big.txt` maps to `big.freq.bin`.
    pub fn beside(corpus: &Path) -> Self {
        Self::new(corpus.with_extension("freq.bin"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted model. A missing or corrupt cache is reported as
    /// `None` so the caller falls back to tokenizing the corpus.
    pub fn load(&self) -> Option<FrequencyModel> {
        match self.try_load() {
            Ok(model) => model,
            Err(e) => {
                warn!(error = %e, "ignoring unusable model cache");
                None
            }
        }
    }

    /// Like [`ModelCache::load`] but distinguishes "absent" from "corrupt".
    pub fn try_load(&self) -> Result<Option<FrequencyModel>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no model cache");
                return Ok(None);
            }
            Err(e) => return Err(CorrectorError::cache_corrupt(&self.path, e)),
        };

        // Slice decoding bounds every length prefix by the file size.
        let file: CacheFile = bincode::deserialize(&bytes)
            .map_err(|e| CorrectorError::cache_corrupt(&self.path, e))?;
        if file.magic != CACHE_MAGIC {
            return Err(CorrectorError::cache_corrupt(&self.path, "bad magic"));
        }
        if file.format_version != CACHE_FORMAT_VERSION {
            return Err(CorrectorError::cache_corrupt(
                &self.path,
                format!("unsupported format version {}", file.format_version),
            ));
        }

        let model = FrequencyModel::from_counts(file.counts)
            .ok_or_else(|| CorrectorError::cache_corrupt(&self.path, "count overflow"))?;
        debug!(path = %self.path.display(), words = model.len(), "model cache loaded");
        Ok(Some(model))
    }

    /// Writes the model atomically: readers see either the old cache or the
    /// complete new one.
    pub fn save(&self, model: &FrequencyModel) -> Result<()> {
        let write_err = |source| CorrectorError::CacheWrite { path: self.path.clone(), source };

        let parent_dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent_dir).map_err(write_err)?;

        let file = CacheFileRef {
            magic: CACHE_MAGIC,
            format_version: CACHE_FORMAT_VERSION,
            counts: model.counts(),
        };

        let temp_file = NamedTempFile::new_in(parent_dir).map_err(write_err)?;
        {
            let mut writer = BufWriter::new(temp_file.as_file());
            bincode::serialize_into(&mut writer, &file)
                .map_err(|e| write_err(io::Error::new(io::ErrorKind::Other, e)))?;
            writer.flush().map_err(write_err)?;
        }
        temp_file.persist(&self.path).map_err(|e| write_err(e.error))?;

        debug!(path = %self.path.display(), words = model.len(), "model cache written");
        Ok(())
    }

    /// Deletes the cache file if present.
    pub fn remove(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CorrectorError::CacheWrite { path: self.path.clone(), source: e }),
        }
    }
}
