// File: src/learning.rs
use crate::core::model::FrequencyModel;
use crate::core::tokenizer::tokenize;
use crate::error::{CorrectorError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

/// Feeds raw text into a [`FrequencyModel`].
///
/// Corpora are read line by line, so a large file never has to be held in
/// memory at once. Words cannot span lines because a newline is a separator.
pub struct Trainer<'m> {
    model: &'m mut FrequencyModel,
    tokens_seen: u64,
}

impl<'m> Trainer<'m> {
    pub fn new(model: &'m mut FrequencyModel) -> Self {
        Self { model, tokens_seen: 0 }
    }

    pub fn learn_text(&mut self, text: &str) {
        let before = self.model.total();
        self.model.build(tokenize(text));
        self.tokens_seen += self.model.total() - before;
    }

    /// Reports a non-UTF-8 or failing reader as `CorpusUnreadable` for `origin`.
    pub fn learn_reader<R: BufRead>(&mut self, reader: R, origin: &Path) -> Result<()> {
        for line in reader.lines() {
            let line = line.map_err(|e| CorrectorError::corpus(origin, e))?;
            self.learn_text(&line);
        }
        Ok(())
    }

    pub fn learn_file(&mut self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "tokenizing corpus");
        let file = File::open(path).map_err(|e| CorrectorError::corpus(path, e))?;
        self.learn_reader(BufReader::new(file), path)?;
        info!(
            path = %path.display(),
            tokens = self.tokens_seen,
            words = self.model.len(),
            "corpus tokenized"
        );
        Ok(())
    }

    /// Tokens added through this trainer so far.
    pub fn tokens_seen(&self) -> u64 {
        self.tokens_seen
    }
}

/// Builds a fresh model from a single corpus file.
pub fn model_from_file(path: &Path) -> Result<FrequencyModel> {
    let mut model = FrequencyModel::new();
    Trainer::new(&mut model).learn_file(path)?;
    Ok(model)
}
