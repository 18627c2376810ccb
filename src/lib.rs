// src/lib.rs
//! Spelling correction from corpus word frequencies.
//!
//! A [`SpellingEngine`] is bound to a plain-text corpus. Building it tokenizes
//! the corpus into a [`FrequencyModel`] (or loads a cached one), after which
//! [`SpellingEngine::correct`] ranks the known words within two edits of a
//! query.
//!
//! ```no_run
//! use spell_core::SpellingEngine;
//!
//! let engine = SpellingEngine::new("big.txt");
//! engine.build_model_blocking(false)?;
//! assert_eq!(engine.correct("speling"), ["spelling"]);
//! # Ok::<(), spell_core::CorrectorError>(())
//! ```

pub mod c_api;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod fuzzy;
pub mod learning;
pub mod persistence;

pub use crate::config::{CorrectorConfig, FallbackPolicy};
pub use crate::core::corrector::Corrector;
pub use crate::core::engine::{ModelStats, SpellingEngine};
pub use crate::core::model::FrequencyModel;
pub use crate::core::tokenizer::tokenize;
pub use crate::core::types::{ModelSource, Suggestion};
pub use crate::error::{CorrectorError, Result};
pub use crate::fuzzy::edits::EditGenerator;
pub use crate::persistence::ModelCache;
