pub mod corrector;
pub mod engine;
pub mod model;
pub mod tokenizer;
pub mod types;
