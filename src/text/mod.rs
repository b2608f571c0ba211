//! Text processing module for normalization, tokenization and input statistics.

mod normalizer;
mod stats;
mod tokenizer;

pub use normalizer::Normalizer;
pub use stats::TextStats;
pub use tokenizer::Tokenizer;
