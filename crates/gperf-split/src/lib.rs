pub mod config;
pub mod error;
pub mod grammar;
pub mod header;
pub mod pipeline;
pub mod record;
pub mod splice;

pub use config::SplitConfig;
pub use error::{Block, ParseError, SpliceError, SplitError};
pub use grammar::GrammarBlocks;
pub use pipeline::{run, split, SplitOutput};

#[cfg(test)]
mod grammar_tests;
