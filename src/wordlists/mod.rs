//! Word lists for filtering
//!
//! Provides the embedded word list compiled into the binary and file loaders.

mod embedded;
pub mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
