//! N-gram Markov chain generation library.
//!
//! This crate provides a generic Markov chain engine including:
//! - Pluggable tokenisation strategies (characters, words, or custom)
//! - Fixed-order n-gram transition tables with frequency-weighted sampling
//! - A chainable `MarkovChain` engine that learns from accumulated sources
//!
//! The quickest way in is [`generate_words`], which trains a word-level
//! chain of the default order and returns one generated sentence.

/// Error types shared by the engine.
pub mod error;

/// Core n-gram model and generation logic.
///
/// Exposes the `MarkovChain` engine and the trained `NGramModel`
/// it samples from.
pub mod model;

/// Tokenisation strategies.
///
/// Converts raw sources into tokens, tokens back into output, and
/// windows of tokens into lookup keys.
pub mod strategy;

pub use error::{MarkovError, Result};
pub use model::markov_chain::MarkovChain;
pub use strategy::{CharInput, CharacterStrategy, TokenStrategy, WordSplitter, WordStrategy};

/// Trains a word-level chain of the default order on `sources` and
/// generates one output from it.
///
/// # Errors
/// - `MarkovError::NoSources` if `sources` is empty.
/// - `MarkovError::NoStarters` if no source has more words than the default order.
pub fn generate_words<I, S>(sources: I) -> Result<String>
where
	I: IntoIterator<Item = S>,
	S: Into<String>,
{
	let mut chain: MarkovChain<String> = sources.into_iter().map(Into::into).collect();
	chain.train(WordStrategy::default(), None)?.generate(None)
}
