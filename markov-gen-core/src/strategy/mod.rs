//! Tokenisation strategies.
//!
//! A strategy decides what a token is for a given kind of source:
//! - `CharacterStrategy`: one token per character, numbers included
//! - `WordStrategy`: one token per word, with a configurable splitter
//!
//! Any other scheme can be plugged into the engine by implementing
//! [`TokenStrategy`].

mod character;
mod word;

pub use character::{CharInput, CharacterStrategy};
pub use word::{WordSplitter, WordStrategy};

/// Atomic unit of sequence data, compared by value.
pub type Token = String;

/// Lookup identity of a window of tokens in the transition table.
pub type Key = String;

/// Converts sources of type `T` into tokens and back.
///
/// # Contract
/// - `tokenise` is deterministic.
/// - `combine_tokens` returns identical keys for windows with identical
///   token content.
/// - `combine_tokens(tokens, Some(n))` only depends on the last `n` tokens,
///   and is equal to `combine_tokens(last_n_tokens, None)`.
pub trait TokenStrategy<T> {
	/// Type reconstructed from a generated token sequence.
	type Output;

	/// Decomposes one source into its ordered tokens.
	fn tokenise(&self, data: &T) -> Vec<Token>;

	/// Rebuilds an output value from tokens.
	fn detokenise(&self, tokens: &[Token]) -> Self::Output;

	/// Derives the lookup key for a window.
	///
	/// With `order` set, only the trailing `order` tokens are used.
	/// An order of zero is treated as absent.
	fn combine_tokens(&self, tokens: &[Token], order: Option<usize>) -> Key;
}

/// Returns the trailing `order` tokens, or all of them when `order` is
/// absent, zero, or larger than the sequence.
pub(crate) fn trailing(tokens: &[Token], order: Option<usize>) -> &[Token] {
	match order {
		Some(n) if n > 0 => &tokens[tokens.len().saturating_sub(n)..],
		_ => tokens,
	}
}
