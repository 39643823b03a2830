use rand::Rng;

use serde::{Deserialize, Serialize};

use crate::strategy::{Key, Token};

/// Everything seen after one window of tokens.
///
/// The key is the combined window; the continuations are the tokens that
/// followed it in the training sources, one entry per sighting. A token
/// seen three times is three times as likely to be picked.
///
/// ## Responsibilities:
/// - Accumulate continuations during training
/// - Predict the next token using weighted random sampling
///
/// ## Invariants
/// - All continuations belong to the same `key`
/// - Duplicates are kept: the multiset of continuations is the distribution
/// - A state stored in a model always has at least one continuation
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct State {
	/// Identifier of the state (combined window).
	key: Key,
	/// Observed next tokens, in observation order.
	/// Example: ["b", "b", "c"]
	continuations: Vec<Token>,
}

impl State {
	/// Creates a new empty state for the given key.
	pub fn new(key: &str) -> Self {
		Self {
			key: key.to_owned(),
			continuations: Vec::new(),
		}
	}

	pub fn continuations(&self) -> &[Token] {
		&self.continuations
	}

	/// Records one occurrence of `next` following this state's window.
	pub fn add_transition(&mut self, next: Token) {
		self.continuations.push(next);
	}

	/// Predicts the next token using weighted random sampling.
	///
	/// Returns `None` if the state has no continuations.
	pub fn predict<R: Rng>(&self, rng: &mut R) -> Option<&Token> {
		pick_weighted(&self.continuations, rng)
	}
}

/// Picks one token with probability proportional to its number of
/// occurrences in `tokens`.
///
/// Distinct values are tallied in first-occurrence order, then a uniform
/// `r` in [0, 1) selects the first value whose cumulative share reaches it.
/// The last distinct value is returned unconditionally so that rounding
/// can never fall through on a non-empty input.
pub(crate) fn pick_weighted<'a, R: Rng>(tokens: &'a [Token], rng: &mut R) -> Option<&'a Token> {
	match tokens {
		[] => return None,
		[only] => return Some(only),
		_ => (),
	}

	// Build list of counts
	let mut counts: Vec<(&Token, usize)> = Vec::new();
	for token in tokens {
		match counts.iter_mut().find(|(value, _)| *value == token) {
			Some((_, count)) => *count += 1,
			None => counts.push((token, 1)),
		}
	}

	let total = tokens.len() as f64;
	let r: f64 = rng.random();

	let (last, _) = counts.pop()?;
	let mut cumulative = 0;
	for (value, count) in counts {
		cumulative += count;
		if cumulative as f64 / total >= r {
			return Some(value);
		}
	}

	Some(last)
}
