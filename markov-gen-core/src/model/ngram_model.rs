use super::order::Order;
use super::state::State;
use crate::strategy::{Key, Token};
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Represents a trained n-gram model over tokens.
///
/// The `NGramModel` stores one state per observed window key and the
/// first window of every source long enough to be trained on.
///
/// # Responsibilities
/// - Slide windows of `order` tokens over each tokenised source
/// - Record the token following every window under the window's key
/// - Keep the first window of each source as a generation starter
/// - Predict the next token for a key
///
/// # Invariants
/// - Every state holds at least one continuation
/// - Every starter holds exactly `order` tokens
/// - There is at most one starter per source
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct NGramModel {
	/// The order of the model (number of tokens per window)
	order: Order,

	/// Mapping from a window key to its corresponding state
	states: HashMap<Key, State>,

	/// First window of each trained source, kept as raw tokens
	starters: Vec<Vec<Token>>,
}

impl NGramModel {
	/// Creates a new empty model of the given order.
	pub fn new(order: Order) -> Self {
		Self { order, states: HashMap::new(), starters: Vec::new() }
	}

	pub fn order(&self) -> usize {
		self.order.get()
	}

	/// Adds one tokenised source to the model.
	///
	/// `combine` turns a full window into its key.
	///
	/// Returns `false` if the source has no more than `order` tokens,
	/// in which case nothing is recorded.
	pub fn add_source<F>(&mut self, tokens: &[Token], combine: F) -> bool
	where
		F: Fn(&[Token]) -> Key,
	{
		let order = self.order();
		if tokens.len() <= order {
			// Source too short, no window has a following token
			return false;
		}

		for i in 0..tokens.len() - order {
			let window = &tokens[i..i + order];
			if i == 0 {
				self.starters.push(window.to_vec());
			}

			let key = combine(window);
			let next = tokens[i + order].clone();
			self.states.entry(key).or_insert_with_key(|key| State::new(key)).add_transition(next);
		}

		true
	}

	/// Returns a uniformly chosen starter window.
	///
	/// Returns `None` if no source was long enough to yield one.
	pub fn random_starter<R: Rng>(&self, rng: &mut R) -> Option<&[Token]> {
		self.starters.choose(rng).map(Vec::as_slice)
	}

	/// Predicts the next token for `key`.
	///
	/// Returns `None` if the key was never observed.
	pub fn predict<R: Rng>(&self, key: &str, rng: &mut R) -> Option<&Token> {
		self.states.get(key)?.predict(rng)
	}

	/// Returns the observed continuations for `key`, duplicates included.
	pub fn continuations(&self, key: &str) -> Option<&[Token]> {
		self.states.get(key).map(State::continuations)
	}

	pub fn starters(&self) -> &[Vec<Token>] {
		&self.starters
	}

	/// Iterates over every known key, in no particular order.
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		self.states.keys().map(String::as_str)
	}

	/// Returns the number of distinct keys.
	pub fn len(&self) -> usize {
		self.states.len()
	}

	pub fn is_empty(&self) -> bool {
		self.states.is_empty()
	}
}
