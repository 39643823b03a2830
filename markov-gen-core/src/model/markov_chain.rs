use std::fmt;

use log::{debug, trace, warn};
use rand::Rng;

use super::ngram_model::NGramModel;
use super::order::Order;
use crate::error::{MarkovError, Result};
use crate::strategy::{Token, TokenStrategy};

/// Strategy and model produced by the last successful `train`.
struct Trained<T, O> {
	strategy: Box<dyn TokenStrategy<T, Output = O>>,
	model: NGramModel,
}

/// Generic n-gram Markov chain.
///
/// # Lifecycle
/// - `add` accumulates sources at any time; sources are never removed.
/// - `train` rebuilds the model from every accumulated source, discarding
///   any previous model.
/// - `generate` walks the trained model and never mutates it.
///
/// `T` is the source type and `O` the generated output type; both are
/// tied together by the `TokenStrategy` given to `train`.
///
/// The chain is not synchronised: callers sharing one across threads
/// must serialise access themselves.
pub struct MarkovChain<T, O = String> {
	sources: Vec<T>,
	trained: Option<Trained<T, O>>,
}

impl<T, O> MarkovChain<T, O> {
	/// Creates an empty, untrained chain.
	pub fn new() -> Self {
		Self { sources: Vec::new(), trained: None }
	}

	/// Adds a source to the chain.
	pub fn add(&mut self, source: T) -> &mut Self {
		self.sources.push(source);
		self
	}

	pub fn sources(&self) -> &[T] {
		&self.sources
	}

	/// Returns `true` once `train` has succeeded.
	pub fn is_trained(&self) -> bool {
		self.trained.is_some()
	}

	/// Returns the trained order, if any.
	pub fn order(&self) -> Option<usize> {
		self.trained.as_ref().map(|trained| trained.model.order())
	}

	/// Returns the trained model, if any.
	pub fn model(&self) -> Option<&NGramModel> {
		self.trained.as_ref().map(|trained| &trained.model)
	}

	/// Trains the chain on every accumulated source.
	///
	/// # Parameters
	/// - `strategy`: Turns sources into tokens, tokens into keys and output.
	/// - `order`: Window width; `None` or a negative value means 3.
	///
	/// # Notes
	/// - Sources with no more than `order` tokens contribute nothing.
	/// - Calling `train` again replaces the model but keeps the sources.
	///
	/// # Errors
	/// Returns `MarkovError::NoSources` if no source was added.
	pub fn train<S>(&mut self, strategy: S, order: Option<i64>) -> Result<&mut Self>
	where
		S: TokenStrategy<T, Output = O> + 'static,
	{
		if self.sources.is_empty() {
			return Err(MarkovError::NoSources);
		}

		let order = Order::resolve(order);
		let mut model = NGramModel::new(order);

		for (index, source) in self.sources.iter().enumerate() {
			let tokens = strategy.tokenise(source);
			if !model.add_source(&tokens, |window| strategy.combine_tokens(window, None)) {
				warn!(
					"Source {} has {} tokens, needs more than {} to be trained on",
					index,
					tokens.len(),
					order.get()
				);
			}
		}

		debug!(
			"Trained order {} model: {} sources, {} keys, {} starters",
			order.get(),
			self.sources.len(),
			model.len(),
			model.starters().len()
		);

		self.trained = Some(Trained { strategy: Box::new(strategy), model });
		Ok(self)
	}

	/// Generates one output using the thread-local random generator.
	///
	/// See [`MarkovChain::generate_with_rng`].
	pub fn generate(&self, max: Option<usize>) -> Result<O> {
		self.generate_with_rng(&mut rand::rng(), max)
	}

	/// Generates one output by walking the trained model.
	///
	/// # Behavior
	/// - Picks a starter window uniformly at random.
	/// - Repeatedly samples a continuation for the trailing `order` tokens
	///   and appends it.
	/// - Stops when the trailing window was never observed, or after `max`
	///   extension steps when `max` is set (the starter is not counted).
	///
	/// # Errors
	/// - `MarkovError::NotTrained` if `train` never succeeded.
	/// - `MarkovError::NoStarters` if no source was long enough to train on.
	pub fn generate_with_rng<R: Rng>(&self, rng: &mut R, max: Option<usize>) -> Result<O> {
		let trained = self.trained.as_ref().ok_or(MarkovError::NotTrained)?;
		let strategy = trained.strategy.as_ref();
		let model = &trained.model;
		let order = model.order();

		let mut output: Vec<Token> = model.random_starter(rng).ok_or(MarkovError::NoStarters)?.to_vec();
		let mut key = strategy.combine_tokens(&output, None);
		let mut steps = 0;

		while max.is_none_or(|max| steps < max) {
			let Some(next) = model.predict(&key, rng) else {
				break;
			};
			trace!("Step {}: {:?} -> {:?}", steps, key, next);

			output.push(next.clone());
			steps += 1;
			key = strategy.combine_tokens(Self::context(&output, order), Some(order));
		}

		debug!("Generated {} tokens in {} steps", output.len(), steps);
		Ok(strategy.detokenise(&output))
	}

	/// Returns the part of `output` the next key depends on.
	///
	/// Only the trailing `order` tokens matter, so the rest of the history
	/// is not handed to the strategy. A zero order means "no order" to
	/// `combine_tokens`, which then needs the whole output.
	fn context(output: &[Token], order: usize) -> &[Token] {
		if order == 0 {
			output
		} else {
			&output[output.len().saturating_sub(order)..]
		}
	}
}

impl<T, O> Default for MarkovChain<T, O> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T, O> Extend<T> for MarkovChain<T, O> {
	fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
		self.sources.extend(iter);
	}
}

impl<T, O> FromIterator<T> for MarkovChain<T, O> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self { sources: iter.into_iter().collect(), trained: None }
	}
}

impl<T: fmt::Debug, O> fmt::Debug for MarkovChain<T, O> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("MarkovChain")
			.field("sources", &self.sources)
			.field("model", &self.model())
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::strategy::{CharInput, CharacterStrategy, Key, WordStrategy};
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	fn tokens(text: &str) -> Vec<Token> {
		text.split_whitespace().map(str::to_owned).collect()
	}

	#[test]
	fn train_without_sources_fails() {
		let mut chain: MarkovChain<String> = MarkovChain::new();
		assert_eq!(chain.train(WordStrategy::default(), None).err(), Some(MarkovError::NoSources));
		assert!(!chain.is_trained());
	}

	#[test]
	fn generate_before_train_fails() {
		let mut chain: MarkovChain<String> = MarkovChain::new();
		chain.add("a b c d e".to_owned());
		assert_eq!(chain.generate(None).err(), Some(MarkovError::NotTrained));
	}

	#[test]
	fn generate_without_starters_fails() {
		let mut chain: MarkovChain<String> = MarkovChain::new();
		chain.add("a b".to_owned()).train(WordStrategy::default(), Some(2)).unwrap();
		assert_eq!(chain.model().map(NGramModel::is_empty), Some(true));
		assert_eq!(chain.generate(None).err(), Some(MarkovError::NoStarters));
	}

	#[test]
	fn alternating_words_are_deterministic() {
		let mut chain: MarkovChain<String> = MarkovChain::new();
		chain.add("a b a b a b".to_owned()).train(WordStrategy::default(), Some(1)).unwrap();

		let model = chain.model().unwrap();
		assert_eq!(model.continuations("a"), Some(tokens("b b b").as_slice()));
		assert_eq!(model.continuations("b"), Some(tokens("a a").as_slice()));
		assert_eq!(model.starters(), &[tokens("a")]);

		let mut rng = StdRng::seed_from_u64(11);
		for _ in 0..10 {
			assert_eq!(chain.generate_with_rng(&mut rng, Some(5)).unwrap(), "a b a b a b");
		}
	}

	#[test]
	fn max_zero_returns_the_starter() {
		let mut chain: MarkovChain<String> = MarkovChain::new();
		chain.add("one two three four five".to_owned()).train(WordStrategy::default(), Some(2)).unwrap();
		assert_eq!(chain.generate(Some(0)).unwrap(), "one two");
		assert_eq!(chain.generate(Some(1)).unwrap(), "one two three");
	}

	#[test]
	fn negative_order_defaults_to_three() {
		let mut chain: MarkovChain<String> = MarkovChain::new();
		chain.add("a b c d".to_owned()).train(WordStrategy::default(), Some(-4)).unwrap();
		assert_eq!(chain.order(), Some(3));
		assert_eq!(chain.model().unwrap().starters(), &[tokens("a b c")]);
	}

	#[test]
	fn retraining_replaces_the_model_but_keeps_sources() {
		let mut chain: MarkovChain<String> = MarkovChain::new();
		chain.add("abcabc".to_owned()).train(CharacterStrategy, Some(2)).unwrap();
		assert_eq!(chain.model().unwrap().continuations("ab"), Some(tokens("c c").as_slice()));

		chain.add("xyz".to_owned()).train(CharacterStrategy, Some(1)).unwrap();
		let model = chain.model().unwrap();
		assert_eq!(chain.sources().len(), 2);
		assert_eq!(model.order(), 1);
		assert_eq!(model.continuations("ab"), None);
		assert_eq!(model.continuations("a"), Some(tokens("b b").as_slice()));
		assert_eq!(model.starters().len(), 2);
	}

	#[test]
	fn character_chain_over_mixed_inputs() {
		let mut chain: MarkovChain<Vec<CharInput>> = MarkovChain::new();
		chain.add(vec![CharInput::from("id-"), CharInput::from(2024i64)]);
		chain.train(CharacterStrategy, Some(2)).unwrap();

		assert_eq!(chain.generate(None).unwrap(), "id-2024");
	}

	#[test]
	fn zero_order_stops_after_one_step() {
		let mut chain: MarkovChain<String> = MarkovChain::new();
		chain.add("abc".to_owned()).train(CharacterStrategy, Some(0)).unwrap();

		let output = chain.generate(None).unwrap();
		assert_eq!(output.chars().count(), 1);
		assert!("abc".contains(&output));
	}

	/// Tokenises comma-separated numbers and emits them back as a vector.
	struct Numbers;

	impl TokenStrategy<String> for Numbers {
		type Output = Vec<u32>;

		fn tokenise(&self, data: &String) -> Vec<Token> {
			data.split(',').map(|n| n.trim().to_owned()).collect()
		}

		fn detokenise(&self, tokens: &[Token]) -> Vec<u32> {
			tokens.iter().filter_map(|t| t.parse().ok()).collect()
		}

		fn combine_tokens(&self, tokens: &[Token], order: Option<usize>) -> Key {
			crate::strategy::trailing(tokens, order).join(",")
		}
	}

	#[test]
	fn custom_strategy_with_its_own_output() {
		let mut chain: MarkovChain<String, Vec<u32>> = ["1, 2, 3, 4".to_owned()].into_iter().collect();
		chain.train(Numbers, Some(2)).unwrap();
		assert_eq!(chain.generate(None).unwrap(), vec![1, 2, 3, 4]);
	}
}
