use regex::Regex;

use super::{Key, Token, TokenStrategy, trailing};

/// How `WordStrategy` finds word boundaries.
#[derive(Clone, Debug, Default)]
pub enum WordSplitter {
	/// Runs of Unicode whitespace.
	#[default]
	Whitespace,
	/// An exact delimiter string.
	Literal(String),
	/// A regular expression matching delimiters.
	Pattern(Regex),
}

impl WordSplitter {
	/// Splits `text` into words, dropping empty pieces.
	fn split(&self, text: &str) -> Vec<Token> {
		let pieces: Box<dyn Iterator<Item = &str> + '_> = match self {
			WordSplitter::Whitespace => Box::new(text.split_whitespace()),
			WordSplitter::Literal(delimiter) => Box::new(text.split(delimiter.as_str())),
			WordSplitter::Pattern(regex) => Box::new(regex.split(text)),
		};
		pieces.filter(|piece| !piece.is_empty()).map(str::to_owned).collect()
	}
}

/// Tokenises sources one word at a time.
///
/// Output is rebuilt by joining words with a single space, so the
/// original spacing is not preserved.
#[derive(Clone, Debug, Default)]
pub struct WordStrategy {
	splitter: WordSplitter,
}

impl WordStrategy {
	pub fn new(splitter: WordSplitter) -> Self {
		Self { splitter }
	}

	/// Splits on an exact delimiter string.
	///
	/// An empty delimiter splits between every character.
	pub fn literal(delimiter: &str) -> Self {
		Self::new(WordSplitter::Literal(delimiter.to_owned()))
	}

	/// Splits on every match of `pattern`.
	///
	/// # Errors
	/// Returns an error if `pattern` is not a valid regular expression.
	pub fn pattern(pattern: &str) -> Result<Self, regex::Error> {
		Ok(Self::new(WordSplitter::Pattern(Regex::new(pattern)?)))
	}

	pub fn splitter(&self) -> &WordSplitter {
		&self.splitter
	}

	fn join(tokens: &[Token]) -> String {
		tokens.join(" ")
	}
}

impl TokenStrategy<String> for WordStrategy {
	type Output = String;

	fn tokenise(&self, data: &String) -> Vec<Token> {
		self.splitter.split(data)
	}

	fn detokenise(&self, tokens: &[Token]) -> String {
		Self::join(tokens)
	}

	fn combine_tokens(&self, tokens: &[Token], order: Option<usize>) -> Key {
		Self::join(trailing(tokens, order))
	}
}

/// Each string is split independently, then the words are concatenated.
impl TokenStrategy<Vec<String>> for WordStrategy {
	type Output = String;

	fn tokenise(&self, data: &Vec<String>) -> Vec<Token> {
		data.iter().flat_map(|text| self.splitter.split(text)).collect()
	}

	fn detokenise(&self, tokens: &[Token]) -> String {
		Self::join(tokens)
	}

	fn combine_tokens(&self, tokens: &[Token], order: Option<usize>) -> Key {
		Self::join(trailing(tokens, order))
	}
}
