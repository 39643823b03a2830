use super::{Key, Token, TokenStrategy, trailing};

/// A character-level source: text or a number.
///
/// Numbers are tokenised through their decimal form, so `42` yields
/// the tokens `"4"` and `"2"`. Negative zero renders as `0` and
/// infinities as `Infinity` / `-Infinity`.
#[derive(Clone, Debug, PartialEq)]
pub enum CharInput {
	Text(String),
	Integer(i64),
	Float(f64),
}

impl CharInput {
	fn tokens(&self) -> Vec<Token> {
		match self {
			CharInput::Text(text) => split_chars(text),
			CharInput::Integer(value) => split_chars(&value.to_string()),
			CharInput::Float(value) => split_chars(&float_text(*value)),
		}
	}
}

impl From<&str> for CharInput {
	fn from(value: &str) -> Self {
		CharInput::Text(value.to_owned())
	}
}

impl From<String> for CharInput {
	fn from(value: String) -> Self {
		CharInput::Text(value)
	}
}

impl From<i64> for CharInput {
	fn from(value: i64) -> Self {
		CharInput::Integer(value)
	}
}

impl From<f64> for CharInput {
	fn from(value: f64) -> Self {
		CharInput::Float(value)
	}
}

fn float_text(value: f64) -> String {
	if value == 0.0 {
		"0".to_owned()
	} else if value == f64::INFINITY {
		"Infinity".to_owned()
	} else if value == f64::NEG_INFINITY {
		"-Infinity".to_owned()
	} else {
		value.to_string()
	}
}

fn split_chars(text: &str) -> Vec<Token> {
	text.chars().map(String::from).collect()
}

/// Tokenises sources one character at a time.
///
/// Output is rebuilt by concatenating tokens with no separator.
#[derive(Clone, Copy, Debug, Default)]
pub struct CharacterStrategy;

impl CharacterStrategy {
	fn join(tokens: &[Token]) -> String {
		tokens.concat()
	}
}

impl TokenStrategy<String> for CharacterStrategy {
	type Output = String;

	fn tokenise(&self, data: &String) -> Vec<Token> {
		split_chars(data)
	}

	fn detokenise(&self, tokens: &[Token]) -> String {
		Self::join(tokens)
	}

	fn combine_tokens(&self, tokens: &[Token], order: Option<usize>) -> Key {
		Self::join(trailing(tokens, order))
	}
}

impl TokenStrategy<CharInput> for CharacterStrategy {
	type Output = String;

	fn tokenise(&self, data: &CharInput) -> Vec<Token> {
		data.tokens()
	}

	fn detokenise(&self, tokens: &[Token]) -> String {
		Self::join(tokens)
	}

	fn combine_tokens(&self, tokens: &[Token], order: Option<usize>) -> Key {
		Self::join(trailing(tokens, order))
	}
}

/// Mixed text and numbers are flattened into a single token sequence.
impl TokenStrategy<Vec<CharInput>> for CharacterStrategy {
	type Output = String;

	fn tokenise(&self, data: &Vec<CharInput>) -> Vec<Token> {
		data.iter().flat_map(CharInput::tokens).collect()
	}

	fn detokenise(&self, tokens: &[Token]) -> String {
		Self::join(tokens)
	}

	fn combine_tokens(&self, tokens: &[Token], order: Option<usize>) -> Key {
		Self::join(trailing(tokens, order))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn tokens(values: &[&str]) -> Vec<Token> {
		values.iter().map(|s| s.to_string()).collect()
	}

	#[test]
	fn splits_text_into_characters() {
		let strategy = CharacterStrategy;
		assert_eq!(strategy.tokenise(&"héllo".to_owned()), tokens(&["h", "é", "l", "l", "o"]));
	}

	#[test]
	fn numbers_use_their_decimal_form() {
		let strategy = CharacterStrategy;
		assert_eq!(strategy.tokenise(&CharInput::from(-42i64)), tokens(&["-", "4", "2"]));
		assert_eq!(strategy.tokenise(&CharInput::from(1.5f64)), tokens(&["1", ".", "5"]));
	}

	#[test]
	fn special_floats_render_like_plain_numbers() {
		let strategy = CharacterStrategy;
		assert_eq!(strategy.tokenise(&CharInput::from(-0.0f64)), tokens(&["0"]));
		assert_eq!(strategy.tokenise(&CharInput::from(f64::INFINITY)).concat(), "Infinity");
		assert_eq!(strategy.tokenise(&CharInput::from(f64::NEG_INFINITY)).concat(), "-Infinity");
		assert_eq!(strategy.tokenise(&CharInput::from(f64::NAN)).concat(), "NaN");
	}

	#[test]
	fn mixed_inputs_are_flattened() {
		let strategy = CharacterStrategy;
		let data = vec![CharInput::from("ab"), CharInput::from(7i64), CharInput::from("c")];
		assert_eq!(strategy.tokenise(&data), tokens(&["a", "b", "7", "c"]));
	}

	#[test]
	fn combine_joins_without_separator() {
		let strategy = CharacterStrategy;
		let t = tokens(&["a", "b", "c"]);
		assert_eq!(TokenStrategy::<String>::combine_tokens(&strategy, &t, None), "abc");
		assert_eq!(TokenStrategy::<String>::combine_tokens(&strategy, &t, Some(2)), "bc");
	}

	#[test]
	fn detokenise_concatenates() {
		let strategy = CharacterStrategy;
		let t = tokens(&["1", "2", "x"]);
		assert_eq!(TokenStrategy::<CharInput>::detokenise(&strategy, &t), "12x");
	}
}
