use serde::{Deserialize, Serialize};

/// Order used when none is given, or when a negative one is given.
pub const DEFAULT_ORDER: usize = 3;

/// Width, in tokens, of the context window used to predict the next token.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Order(usize);

impl Order {
	/// Resolves a caller-supplied order.
	///
	/// - `None` or a negative value falls back to `DEFAULT_ORDER`.
	/// - Zero is kept: every window is empty and all tokens share one key.
	pub fn resolve(order: Option<i64>) -> Self {
		match order {
			Some(n) if n >= 0 => Self(usize::try_from(n).unwrap_or(usize::MAX)),
			_ => Self::default(),
		}
	}

	pub fn get(self) -> usize {
		self.0
	}
}

impl Default for Order {
	fn default() -> Self {
		Self(DEFAULT_ORDER)
	}
}

impl From<usize> for Order {
	fn from(value: usize) -> Self {
		Self(value)
	}
}
