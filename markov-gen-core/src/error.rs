use thiserror::Error;

/// Precondition failures reported by the engine.
///
/// A source that is too short for the chosen order is not an error,
/// and neither is a generation run that reaches a context with no
/// observed continuation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MarkovError {
	/// `train` was called before any source was added.
	#[error("cannot train a chain without sources")]
	NoSources,

	/// `generate` was called before a successful `train`.
	#[error("the chain has not been trained")]
	NotTrained,

	/// Training succeeded but no source was long enough to yield a starter.
	#[error("no source is long enough to seed generation")]
	NoStarters,
}

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, MarkovError>;
