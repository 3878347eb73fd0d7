use thiserror::Error;

/// Errors returned by token generation.
///
/// Unknown character-class tags are deliberately not represented here:
/// tag resolution is total and falls back to the default class.
#[derive(Debug, Error)]
pub enum GenerateError {
	/// The request itself is malformed, e.g. an oversized length.
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),

	/// The resolved sampling alphabet cannot be drawn from.
	#[error("Invalid configuration: {0}")]
	InvalidConfiguration(String),
}
