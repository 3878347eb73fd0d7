use rand::Rng;

use crate::token::error::GenerateError;
use crate::token::request::TokenRequest;

/// Maximum accepted token length for a single call.
pub const MAX_LENGTH: usize = 65_536;

/// Generates a pseudo-random token described by `request`.
///
/// Each output position is an independent uniform draw from the resolved
/// alphabet. Repeats are possible and no class coverage is guaranteed: a
/// 5-character alphanumeric token may happen to contain no digit. Callers
/// needing coverage guarantees must layer them on top.
///
/// # Returns
/// - `Ok(String)` with exactly `request.length` characters
/// - `Err(GenerateError::InvalidArgument)` if the length exceeds [`MAX_LENGTH`]
/// - `Err(GenerateError::InvalidConfiguration)` if the resolved alphabet is empty
///
/// # Notes
/// - A zero length produces an empty string.
/// - Output is intentionally non-deterministic across calls; the source is
///   the thread-local non-cryptographic generator.
pub fn generate(request: &TokenRequest) -> Result<String, GenerateError> {
	if request.length > MAX_LENGTH {
		return Err(GenerateError::InvalidArgument(format!(
			"Length must be at most {}, got {}",
			MAX_LENGTH, request.length
		)));
	}
	sample(&request.alphabet(), request.length)
}

/// Draws `length` independent characters from `alphabet`.
///
/// # Errors
/// Returns `InvalidConfiguration` if `alphabet` is empty; a uniform draw
/// over an empty range has no defined result.
fn sample(alphabet: &[char], length: usize) -> Result<String, GenerateError> {
	if alphabet.is_empty() {
		return Err(GenerateError::InvalidConfiguration(
			"Resolved alphabet is empty".to_owned(),
		));
	}

	let mut rng = rand::rng();
	Ok((0..length)
		.map(|_| alphabet[rng.random_range(0..alphabet.len())])
		.collect())
}
