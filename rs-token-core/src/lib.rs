//! Character-class based random token generation library.
//!
//! This crate produces pseudo-random strings drawn from a named character
//! class, optionally extended with caller-supplied characters:
//! - Closed set of named classes (digits, letters, case-restricted letters)
//! - Unknown class tags fall back to the full alphanumeric set
//! - Independent uniform draws per output position
//!
//! The generator is stateless and synchronous; it is meant to be embedded
//! in a larger application (minting identifiers or temporary codes) and
//! makes no assumption about its callers. The randomness source is
//! non-cryptographic: outputs are not suitable as security tokens.

/// Core token generation logic.
///
/// This module exposes the request type, the character classes and the
/// single generation operation.
pub mod token;
