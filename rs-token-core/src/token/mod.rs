//! Top-level module for the token generation system.
//!
//! This crate provides a character-class based random token generator, including:
//! - Named character classes with fixed base alphabets (`CharacterClass`)
//! - Per-call request configuration (`TokenRequest`)
//! - Uniform per-position sampling (`generator`)
//! - Error kinds for rejected requests (`GenerateError`)

/// Named character classes and their base alphabets.
///
/// Resolution from a string tag is total: unknown tags fall back to the
/// full alphanumeric class instead of failing.
pub mod charset;

/// Error kinds for rejected generation requests.
pub mod error;

/// Token generation from a resolved alphabet.
///
/// Exposes the single generation operation and its length bound.
pub mod generator;

/// Per-call request configuration.
///
/// Stores the requested length, the selected character class and the
/// optional extra characters, and resolves the concrete sampling alphabet.
pub mod request;
