const DIGITS: &str = "0123456789";
const UPPER_LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER_LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";
const LETTERS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const ALPHANUMERIC: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// A named character class selecting a base alphabet.
///
/// The set of classes is closed; selection from an arbitrary string tag
/// goes through [`CharacterClass::from_tag`], which never fails.
///
/// # Invariants
/// - Every class resolves to a non-empty base alphabet
/// - All base alphabets are ASCII
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharacterClass {
	/// Digits `0`-`9`.
	Number,
	/// Upper-case letters, lower-case letters and digits.
	Alpha,
	/// Upper-case and lower-case letters.
	Letter,
	/// Upper-case letters only.
	UpperLetter,
	/// Lower-case letters only.
	LowerLetter,
}

impl CharacterClass {
	/// Every class, in tag-table order.
	pub const ALL: [CharacterClass; 5] = [
		CharacterClass::Number,
		CharacterClass::Alpha,
		CharacterClass::Letter,
		CharacterClass::UpperLetter,
		CharacterClass::LowerLetter,
	];

	/// Resolves a string tag to its class.
	///
	/// Tags are case-sensitive. Any tag outside the known set (including
	/// the empty string) resolves to [`CharacterClass::Alpha`]; callers
	/// may rely on unknown tags behaving like `"alpha"`.
	pub fn from_tag(tag: &str) -> Self {
		match tag {
			"number" => Self::Number,
			"alpha" => Self::Alpha,
			"letter" => Self::Letter,
			"upper-letter" => Self::UpperLetter,
			"lower-letter" => Self::LowerLetter,
			_ => Self::Alpha,
		}
	}

	/// Returns the canonical tag for this class.
	pub fn tag(&self) -> &'static str {
		match self {
			Self::Number => "number",
			Self::Alpha => "alpha",
			Self::Letter => "letter",
			Self::UpperLetter => "upper-letter",
			Self::LowerLetter => "lower-letter",
		}
	}

	/// Returns the base alphabet for this class.
	pub fn base_set(&self) -> &'static str {
		match self {
			Self::Number => DIGITS,
			Self::Alpha => ALPHANUMERIC,
			Self::Letter => LETTERS,
			Self::UpperLetter => UPPER_LETTERS,
			Self::LowerLetter => LOWER_LETTERS,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn resolves_every_known_tag() {
		assert_eq!(CharacterClass::from_tag("number"), CharacterClass::Number);
		assert_eq!(CharacterClass::from_tag("alpha"), CharacterClass::Alpha);
		assert_eq!(CharacterClass::from_tag("letter"), CharacterClass::Letter);
		assert_eq!(CharacterClass::from_tag("upper-letter"), CharacterClass::UpperLetter);
		assert_eq!(CharacterClass::from_tag("lower-letter"), CharacterClass::LowerLetter);
	}

	#[test]
	fn unknown_tags_fall_back_to_alpha() {
		assert_eq!(CharacterClass::from_tag("bogus-tag"), CharacterClass::Alpha);
		assert_eq!(CharacterClass::from_tag(""), CharacterClass::Alpha);
		// Tags are case-sensitive
		assert_eq!(CharacterClass::from_tag("NUMBER"), CharacterClass::Alpha);
	}

	#[test]
	fn tags_round_trip() {
		for class in CharacterClass::ALL {
			assert_eq!(CharacterClass::from_tag(class.tag()), class);
		}
	}

	#[test]
	fn base_sets_match_the_class_table() {
		assert_eq!(CharacterClass::Number.base_set(), "0123456789");
		assert_eq!(
			CharacterClass::Alpha.base_set(),
			"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789"
		);
		assert_eq!(
			CharacterClass::Letter.base_set(),
			"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz"
		);
		assert_eq!(CharacterClass::UpperLetter.base_set(), "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
		assert_eq!(CharacterClass::LowerLetter.base_set(), "abcdefghijklmnopqrstuvwxyz");
	}

	#[test]
	fn no_base_set_is_empty() {
		for class in CharacterClass::ALL {
			assert!(!class.base_set().is_empty());
		}
	}
}
