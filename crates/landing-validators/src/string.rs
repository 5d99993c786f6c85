//! String validators

use crate::{ValidationError, Validator};
use regex::Regex;

/// True for the values a form treats as not filled in: `""` and `"0"`
///
/// # Examples
///
/// ```
/// use landing_validators::string::is_blank;
///
/// assert!(is_blank(""));
/// assert!(is_blank("0"));
/// assert!(!is_blank("00"));
/// assert!(!is_blank(" "));
/// ```
pub fn is_blank(value: &str) -> bool {
	value.is_empty() || value == "0"
}

/// Rejects blank values (see [`is_blank`])
#[derive(Debug, Clone, Default)]
pub struct RequiredValidator;

impl RequiredValidator {
	pub fn new() -> Self {
		Self
	}
}

impl Validator<str> for RequiredValidator {
	fn validate(&self, value: &str) -> Result<(), ValidationError> {
		if is_blank(value) {
			Err(ValidationError::Empty)
		} else {
			Ok(())
		}
	}
}

/// Maximum length validator
///
/// Length is counted in UTF-8 bytes. The label names the field in the error
/// message.
#[derive(Debug, Clone)]
pub struct MaxLengthValidator {
	max: usize,
	label: String,
}

impl MaxLengthValidator {
	/// Creates a new MaxLengthValidator with the specified maximum length.
	///
	/// # Examples
	///
	/// ```
	/// use landing_validators::{MaxLengthValidator, Validator};
	///
	/// let validator = MaxLengthValidator::new(5, "Name");
	/// assert!(validator.validate("hello").is_ok());
	/// assert_eq!(
	///     validator.validate("hello!").unwrap_err().to_string(),
	///     "Name is too long(6)!"
	/// );
	/// ```
	pub fn new(max: usize, label: impl Into<String>) -> Self {
		Self {
			max,
			label: label.into(),
		}
	}
}

impl Validator<str> for MaxLengthValidator {
	fn validate(&self, value: &str) -> Result<(), ValidationError> {
		let length = value.len();
		if length <= self.max {
			Ok(())
		} else {
			Err(ValidationError::TooLong {
				label: self.label.clone(),
				length,
				max: self.max,
			})
		}
	}
}

/// Requires the whole value to match a pattern
#[derive(Debug, Clone)]
pub struct RegexValidator {
	regex: Regex,
	message: String,
}

impl RegexValidator {
	/// Wraps an already compiled regex
	///
	/// # Examples
	///
	/// ```
	/// use landing_validators::{RegexValidator, Validator};
	/// use regex::Regex;
	///
	/// let validator = RegexValidator::from_regex(Regex::new(r"^[0-9]{3}$").unwrap(), "Three digits!");
	/// assert!(validator.validate("123").is_ok());
	/// assert!(validator.validate("12a").is_err());
	/// ```
	pub fn from_regex(regex: Regex, message: impl Into<String>) -> Self {
		Self {
			regex,
			message: message.into(),
		}
	}
}

impl Validator<str> for RegexValidator {
	fn validate(&self, value: &str) -> Result<(), ValidationError> {
		if self.regex.is_match(value) {
			Ok(())
		} else {
			Err(ValidationError::PatternMismatch(self.message.clone()))
		}
	}
}

/// Fails when the pattern is found anywhere in the value
#[derive(Debug, Clone)]
pub struct ForbiddenPatternValidator {
	regex: Regex,
	message: String,
}

impl ForbiddenPatternValidator {
	/// # Examples
	///
	/// ```
	/// use landing_validators::{ForbiddenPatternValidator, Validator};
	/// use regex::Regex;
	///
	/// let validator = ForbiddenPatternValidator::new(Regex::new("spam").unwrap(), "No spam!");
	/// assert!(validator.validate("hello").is_ok());
	/// assert!(validator.validate("buy spam now").is_err());
	/// ```
	pub fn new(regex: Regex, message: impl Into<String>) -> Self {
		Self {
			regex,
			message: message.into(),
		}
	}
}

impl Validator<str> for ForbiddenPatternValidator {
	fn validate(&self, value: &str) -> Result<(), ValidationError> {
		if self.regex.is_match(value) {
			Err(ValidationError::ForbiddenPattern(self.message.clone()))
		} else {
			Ok(())
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("", false)]
	#[case(" ", true)]
	#[case("0", false)]
	#[case("00", true)]
	#[case("John", true)]
	fn test_required_validator(#[case] value: &str, #[case] ok: bool) {
		// Arrange
		let validator = RequiredValidator::new();

		// Act
		let result = validator.validate(value);

		// Assert
		assert_eq!(result.is_ok(), ok, "unexpected result for {value:?}");
	}

	#[rstest]
	fn test_max_length_boundary() {
		let validator = MaxLengthValidator::new(64, "Name");

		assert!(validator.validate(&"a".repeat(64)).is_ok());
		assert_eq!(
			validator.validate(&"a".repeat(65)),
			Err(ValidationError::TooLong {
				label: "Name".to_string(),
				length: 65,
				max: 64,
			})
		);
	}

	#[rstest]
	fn test_max_length_counts_bytes() {
		// Arrange
		let validator = MaxLengthValidator::new(1024, "Comment");
		let comment = "я".repeat(600);

		// Act
		let result = validator.validate(&comment);

		// Assert
		assert_eq!(
			result.unwrap_err().to_string(),
			"Comment is too long(1200)!"
		);
	}

	#[rstest]
	fn test_max_length_multibyte_at_limit() {
		let validator = MaxLengthValidator::new(6, "Name");

		assert!(validator.validate("äöü").is_ok());
		assert!(validator.validate("äöüa").is_err());
	}

	#[rstest]
	fn test_regex_validator_message() {
		// Arrange
		let validator = RegexValidator::from_regex(Regex::new(r"^[a-z]+$").unwrap(), "Lowercase only!");

		// Act
		let result = validator.validate("ABC");

		// Assert
		assert_eq!(
			result,
			Err(ValidationError::PatternMismatch("Lowercase only!".to_string()))
		);
	}

	#[rstest]
	fn test_forbidden_pattern_validator() {
		let validator = ForbiddenPatternValidator::new(Regex::new(r"\d").unwrap(), "No digits!");

		assert!(validator.validate("abc").is_ok());
		assert_eq!(
			validator.validate("a1c"),
			Err(ValidationError::ForbiddenPattern("No digits!".to_string()))
		);
	}
}
