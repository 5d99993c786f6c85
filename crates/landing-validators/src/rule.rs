//! Field rules and the contact form rule set

use crate::string::{ForbiddenPatternValidator, MaxLengthValidator, RegexValidator, RequiredValidator, is_blank};
use crate::{ValidationError, Validator};
use indexmap::IndexMap;
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Maximum length of the `name` field
pub const NAME_MAX_LENGTH: usize = 64;

/// Maximum length of the `comment` field
pub const COMMENT_MAX_LENGTH: usize = 1024;

// ASCII letters only. `$` is strict: a trailing newline does not match.
static NAME_REGEX: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^[a-zA-Z]+$").expect("NAME_REGEX: invalid regex pattern"));

// 3-2-3-2-2 digit groups, e.g. +380(67)123-45-67 or 380671234567.
// The `+`, the parentheses and both dashes are each optional.
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^\+?[0-9]{3}\(?[0-9]{2}\)?[0-9]{3}-?[0-9]{2}-?[0-9]{2}$")
		.expect("PHONE_REGEX: invalid regex pattern")
});

// local@domain.tld with a 2-5 letter top-level segment.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[a-zA-Z0-9_.\-]+@[a-zA-Z0-9_.\-]+\.[a-zA-Z]{2,5}$")
		.expect("EMAIL_REGEX: invalid regex pattern")
});

// A complete open/close tag pair on one line, matched lazily.
// Lone or self-closing tags are not matched.
static PAIRED_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"<[^>]+>(.*?)</[^>]+>").expect("PAIRED_TAG_REGEX: invalid regex pattern")
});

/// Ordered constraints for a single field.
///
/// Validators run in insertion order and stop at the first failure, so a
/// rule reports at most one error.
pub struct FieldRule {
	field: String,
	required: bool,
	validators: Vec<Box<dyn Validator<str>>>,
}

impl FieldRule {
	/// Creates a rule for an optional field.
	///
	/// An optional field still runs its validators on an empty value unless
	/// [`skip_empty`](Self::skip_empty) is used.
	pub fn new(field: impl Into<String>) -> Self {
		Self {
			field: field.into(),
			required: false,
			validators: Vec::new(),
		}
	}

	/// Creates a rule whose first constraint rejects the empty value
	pub fn required(field: impl Into<String>) -> Self {
		Self {
			field: field.into(),
			required: true,
			validators: vec![Box::new(RequiredValidator::new())],
		}
	}

	/// Appends a validator to the chain
	pub fn with(mut self, validator: impl Validator<str> + 'static) -> Self {
		self.validators.push(Box::new(validator));
		self
	}

	/// Wraps the rule so a blank value is accepted without running it
	pub fn skip_empty(self) -> Self {
		let inner = self.validators;
		Self {
			field: self.field,
			required: self.required,
			validators: vec![Box::new(SkipEmpty(inner))],
		}
	}

	pub fn field(&self) -> &str {
		&self.field
	}

	pub fn is_required(&self) -> bool {
		self.required
	}

	/// Runs the chain against `value`, returning the first error
	///
	/// # Examples
	///
	/// ```
	/// use landing_validators::{FieldRule, MaxLengthValidator, ValidationError};
	///
	/// let rule = FieldRule::required("name").with(MaxLengthValidator::new(3, "Name"));
	/// assert_eq!(rule.check(""), Err(ValidationError::Empty));
	/// assert!(rule.check("abc").is_ok());
	/// assert!(rule.check("abcd").is_err());
	/// ```
	pub fn check(&self, value: &str) -> Result<(), ValidationError> {
		self.validators
			.iter()
			.try_for_each(|validator| validator.validate(value))
	}
}

impl fmt::Debug for FieldRule {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FieldRule")
			.field("field", &self.field)
			.field("required", &self.required)
			.field("validators", &self.validators.len())
			.finish()
	}
}

struct SkipEmpty(Vec<Box<dyn Validator<str>>>);

impl Validator<str> for SkipEmpty {
	fn validate(&self, value: &str) -> Result<(), ValidationError> {
		if is_blank(value) {
			return Ok(());
		}
		self.0.iter().try_for_each(|validator| validator.validate(value))
	}
}

/// Field name → rule lookup table
#[derive(Debug, Default)]
pub struct RuleSet {
	rules: IndexMap<String, FieldRule>,
}

impl RuleSet {
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a rule, replacing any previous rule for the same field
	pub fn with_rule(mut self, rule: FieldRule) -> Self {
		self.rules.insert(rule.field.clone(), rule);
		self
	}

	/// The rules of the landing page contact form.
	///
	/// | field   | required | constraints                            |
	/// |---------|----------|----------------------------------------|
	/// | name    | yes      | at most 64 chars, ASCII letters only   |
	/// | phone   | yes      | 3-2-3-2-2 digits, optional punctuation |
	/// | email   | no       | address shape when non-empty           |
	/// | comment | no       | at most 1024 chars, no paired tags     |
	pub fn contact_form() -> Self {
		Self::new()
			.with_rule(
				FieldRule::required("name")
					.with(MaxLengthValidator::new(NAME_MAX_LENGTH, "Name"))
					.with(RegexValidator::from_regex(
						NAME_REGEX.clone(),
						"Name has digits!",
					)),
			)
			.with_rule(FieldRule::required("phone").with(RegexValidator::from_regex(
				PHONE_REGEX.clone(),
				"Does not meet standards!",
			)))
			.with_rule(
				FieldRule::new("email")
					.with(RegexValidator::from_regex(
						EMAIL_REGEX.clone(),
						"Invalid email!",
					))
					.skip_empty(),
			)
			.with_rule(
				FieldRule::new("comment")
					.with(MaxLengthValidator::new(COMMENT_MAX_LENGTH, "Comment"))
					.with(ForbiddenPatternValidator::new(
						PAIRED_TAG_REGEX.clone(),
						"Has tags!",
					)),
			)
	}

	pub fn get(&self, field: &str) -> Option<&FieldRule> {
		self.rules.get(field)
	}

	pub fn iter(&self) -> impl Iterator<Item = &FieldRule> {
		self.rules.values()
	}

	pub fn len(&self) -> usize {
		self.rules.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rules.is_empty()
	}
}
