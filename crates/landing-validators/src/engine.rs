//! Validation engine applying a [`RuleSet`] to submitted fields

use crate::rule::RuleSet;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One `(name, value)` pair from a submitted form.
///
/// Deserializes from the `[{"name": ..., "value": ...}]` shape a browser
/// form serializer produces. A missing `value` reads as the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldEntry {
	pub name: String,
	#[serde(default)]
	pub value: String,
}

impl FieldEntry {
	pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			value: value.into(),
		}
	}
}

/// Outcome of validating a submission.
///
/// `result` is true exactly when `errors` is empty. Errors serialize under
/// the `error` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
	result: bool,
	#[serde(rename = "error")]
	errors: IndexMap<String, String>,
}

impl ValidationResult {
	pub fn from_errors(errors: IndexMap<String, String>) -> Self {
		Self {
			result: errors.is_empty(),
			errors,
		}
	}

	pub fn valid() -> Self {
		Self::from_errors(IndexMap::new())
	}

	pub fn is_valid(&self) -> bool {
		self.result
	}

	pub fn errors(&self) -> &IndexMap<String, String> {
		&self.errors
	}

	/// The error message recorded for `field`, if any
	pub fn error(&self, field: &str) -> Option<&str> {
		self.errors.get(field).map(String::as_str)
	}
}

/// What to do with a required field that was never submitted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingFieldPolicy {
	/// Only submitted entries are validated
	#[default]
	Ignore,
	/// A required field absent from the submission is validated as `""`
	TreatAsEmpty,
}

/// Applies a shared, read-only [`RuleSet`] to submissions
#[derive(Debug, Clone)]
pub struct ValidationEngine {
	rules: Arc<RuleSet>,
	missing: MissingFieldPolicy,
}

impl ValidationEngine {
	pub fn new(rules: Arc<RuleSet>) -> Self {
		Self {
			rules,
			missing: MissingFieldPolicy::default(),
		}
	}

	/// Engine over [`RuleSet::contact_form`]
	pub fn contact_form() -> Self {
		Self::new(Arc::new(RuleSet::contact_form()))
	}

	pub fn with_missing_field_policy(mut self, policy: MissingFieldPolicy) -> Self {
		self.missing = policy;
		self
	}

	pub fn rules(&self) -> &RuleSet {
		&self.rules
	}

	/// Validates every submitted entry against the rule for its name.
	///
	/// Entries without a rule are ignored. When a name occurs more than
	/// once, each occurrence is checked and the last failing one decides the
	/// recorded message.
	///
	/// # Examples
	///
	/// ```
	/// use landing_validators::{FieldEntry, ValidationEngine};
	///
	/// let engine = ValidationEngine::contact_form();
	///
	/// let empty = engine.validate(&[]);
	/// assert!(empty.is_valid());
	/// assert!(empty.errors().is_empty());
	///
	/// let result = engine.validate(&[FieldEntry::new("phone", "12345")]);
	/// assert_eq!(result.error("phone"), Some("Does not meet standards!"));
	/// ```
	pub fn validate(&self, fields: &[FieldEntry]) -> ValidationResult {
		let mut errors = IndexMap::new();

		for entry in fields {
			let Some(rule) = self.rules.get(&entry.name) else {
				continue;
			};
			if let Err(error) = rule.check(&entry.value) {
				errors.insert(entry.name.clone(), error.to_string());
			}
		}

		if self.missing == MissingFieldPolicy::TreatAsEmpty {
			for rule in self.rules.iter().filter(|rule| rule.is_required()) {
				let submitted = fields.iter().any(|entry| entry.name == rule.field());
				if submitted {
					continue;
				}
				if let Err(error) = rule.check("") {
					errors.insert(rule.field().to_string(), error.to_string());
				}
			}
		}

		ValidationResult::from_errors(errors)
	}
}

impl Default for ValidationEngine {
	fn default() -> Self {
		Self::contact_form()
	}
}
