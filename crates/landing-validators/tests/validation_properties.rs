//! Property tests for the contact form engine
//!
//! - `result` always mirrors whether any error was recorded
//! - fields without a rule never produce errors
//! - each reported error is the first failure of that field's rule for one
//!   of the values submitted under that name

use landing_validators::{FieldEntry, MissingFieldPolicy, ValidationEngine};
use proptest::prelude::*;

fn field_name() -> impl Strategy<Value = String> {
	prop_oneof![
		Just("name".to_string()),
		Just("phone".to_string()),
		Just("email".to_string()),
		Just("comment".to_string()),
		"[a-z]{1,8}",
	]
}

fn field_entry() -> impl Strategy<Value = FieldEntry> {
	(field_name(), ".{0,80}").prop_map(|(name, value)| FieldEntry::new(name, value))
}

proptest! {
	#[test]
	fn prop_result_matches_error_emptiness(fields in prop::collection::vec(field_entry(), 0..12)) {
		let engine = ValidationEngine::contact_form();

		let result = engine.validate(&fields);

		prop_assert_eq!(result.is_valid(), result.errors().is_empty());
	}

	#[test]
	fn prop_result_matches_error_emptiness_when_missing_is_empty(
		fields in prop::collection::vec(field_entry(), 0..12)
	) {
		let engine = ValidationEngine::contact_form()
			.with_missing_field_policy(MissingFieldPolicy::TreatAsEmpty);

		let result = engine.validate(&fields);

		prop_assert_eq!(result.is_valid(), result.errors().is_empty());
	}

	#[test]
	fn prop_errors_only_for_known_submitted_fields(fields in prop::collection::vec(field_entry(), 0..12)) {
		let engine = ValidationEngine::contact_form();

		let result = engine.validate(&fields);

		for key in result.errors().keys() {
			prop_assert!(engine.rules().get(key).is_some());
			prop_assert!(fields.iter().any(|entry| &entry.name == key));
		}
	}

	#[test]
	fn prop_error_is_first_failure_of_a_submitted_value(fields in prop::collection::vec(field_entry(), 0..12)) {
		let engine = ValidationEngine::contact_form();

		let result = engine.validate(&fields);

		for (field, message) in result.errors() {
			let rule = engine.rules().get(field).unwrap();
			let matched = fields
				.iter()
				.filter(|entry| &entry.name == field)
				.filter_map(|entry| rule.check(&entry.value).err())
				.any(|error| &error.to_string() == message);
			prop_assert!(matched, "{} -> {}", field, message);
		}
	}

	#[test]
	fn prop_letters_only_names_are_valid(name in "[a-zA-Z]{1,64}") {
		let engine = ValidationEngine::contact_form();

		let result = engine.validate(&[FieldEntry::new("name", name)]);

		prop_assert!(result.is_valid());
	}
}
