//! Field validators for Landing form submissions
//!
//! Validation is table driven: a [`RuleSet`] maps a field name to a
//! [`FieldRule`], and each rule is an ordered list of [`Validator`]s that
//! stop at the first failure. The [`ValidationEngine`] walks the submitted
//! [`FieldEntry`] list, applies the matching rule to every entry and collects
//! the failures into a [`ValidationResult`].
//!
//! ```
//! use landing_validators::{FieldEntry, ValidationEngine};
//!
//! let engine = ValidationEngine::contact_form();
//! let result = engine.validate(&[
//!     FieldEntry::new("name", "John1"),
//!     FieldEntry::new("phone", "+380(67)123-45-67"),
//! ]);
//!
//! assert!(!result.is_valid());
//! assert_eq!(result.error("name"), Some("Name has digits!"));
//! assert_eq!(result.error("phone"), None);
//! ```

pub mod engine;
pub mod errors;
pub mod rule;
pub mod string;

pub use engine::{FieldEntry, MissingFieldPolicy, ValidationEngine, ValidationResult};
pub use errors::ValidationError;
pub use rule::{FieldRule, RuleSet};
pub use string::{ForbiddenPatternValidator, MaxLengthValidator, RegexValidator, RequiredValidator};

/// Trait for validators
pub trait Validator<T: ?Sized>: Send + Sync {
	fn validate(&self, value: &T) -> Result<(), ValidationError>;
}

/// Re-export commonly used types
pub mod prelude {
	pub use crate::engine::*;
	pub use crate::errors::*;
	pub use crate::rule::*;
	pub use crate::string::*;
	pub use crate::Validator;
}
