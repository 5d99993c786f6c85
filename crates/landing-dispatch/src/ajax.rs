//! Command (AJAX) requests: envelope decoding and method dispatch

use landing_validators::{FieldEntry, ValidationEngine, ValidationResult};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::str::FromStr;
use thiserror::Error;

/// Failures reported inline in the `error` field of an [`AjaxResult`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AjaxError {
	#[error("Empty request!")]
	EmptyRequest,

	#[error("Unspecified method!")]
	UnspecifiedMethod,

	#[error("Unknown method!")]
	UnknownMethod,
}

impl Serialize for AjaxError {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

/// Methods a command envelope may name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AjaxMethod {
	/// Validate the contact form fields in `data`
	FormSubmit,
}

impl AjaxMethod {
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::FormSubmit => "formSubmit",
		}
	}
}

impl FromStr for AjaxMethod {
	type Err = AjaxError;

	fn from_str(method: &str) -> Result<Self, Self::Err> {
		match method {
			"formSubmit" => Ok(Self::FormSubmit),
			_ => Err(AjaxError::UnknownMethod),
		}
	}
}

/// Decoded body of a command request.
///
/// `entries` counts every top-level key that was submitted, including keys
/// this crate does not understand, so `{"data": []}` is not an empty request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct CommandEnvelope {
	pub method: Option<String>,
	pub data: Option<Vec<FieldEntry>>,
	entries: usize,
}

impl CommandEnvelope {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_method(mut self, method: impl Into<String>) -> Self {
		if self.method.is_none() {
			self.entries += 1;
		}
		self.method = Some(method.into());
		self
	}

	pub fn with_data(mut self, data: Vec<FieldEntry>) -> Self {
		if self.data.is_none() {
			self.entries += 1;
		}
		self.data = Some(data);
		self
	}

	/// Decodes a raw request body.
	///
	/// An empty body, malformed JSON or a JSON value that is not an object
	/// all decode to the empty envelope.
	///
	/// # Examples
	///
	/// ```
	/// use landing_dispatch::CommandEnvelope;
	///
	/// assert!(CommandEnvelope::from_body(b"").is_empty());
	/// assert!(CommandEnvelope::from_body(b"[1, 2]").is_empty());
	///
	/// let envelope = CommandEnvelope::from_body(br#"{"method": "formSubmit"}"#);
	/// assert_eq!(envelope.method.as_deref(), Some("formSubmit"));
	/// ```
	pub fn from_body(body: &[u8]) -> Self {
		if body.iter().all(u8::is_ascii_whitespace) {
			return Self::default();
		}
		match serde_json::from_slice::<Map<String, Value>>(body) {
			Ok(map) => map.into(),
			Err(error) => {
				tracing::debug!(%error, "command body is not a JSON object");
				Self::default()
			}
		}
	}

	/// True when nothing at all was submitted
	pub fn is_empty(&self) -> bool {
		self.entries == 0
	}
}

impl From<Map<String, Value>> for CommandEnvelope {
	fn from(mut map: Map<String, Value>) -> Self {
		let entries = map.len();
		let method = map.remove("method").and_then(|value| match value {
			Value::Null => None,
			Value::String(method) => Some(method),
			other => Some(other.to_string()),
		});
		let data = map.remove("data").map(field_entries);
		Self {
			method,
			data,
			entries,
		}
	}
}

// Elements without a string `name` are dropped; scalar values are
// stringified and anything else reads as empty.
fn field_entries(value: Value) -> Vec<FieldEntry> {
	let Value::Array(items) = value else {
		return Vec::new();
	};
	items
		.into_iter()
		.filter_map(|item| {
			let Value::Object(mut item) = item else {
				return None;
			};
			let Some(Value::String(name)) = item.remove("name") else {
				return None;
			};
			let value = match item.remove("value") {
				Some(Value::String(value)) => value,
				Some(Value::Number(number)) => number.to_string(),
				Some(Value::Bool(flag)) => flag.to_string(),
				_ => String::new(),
			};
			Some(FieldEntry { name, value })
		})
		.collect()
}

/// Response envelope of a command request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AjaxResult {
	Failure { error: AjaxError },
	FormSubmit(ValidationResult),
}

impl AjaxResult {
	pub fn error(&self) -> Option<AjaxError> {
		match self {
			Self::Failure { error } => Some(*error),
			Self::FormSubmit(_) => None,
		}
	}
}

impl From<AjaxError> for AjaxResult {
	fn from(error: AjaxError) -> Self {
		Self::Failure { error }
	}
}

/// Routes a [`CommandEnvelope`] to the handler its `method` names.
///
/// Every branch produces a well-formed [`AjaxResult`]; nothing here fails.
#[derive(Debug, Clone, Default)]
pub struct AjaxMethodRouter {
	engine: ValidationEngine,
}

impl AjaxMethodRouter {
	pub fn new(engine: ValidationEngine) -> Self {
		Self { engine }
	}

	/// # Examples
	///
	/// ```
	/// use landing_dispatch::{AjaxError, AjaxMethodRouter, CommandEnvelope};
	///
	/// let router = AjaxMethodRouter::default();
	///
	/// let result = router.handle_command(&CommandEnvelope::new());
	/// assert_eq!(result.error(), Some(AjaxError::EmptyRequest));
	///
	/// let result = router.handle_command(&CommandEnvelope::new().with_method("foo"));
	/// assert_eq!(result.error(), Some(AjaxError::UnknownMethod));
	/// ```
	pub fn handle_command(&self, envelope: &CommandEnvelope) -> AjaxResult {
		if envelope.is_empty() {
			return AjaxError::EmptyRequest.into();
		}
		let Some(method) = envelope.method.as_deref() else {
			return AjaxError::UnspecifiedMethod.into();
		};
		let method = match method.parse::<AjaxMethod>() {
			Ok(method) => method,
			Err(error) => {
				tracing::debug!(method, "unknown command method");
				return error.into();
			}
		};

		match method {
			AjaxMethod::FormSubmit => {
				let fields = envelope.data.as_deref().unwrap_or_default();
				AjaxResult::FormSubmit(self.engine.validate(fields))
			}
		}
	}
}
