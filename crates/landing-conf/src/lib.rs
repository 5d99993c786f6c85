//! # Landing Configuration
//!
//! Layered settings for the Landing server.
//!
//! Values are collected from a stack of [`ConfigSource`]s and merged by
//! priority, later layers overriding earlier ones key by key:
//!
//! 1. built-in defaults
//! 2. a TOML file (a missing file is an error only when it was named explicitly)
//! 3. `LANDING_*` environment variables
//!
//! ## Examples
//!
//! ```rust
//! use landing_conf::{Settings, SettingsBuilder};
//! use landing_conf::sources::EnvSource;
//!
//! let settings = SettingsBuilder::new()
//!     .add_source(EnvSource::new("LANDING_").with_vars([("LANDING_LOG_FILTER", "debug")]))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(settings.log_filter, "debug");
//! assert_eq!(settings.bind_address.port(), 8000);
//! ```

pub mod sources;

pub use sources::{ConfigSource, DefaultSource, EnvSource, SourceError, TomlFileSource};

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Prefix of the environment variables read by [`Settings::load`]
pub const ENV_PREFIX: &str = "LANDING_";

/// Errors raised while loading settings
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SettingsError {
	#[error("Failed to load {source_name}: {error}")]
	Source {
		source_name: String,
		#[source]
		error: SourceError,
	},

	#[error("Invalid settings: {0}")]
	Invalid(#[from] serde_json::Error),
}

/// Server settings
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
	/// Address the HTTP listener binds to
	pub bind_address: SocketAddr,

	/// Directory holding the page templates
	pub template_dir: PathBuf,

	/// `tracing` filter directives, overridden by `RUST_LOG`
	pub log_filter: String,

	/// Validate required fields even when the form did not submit them
	#[serde(deserialize_with = "deserialize_flag")]
	pub treat_missing_as_empty: bool,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			bind_address: SocketAddr::from(([127, 0, 0, 1], 8000)),
			template_dir: PathBuf::from("templates"),
			log_filter: "info".to_string(),
			treat_missing_as_empty: false,
		}
	}
}

impl Settings {
	/// Loads settings from the defaults, the TOML file at `path` and the
	/// process environment.
	///
	/// A `path` that was given but does not exist is an error.
	pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
		let mut builder = SettingsBuilder::new();
		if let Some(path) = path {
			builder = builder.add_source(TomlFileSource::new(path).required());
		}
		builder.add_source(EnvSource::new(ENV_PREFIX)).build()
	}
}

/// Merges configuration sources into [`Settings`]
///
/// The built-in defaults are always the lowest layer.
#[derive(Default)]
pub struct SettingsBuilder {
	sources: Vec<Box<dyn ConfigSource>>,
}

impl SettingsBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn add_source<S: ConfigSource + 'static>(mut self, source: S) -> Self {
		self.sources.push(Box::new(source));
		self
	}

	/// Loads every source in priority order and deserializes the result
	pub fn build(mut self) -> Result<Settings, SettingsError> {
		// Stable sort: equal priorities keep insertion order.
		self.sources.sort_by_key(|source| source.priority());

		let mut merged = match serde_json::to_value(Settings::default())? {
			Value::Object(map) => map,
			_ => Map::new(),
		};
		for source in &self.sources {
			let values = source.load().map_err(|error| SettingsError::Source {
				source_name: source.description(),
				error,
			})?;
			merged.extend(values);
		}

		Ok(serde_json::from_value(Value::Object(merged))?)
	}
}

impl std::fmt::Debug for SettingsBuilder {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let sources: Vec<_> = self.sources.iter().map(|source| source.description()).collect();
		f.debug_struct("SettingsBuilder").field("sources", &sources).finish()
	}
}

// Environment values arrive as strings.
fn deserialize_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
	#[derive(Deserialize)]
	#[serde(untagged)]
	enum Flag {
		Bool(bool),
		Text(String),
	}

	match Flag::deserialize(deserializer)? {
		Flag::Bool(flag) => Ok(flag),
		Flag::Text(text) => match text.trim().to_lowercase().as_str() {
			"true" | "1" | "yes" | "on" => Ok(true),
			"false" | "0" | "no" | "off" | "" => Ok(false),
			other => Err(serde::de::Error::custom(format!("invalid boolean '{}'", other))),
		},
	}
}
