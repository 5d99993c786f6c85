//! Infrastructure errors shared by every Landing crate.
//!
//! Routing misses and form validation failures are NOT represented here:
//! they are ordinary outcomes with their own types. This enum covers what
//! can go wrong around them (I/O, serialization, bad configuration).

use thiserror::Error;

/// Result alias used across the workspace
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while serving a request
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
	/// A page template could not be found
	#[error("Template not found: {0}")]
	TemplateNotFound(String),

	/// Reading from or writing to the filesystem or a socket failed
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	/// A response body could not be serialized
	#[error("Serialization error: {0}")]
	Serialization(String),

	/// The request could not be built or decoded
	#[error("Invalid request: {0}")]
	InvalidRequest(String),

	/// Startup configuration is inconsistent
	#[error("Configuration error: {0}")]
	Configuration(String),

	/// Internal error
	#[error("Internal error: {0}")]
	Internal(String),
}

impl From<serde_json::Error> for Error {
	fn from(error: serde_json::Error) -> Self {
		Self::Serialization(error.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_io_error_converts() {
		// Arrange
		let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");

		// Act
		let error: Error = io.into();

		// Assert
		assert!(matches!(error, Error::Io(_)));
		assert_eq!(error.to_string(), "IO error: missing");
	}

	#[rstest]
	fn test_template_not_found_message() {
		let error = Error::TemplateNotFound("index".to_string());
		assert_eq!(error.to_string(), "Template not found: index");
	}
}
