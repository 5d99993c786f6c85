//! Validation error type
//!
//! The `Display` output of each variant is the message returned to the
//! client, so the wording here is part of the wire contract.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
	#[error("Is Empty!")]
	Empty,

	#[error("{label} is too long({length})!")]
	TooLong {
		label: String,
		length: usize,
		max: usize,
	},

	#[error("{0}")]
	PatternMismatch(String),

	#[error("{0}")]
	ForbiddenPattern(String),
}
