//! # Landing Core
//!
//! Shared building blocks for the Landing workspace:
//!
//! - [`exception`]: the infrastructure error type used across crates
//! - [`http`]: request and response values exchanged with the server front
//! - [`Handler`]: the async entry point every request goes through
//!
//! Routing, validation and configuration live in their own crates and only
//! depend on this one.

pub mod exception;
pub mod http;

pub use exception::{Error, Result};
pub use http::{Request, Response, TransportKind};

use async_trait::async_trait;
use std::sync::Arc;

/// Handler trait for processing requests
///
/// The server front hands every decoded request to a single `Handler`.
#[async_trait]
pub trait Handler: Send + Sync {
	async fn handle(&self, request: Request) -> Result<Response>;
}

/// Blanket implementation for `Arc<T>` where T: Handler
#[async_trait]
impl<T: Handler + ?Sized> Handler for Arc<T> {
	async fn handle(&self, request: Request) -> Result<Response> {
		(**self).handle(request).await
	}
}
