//! # Landing Dispatch
//!
//! Request dispatching for Landing.
//!
//! ## Overview
//!
//! Two independent paths leave this crate:
//!
//! ```text
//! Navigational:  RouteTarget → Dispatcher → RoutingTable → Action → Response
//!                                   ↓
//!                              RouteNotFound (404)
//!
//! Command:       CommandEnvelope → AjaxMethodRouter → ValidationEngine → AjaxResult
//! ```
//!
//! The [`RoutingTable`] is a static two-level map, controller name to action
//! name to [`HandlerRef`]. It is checked against a [`HandlerRegistry`] once,
//! when it is built, and never mutated afterwards.
//!
//! ## Examples
//!
//! ```rust
//! use landing_core::Response;
//! use landing_dispatch::{Dispatcher, HandlerRegistry, RouteTarget, RoutingTable};
//! use std::sync::Arc;
//!
//! let registry = HandlerRegistry::new()
//!     .register("Pages/actionHome", || Ok(Response::ok().with_body("home")));
//!
//! let table = RoutingTable::builder()
//!     .route("Pages", "home", "Pages/actionHome")
//!     .build(&registry)
//!     .unwrap();
//!
//! let dispatcher = Dispatcher::new(Arc::new(table));
//! let response = dispatcher.run(&RouteTarget::new("Pages", "home")).unwrap();
//! assert_eq!(response.body, "home");
//!
//! let miss = dispatcher.run(&RouteTarget::new("Pages", "away")).unwrap_err();
//! assert_eq!(miss.to_string(), "action not found");
//! ```

pub mod action;
pub mod ajax;
pub mod dispatcher;
pub mod routing;
pub mod target;

// Re-exports
pub use action::{Action, HandlerRegistry};
pub use ajax::{AjaxError, AjaxMethod, AjaxMethodRouter, AjaxResult, CommandEnvelope};
pub use dispatcher::Dispatcher;
pub use routing::{HandlerRef, RouteNotFound, RoutingTable, RoutingTableBuilder, RoutingTableError};
pub use target::RouteTarget;

use thiserror::Error;

/// Errors that can occur while dispatching a navigational request
#[derive(Debug, Error)]
pub enum DispatchError {
	/// Controller or action missing from the routing table
	#[error(transparent)]
	NotFound(#[from] RouteNotFound),

	/// The resolved action failed
	#[error("View error: {0}")]
	View(#[from] landing_core::Error),
}

impl DispatchError {
	/// Converts the failure into the response the client receives.
	///
	/// Route misses become `404` with a plain-text reason; action failures
	/// become a bare `500`.
	///
	/// # Examples
	///
	/// ```
	/// use landing_dispatch::{DispatchError, RouteNotFound};
	/// use hyper::StatusCode;
	///
	/// let response = DispatchError::from(RouteNotFound::Controller("x".into())).into_response();
	/// assert_eq!(response.status, StatusCode::NOT_FOUND);
	/// assert_eq!(response.body, "controller not found");
	/// ```
	pub fn into_response(self) -> landing_core::Response {
		match self {
			Self::NotFound(miss) => landing_core::Response::not_found().with_text(miss.to_string()),
			Self::View(_) => landing_core::Response::internal_server_error(),
		}
	}
}
