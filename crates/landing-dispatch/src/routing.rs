//! Static controller → action → handler table

use crate::action::{Action, HandlerRegistry};
use landing_core::{Response, Result};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Routing miss.
///
/// The `Display` text is the plain-text 404 body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteNotFound {
	#[error("controller not found")]
	Controller(String),

	#[error("action not found")]
	Action { controller: String, action: String },
}

/// Errors raised while building a [`RoutingTable`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutingTableError {
	#[error("route {controller}/{action} refers to unknown handler '{handler}'")]
	UnresolvedHandler {
		controller: String,
		action: String,
		handler: String,
	},

	#[error("route {controller}/{action} is declared twice")]
	DuplicateRoute { controller: String, action: String },
}

/// A resolved handler together with the name it was registered under
#[derive(Clone)]
pub struct HandlerRef {
	name: String,
	action: Arc<dyn Action>,
}

impl HandlerRef {
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Invokes the handler
	pub fn invoke(&self) -> Result<Response> {
		self.action.call()
	}
}

impl fmt::Debug for HandlerRef {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("HandlerRef").field(&self.name).finish()
	}
}

/// Two-level lookup table built once at startup
#[derive(Debug, Default)]
pub struct RoutingTable {
	controllers: HashMap<String, HashMap<String, HandlerRef>>,
}

impl RoutingTable {
	pub fn builder() -> RoutingTableBuilder {
		RoutingTableBuilder::default()
	}

	/// Looks up the handler for `controller` / `action`.
	///
	/// The controller is checked first; an unknown controller is reported as
	/// such even when no controller has the requested action either.
	pub fn resolve(&self, controller: &str, action: &str) -> std::result::Result<&HandlerRef, RouteNotFound> {
		let actions = self
			.controllers
			.get(controller)
			.ok_or_else(|| RouteNotFound::Controller(controller.to_string()))?;

		actions.get(action).ok_or_else(|| RouteNotFound::Action {
			controller: controller.to_string(),
			action: action.to_string(),
		})
	}

	/// Every `(controller, action, handler name)` triple, sorted
	pub fn routes(&self) -> Vec<(&str, &str, &str)> {
		let mut routes: Vec<_> = self
			.controllers
			.iter()
			.flat_map(|(controller, actions)| {
				actions
					.iter()
					.map(move |(action, handler)| (controller.as_str(), action.as_str(), handler.name()))
			})
			.collect();
		routes.sort_unstable();
		routes
	}

	pub fn len(&self) -> usize {
		self.controllers.values().map(HashMap::len).sum()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// Collects route declarations and resolves them against a registry
#[derive(Debug, Default)]
pub struct RoutingTableBuilder {
	routes: Vec<(String, String, String)>,
}

impl RoutingTableBuilder {
	/// Declares that `controller` / `action` is served by the handler named
	/// `handler` (e.g. `Application/actionIndex`).
	pub fn route(
		mut self,
		controller: impl Into<String>,
		action: impl Into<String>,
		handler: impl Into<String>,
	) -> Self {
		self.routes
			.push((controller.into(), action.into(), handler.into()));
		self
	}

	/// Resolves every declared handler name and freezes the table.
	///
	/// Fails on the first route whose handler is not registered, or on a
	/// route declared twice.
	pub fn build(self, registry: &HandlerRegistry) -> std::result::Result<RoutingTable, RoutingTableError> {
		let mut controllers: HashMap<String, HashMap<String, HandlerRef>> = HashMap::new();

		for (controller, action, handler) in self.routes {
			let Some(resolved) = registry.get(&handler) else {
				return Err(RoutingTableError::UnresolvedHandler {
					controller,
					action,
					handler,
				});
			};

			let actions = controllers.entry(controller.clone()).or_default();
			if actions.contains_key(&action) {
				return Err(RoutingTableError::DuplicateRoute { controller, action });
			}
			actions.insert(
				action,
				HandlerRef {
					name: handler,
					action: resolved,
				},
			);
		}

		Ok(RoutingTable { controllers })
	}
}
