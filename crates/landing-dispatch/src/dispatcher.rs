//! Navigational request dispatcher

use crate::DispatchError;
use crate::routing::{HandlerRef, RouteNotFound, RoutingTable};
use crate::target::RouteTarget;
use landing_core::Response;
use std::sync::Arc;

/// Resolves a [`RouteTarget`] through the shared [`RoutingTable`] and runs
/// the bound action.
///
/// A miss is terminal: there is no fallback route and no partial match.
#[derive(Debug, Clone)]
pub struct Dispatcher {
	table: Arc<RoutingTable>,
}

impl Dispatcher {
	pub fn new(table: Arc<RoutingTable>) -> Self {
		Self { table }
	}

	pub fn table(&self) -> &RoutingTable {
		&self.table
	}

	pub fn resolve(&self, target: &RouteTarget) -> Result<&HandlerRef, RouteNotFound> {
		self.table.resolve(&target.controller, &target.action)
	}

	/// Resolves and invokes the handler for `target`
	pub fn run(&self, target: &RouteTarget) -> Result<Response, DispatchError> {
		let handler = self.resolve(target).inspect_err(|miss| {
			tracing::debug!(route = %target, reason = %miss, "route not found");
		})?;

		tracing::debug!(route = %target, handler = handler.name(), "dispatching");
		handler.invoke().map_err(|error| {
			tracing::error!(route = %target, handler = handler.name(), %error, "action failed");
			DispatchError::View(error)
		})
	}

	/// Like [`run`](Self::run), with failures already turned into responses
	pub fn dispatch(&self, target: &RouteTarget) -> Response {
		self.run(target).unwrap_or_else(DispatchError::into_response)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::action::HandlerRegistry;
	use hyper::StatusCode;
	use rstest::{fixture, rstest};
	use std::sync::atomic::{AtomicUsize, Ordering};

	#[fixture]
	fn dispatcher() -> Dispatcher {
		let registry = HandlerRegistry::new()
			.register("Site/actionIndex", || Ok(Response::ok().with_body("index")))
			.register("Site/actionBroken", || {
				Err(landing_core::Error::TemplateNotFound("broken".to_string()))
			});
		let table = RoutingTable::builder()
			.route("Site", "index", "Site/actionIndex")
			.route("Site", "broken", "Site/actionBroken")
			.build(&registry)
			.unwrap();
		Dispatcher::new(Arc::new(table))
	}

	#[rstest]
	fn test_run_invokes_handler(dispatcher: Dispatcher) {
		// Act
		let response = dispatcher.run(&RouteTarget::new("Site", "index")).unwrap();

		// Assert
		assert_eq!(response.status, StatusCode::OK);
		assert_eq!(response.body, "index");
	}

	#[rstest]
	#[case("Nope", "index", "controller not found")]
	#[case("Site", "nope", "action not found")]
	fn test_dispatch_miss_is_404(
		dispatcher: Dispatcher,
		#[case] controller: &str,
		#[case] action: &str,
		#[case] body: &str,
	) {
		// Act
		let response = dispatcher.dispatch(&RouteTarget::new(controller, action));

		// Assert
		assert_eq!(response.status, StatusCode::NOT_FOUND);
		assert_eq!(response.body, body);
	}

	#[rstest]
	fn test_run_reports_handler_failure(dispatcher: Dispatcher) {
		let result = dispatcher.run(&RouteTarget::new("Site", "broken"));

		assert!(matches!(result, Err(DispatchError::View(_))));
	}

	#[rstest]
	fn test_dispatch_handler_failure_is_500(dispatcher: Dispatcher) {
		let response = dispatcher.dispatch(&RouteTarget::new("Site", "broken"));

		assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
	}

	#[rstest]
	fn test_miss_never_invokes_any_handler() {
		// Arrange
		let calls = Arc::new(AtomicUsize::new(0));
		let counter = calls.clone();
		let registry = HandlerRegistry::new().register("Site/actionIndex", move || {
			counter.fetch_add(1, Ordering::SeqCst);
			Ok(Response::ok())
		});
		let table = RoutingTable::builder()
			.route("Site", "index", "Site/actionIndex")
			.build(&registry)
			.unwrap();
		let dispatcher = Dispatcher::new(Arc::new(table));

		// Act
		let _ = dispatcher.dispatch(&RouteTarget::new("Site", "other"));
		let _ = dispatcher.dispatch(&RouteTarget::new("Other", "index"));

		// Assert
		assert_eq!(calls.load(Ordering::SeqCst), 0);
	}
}
