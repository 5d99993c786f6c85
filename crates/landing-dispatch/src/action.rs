//! Zero-argument actions and the registry they are looked up in

use indexmap::IndexMap;
use landing_core::{Response, Result};
use std::fmt;
use std::sync::Arc;

/// A navigational handler.
///
/// Actions receive no request-specific arguments; anything they need is
/// captured when they are registered.
pub trait Action: Send + Sync {
	fn call(&self) -> Result<Response>;
}

impl<F> Action for F
where
	F: Fn() -> Result<Response> + Send + Sync,
{
	fn call(&self) -> Result<Response> {
		self()
	}
}

/// Named actions available to the routing table.
///
/// Names follow the `Owner/actionName` convention, e.g.
/// `Application/actionIndex`.
#[derive(Default, Clone)]
pub struct HandlerRegistry {
	actions: IndexMap<String, Arc<dyn Action>>,
}

impl HandlerRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a closure under `name`, replacing any previous action
	pub fn register<F>(self, name: impl Into<String>, action: F) -> Self
	where
		F: Fn() -> Result<Response> + Send + Sync + 'static,
	{
		self.register_action(name, action)
	}

	/// Registers any [`Action`] under `name`, replacing any previous one
	pub fn register_action(mut self, name: impl Into<String>, action: impl Action + 'static) -> Self {
		self.actions.insert(name.into(), Arc::new(action));
		self
	}

	pub fn get(&self, name: &str) -> Option<Arc<dyn Action>> {
		self.actions.get(name).cloned()
	}

	pub fn contains(&self, name: &str) -> bool {
		self.actions.contains_key(name)
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.actions.keys().map(String::as_str)
	}
}

impl fmt::Debug for HandlerRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("HandlerRegistry")
			.field("actions", &self.actions.keys().collect::<Vec<_>>())
			.finish()
	}
}
