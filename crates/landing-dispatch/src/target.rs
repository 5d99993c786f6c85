//! Controller/action pair extracted from a request path

use std::fmt;

/// Controller used when the path names none
pub const DEFAULT_CONTROLLER: &str = "Application";

/// Action used when the path names none
pub const DEFAULT_ACTION: &str = "index";

/// The `(controller, action)` key of a navigational request
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteTarget {
	pub controller: String,
	pub action: String,
}

impl RouteTarget {
	pub fn new(controller: impl Into<String>, action: impl Into<String>) -> Self {
		Self {
			controller: controller.into(),
			action: action.into(),
		}
	}

	/// Reads `/<controller>/<action>` from a URI path.
	///
	/// Empty segments are skipped, missing parts fall back to
	/// [`DEFAULT_CONTROLLER`] and [`DEFAULT_ACTION`], and segments after the
	/// action are ignored.
	///
	/// # Examples
	///
	/// ```
	/// use landing_dispatch::RouteTarget;
	///
	/// assert_eq!(RouteTarget::from_path("/"), RouteTarget::new("Application", "index"));
	/// assert_eq!(RouteTarget::from_path("/robots.txt"), RouteTarget::new("robots.txt", "index"));
	/// assert_eq!(RouteTarget::from_path("/debug/index/"), RouteTarget::new("debug", "index"));
	/// ```
	pub fn from_path(path: &str) -> Self {
		let mut segments = path.split('/').filter(|segment| !segment.is_empty());
		let controller = segments.next().unwrap_or(DEFAULT_CONTROLLER);
		let action = segments.next().unwrap_or(DEFAULT_ACTION);
		Self::new(controller, action)
	}
}

impl Default for RouteTarget {
	fn default() -> Self {
		Self::new(DEFAULT_CONTROLLER, DEFAULT_ACTION)
	}
}

impl fmt::Display for RouteTarget {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}/{}", self.controller, self.action)
	}
}
