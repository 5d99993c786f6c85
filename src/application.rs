//! Request entry point wiring routing, commands and rendering together

use crate::render::{PageRenderer, TemplateDirectory};
use async_trait::async_trait;
use landing_conf::Settings;
use landing_core::{Error, Handler, Request, Response, Result, TransportKind};
use landing_dispatch::{
	AjaxMethodRouter, CommandEnvelope, Dispatcher, HandlerRegistry, RouteTarget, RoutingTable, RoutingTableBuilder,
};
use landing_validators::{MissingFieldPolicy, ValidationEngine};
use std::sync::Arc;

/// Body of `/robots.txt`
pub const ROBOTS_TXT: &str = "User-Agent: *\nDisallow: /";

/// Registry holding the site's actions.
///
/// | name                       | response                  |
/// |----------------------------|---------------------------|
/// | `Application/actionIndex`  | page `index`              |
/// | `Application/actionRobots` | [`ROBOTS_TXT`] as text    |
/// | `Application/actionDebug`  | page `debug`              |
pub fn default_registry(renderer: Arc<dyn PageRenderer>) -> HandlerRegistry {
	let index = renderer.clone();
	let debug = renderer;
	HandlerRegistry::new()
		.register("Application/actionIndex", move || Ok(Response::ok().with_html(index.render("index")?)))
		.register("Application/actionRobots", || Ok(Response::ok().with_text(ROBOTS_TXT)))
		.register("Application/actionDebug", move || Ok(Response::ok().with_html(debug.render("debug")?)))
}

/// Routes served by the site
pub fn default_routes() -> RoutingTableBuilder {
	RoutingTable::builder()
		.route("Application", "index", "Application/actionIndex")
		.route("robots.txt", "index", "Application/actionRobots")
		.route("debug", "index", "Application/actionDebug")
}

/// The site's [`Handler`].
///
/// POST requests are commands answered with a JSON envelope; everything else
/// is routed by controller and action.
#[derive(Debug, Clone)]
pub struct Application {
	dispatcher: Dispatcher,
	commands: AjaxMethodRouter,
}

impl Application {
	pub fn new(dispatcher: Dispatcher, commands: AjaxMethodRouter) -> Self {
		Self { dispatcher, commands }
	}

	/// Builds the default site around `renderer`
	///
	/// # Examples
	///
	/// ```
	/// use landing::Application;
	/// use landing::render::TemplateDirectory;
	/// use landing_validators::ValidationEngine;
	/// use std::sync::Arc;
	///
	/// let app = Application::with_renderer(
	///     Arc::new(TemplateDirectory::new("templates")),
	///     ValidationEngine::contact_form(),
	/// )
	/// .unwrap();
	/// assert_eq!(app.dispatcher().table().len(), 3);
	/// ```
	pub fn with_renderer(renderer: Arc<dyn PageRenderer>, engine: ValidationEngine) -> Result<Self> {
		let table = default_routes()
			.build(&default_registry(renderer))
			.map_err(|error| Error::Configuration(error.to_string()))?;

		Ok(Self::new(
			Dispatcher::new(Arc::new(table)),
			AjaxMethodRouter::new(engine),
		))
	}

	/// Builds the default site from loaded settings
	pub fn from_settings(settings: &Settings) -> Result<Self> {
		let policy = if settings.treat_missing_as_empty {
			MissingFieldPolicy::TreatAsEmpty
		} else {
			MissingFieldPolicy::Ignore
		};
		let engine = ValidationEngine::contact_form().with_missing_field_policy(policy);
		let renderer = Arc::new(TemplateDirectory::new(&settings.template_dir));

		Self::with_renderer(renderer, engine)
	}

	pub fn dispatcher(&self) -> &Dispatcher {
		&self.dispatcher
	}

	/// Routes a navigational request by its path
	pub fn handle_navigational(&self, request: &Request) -> Response {
		self.dispatcher.dispatch(&RouteTarget::from_path(request.path()))
	}

	/// Answers a command request with its JSON result envelope
	pub fn handle_command(&self, request: &Request) -> Result<Response> {
		let envelope = CommandEnvelope::from_body(&request.body);
		let result = self.commands.handle_command(&envelope);
		if let Some(error) = result.error() {
			tracing::debug!(%error, "command rejected");
		}
		Response::ok().with_json(&result)
	}
}

#[async_trait]
impl Handler for Application {
	async fn handle(&self, request: Request) -> Result<Response> {
		match request.transport_kind() {
			TransportKind::Command => self.handle_command(&request),
			TransportKind::Navigational => Ok(self.handle_navigational(&request)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use hyper::{Method, StatusCode};
	use rstest::{fixture, rstest};

	struct FixedPages;

	impl PageRenderer for FixedPages {
		fn render(&self, name: &str) -> Result<String> {
			match name {
				"index" => Ok("<p>index</p>".to_string()),
				_ => Err(Error::TemplateNotFound(name.to_string())),
			}
		}
	}

	#[fixture]
	fn app() -> Application {
		Application::with_renderer(Arc::new(FixedPages), ValidationEngine::contact_form()).unwrap()
	}

	fn get(path: &str) -> Request {
		Request::builder().uri(path).build().unwrap()
	}

	#[rstest]
	fn test_default_table_has_all_routes(app: Application) {
		assert_eq!(
			app.dispatcher().table().routes(),
			[
				("Application", "index", "Application/actionIndex"),
				("debug", "index", "Application/actionDebug"),
				("robots.txt", "index", "Application/actionRobots"),
			]
		);
	}

	#[rstest]
	fn test_index_renders_page(app: Application) {
		// Act
		let response = app.handle_navigational(&get("/"));

		// Assert
		assert_eq!(response.status, StatusCode::OK);
		assert_eq!(response.body, "<p>index</p>");
	}

	#[rstest]
	fn test_robots(app: Application) {
		let response = app.handle_navigational(&get("/robots.txt"));

		assert_eq!(response.status, StatusCode::OK);
		assert_eq!(response.body, "User-Agent: *\nDisallow: /");
	}

	#[rstest]
	fn test_missing_page_is_500(app: Application) {
		let response = app.handle_navigational(&get("/debug"));

		assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
	}

	#[rstest]
	fn test_empty_post_is_empty_request(app: Application) {
		// Arrange
		let request = Request::builder().method(Method::POST).uri("/").build().unwrap();

		// Act
		let response = app.handle_command(&request).unwrap();

		// Assert
		assert_eq!(response.status, StatusCode::OK);
		assert_eq!(response.body, r#"{"error":"Empty request!"}"#);
	}

	#[rstest]
	fn test_registry_names() {
		let registry = default_registry(Arc::new(FixedPages));

		assert_eq!(
			registry.names().collect::<Vec<_>>(),
			[
				"Application/actionIndex",
				"Application/actionRobots",
				"Application/actionDebug"
			]
		);
	}
}
