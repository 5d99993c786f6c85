//! End-to-end behaviour of the default site through the `Handler` interface

use bytes::Bytes;
use hyper::header::CONTENT_TYPE;
use hyper::{Method, StatusCode};
use landing::{Application, Handler, Request, Response, Settings};
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use tempfile::TempDir;

struct Site {
	app: Application,
	_templates: TempDir,
}

#[fixture]
fn site() -> Site {
	let templates = tempfile::tempdir().unwrap();
	std::fs::write(templates.path().join("index.html"), "<h1>Landing</h1>").unwrap();
	std::fs::write(templates.path().join("debug.html"), "<pre>debug</pre>").unwrap();

	let mut settings = Settings::default();
	settings.template_dir = templates.path().to_path_buf();

	Site {
		app: Application::from_settings(&settings).unwrap(),
		_templates: templates,
	}
}

async fn get(app: &Application, path: &str) -> Response {
	let request = Request::builder().uri(path).build().unwrap();
	app.handle(request).await.unwrap()
}

async fn post(app: &Application, body: impl Into<Bytes>) -> (Response, Value) {
	let request = Request::builder()
		.method(Method::POST)
		.uri("/")
		.header("content-type", "application/json")
		.body(body)
		.build()
		.unwrap();
	let response = app.handle(request).await.unwrap();
	let json = serde_json::from_slice(&response.body).unwrap();
	(response, json)
}

fn content_type(response: &Response) -> &str {
	response.headers[CONTENT_TYPE].to_str().unwrap()
}

#[rstest]
#[case("/", "<h1>Landing</h1>")]
#[case("/Application/index", "<h1>Landing</h1>")]
#[case("/debug", "<pre>debug</pre>")]
#[case("/debug/index?verbose=1", "<pre>debug</pre>")]
#[tokio::test]
async fn test_pages(site: Site, #[case] path: &str, #[case] body: &str) {
	// Act
	let response = get(&site.app, path).await;

	// Assert
	assert_eq!(response.status, StatusCode::OK);
	assert_eq!(response.body, body);
	assert_eq!(content_type(&response), "text/html; charset=utf-8");
}

#[rstest]
#[tokio::test]
async fn test_robots_txt(site: Site) {
	let response = get(&site.app, "/robots.txt").await;

	assert_eq!(response.status, StatusCode::OK);
	assert_eq!(response.body, "User-Agent: *\nDisallow: /");
	assert_eq!(content_type(&response), "text/plain; charset=utf-8");
}

#[rstest]
#[case("/missing", "controller not found")]
#[case("/Application/missing", "action not found")]
#[case("/robots.txt/other", "action not found")]
#[case("/application", "controller not found")]
#[tokio::test]
async fn test_route_misses(site: Site, #[case] path: &str, #[case] body: &str) {
	// Act
	let response = get(&site.app, path).await;

	// Assert
	assert_eq!(response.status, StatusCode::NOT_FOUND);
	assert_eq!(response.body, body);
}

#[rstest]
#[case("", json!({"error": "Empty request!"}))]
#[case("not json", json!({"error": "Empty request!"}))]
#[case("{}", json!({"error": "Empty request!"}))]
#[case(r#"{"data": []}"#, json!({"error": "Unspecified method!"}))]
#[case(r#"{"method": "deleteEverything"}"#, json!({"error": "Unknown method!"}))]
#[tokio::test]
async fn test_command_errors(site: Site, #[case] body: &'static str, #[case] expected: Value) {
	// Act
	let (response, json) = post(&site.app, body).await;

	// Assert
	assert_eq!(response.status, StatusCode::OK);
	assert_eq!(content_type(&response), "application/json");
	assert_eq!(json, expected);
}

#[rstest]
#[tokio::test]
async fn test_form_submit_valid(site: Site) {
	// Arrange
	let body = json!({
		"method": "formSubmit",
		"data": [
			{"name": "name", "value": "John"},
			{"name": "phone", "value": "+380(67)123-45-67"},
			{"name": "email", "value": "john.doe@example.com"},
			{"name": "comment", "value": "Call me after six."}
		]
	});

	// Act
	let (_, json) = post(&site.app, body.to_string()).await;

	// Assert
	assert_eq!(json, json!({"result": true, "error": {}}));
}

#[rstest]
#[tokio::test]
async fn test_form_submit_collects_every_error(site: Site) {
	// Arrange
	let body = json!({
		"method": "formSubmit",
		"data": [
			{"name": "name", "value": "J0hn"},
			{"name": "phone", "value": "12345"},
			{"name": "email", "value": "john@"},
			{"name": "comment", "value": "<b>hi</b>"}
		]
	});

	// Act
	let (_, json) = post(&site.app, body.to_string()).await;

	// Assert
	assert_eq!(
		json,
		json!({
			"result": false,
			"error": {
				"name": "Name has digits!",
				"phone": "Does not meet standards!",
				"email": "Invalid email!",
				"comment": "Has tags!"
			}
		})
	);
}

#[rstest]
#[tokio::test]
async fn test_missing_fields_respect_settings() {
	// Arrange
	let templates = tempfile::tempdir().unwrap();
	let mut settings = Settings::default();
	settings.template_dir = templates.path().to_path_buf();
	settings.treat_missing_as_empty = true;
	let app = Application::from_settings(&settings).unwrap();
	let body = json!({"method": "formSubmit", "data": [{"name": "name", "value": "John"}]});

	// Act
	let (_, json) = post(&app, body.to_string()).await;

	// Assert
	assert_eq!(json["result"], false);
	assert_eq!(json["error"]["phone"], "Is Empty!");
	assert!(json["error"].get("email").is_none());
	assert!(json["error"].get("name").is_none());
}

#[rstest]
#[tokio::test]
async fn test_missing_template_is_500() {
	let templates = tempfile::tempdir().unwrap();
	let mut settings = Settings::default();
	settings.template_dir = templates.path().to_path_buf();
	let app = Application::from_settings(&settings).unwrap();

	let response = get(&app, "/").await;

	assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
}
