use bytes::Bytes;
use hyper::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use hyper::{HeaderMap, StatusCode};
use serde::Serialize;

use crate::exception::Result;

/// HTTP Response representation
#[derive(Debug, Clone)]
pub struct Response {
	pub status: StatusCode,
	pub headers: HeaderMap,
	pub body: Bytes,
}

impl Response {
	/// Create a new Response with the given status code
	///
	/// # Examples
	///
	/// ```
	/// use landing_core::Response;
	/// use hyper::StatusCode;
	///
	/// let response = Response::new(StatusCode::OK);
	/// assert_eq!(response.status, StatusCode::OK);
	/// assert!(response.body.is_empty());
	/// ```
	pub fn new(status: StatusCode) -> Self {
		Self {
			status,
			headers: HeaderMap::new(),
			body: Bytes::new(),
		}
	}
	/// Create a Response with HTTP 200 OK status
	pub fn ok() -> Self {
		Self::new(StatusCode::OK)
	}
	/// Create a Response with HTTP 404 Not Found status
	pub fn not_found() -> Self {
		Self::new(StatusCode::NOT_FOUND)
	}
	/// Create a Response with HTTP 500 Internal Server Error status
	pub fn internal_server_error() -> Self {
		Self::new(StatusCode::INTERNAL_SERVER_ERROR)
	}
	/// Set the response body
	///
	/// # Examples
	///
	/// ```
	/// use landing_core::Response;
	/// use bytes::Bytes;
	///
	/// let response = Response::ok().with_body("Hello, World!");
	/// assert_eq!(response.body, Bytes::from("Hello, World!"));
	/// ```
	pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}
	/// Add a custom header to the response
	///
	/// Invalid header names or values are skipped.
	pub fn with_header(mut self, name: &str, value: &str) -> Self {
		if let (Ok(name), Ok(value)) = (
			HeaderName::from_bytes(name.as_bytes()),
			HeaderValue::from_str(value),
		) {
			self.headers.insert(name, value);
		}
		self
	}
	/// Set a plain-text body with `text/plain; charset=utf-8`
	///
	/// # Examples
	///
	/// ```
	/// use landing_core::Response;
	///
	/// let response = Response::not_found().with_text("controller not found");
	/// assert_eq!(
	///     response.headers.get("content-type").unwrap().to_str().unwrap(),
	///     "text/plain; charset=utf-8"
	/// );
	/// ```
	pub fn with_text(mut self, text: impl Into<String>) -> Self {
		self.body = Bytes::from(text.into());
		self.headers.insert(
			CONTENT_TYPE,
			HeaderValue::from_static("text/plain; charset=utf-8"),
		);
		self
	}
	/// Set an HTML body with `text/html; charset=utf-8`
	pub fn with_html(mut self, html: impl Into<String>) -> Self {
		self.body = Bytes::from(html.into());
		self.headers.insert(
			CONTENT_TYPE,
			HeaderValue::from_static("text/html; charset=utf-8"),
		);
		self
	}
	/// Set the response body to JSON and add appropriate Content-Type header
	///
	/// # Examples
	///
	/// ```
	/// use landing_core::Response;
	/// use serde_json::json;
	///
	/// let data = json!({"error": "Empty request!"});
	/// let response = Response::ok().with_json(&data).unwrap();
	///
	/// assert_eq!(
	///     response.headers.get("content-type").unwrap().to_str().unwrap(),
	///     "application/json"
	/// );
	/// ```
	pub fn with_json<T: Serialize>(mut self, data: &T) -> Result<Self> {
		let json = serde_json::to_vec(data)?;
		self.body = Bytes::from(json);
		self.headers
			.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
		Ok(self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Response::ok(), StatusCode::OK)]
	#[case(Response::not_found(), StatusCode::NOT_FOUND)]
	#[case(Response::internal_server_error(), StatusCode::INTERNAL_SERVER_ERROR)]
	fn test_status_shortcuts(#[case] response: Response, #[case] expected: StatusCode) {
		assert_eq!(response.status, expected);
	}

	#[rstest]
	fn test_with_json_sets_body_and_content_type() {
		// Arrange
		let data = serde_json::json!({"result": true, "error": {}});

		// Act
		let response = Response::ok().with_json(&data).unwrap();

		// Assert
		assert_eq!(
			response.headers.get(CONTENT_TYPE).unwrap(),
			"application/json"
		);
		let decoded: serde_json::Value = serde_json::from_slice(&response.body).unwrap();
		assert_eq!(decoded, data);
	}

	#[rstest]
	fn test_with_header_skips_invalid_name() {
		let response = Response::ok().with_header("bad header", "value");

		assert!(response.headers.is_empty());
	}

	#[rstest]
	fn test_with_html_sets_content_type() {
		let response = Response::ok().with_html("<p>hi</p>");

		assert_eq!(
			response.headers.get(CONTENT_TYPE).unwrap(),
			"text/html; charset=utf-8"
		);
		assert_eq!(response.body, Bytes::from("<p>hi</p>"));
	}
}
