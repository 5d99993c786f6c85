use bytes::Bytes;
use hyper::header::{HeaderName, HeaderValue};
use hyper::{HeaderMap, Method, Uri, Version};
use std::net::SocketAddr;

use crate::exception::{Error, Result};

/// How a request reaches the application.
///
/// Command requests carry a structured body and are answered with a JSON
/// envelope; navigational requests are routed by controller and action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
	Navigational,
	Command,
}

/// HTTP Request representation
#[derive(Debug, Clone)]
pub struct Request {
	pub method: Method,
	pub uri: Uri,
	pub version: Version,
	pub headers: HeaderMap,
	pub body: Bytes,
	pub remote_addr: Option<SocketAddr>,
}

impl Request {
	/// Create a new Request from its parts
	///
	/// # Examples
	///
	/// ```
	/// use landing_core::Request;
	/// use hyper::{HeaderMap, Method, Uri, Version};
	/// use bytes::Bytes;
	///
	/// let request = Request::new(
	///     Method::GET,
	///     Uri::from_static("/"),
	///     Version::HTTP_11,
	///     HeaderMap::new(),
	///     Bytes::new(),
	/// );
	/// assert_eq!(request.path(), "/");
	/// ```
	pub fn new(method: Method, uri: Uri, version: Version, headers: HeaderMap, body: Bytes) -> Self {
		Self {
			method,
			uri,
			version,
			headers,
			body,
			remote_addr: None,
		}
	}

	/// Start building a request
	///
	/// # Examples
	///
	/// ```
	/// use landing_core::Request;
	/// use hyper::Method;
	///
	/// let request = Request::builder()
	///     .method(Method::POST)
	///     .uri("/")
	///     .body(r#"{"method":"formSubmit"}"#)
	///     .build()
	///     .unwrap();
	/// assert_eq!(request.method, Method::POST);
	/// ```
	pub fn builder() -> RequestBuilder {
		RequestBuilder::default()
	}

	/// Returns the path component of the request URI
	pub fn path(&self) -> &str {
		self.uri.path()
	}

	/// Classify the request by transport.
	///
	/// Every `POST` is a command submission; everything else is navigation.
	///
	/// # Examples
	///
	/// ```
	/// use landing_core::{Request, TransportKind};
	/// use hyper::Method;
	///
	/// let get = Request::builder().uri("/").build().unwrap();
	/// assert_eq!(get.transport_kind(), TransportKind::Navigational);
	///
	/// let post = Request::builder().method(Method::POST).uri("/").build().unwrap();
	/// assert_eq!(post.transport_kind(), TransportKind::Command);
	/// ```
	pub fn transport_kind(&self) -> TransportKind {
		if self.method == Method::POST {
			TransportKind::Command
		} else {
			TransportKind::Navigational
		}
	}
}

/// Builder for [`Request`]
#[derive(Debug, Default)]
pub struct RequestBuilder {
	method: Option<Method>,
	uri: Option<String>,
	headers: HeaderMap,
	body: Bytes,
	remote_addr: Option<SocketAddr>,
	invalid_header: Option<String>,
}

impl RequestBuilder {
	pub fn method(mut self, method: Method) -> Self {
		self.method = Some(method);
		self
	}

	pub fn uri(mut self, uri: impl Into<String>) -> Self {
		self.uri = Some(uri.into());
		self
	}

	pub fn header(mut self, name: &str, value: &str) -> Self {
		match (
			HeaderName::from_bytes(name.as_bytes()),
			HeaderValue::from_str(value),
		) {
			(Ok(name), Ok(value)) => {
				self.headers.insert(name, value);
			}
			_ => self.invalid_header = Some(name.to_string()),
		}
		self
	}

	pub fn body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	pub fn remote_addr(mut self, addr: SocketAddr) -> Self {
		self.remote_addr = Some(addr);
		self
	}

	/// Build the request, defaulting to `GET /`
	pub fn build(self) -> Result<Request> {
		if let Some(name) = self.invalid_header {
			return Err(Error::InvalidRequest(format!("invalid header: {}", name)));
		}
		let uri = self
			.uri
			.as_deref()
			.unwrap_or("/")
			.parse::<Uri>()
			.map_err(|e| Error::InvalidRequest(e.to_string()))?;

		Ok(Request {
			method: self.method.unwrap_or(Method::GET),
			uri,
			version: Version::HTTP_11,
			headers: self.headers,
			body: self.body,
			remote_addr: self.remote_addr,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Method::GET, TransportKind::Navigational)]
	#[case(Method::HEAD, TransportKind::Navigational)]
	#[case(Method::PUT, TransportKind::Navigational)]
	#[case(Method::POST, TransportKind::Command)]
	fn test_transport_kind_follows_method(#[case] method: Method, #[case] expected: TransportKind) {
		// Arrange
		let request = Request::builder().method(method).uri("/").build().unwrap();

		// Act
		let kind = request.transport_kind();

		// Assert
		assert_eq!(kind, expected);
	}

	#[rstest]
	fn test_builder_defaults() {
		let request = Request::builder().build().unwrap();

		assert_eq!(request.method, Method::GET);
		assert_eq!(request.path(), "/");
		assert!(request.body.is_empty());
		assert!(request.remote_addr.is_none());
	}

	#[rstest]
	fn test_builder_path_ignores_query() {
		let request = Request::builder()
			.uri("/debug/index?x=1")
			.build()
			.unwrap();

		assert_eq!(request.path(), "/debug/index");
	}

	#[rstest]
	fn test_builder_rejects_invalid_uri() {
		let result = Request::builder().uri("http://[::1").build();

		assert!(matches!(result, Err(Error::InvalidRequest(_))));
	}

	#[rstest]
	fn test_builder_rejects_invalid_header() {
		let result = Request::builder().header("bad header", "x").build();

		assert!(matches!(result, Err(Error::InvalidRequest(_))));
	}
}
