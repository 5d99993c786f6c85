use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::Service;
use hyper_util::rt::TokioIo;
use hyper_util::server::graceful::GracefulShutdown;
use landing_core::{Handler, Request, Response};
use std::future::Future;
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio::net::TcpListener;

/// Time in-flight connections get to finish once shutdown starts
pub const DEFAULT_GRACE_PERIOD: Duration = Duration::from_secs(30);

/// Errors that stop the accept loop
#[derive(Debug, Error)]
pub enum ServerError {
	#[error("Failed to bind {addr}: {source}")]
	Bind {
		addr: SocketAddr,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to accept connection: {0}")]
	Accept(#[source] std::io::Error),
}

/// HTTP/1.1 server handing every request to a single [`Handler`]
pub struct HttpServer {
	handler: Arc<dyn Handler>,
	grace_period: Duration,
}

impl HttpServer {
	/// Create a new server with the given handler
	///
	/// # Examples
	///
	/// ```
	/// use std::sync::Arc;
	/// use landing_server::HttpServer;
	/// use landing_core::{Handler, Request, Response};
	///
	/// struct Hello;
	///
	/// #[async_trait::async_trait]
	/// impl Handler for Hello {
	///     async fn handle(&self, _request: Request) -> landing_core::Result<Response> {
	///         Ok(Response::ok().with_body("Hello"))
	///     }
	/// }
	///
	/// let server = HttpServer::new(Arc::new(Hello));
	/// ```
	pub fn new(handler: Arc<dyn Handler>) -> Self {
		Self {
			handler,
			grace_period: DEFAULT_GRACE_PERIOD,
		}
	}

	pub fn with_grace_period(mut self, grace_period: Duration) -> Self {
		self.grace_period = grace_period;
		self
	}

	/// Binds `addr` and serves until the process is interrupted
	pub async fn listen(self, addr: SocketAddr) -> Result<(), ServerError> {
		self.listen_with_shutdown(addr, shutdown_signal()).await
	}

	/// Binds `addr` and serves until `signal` resolves
	pub async fn listen_with_shutdown<F>(self, addr: SocketAddr, signal: F) -> Result<(), ServerError>
	where
		F: Future<Output = ()> + Send,
	{
		let listener = TcpListener::bind(addr)
			.await
			.map_err(|source| ServerError::Bind { addr, source })?;
		self.serve(listener, signal).await
	}

	/// Serves connections from an already bound listener until `signal`
	/// resolves, then waits up to the grace period for open connections.
	pub async fn serve<F>(self, listener: TcpListener, signal: F) -> Result<(), ServerError>
	where
		F: Future<Output = ()> + Send,
	{
		if let Ok(addr) = listener.local_addr() {
			tracing::info!(%addr, "server listening");
		}

		let graceful = GracefulShutdown::new();
		tokio::pin!(signal);

		loop {
			tokio::select! {
				result = listener.accept() => {
					let (stream, remote_addr) = result.map_err(ServerError::Accept)?;
					let service = RequestService {
						handler: self.handler.clone(),
						remote_addr,
					};
					let connection = http1::Builder::new().serve_connection(TokioIo::new(stream), service);
					let connection = graceful.watch(connection);

					tokio::spawn(async move {
						if let Err(error) = connection.await {
							tracing::debug!(%remote_addr, %error, "connection closed with error");
						}
					});
				}
				_ = &mut signal => {
					tracing::info!("shutdown signal received, stopping server");
					break;
				}
			}
		}

		drop(listener);
		if tokio::time::timeout(self.grace_period, graceful.shutdown()).await.is_err() {
			tracing::warn!(grace_period = ?self.grace_period, "connections still open after grace period");
		}

		Ok(())
	}
}

/// Resolves on Ctrl-C
pub async fn shutdown_signal() {
	if let Err(error) = tokio::signal::ctrl_c().await {
		tracing::error!(%error, "failed to listen for Ctrl-C");
		std::future::pending::<()>().await;
	}
}

/// Service implementation for hyper
struct RequestService {
	handler: Arc<dyn Handler>,
	remote_addr: SocketAddr,
}

impl Service<hyper::Request<Incoming>> for RequestService {
	type Response = hyper::Response<Full<Bytes>>;
	type Error = hyper::Error;
	type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send + 'static>>;

	fn call(&self, req: hyper::Request<Incoming>) -> Self::Future {
		let handler = self.handler.clone();
		let remote_addr = self.remote_addr;

		Box::pin(async move {
			let (parts, body) = req.into_parts();
			let body = body.collect().await?.to_bytes();

			let mut request = Request::new(parts.method, parts.uri, parts.version, parts.headers, body);
			request.remote_addr = Some(remote_addr);

			let method = request.method.clone();
			let path = request.path().to_string();
			let response = handler.handle(request).await.unwrap_or_else(|error| {
				tracing::error!(%method, %path, %error, "handler failed");
				Response::internal_server_error()
			});
			tracing::info!(%method, %path, status = response.status.as_u16(), "request handled");

			Ok(into_hyper(response))
		})
	}
}

fn into_hyper(response: Response) -> hyper::Response<Full<Bytes>> {
	let mut converted = hyper::Response::new(Full::new(response.body));
	*converted.status_mut() = response.status;
	*converted.headers_mut() = response.headers;
	converted
}
