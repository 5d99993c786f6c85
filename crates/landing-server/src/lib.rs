//! HTTP server front for Landing.
//!
//! Accepts HTTP/1.1 connections with hyper, converts each request into a
//! [`landing_core::Request`] and hands it to one [`landing_core::Handler`].
//! Handler failures are answered with a bare `500`.
//!
//! ## Basic Usage
//!
//! ```rust,ignore
//! use landing_server::HttpServer;
//! use std::sync::Arc;
//!
//! let server = HttpServer::new(Arc::new(MyHandler));
//!
//! // Runs until Ctrl-C, then drains open connections
//! server.listen("127.0.0.1:8000".parse()?).await?;
//! ```

pub mod http;

pub use http::{DEFAULT_GRACE_PERIOD, HttpServer, ServerError, shutdown_signal};
