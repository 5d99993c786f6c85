//! # Landing
//!
//! A small landing-site server: a handful of static pages plus one JSON
//! command endpoint validating the contact form.
//!
//! ## Crates
//!
//! - `landing-core`: request/response types, the [`Handler`] trait, errors
//! - `landing-validators`: field rules and the validation engine
//! - `landing-dispatch`: routing table, dispatcher and command router
//! - `landing-conf`: layered settings
//! - `landing-server`: hyper accept loop
//!
//! This crate wires them into an [`Application`] and ships the binary.
//!
//! ## Examples
//!
//! ```rust
//! use landing::{Application, Handler, Request};
//! use landing::render::TemplateDirectory;
//! use landing_validators::ValidationEngine;
//! use std::sync::Arc;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let app = Application::with_renderer(
//!     Arc::new(TemplateDirectory::new("templates")),
//!     ValidationEngine::contact_form(),
//! )
//! .unwrap();
//!
//! let request = Request::builder().uri("/robots.txt").build().unwrap();
//! let response = app.handle(request).await.unwrap();
//! assert_eq!(response.body, "User-Agent: *\nDisallow: /");
//! # }
//! ```

pub mod application;
pub mod render;
pub mod telemetry;

pub use application::{Application, ROBOTS_TXT, default_registry, default_routes};
pub use landing_conf::Settings;
pub use landing_core::{Error, Handler, Request, Response, Result};
pub use render::{PageRenderer, TemplateDirectory};
