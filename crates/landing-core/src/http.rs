//! Request and response values exchanged between the server front and the
//! application.

pub mod request;
pub mod response;

pub use request::{Request, RequestBuilder, TransportKind};
pub use response::Response;
