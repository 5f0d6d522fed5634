//! Profile service backend.
//!
//! The crate is split hexagonally: [`domain`] holds the profile rules and
//! ports, [`inbound`] adapts HTTP requests onto them and [`outbound`] provides
//! the PostgreSQL and in-memory stores.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
