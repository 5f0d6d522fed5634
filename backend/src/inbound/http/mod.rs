//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod profile;
pub mod state;

use actix_web::{Scope, web};

pub use error::ApiResult;

/// Build the profile routes mounted under `prefix`.
///
/// The scope carries its own JSON configuration so malformed bodies are
/// reported with the standard error envelope.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use profile_backend::inbound::http::profile_scope;
///
/// let _app = App::new().service(profile_scope("/api"));
/// ```
pub fn profile_scope(prefix: &str) -> Scope {
    web::scope(prefix)
        .app_data(web::JsonConfig::default().error_handler(error::json_error_handler))
        .service(profile::get_profile)
        .service(profile::save_profile)
        .service(profile::delete_profile)
}
