//! Shared helpers for HTTP integration tests.

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, test, web};
use profile_backend::Trace;
use profile_backend::domain::ports::ProfileRepository;
use profile_backend::inbound::http::profile_scope;
use profile_backend::inbound::http::state::HttpState;
use serde_json::{Value, json};

/// Route prefix used by every integration suite.
pub const PREFIX: &str = "/api";

/// Build the profile routes over `repository`, wrapped in the trace middleware.
pub async fn init_app<R>(
    repository: Arc<R>,
) -> impl Service<actix_http::Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error>
where
    R: ProfileRepository + 'static,
{
    test::init_service(
        App::new()
            .app_data(web::Data::new(HttpState::from_repository(repository)))
            .wrap(Trace)
            .service(profile_scope(PREFIX)),
    )
    .await
}

/// JSON payload for `POST /profile` without an `id`.
pub fn create_payload(username: &str, email: &str, phone: &str) -> Value {
    json!({ "username": username, "email": email, "phone": phone })
}
