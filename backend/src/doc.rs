//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the profile endpoints and health probes together with
//! the request, response and error envelope schemas. Swagger UI serves it in
//! debug builds and `openapi-dump` prints it for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::profile::{MessageResponse, ProfileRequest, ProfileResponse};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Profile service API",
        description = "Create, update, read and delete user profiles."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::profile::get_profile,
        crate::inbound::http::profile::save_profile,
        crate::inbound::http::profile::delete_profile,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(ProfileRequest, ProfileResponse, MessageResponse, ErrorBody)),
    tags(
        (name = "profile", description = "User profile operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("/api/profile")]
    #[case("/api/profile/{id}")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn registers_path(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[rstest]
    #[case("ProfileRequest", &["id", "username", "email", "phone"])]
    #[case("ProfileResponse", &["id", "username", "email", "phone"])]
    #[case("MessageResponse", &["message"])]
    #[case("ErrorBody", &["error"])]
    fn schema_lists_fields(#[case] name: &str, #[case] fields: &[&str]) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get(name).expect("schema registered");
        for field in fields {
            assert_object_schema_has_field(schema, field);
        }
    }
}
