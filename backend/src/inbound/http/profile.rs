//! Profile HTTP handlers.
//!
//! ```text
//! GET    /api/profile
//! POST   /api/profile {"id":1,"username":"ada","email":"ada@example.com","phone":"555-0100"}
//! DELETE /api/profile/{id}
//! ```
//!
//! The `/api` prefix is the default mount point; deployments may change it.

use actix_web::{delete, get, post, web};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::ports::UpsertProfileRequest;
use crate::domain::{DELETED_MESSAGE, ProfileFields, ProfileId, UserProfile, delete_failed_error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::state::HttpState;

/// Request payload for `POST /profile`.
///
/// A positive `id` updates that profile and only the fields present are
/// written. An absent, null, zero or negative `id` creates a new one, which
/// needs every field.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct ProfileRequest {
    #[schema(example = 1)]
    pub id: Option<i64>,
    #[schema(example = "ada")]
    pub username: Option<String>,
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    #[schema(example = "555-0100")]
    pub phone: Option<String>,
}

impl From<ProfileRequest> for UpsertProfileRequest {
    fn from(value: ProfileRequest) -> Self {
        Self {
            id: value.id,
            fields: ProfileFields {
                username: value.username,
                email: value.email,
                phone: value.phone,
            },
        }
    }
}

/// Profile record as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProfileResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "ada")]
    pub username: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = "555-0100")]
    pub phone: String,
}

impl From<UserProfile> for ProfileResponse {
    fn from(value: UserProfile) -> Self {
        Self {
            id: value.id.get(),
            username: value.username,
            email: value.email,
            phone: value.phone,
        }
    }
}

/// Confirmation body returned by a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "User profile deleted")]
    pub message: String,
}

/// Fetch the most recently created profile.
#[utoipa::path(
    get,
    path = "/api/profile",
    description = "Return the profile with the largest id, or null when none exist.",
    responses(
        (status = 200, description = "Latest profile or null", body = ProfileResponse),
        (status = 500, description = "Failed to read profile", body = ErrorBody)
    ),
    tags = ["profile"],
    operation_id = "getProfile"
)]
#[get("/profile")]
pub async fn get_profile(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Option<ProfileResponse>>> {
    let profile = state.profile.latest_profile().await?;
    Ok(web::Json(profile.map(ProfileResponse::from)))
}

/// Update an existing profile or create a new one.
#[utoipa::path(
    post,
    path = "/api/profile",
    request_body = ProfileRequest,
    responses(
        (status = 200, description = "Saved profile", body = ProfileResponse),
        (status = 400, description = "Duplicate user or invalid body", body = ErrorBody),
        (status = 500, description = "Failed to save profile", body = ErrorBody)
    ),
    tags = ["profile"],
    operation_id = "saveProfile"
)]
#[post("/profile")]
pub async fn save_profile(
    state: web::Data<HttpState>,
    payload: web::Json<ProfileRequest>,
) -> ApiResult<web::Json<ProfileResponse>> {
    let request = UpsertProfileRequest::from(payload.into_inner());
    let profile = state.profile_commands.upsert_profile(request).await?;
    Ok(web::Json(ProfileResponse::from(profile)))
}

/// Delete a profile by identifier.
#[utoipa::path(
    delete,
    path = "/api/profile/{id}",
    params(("id" = String, Path, description = "Profile identifier")),
    responses(
        (status = 200, description = "Profile deleted", body = MessageResponse),
        (status = 404, description = "User does not exist", body = ErrorBody),
        (status = 500, description = "Failed to delete profile", body = ErrorBody)
    ),
    tags = ["profile"],
    operation_id = "deleteProfile"
)]
#[delete("/profile/{id}")]
pub async fn delete_profile(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageResponse>> {
    let raw_id = path.into_inner();
    let id = ProfileId::parse_leading(&raw_id).map_err(|err| {
        error!(error = %err, requested_id = %raw_id, "failed to delete profile");
        delete_failed_error(&raw_id)
    })?;

    state.profile_commands.delete_profile(id).await?;
    Ok(web::Json(MessageResponse {
        message: DELETED_MESSAGE.to_owned(),
    }))
}
