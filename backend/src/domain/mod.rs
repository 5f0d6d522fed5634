//! Domain primitives, ports and services.
//!
//! Purpose: define the profile entity and the use-cases that read and mutate
//! it, independent of HTTP and of any storage engine.
//!
//! Public surface:
//! - `Error` / `ErrorCode`: transport-agnostic failure outcome.
//! - `UserProfile`, `ProfileId`, `ProfileDraft`, `ProfileFields`: the single
//!   persisted record and the inputs that create or change it.
//! - `ProfileService`: implements `ProfileQuery` and `ProfileCommand` over a
//!   `ProfileRepository`.
//! - `TraceId`: request correlation identifier.

pub mod error;
pub mod ports;
pub mod profile;
mod profile_service;
pub mod trace_id;

pub use self::error::{Error, ErrorCode};
pub use self::profile::{
    DELETED_MESSAGE, DUPLICATE_USER_MESSAGE, NOT_FOUND_MESSAGE, ProfileDraft, ProfileFields, ProfileId,
    READ_FAILED_MESSAGE, SAVE_FAILED_MESSAGE, UserProfile, delete_failed_error,
};
pub use self::profile_service::ProfileService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
