//! User profile entity and the inputs used to create or replace it.
//!
//! A profile is a flat record: a store-assigned integer identifier plus the
//! username, email and phone supplied by the caller. Email and phone are meant
//! to be unique among profiles, but only the create path checks this (see
//! [`crate::domain::ProfileService`]).

use std::fmt;
use std::num::ParseIntError;

use super::Error;

/// Message returned when the latest profile cannot be read.
pub const READ_FAILED_MESSAGE: &str = "Failed to read profile";
/// Message returned when an update or create cannot be completed.
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save profile";
/// Message returned when a new profile reuses an existing email or phone.
pub const DUPLICATE_USER_MESSAGE: &str = "User already exists";
/// Message returned when a delete targets a missing profile.
pub const NOT_FOUND_MESSAGE: &str = "User does not exist";
/// Confirmation returned after a profile has been deleted.
pub const DELETED_MESSAGE: &str = "User profile deleted";

/// Build the error returned when a delete fails for infrastructure reasons.
///
/// The requested identifier is echoed exactly as the caller supplied it.
///
/// # Examples
/// ```
/// use profile_backend::domain::{ErrorCode, delete_failed_error};
///
/// let err = delete_failed_error("abc");
/// assert_eq!(err.code(), ErrorCode::InternalError);
/// assert_eq!(err.message(), "Failed to delete profile id=abc");
/// ```
pub fn delete_failed_error(id: impl fmt::Display) -> Error {
    Error::internal(format!("Failed to delete profile id={id}"))
}

/// Store-assigned profile identifier.
///
/// Identifiers are assigned by the persistence collaborator on creation and
/// never change afterwards. The wrapper does not reject non-positive values:
/// such identifiers simply never match a stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProfileId(i32);

impl ProfileId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Access the raw integer value.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }

    /// Parse the leading integer of a path segment.
    ///
    /// Leading whitespace and a sign are accepted and anything after the
    /// first non-digit is ignored, so `"12abc"` names profile 12. A segment
    /// with no leading digits, or one outside the key range, is an error.
    ///
    /// # Examples
    /// ```
    /// use profile_backend::domain::ProfileId;
    ///
    /// assert_eq!(ProfileId::parse_leading("12abc").map(ProfileId::get), Ok(12));
    /// assert!(ProfileId::parse_leading("abc").is_err());
    /// ```
    pub fn parse_leading(raw: &str) -> Result<Self, ParseIntError> {
        let trimmed = raw.trim_start();
        let sign_len = usize::from(trimmed.starts_with(['+', '-']));
        let digit_len = trimmed
            .bytes()
            .skip(sign_len)
            .take_while(u8::is_ascii_digit)
            .count();
        let number = trimmed.get(..sign_len + digit_len).unwrap_or_default();
        number.parse::<i32>().map(Self)
    }
}

impl TryFrom<i64> for ProfileId {
    type Error = std::num::TryFromIntError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        i32::try_from(value).map(Self)
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fields supplied with a save request, any of which may be missing.
///
/// An update writes only the fields that are present. A create needs all
/// three; see [`ProfileFields::into_draft`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileFields {
    pub username: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ProfileFields {
    /// True when no field was supplied.
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.phone.is_none()
    }

    /// Complete draft for a new profile.
    ///
    /// # Errors
    ///
    /// Returns the name of the first missing field.
    ///
    /// # Examples
    /// ```
    /// use profile_backend::domain::ProfileFields;
    ///
    /// let fields = ProfileFields {
    ///     username: Some("ada".to_owned()),
    ///     email: None,
    ///     phone: Some("555-0100".to_owned()),
    /// };
    /// assert_eq!(fields.into_draft(), Err("email"));
    /// ```
    pub fn into_draft(self) -> Result<ProfileDraft, &'static str> {
        Ok(ProfileDraft {
            username: self.username.ok_or("username")?,
            email: self.email.ok_or("email")?,
            phone: self.phone.ok_or("phone")?,
        })
    }

    /// Overwrite the present fields of `profile`, leaving the rest untouched.
    pub fn apply_to(&self, profile: &mut UserProfile) {
        if let Some(username) = &self.username {
            profile.username.clone_from(username);
        }
        if let Some(email) = &self.email {
            profile.email.clone_from(email);
        }
        if let Some(phone) = &self.phone {
            profile.phone.clone_from(phone);
        }
    }
}

impl From<ProfileDraft> for ProfileFields {
    fn from(draft: ProfileDraft) -> Self {
        Self {
            username: Some(draft.username),
            email: Some(draft.email),
            phone: Some(draft.phone),
        }
    }
}

/// Complete set of fields for a new profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDraft {
    pub username: String,
    pub email: String,
    pub phone: String,
}

impl ProfileDraft {
    /// Bundle the three profile fields.
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Materialise the draft as a stored record with the given identifier.
    pub fn into_profile(self, id: ProfileId) -> UserProfile {
        UserProfile {
            id,
            username: self.username,
            email: self.email,
            phone: self.phone,
        }
    }
}

/// Persisted user profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: ProfileId,
    pub username: String,
    pub email: String,
    pub phone: String,
}

impl UserProfile {
    /// True when this profile shares the draft's email or phone.
    pub fn shares_contact_with(&self, email: &str, phone: &str) -> bool {
        self.email == email || self.phone == phone
    }
}
