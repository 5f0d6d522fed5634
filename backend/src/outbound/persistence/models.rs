//! Diesel row types for `user_profiles`.
//!
//! These structs stay inside the persistence adapter; the domain only ever
//! sees [`UserProfile`].

use diesel::prelude::*;

use crate::domain::{ProfileDraft, ProfileFields, ProfileId, UserProfile};

use super::schema::user_profiles;

/// A row read back from `user_profiles`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = user_profiles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ProfileRow {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub phone: String,
}

impl From<ProfileRow> for UserProfile {
    fn from(row: ProfileRow) -> Self {
        Self {
            id: ProfileId::new(row.id),
            username: row.username,
            email: row.email,
            phone: row.phone,
        }
    }
}

/// Values for a fresh insert; the sequence fills `id`.
#[derive(Debug, Insertable)]
#[diesel(table_name = user_profiles)]
pub(crate) struct NewProfileRow<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
}

impl<'a> From<&'a ProfileDraft> for NewProfileRow<'a> {
    fn from(draft: &'a ProfileDraft) -> Self {
        Self {
            username: &draft.username,
            email: &draft.email,
            phone: &draft.phone,
        }
    }
}

/// Columns written by an update. `None` columns are left out of the `SET`
/// clause.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = user_profiles)]
pub(crate) struct ProfileChangeset<'a> {
    pub username: Option<&'a str>,
    pub email: Option<&'a str>,
    pub phone: Option<&'a str>,
}

impl<'a> From<&'a ProfileFields> for ProfileChangeset<'a> {
    fn from(fields: &'a ProfileFields) -> Self {
        Self {
            username: fields.username.as_deref(),
            email: fields.email.as_deref(),
            phone: fields.phone.as_deref(),
        }
    }
}
