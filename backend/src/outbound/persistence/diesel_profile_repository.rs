//! PostgreSQL-backed `ProfileRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{ProfileRepository, ProfileRepositoryError};
use crate::domain::{ProfileDraft, ProfileFields, ProfileId, UserProfile};

use super::models::{NewProfileRow, ProfileChangeset, ProfileRow};
use super::pool::{DbPool, PoolError};
use super::schema::user_profiles;

/// Diesel-backed implementation of the `ProfileRepository` port.
///
/// Each method checks out one pooled connection and issues a single
/// statement. Uniqueness of email and phone is left to whatever constraints
/// the table carries; a violation surfaces as
/// [`ProfileRepositoryError::Duplicate`].
#[derive(Clone)]
pub struct DieselProfileRepository {
    pool: DbPool,
}

impl DieselProfileRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> ProfileRepositoryError {
    ProfileRepositoryError::connection(error.message())
}

fn map_diesel_error(error: diesel::result::Error) -> ProfileRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            ProfileRepositoryError::duplicate(info.message())
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            ProfileRepositoryError::connection("database connection error")
        }
        DieselError::NotFound => ProfileRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => ProfileRepositoryError::query("database query error"),
        _ => ProfileRepositoryError::query("database error"),
    }
}

#[async_trait]
impl ProfileRepository for DieselProfileRepository {
    async fn find_latest(&self) -> Result<Option<UserProfile>, ProfileRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ProfileRow> = user_profiles::table
            .order(user_profiles::id.desc())
            .select(ProfileRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(UserProfile::from))
    }

    async fn find_by_id(
        &self,
        id: ProfileId,
    ) -> Result<Option<UserProfile>, ProfileRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ProfileRow> = user_profiles::table
            .find(id.get())
            .select(ProfileRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(UserProfile::from))
    }

    async fn find_by_contact(
        &self,
        email: &str,
        phone: &str,
    ) -> Result<Option<UserProfile>, ProfileRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ProfileRow> = user_profiles::table
            .filter(
                user_profiles::email
                    .eq(email)
                    .or(user_profiles::phone.eq(phone)),
            )
            .order(user_profiles::id.asc())
            .select(ProfileRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(UserProfile::from))
    }

    async fn create(&self, draft: &ProfileDraft) -> Result<UserProfile, ProfileRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: ProfileRow = diesel::insert_into(user_profiles::table)
            .values(NewProfileRow::from(draft))
            .returning(ProfileRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row.into())
    }

    async fn update(
        &self,
        id: ProfileId,
        fields: &ProfileFields,
    ) -> Result<UserProfile, ProfileRepositoryError> {
        // Diesel refuses an empty `SET`; nothing to write still has to prove
        // the record exists.
        if fields.is_empty() {
            return self
                .find_by_id(id)
                .await?
                .ok_or_else(|| ProfileRepositoryError::missing_record(id.get()));
        }

        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<ProfileRow> = diesel::update(user_profiles::table.find(id.get()))
            .set(ProfileChangeset::from(fields))
            .returning(ProfileRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(UserProfile::from)
            .ok_or_else(|| ProfileRepositoryError::missing_record(id.get()))
    }

    async fn delete(&self, id: ProfileId) -> Result<(), ProfileRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(user_profiles::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        if removed == 0 {
            return Err(ProfileRepositoryError::missing_record(id.get()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Error mapping coverage. Query behaviour runs against PostgreSQL in
    //! `tests/diesel_profile_repository.rs`.
    use super::*;
    use diesel::result::{DatabaseErrorInformation, DatabaseErrorKind, Error as DieselError};
    use rstest::rstest;

    struct StubInfo(&'static str);

    impl DatabaseErrorInformation for StubInfo {
        fn message(&self) -> &str {
            self.0
        }
        fn details(&self) -> Option<&str> {
            None
        }
        fn hint(&self) -> Option<&str> {
            None
        }
        fn table_name(&self) -> Option<&str> {
            None
        }
        fn column_name(&self) -> Option<&str> {
            None
        }
        fn constraint_name(&self) -> Option<&str> {
            None
        }
        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    fn database_error(kind: DatabaseErrorKind, message: &'static str) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(StubInfo(message)))
    }

    #[rstest]
    fn pool_errors_map_to_connection() {
        let err = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(err, ProfileRepositoryError::connection("timed out"));
    }

    #[rstest]
    fn unique_violation_maps_to_duplicate() {
        let err = map_diesel_error(database_error(
            DatabaseErrorKind::UniqueViolation,
            "duplicate key value violates unique constraint",
        ));
        assert_eq!(
            err,
            ProfileRepositoryError::duplicate("duplicate key value violates unique constraint")
        );
    }

    #[rstest]
    fn closed_connection_maps_to_connection() {
        let err = map_diesel_error(database_error(DatabaseErrorKind::ClosedConnection, "gone"));
        assert_eq!(
            err,
            ProfileRepositoryError::connection("database connection error")
        );
    }

    #[rstest]
    #[case::not_found(DieselError::NotFound, "record not found")]
    #[case::other_database(
        database_error(DatabaseErrorKind::CheckViolation, "check failed"),
        "database error"
    )]
    #[case::rollback(DieselError::RollbackTransaction, "database error")]
    fn remaining_errors_map_to_query(#[case] error: DieselError, #[case] expected: &str) {
        assert_eq!(map_diesel_error(error), ProfileRepositoryError::query(expected));
    }
}
