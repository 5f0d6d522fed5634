//! Process-local profile store.
//!
//! Backs the service when no database URL is configured and drives the
//! integration tests. Identifiers are assigned from a counter starting at 1
//! and are never reused, matching a database sequence.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::ports::{ProfileRepository, ProfileRepositoryError};
use crate::domain::{ProfileDraft, ProfileFields, ProfileId, UserProfile};

#[derive(Debug)]
struct StoreState {
    next_id: i32,
    rows: BTreeMap<ProfileId, UserProfile>,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }
}

/// In-memory implementation of [`ProfileRepository`].
///
/// Like the PostgreSQL table, it enforces no uniqueness on email or phone.
///
/// # Examples
/// ```
/// use profile_backend::domain::ProfileDraft;
/// use profile_backend::domain::ports::ProfileRepository;
/// use profile_backend::outbound::memory::InMemoryProfileRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = InMemoryProfileRepository::new();
/// let saved = repo
///     .create(&ProfileDraft::new("ada", "ada@example.com", "555-0100"))
///     .await
///     .unwrap();
/// assert_eq!(saved.id.get(), 1);
/// # });
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileRepository {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryProfileRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored profiles.
    pub async fn len(&self) -> usize {
        self.state.read().await.rows.len()
    }

    /// Whether the store holds no profiles.
    pub async fn is_empty(&self) -> bool {
        self.state.read().await.rows.is_empty()
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_latest(&self) -> Result<Option<UserProfile>, ProfileRepositoryError> {
        let state = self.state.read().await;
        Ok(state.rows.values().next_back().cloned())
    }

    async fn find_by_id(
        &self,
        id: ProfileId,
    ) -> Result<Option<UserProfile>, ProfileRepositoryError> {
        Ok(self.state.read().await.rows.get(&id).cloned())
    }

    async fn find_by_contact(
        &self,
        email: &str,
        phone: &str,
    ) -> Result<Option<UserProfile>, ProfileRepositoryError> {
        let state = self.state.read().await;
        Ok(state
            .rows
            .values()
            .find(|profile| profile.shares_contact_with(email, phone))
            .cloned())
    }

    async fn create(&self, draft: &ProfileDraft) -> Result<UserProfile, ProfileRepositoryError> {
        let mut state = self.state.write().await;
        let raw = state.next_id;
        state.next_id = raw
            .checked_add(1)
            .ok_or_else(|| ProfileRepositoryError::query("profile identifier sequence exhausted"))?;
        let profile = draft.clone().into_profile(ProfileId::new(raw));
        state.rows.insert(profile.id, profile.clone());
        Ok(profile)
    }

    async fn update(
        &self,
        id: ProfileId,
        fields: &ProfileFields,
    ) -> Result<UserProfile, ProfileRepositoryError> {
        let mut state = self.state.write().await;
        let slot = state
            .rows
            .get_mut(&id)
            .ok_or_else(|| ProfileRepositoryError::missing_record(id.get()))?;
        fields.apply_to(slot);
        Ok(slot.clone())
    }

    async fn delete(&self, id: ProfileId) -> Result<(), ProfileRepositoryError> {
        self.state
            .write()
            .await
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| ProfileRepositoryError::missing_record(id.get()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn repo() -> InMemoryProfileRepository {
        InMemoryProfileRepository::new()
    }

    fn draft(name: &str) -> ProfileDraft {
        ProfileDraft::new(name, format!("{name}@example.com"), format!("555-{name}"))
    }

    #[rstest]
    #[tokio::test]
    async fn empty_store_has_no_latest(repo: InMemoryProfileRepository) {
        assert_eq!(repo.find_latest().await.expect("read"), None);
        assert!(repo.is_empty().await);
    }

    #[rstest]
    #[tokio::test]
    async fn identifiers_increase_and_latest_tracks_largest(repo: InMemoryProfileRepository) {
        let first = repo.create(&draft("ada")).await.expect("create");
        let second = repo.create(&draft("bob")).await.expect("create");

        assert_eq!(first.id, ProfileId::new(1));
        assert_eq!(second.id, ProfileId::new(2));
        let latest = repo.find_latest().await.expect("read").expect("latest");
        assert_eq!(latest, second);
    }

    #[rstest]
    #[tokio::test]
    async fn deleted_identifiers_are_not_reused(repo: InMemoryProfileRepository) {
        let first = repo.create(&draft("ada")).await.expect("create");
        repo.delete(first.id).await.expect("delete");

        let next = repo.create(&draft("bob")).await.expect("create");

        assert_eq!(next.id, ProfileId::new(2));
        assert_eq!(repo.len().await, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn contact_lookup_matches_email_or_phone(repo: InMemoryProfileRepository) {
        let stored = repo.create(&draft("ada")).await.expect("create");

        let by_email = repo
            .find_by_contact("ada@example.com", "nope")
            .await
            .expect("lookup");
        let by_phone = repo
            .find_by_contact("nope", "555-ada")
            .await
            .expect("lookup");
        let neither = repo.find_by_contact("nope", "nope").await.expect("lookup");

        assert_eq!(by_email, Some(stored.clone()));
        assert_eq!(by_phone, Some(stored));
        assert_eq!(neither, None);
    }

    #[rstest]
    #[tokio::test]
    async fn update_replaces_fields_in_place(repo: InMemoryProfileRepository) {
        let stored = repo.create(&draft("ada")).await.expect("create");

        let updated = repo
            .update(stored.id, &draft("lovelace").into())
            .await
            .expect("update");

        assert_eq!(updated.id, stored.id);
        assert_eq!(updated.username, "lovelace");
        assert_eq!(updated.email, "lovelace@example.com");
        assert_eq!(
            repo.find_by_id(stored.id).await.expect("read"),
            Some(updated)
        );
    }

    #[rstest]
    #[tokio::test]
    async fn update_keeps_fields_that_were_not_supplied(repo: InMemoryProfileRepository) {
        let stored = repo.create(&draft("ada")).await.expect("create");
        let fields = ProfileFields {
            phone: Some("555-0199".to_owned()),
            ..ProfileFields::default()
        };

        let updated = repo.update(stored.id, &fields).await.expect("update");

        assert_eq!(updated.username, "ada");
        assert_eq!(updated.email, "ada@example.com");
        assert_eq!(updated.phone, "555-0199");
    }

    #[rstest]
    #[tokio::test]
    async fn update_and_delete_report_missing_records(repo: InMemoryProfileRepository) {
        let missing = ProfileId::new(42);

        let update = repo.update(missing, &draft("ada").into()).await;
        let delete = repo.delete(missing).await;

        assert_eq!(update, Err(ProfileRepositoryError::missing_record(42_i32)));
        assert_eq!(delete, Err(ProfileRepositoryError::missing_record(42_i32)));
    }
}
