//! Generic remote-backed collection store.
//!
//! Resources and goals are structurally identical CRUD-over-HTTP caches, so
//! a single parametric store covers both. Each mutation round-trips through
//! the remote endpoint before the local list is touched; there is no
//! optimistic mutation and no rollback to implement.

use crate::error::{DevdashError, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// A record carrying a server-assigned identity.
///
/// The client never generates an id; every record in a collection came from
/// a server response.
pub trait Identified {
    /// The server-assigned id of this record.
    fn id(&self) -> i64;

    /// The entity name used in error messages ("resource", "goal").
    fn entity_type() -> &'static str;
}

/// The four CRUD endpoints of one remote collection.
///
/// Implemented per domain by the HTTP gateway; implemented by in-memory
/// fakes in tests.
#[async_trait]
pub trait CollectionApi: Send + Sync {
    type Record: Identified + Clone + Send + Sync;
    type Draft: Send + Sync;

    /// Fetches the full collection in server order.
    async fn list(&self) -> Result<Vec<Self::Record>>;

    /// Creates a record from a draft; returns the server's record,
    /// including its assigned id and timestamp.
    async fn create(&self, draft: &Self::Draft) -> Result<Self::Record>;

    /// Updates the record with the given id; returns the server's
    /// authoritative record.
    async fn update(&self, id: i64, draft: &Self::Draft) -> Result<Self::Record>;

    /// Deletes the record with the given id.
    async fn remove(&self, id: i64) -> Result<()>;
}

/// In-memory ordered list of one domain's records for the current session.
///
/// Holds server state only between round-trips: after any settled
/// operation, the list is either the pre-call state (on failure) or
/// reflects exactly one successful server mutation. Local order after a
/// create is `[new, ...fetch order]`; the next fetch replaces it with
/// server order.
pub struct CollectionStore<A: CollectionApi> {
    api: Arc<A>,
    records: Vec<A::Record>,
    loading: bool,
    fetch_error: Option<String>,
}

impl<A: CollectionApi> CollectionStore<A> {
    /// Creates an empty store backed by the given endpoint set.
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            records: Vec::new(),
            loading: false,
            fetch_error: None,
        }
    }

    /// The current list, in local order.
    pub fn records(&self) -> &[A::Record] {
        &self.records
    }

    /// True while a fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The user-facing message from the last failed fetch, if any.
    ///
    /// Only `fetch_all` retains its error across calls; create, update, and
    /// remove raise theirs to the caller instead.
    pub fn fetch_error(&self) -> Option<&str> {
        self.fetch_error.as_deref()
    }

    /// Replaces the list with the server's current collection.
    ///
    /// On failure the previous list is left intact and the failure is
    /// recorded in [`fetch_error`](Self::fetch_error); it is not raised.
    pub async fn fetch_all(&mut self) {
        self.loading = true;
        match self.api.list().await {
            Ok(records) => {
                self.records = records;
                self.fetch_error = None;
            }
            Err(err) => {
                let fallback = format!("Failed to fetch {}s", A::Record::entity_type());
                self.fetch_error = Some(err.user_message(&fallback));
                tracing::debug!(entity = A::Record::entity_type(), %err, "fetch failed");
            }
        }
        self.loading = false;
    }

    /// Creates a record and prepends the server's version to the list.
    ///
    /// On failure the list is unchanged and the error is raised.
    pub async fn create(&mut self, draft: &A::Draft) -> Result<()> {
        let record = self.api.create(draft).await?;
        self.records.insert(0, record);
        Ok(())
    }

    /// Updates the record with the given id, replacing the local entry with
    /// the server's authoritative version (not a merge of draft fields).
    ///
    /// Raises `NotFound` and leaves the list unchanged when the id is not
    /// present, rather than silently doing nothing.
    pub async fn update(&mut self, id: i64, draft: &A::Draft) -> Result<()> {
        let record = self.api.update(id, draft).await?;
        match self.records.iter().position(|r| r.id() == id) {
            Some(index) => {
                self.records[index] = record;
                Ok(())
            }
            None => Err(DevdashError::not_found(
                A::Record::entity_type(),
                id.to_string(),
            )),
        }
    }

    /// Removes the record with the given id from the server and the list.
    ///
    /// Raises `NotFound` and leaves the list unchanged when the id is not
    /// present locally.
    pub async fn remove(&mut self, id: i64) -> Result<()> {
        self.api.remove(id).await?;
        let before = self.records.len();
        self.records.retain(|r| r.id() != id);
        if self.records.len() == before {
            return Err(DevdashError::not_found(
                A::Record::entity_type(),
                id.to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goal::{Goal, GoalDraft};
    use std::sync::Mutex;

    /// In-memory stand-in for the remote goals endpoint set.
    struct FakeGoalApi {
        server: Mutex<Vec<Goal>>,
        next_id: Mutex<i64>,
        fail_next: Mutex<Option<DevdashError>>,
    }

    impl FakeGoalApi {
        fn new() -> Self {
            Self {
                server: Mutex::new(Vec::new()),
                next_id: Mutex::new(1),
                fail_next: Mutex::new(None),
            }
        }

        fn with_goals(goals: Vec<Goal>) -> Self {
            let next = goals.iter().map(|g| g.id).max().unwrap_or(0) + 1;
            Self {
                server: Mutex::new(goals),
                next_id: Mutex::new(next),
                fail_next: Mutex::new(None),
            }
        }

        fn fail_next(&self, err: DevdashError) {
            *self.fail_next.lock().unwrap() = Some(err);
        }

        fn take_failure(&self) -> Option<DevdashError> {
            self.fail_next.lock().unwrap().take()
        }
    }

    fn goal(id: i64, text: &str, progress: u8) -> Goal {
        Goal {
            id,
            user_id: Some(1),
            text: text.to_string(),
            progress,
            due_date: "2025-01-01".to_string(),
            created_at: "2024-12-01T00:00:00Z".to_string(),
        }
    }

    #[async_trait]
    impl CollectionApi for FakeGoalApi {
        type Record = Goal;
        type Draft = GoalDraft;

        async fn list(&self) -> Result<Vec<Goal>> {
            if let Some(err) = self.take_failure() {
                return Err(err);
            }
            Ok(self.server.lock().unwrap().clone())
        }

        async fn create(&self, draft: &GoalDraft) -> Result<Goal> {
            if let Some(err) = self.take_failure() {
                return Err(err);
            }
            let mut next_id = self.next_id.lock().unwrap();
            let record = Goal {
                id: *next_id,
                user_id: Some(1),
                text: draft.text.clone(),
                progress: draft.progress,
                due_date: draft.due_date.clone(),
                created_at: "2024-12-01T00:00:00Z".to_string(),
            };
            *next_id += 1;
            self.server.lock().unwrap().push(record.clone());
            Ok(record)
        }

        async fn update(&self, id: i64, draft: &GoalDraft) -> Result<Goal> {
            if let Some(err) = self.take_failure() {
                return Err(err);
            }
            let mut server = self.server.lock().unwrap();
            let entry = server
                .iter_mut()
                .find(|g| g.id == id)
                .ok_or_else(|| DevdashError::transport(404, "Goal not found"))?;
            entry.text = draft.text.clone();
            entry.progress = draft.progress;
            entry.due_date = draft.due_date.clone();
            Ok(entry.clone())
        }

        async fn remove(&self, id: i64) -> Result<()> {
            if let Some(err) = self.take_failure() {
                return Err(err);
            }
            let mut server = self.server.lock().unwrap();
            let before = server.len();
            server.retain(|g| g.id != id);
            if server.len() == before {
                return Err(DevdashError::transport(404, "Goal not found"));
            }
            Ok(())
        }
    }

    fn draft(text: &str, progress: u8) -> GoalDraft {
        GoalDraft {
            text: text.to_string(),
            progress,
            due_date: "2025-01-01".to_string(),
        }
    }

    #[tokio::test]
    async fn test_fetch_all_replaces_list_in_server_order() {
        let api = Arc::new(FakeGoalApi::with_goals(vec![
            goal(1, "first", 10),
            goal(2, "second", 20),
        ]));
        let mut store = CollectionStore::new(api);

        store.fetch_all().await;

        assert_eq!(store.records().len(), 2);
        assert_eq!(store.records()[0].id, 1);
        assert_eq!(store.records()[1].id, 2);
        assert!(store.fetch_error().is_none());
    }

    #[tokio::test]
    async fn test_fetch_failure_keeps_previous_list() {
        let api = Arc::new(FakeGoalApi::with_goals(vec![goal(1, "first", 10)]));
        let mut store = CollectionStore::new(api.clone());
        store.fetch_all().await;
        assert_eq!(store.records().len(), 1);

        api.fail_next(DevdashError::transport(500, "boom"));
        store.fetch_all().await;

        assert_eq!(store.records().len(), 1);
        assert_eq!(store.fetch_error(), Some("boom"));
    }

    #[tokio::test]
    async fn test_create_prepends_server_record_with_fresh_id() {
        let api = Arc::new(FakeGoalApi::with_goals(vec![goal(3, "old", 10)]));
        let mut store = CollectionStore::new(api);
        store.fetch_all().await;

        store.create(&draft("Ship v1", 0)).await.unwrap();

        assert_eq!(store.records().len(), 2);
        let new = &store.records()[0];
        assert_eq!(new.text, "Ship v1");
        assert_ne!(new.id, 3);
    }

    #[tokio::test]
    async fn test_create_on_empty_list_yields_single_server_record() {
        let api = Arc::new(FakeGoalApi::new());
        let mut store = CollectionStore::new(api);

        store.create(&draft("Ship v1", 0)).await.unwrap();

        assert_eq!(store.records().len(), 1);
        assert_eq!(store.records()[0].text, "Ship v1");
        assert_eq!(store.records()[0].progress, 0);
    }

    #[tokio::test]
    async fn test_failing_create_leaves_list_and_surfaces_server_message() {
        let api = Arc::new(FakeGoalApi::with_goals(vec![goal(1, "first", 10)]));
        let mut store = CollectionStore::new(api.clone());
        store.fetch_all().await;

        api.fail_next(DevdashError::transport(500, "Internal server error"));
        let err = store.create(&draft("Ship v1", 0)).await.unwrap_err();

        assert_eq!(store.records().len(), 1);
        assert_eq!(err.user_message("fallback"), "Internal server error");
    }

    #[tokio::test]
    async fn test_update_replaces_entry_with_server_record() {
        let api = Arc::new(FakeGoalApi::new());
        let mut store = CollectionStore::new(api);
        store.create(&draft("Ship v1", 0)).await.unwrap();
        let id = store.records()[0].id;

        store.update(id, &draft("Ship v1", 50)).await.unwrap();

        assert_eq!(store.records().len(), 1);
        assert_eq!(store.records()[0].progress, 50);
    }

    #[tokio::test]
    async fn test_update_unknown_id_errors_and_leaves_list() {
        let api = Arc::new(FakeGoalApi::with_goals(vec![goal(1, "first", 10)]));
        let mut store = CollectionStore::new(api);
        store.fetch_all().await;
        let before = store.records().to_vec();

        let err = store.update(999, &draft("nope", 1)).await.unwrap_err();

        assert!(err.is_transport() || err.is_not_found());
        assert_eq!(store.records(), before.as_slice());
    }

    #[tokio::test]
    async fn test_remove_drops_matching_entry() {
        let api = Arc::new(FakeGoalApi::with_goals(vec![
            goal(1, "first", 10),
            goal(2, "second", 20),
        ]));
        let mut store = CollectionStore::new(api);
        store.fetch_all().await;

        store.remove(1).await.unwrap();

        assert_eq!(store.records().len(), 1);
        assert!(store.records().iter().all(|g| g.id != 1));
    }

    #[tokio::test]
    async fn test_remove_unknown_id_errors_and_leaves_list() {
        let api = Arc::new(FakeGoalApi::with_goals(vec![goal(1, "first", 10)]));
        let mut store = CollectionStore::new(api);
        store.fetch_all().await;

        let err = store.remove(42).await.unwrap_err();

        assert!(err.is_transport() || err.is_not_found());
        assert_eq!(store.records().len(), 1);
    }
}
