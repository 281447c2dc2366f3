//! FAQ Cache Tests
//!
//! Tests for FaqCache against in-memory FAQ stores.

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use async_trait::async_trait;
    use reqwest::StatusCode;
    use tokio::sync::Notify;

    use crate::cache::{FaqCache, LoadState};
    use crate::error::{FaqAction, FaqError, FaqResult};
    use crate::model::{FaqDraft, FaqEntry, FaqId};
    use crate::store::FaqStore;

    // ========================
    // Store Doubles
    // ========================

    /// Behaves like the remote store; can be told to fail one kind of call
    struct MemoryStore {
        entries: RefCell<Vec<FaqEntry>>,
        next_id: Cell<i64>,
        failing: Cell<Option<FaqAction>>,
    }

    impl MemoryStore {
        fn new(seed: Vec<FaqEntry>) -> Self {
            Self {
                entries: RefCell::new(seed),
                next_id: Cell::new(100),
                failing: Cell::new(None),
            }
        }

        fn fail(&self, action: FaqAction) {
            self.failing.set(Some(action));
        }

        fn heal(&self) {
            self.failing.set(None);
        }

        fn check(&self, action: FaqAction) -> FaqResult<()> {
            if self.failing.get() == Some(action) {
                return Err(FaqError::Status {
                    action,
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                });
            }
            Ok(())
        }

        fn set_remote(&self, entries: Vec<FaqEntry>) {
            *self.entries.borrow_mut() = entries;
        }
    }

    #[async_trait(?Send)]
    impl FaqStore for MemoryStore {
        async fn list(&self) -> FaqResult<Vec<FaqEntry>> {
            self.check(FaqAction::Fetch)?;
            Ok(self.entries.borrow().clone())
        }

        async fn create(&self, draft: &FaqDraft) -> FaqResult<FaqEntry> {
            self.check(FaqAction::Create)?;
            let id = self.next_id.get();
            self.next_id.set(id + 1);
            let entry = FaqEntry::new(id, draft.question(), draft.answer());
            self.entries.borrow_mut().push(entry.clone());
            Ok(entry)
        }

        async fn update(&self, id: &FaqId, draft: &FaqDraft) -> FaqResult<FaqEntry> {
            self.check(FaqAction::Update)?;
            let mut entries = self.entries.borrow_mut();
            let entry = entries
                .iter_mut()
                .find(|e| &e.id == id)
                .ok_or(FaqError::Status {
                    action: FaqAction::Update,
                    status: StatusCode::NOT_FOUND,
                })?;
            entry.question = draft.question().to_string();
            entry.answer = draft.answer().to_string();
            Ok(entry.clone())
        }

        async fn delete(&self, id: &FaqId) -> FaqResult<()> {
            self.check(FaqAction::Delete)?;
            let mut entries = self.entries.borrow_mut();
            let before = entries.len();
            entries.retain(|e| &e.id != id);
            if entries.len() == before {
                return Err(FaqError::Status {
                    action: FaqAction::Delete,
                    status: StatusCode::NOT_FOUND,
                });
            }
            Ok(())
        }
    }

    /// Holds back the response of the next update until released
    struct SlowUpdateStore {
        inner: MemoryStore,
        hold_next_update: Cell<bool>,
        release: Notify,
    }

    impl SlowUpdateStore {
        fn new(seed: Vec<FaqEntry>) -> Self {
            Self {
                inner: MemoryStore::new(seed),
                hold_next_update: Cell::new(true),
                release: Notify::new(),
            }
        }
    }

    #[async_trait(?Send)]
    impl FaqStore for SlowUpdateStore {
        async fn list(&self) -> FaqResult<Vec<FaqEntry>> {
            self.inner.list().await
        }

        async fn create(&self, draft: &FaqDraft) -> FaqResult<FaqEntry> {
            self.inner.create(draft).await
        }

        async fn update(&self, id: &FaqId, draft: &FaqDraft) -> FaqResult<FaqEntry> {
            // Server applies immediately, the response arrives late
            let response = self.inner.update(id, draft).await;
            if self.hold_next_update.replace(false) {
                self.release.notified().await;
            }
            response
        }

        async fn delete(&self, id: &FaqId) -> FaqResult<()> {
            self.inner.delete(id).await
        }
    }

    // ========================
    // Helpers
    // ========================

    fn entry(id: i64, q: &str, a: &str) -> FaqEntry {
        FaqEntry::new(id, q, a)
    }

    fn draft(q: &str, a: &str) -> FaqDraft {
        FaqDraft::new(q, a).expect("valid draft")
    }

    fn seeded() -> Vec<FaqEntry> {
        vec![
            entry(1, "Q1", "A1"),
            entry(2, "Q2", "A2"),
            entry(3, "Q3", "A3"),
        ]
    }

    async fn loaded_cache(seed: Vec<FaqEntry>) -> FaqCache<MemoryStore> {
        let cache = FaqCache::new(MemoryStore::new(seed));
        cache.load().await.expect("initial load");
        cache
    }

    // ========================
    // Load
    // ========================

    #[tokio::test]
    async fn test_new_cache_is_loading_and_empty() {
        let cache = FaqCache::new(MemoryStore::new(seeded()));
        assert_eq!(cache.state(), LoadState::Loading);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_load_keeps_server_order() {
        let remote = vec![entry(9, "Q9", "A9"), entry(2, "Q2", "A2"), entry(5, "Q5", "A5")];
        let cache = FaqCache::new(MemoryStore::new(remote.clone()));

        let count = cache.load().await.expect("load");

        assert_eq!(count, 3);
        assert_eq!(cache.state(), LoadState::Ready);
        assert_eq!(cache.snapshot(), remote);
    }

    #[tokio::test]
    async fn test_reload_replaces_collection() {
        let cache = loaded_cache(seeded()).await;
        let fresh = vec![entry(4, "Q4", "A4"), entry(1, "Q1", "A1")];
        cache.store().set_remote(fresh.clone());

        cache.load().await.expect("reload");

        assert_eq!(cache.snapshot(), fresh);
    }

    #[tokio::test]
    async fn test_first_load_failure_is_load_error() {
        let store = MemoryStore::new(seeded());
        store.fail(FaqAction::Fetch);
        let cache = FaqCache::new(store);

        let err = cache.load().await.unwrap_err();

        assert_eq!(err.action(), Some(FaqAction::Fetch));
        assert_eq!(err.user_message(), "Failed to fetch FAQs. Please try again.");
        assert_eq!(cache.state(), LoadState::LoadError);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_reload_failure_keeps_previous_collection() {
        let cache = loaded_cache(seeded()).await;
        let before = cache.snapshot();
        cache.store().set_remote(vec![]);
        cache.store().fail(FaqAction::Fetch);

        assert!(cache.load().await.is_err());

        assert_eq!(cache.state(), LoadState::Ready);
        assert_eq!(cache.snapshot(), before);
    }

    #[tokio::test]
    async fn test_retry_after_load_error_reaches_ready() {
        let store = MemoryStore::new(seeded());
        store.fail(FaqAction::Fetch);
        let cache = FaqCache::new(store);
        assert!(cache.load().await.is_err());

        cache.store().heal();
        cache.load().await.expect("retry");

        assert_eq!(cache.state(), LoadState::Ready);
        assert_eq!(cache.len(), 3);
    }

    #[tokio::test]
    async fn test_load_drops_repeated_ids() {
        let remote = vec![entry(1, "Q1", "A1"), entry(1, "dup", "dup"), entry(2, "Q2", "A2")];
        let cache = FaqCache::new(MemoryStore::new(remote));

        assert_eq!(cache.load().await.unwrap(), 2);
        assert_eq!(cache.get(&FaqId::Number(1)).unwrap().question, "Q1");
    }

    // ========================
    // Create / Update / Delete
    // ========================

    #[tokio::test]
    async fn test_create_appends_server_entry() {
        let cache = loaded_cache(seeded()).await;

        let notice = cache.create(draft("New Q", "New A")).await.expect("create");

        assert_eq!(notice.action, FaqAction::Create);
        assert_eq!(notice.message(), "FAQ created successfully.");
        let snapshot = cache.snapshot();
        assert_eq!(snapshot.len(), 4);
        assert_eq!(snapshot[..3], seeded()[..]);
        assert_eq!(snapshot[3], entry(100, "New Q", "New A"));
        assert_eq!(notice.id, FaqId::Number(100));
    }

    #[tokio::test]
    async fn test_update_replaces_in_place() {
        let cache = loaded_cache(seeded()).await;

        let notice = cache
            .update(&FaqId::Number(2), draft("Q2b", "A2b"))
            .await
            .expect("update");

        assert_eq!(notice.message(), "FAQ updated successfully.");
        assert_eq!(
            cache.snapshot(),
            vec![entry(1, "Q1", "A1"), entry(2, "Q2b", "A2b"), entry(3, "Q3", "A3")]
        );
    }

    #[tokio::test]
    async fn test_delete_removes_only_that_entry() {
        let cache = loaded_cache(seeded()).await;

        let notice = cache.delete(&FaqId::Number(2)).await.expect("delete");

        assert_eq!(notice.message(), "FAQ deleted successfully.");
        assert_eq!(cache.snapshot(), vec![entry(1, "Q1", "A1"), entry(3, "Q3", "A3")]);
    }

    #[tokio::test]
    async fn test_failed_mutations_leave_collection_untouched() {
        let cache = loaded_cache(seeded()).await;
        let before = cache.snapshot();

        cache.store().fail(FaqAction::Create);
        let err = cache.create(draft("Q", "A")).await.unwrap_err();
        assert_eq!(err.user_message(), "Failed to create FAQ. Please try again.");
        assert_eq!(cache.snapshot(), before);

        cache.store().fail(FaqAction::Update);
        let err = cache.update(&FaqId::Number(1), draft("X", "Y")).await.unwrap_err();
        assert_eq!(err.user_message(), "Failed to update FAQ. Please try again.");
        assert_eq!(cache.snapshot(), before);

        cache.store().fail(FaqAction::Delete);
        let err = cache.delete(&FaqId::Number(1)).await.unwrap_err();
        assert_eq!(err.user_message(), "Failed to delete FAQ. Please try again.");
        assert_eq!(cache.snapshot(), before);

        assert_eq!(cache.state(), LoadState::Ready);
    }

    #[tokio::test]
    async fn test_delete_of_unknown_id_fails_without_change() {
        let cache = loaded_cache(seeded()).await;
        let before = cache.snapshot();

        assert!(cache.delete(&FaqId::Number(77)).await.is_err());
        assert_eq!(cache.snapshot(), before);
    }

    #[tokio::test]
    async fn test_full_session_scenario() {
        let cache = loaded_cache(vec![entry(1, "Q1", "A1")]).await;
        assert_eq!(cache.snapshot(), vec![entry(1, "Q1", "A1")]);

        cache.store().next_id.set(2);
        cache.create(draft("Q2", "A2")).await.expect("create");
        assert_eq!(cache.snapshot(), vec![entry(1, "Q1", "A1"), entry(2, "Q2", "A2")]);

        cache.update(&FaqId::Number(1), draft("Q1b", "A1b")).await.expect("update");
        assert_eq!(cache.snapshot(), vec![entry(1, "Q1b", "A1b"), entry(2, "Q2", "A2")]);

        cache.delete(&FaqId::Number(2)).await.expect("delete");
        assert_eq!(cache.snapshot(), vec![entry(1, "Q1b", "A1b")]);
    }

    // ========================
    // Overlapping Operations
    // ========================

    #[tokio::test]
    async fn test_late_update_does_not_resurrect_deleted_entry() {
        let cache = FaqCache::new(SlowUpdateStore::new(seeded()));
        cache.load().await.expect("load");
        let id = FaqId::Number(1);

        let (updated, deleted) = tokio::join!(cache.update(&id, draft("late", "late")), async {
            let result = cache.delete(&id).await;
            cache.store().release.notify_one();
            result
        });

        assert!(updated.is_ok());
        assert!(deleted.is_ok());
        assert_eq!(cache.snapshot(), vec![entry(2, "Q2", "A2"), entry(3, "Q3", "A3")]);
    }

    #[tokio::test]
    async fn test_last_response_wins_between_updates() {
        let cache = FaqCache::new(SlowUpdateStore::new(seeded()));
        cache.load().await.expect("load");
        let id = FaqId::Number(3);

        let (slow, fast) = tokio::join!(cache.update(&id, draft("slow", "slow")), async {
            let result = cache.update(&id, draft("fast", "fast")).await;
            cache.store().release.notify_one();
            result
        });

        assert!(slow.is_ok());
        assert!(fast.is_ok());
        // The slow response arrived last, so it is what the screen shows
        assert_eq!(cache.get(&id).unwrap().question, "slow");
        assert_eq!(cache.len(), 3);
    }
}
