//! FAQ Client Cache
//!
//! Local mirror of the remote FAQ collection. The local copy changes only
//! after the store confirms a round trip, never speculatively.

use std::cell::{Cell, RefCell};

use crate::error::{FaqAction, FaqResult};
use crate::model::{FaqDraft, FaqEntry, FaqId};
use crate::store::FaqStore;

/// Screen-level state of the collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// No load has settled yet
    #[default]
    Loading,
    Ready,
    /// The first load failed; the collection is empty
    LoadError,
}

/// Outcome of a confirmed mutation, for the caller to surface
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub action: FaqAction,
    pub id: FaqId,
}

impl Notice {
    pub fn message(&self) -> &'static str {
        self.action.success_message()
    }
}

/// Cache over a remote FAQ store.
///
/// Operations take `&self` and release the collection borrow before every
/// await, so overlapping operations each apply their result when their own
/// response arrives. Whichever finishes last wins for an id they share.
pub struct FaqCache<S> {
    store: S,
    entries: RefCell<Vec<FaqEntry>>,
    state: Cell<LoadState>,
}

impl<S: FaqStore> FaqCache<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            entries: RefCell::new(Vec::new()),
            state: Cell::new(LoadState::Loading),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn state(&self) -> LoadState {
        self.state.get()
    }

    /// Copy of the collection in display order
    pub fn snapshot(&self) -> Vec<FaqEntry> {
        self.entries.borrow().clone()
    }

    pub fn get(&self, id: &FaqId) -> Option<FaqEntry> {
        self.entries.borrow().iter().find(|e| &e.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Replace the collection with the store's list. Returns the entry count.
    pub async fn load(&self) -> FaqResult<usize> {
        match self.store.list().await {
            Ok(loaded) => {
                let loaded = dedup_by_id(loaded);
                let count = loaded.len();
                *self.entries.borrow_mut() = loaded;
                self.state.set(LoadState::Ready);
                log::info!("[FAQ] Loaded {} entries", count);
                Ok(count)
            }
            Err(e) => {
                if self.state.get() == LoadState::Loading {
                    self.state.set(LoadState::LoadError);
                }
                log::error!("[FAQ] {}", e);
                Err(e)
            }
        }
    }

    pub async fn create(&self, draft: FaqDraft) -> FaqResult<Notice> {
        let created = self.store.create(&draft).await.map_err(|e| {
            log::error!("[FAQ] {}", e);
            e
        })?;

        let id = created.id.clone();
        let mut entries = self.entries.borrow_mut();
        match entries.iter_mut().find(|e| e.id == created.id) {
            // Store handed back an id we already hold; keep ids unique
            Some(existing) => {
                log::warn!("[FAQ] Created entry reused id {}", id);
                *existing = created;
            }
            None => entries.push(created),
        }
        log::debug!("[FAQ] Created {}", id);
        Ok(Notice { action: FaqAction::Create, id })
    }

    /// Update the entry `id`. Position is kept; an entry removed meanwhile stays removed.
    pub async fn update(&self, id: &FaqId, draft: FaqDraft) -> FaqResult<Notice> {
        let updated = self.store.update(id, &draft).await.map_err(|e| {
            log::error!("[FAQ] {}", e);
            e
        })?;

        let updated_id = updated.id.clone();
        let mut entries = self.entries.borrow_mut();
        match entries.iter_mut().find(|e| e.id == updated.id) {
            Some(existing) => *existing = updated,
            None => log::warn!("[FAQ] Updated entry {} is no longer cached", updated_id),
        }
        log::debug!("[FAQ] Updated {}", updated_id);
        Ok(Notice { action: FaqAction::Update, id: updated_id })
    }

    pub async fn delete(&self, id: &FaqId) -> FaqResult<Notice> {
        self.store.delete(id).await.map_err(|e| {
            log::error!("[FAQ] {}", e);
            e
        })?;

        self.entries.borrow_mut().retain(|e| &e.id != id);
        log::debug!("[FAQ] Deleted {}", id);
        Ok(Notice { action: FaqAction::Delete, id: id.clone() })
    }
}

/// First occurrence wins if a list repeats an id
fn dedup_by_id(entries: Vec<FaqEntry>) -> Vec<FaqEntry> {
    let mut result: Vec<FaqEntry> = Vec::with_capacity(entries.len());
    for entry in entries {
        if result.iter().any(|e| e.id == entry.id) {
            log::warn!("[FAQ] Dropping duplicate id {} from list", entry.id);
            continue;
        }
        result.push(entry);
    }
    result
}
