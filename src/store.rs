//! FAQ Screen State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The FAQ cache
//! owns the collection; the store mirrors it for rendering.

use faq_core::{FaqEntry, FaqId, LoadState};
use leptos::prelude::*;
use reactive_stores::Store;

/// FAQ screen state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct FaqScreenState {
    /// Mirror of the cache snapshot, in display order
    pub entries: Vec<FaqEntry>,
    pub load_state: LoadState,
    /// A load round trip is in flight
    pub load_pending: bool,
    /// Accordion item currently expanded
    pub expanded: Option<FaqId>,
    /// Entry being edited; None while adding
    pub selected: Option<FaqEntry>,
    pub dialog_open: bool,
    pub question: String,
    pub answer: String,
}

/// Type alias for the store
pub type FaqScreenStore = Store<FaqScreenState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_sync(store: &FaqScreenStore, entries: Vec<FaqEntry>, load_state: LoadState) {
    store.entries().set(entries);
    store.load_state().set(load_state);
}

pub fn store_entries(store: &FaqScreenStore) -> Vec<FaqEntry> {
    store.entries().get()
}

/// What the FAQ screen body renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaqBody {
    Loader,
    LoadError,
    List,
}

/// A retry after a failed first load shows the loader again until it settles.
/// A reload over a ready list keeps the list on screen.
pub fn faq_body(load_state: LoadState, load_pending: bool) -> FaqBody {
    match load_state {
        LoadState::Loading => FaqBody::Loader,
        LoadState::LoadError if load_pending => FaqBody::Loader,
        LoadState::LoadError => FaqBody::LoadError,
        LoadState::Ready => FaqBody::List,
    }
}

pub fn store_faq_body(store: &FaqScreenStore) -> FaqBody {
    faq_body(store.load_state().get(), store.load_pending().get())
}

/// Mark a load as started. False when one is already in flight.
pub fn store_begin_load(store: &FaqScreenStore) -> bool {
    if store.load_pending().get_untracked() {
        return false;
    }
    store.load_pending().set(true);
    true
}

pub fn store_finish_load(store: &FaqScreenStore) {
    store.load_pending().set(false);
}

pub fn store_is_expanded(store: &FaqScreenStore, id: &FaqId) -> bool {
    store.expanded().with(|expanded| expanded.as_ref() == Some(id))
}

/// Collapsible single-open accordion
pub fn store_toggle_expanded(store: &FaqScreenStore, id: FaqId) {
    store.expanded().update(|expanded| {
        *expanded = if expanded.as_ref() == Some(&id) { None } else { Some(id) };
    });
}

/// Open the dialog, prefilled from `entry` when editing
pub fn store_open_editor(store: &FaqScreenStore, entry: Option<FaqEntry>) {
    let (question, answer) = entry
        .as_ref()
        .map(|e| (e.question.clone(), e.answer.clone()))
        .unwrap_or_default();
    store.question().set(question);
    store.answer().set(answer);
    store.selected().set(entry);
    store.dialog_open().set(true);
}

pub fn store_close_editor(store: &FaqScreenStore) {
    store.dialog_open().set(false);
    store.selected().set(None);
    store.question().set(String::new());
    store.answer().set(String::new());
}

pub fn store_dialog_open(store: &FaqScreenStore) -> bool {
    store.dialog_open().get()
}

pub fn store_is_editing(store: &FaqScreenStore) -> bool {
    store.selected().with(|selected| selected.is_some())
}

/// Current form contents, read outside the render cycle
pub fn store_draft_fields(store: &FaqScreenStore) -> (String, String) {
    (store.question().get_untracked(), store.answer().get_untracked())
}

/// Id of the entry being edited, read outside the render cycle
pub fn store_selected_id(store: &FaqScreenStore) -> Option<FaqId> {
    store.selected().with_untracked(|selected| selected.as_ref().map(|e| e.id.clone()))
}

pub fn store_question(store: &FaqScreenStore) -> String {
    store.question().get()
}

pub fn store_answer(store: &FaqScreenStore) -> String {
    store.answer().get()
}

pub fn store_set_question(store: &FaqScreenStore, question: String) {
    store.question().set(question);
}

pub fn store_set_answer(store: &FaqScreenStore, answer: String) {
    store.answer().set(answer);
}

/// Submit stays disabled until both fields have content
pub fn store_form_complete(store: &FaqScreenStore) -> bool {
    !store.question().with(|q| q.trim().is_empty()) && !store.answer().with(|a| a.trim().is_empty())
}
