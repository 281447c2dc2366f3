//! FAQ Store Layer - Core Trait
//!
//! Abstract interface over the remote FAQ resource.
//! The HTTP client is the production implementation; tests use in-memory doubles.

use async_trait::async_trait;

use crate::error::FaqResult;
use crate::model::{FaqDraft, FaqEntry, FaqId};

/// CRUD round trips against the remote FAQ collection.
///
/// Futures are not required to be `Send`: in the browser every request runs
/// on the single page thread.
#[async_trait(?Send)]
pub trait FaqStore {
    /// Full collection, in the store's order
    async fn list(&self) -> FaqResult<Vec<FaqEntry>>;

    /// Create an entry; the store assigns its id
    async fn create(&self, draft: &FaqDraft) -> FaqResult<FaqEntry>;

    /// Replace question and answer of an existing entry
    async fn update(&self, id: &FaqId, draft: &FaqDraft) -> FaqResult<FaqEntry>;

    /// Delete an entry; no response body is required
    async fn delete(&self, id: &FaqId) -> FaqResult<()>;
}
