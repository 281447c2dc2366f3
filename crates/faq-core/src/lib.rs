//! Fruit Desk Core
//!
//! Platform-neutral logic behind the Fruit Desk screens:
//! - model: FAQ entries and drafts
//! - store: remote FAQ store contract and its HTTP implementation
//! - cache: local mirror of the remote FAQ collection
//! - translate: translation service client
//! - chat: canned fruit chatbot script
//! - config: endpoint configuration

pub mod cache;
pub mod chat;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod translate;

#[cfg(test)]
mod test_support;

pub use cache::{FaqCache, LoadState, Notice};
pub use config::{AppConfig, ConfigError};
pub use error::{FaqAction, FaqError, FaqResult};
pub use model::{FaqDraft, FaqEntry, FaqId};
pub use store::{FaqStore, HttpFaqStore};
pub use translate::{Language, TranslationClient};
