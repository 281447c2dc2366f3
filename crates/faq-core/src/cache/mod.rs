//! FAQ Cache
//!
//! In-memory mirror of the remote FAQ collection.

mod faq_cache;

#[cfg(test)]
mod tests;

pub use faq_cache::{FaqCache, LoadState, Notice};
