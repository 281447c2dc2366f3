//! FAQ Store Layer
//!
//! Contract for the remote FAQ store and its HTTP implementation.

mod traits;
mod http;

pub use traits::FaqStore;
pub use http::{faq_collection_url, faq_item_url, HttpFaqStore};
