//! HTTP FAQ Store
//!
//! `reqwest` client for the `/api/faqs` resource. Any non-2xx status is a
//! failure regardless of the body.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;

use super::traits::FaqStore;
use crate::error::{FaqAction, FaqError, FaqResult};
use crate::model::{FaqDraft, FaqEntry, FaqId};

/// `{base}/api/faqs`, keeping any path prefix the base carries
pub fn faq_collection_url(base: &Url) -> Url {
    let mut url = base.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().extend(["api", "faqs"]);
    }
    url
}

/// `{base}/api/faqs/{id}` with the id percent-encoded as one segment
pub fn faq_item_url(base: &Url, id: &FaqId) -> Url {
    let mut url = faq_collection_url(base);
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.push(&id.to_string());
    }
    url
}

#[derive(Debug, Clone)]
pub struct HttpFaqStore {
    http: Client,
    base: Url,
}

impl HttpFaqStore {
    pub fn new(base: Url) -> Self {
        Self::with_client(Client::new(), base)
    }

    pub fn with_client(http: Client, base: Url) -> Self {
        Self { http, base }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    async fn send(&self, action: FaqAction, request: RequestBuilder) -> FaqResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|source| FaqError::Transport { action, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FaqError::Status { action, status });
        }
        Ok(response)
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        action: FaqAction,
        request: RequestBuilder,
    ) -> FaqResult<T> {
        let response = self.send(action, request).await?;
        response
            .json::<T>()
            .await
            .map_err(|source| FaqError::Decode { action, source })
    }
}

#[async_trait(?Send)]
impl FaqStore for HttpFaqStore {
    async fn list(&self) -> FaqResult<Vec<FaqEntry>> {
        let request = self.http.get(faq_collection_url(&self.base));
        self.send_json(FaqAction::Fetch, request).await
    }

    async fn create(&self, draft: &FaqDraft) -> FaqResult<FaqEntry> {
        let request = self.http.post(faq_collection_url(&self.base)).json(draft);
        self.send_json(FaqAction::Create, request).await
    }

    async fn update(&self, id: &FaqId, draft: &FaqDraft) -> FaqResult<FaqEntry> {
        let request = self.http.put(faq_item_url(&self.base, id)).json(draft);
        self.send_json(FaqAction::Update, request).await
    }

    async fn delete(&self, id: &FaqId) -> FaqResult<()> {
        let request = self.http.delete(faq_item_url(&self.base, id));
        self.send(FaqAction::Delete, request).await?;
        Ok(())
    }
}
