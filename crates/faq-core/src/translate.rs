//! Translation Client
//!
//! Pass-through to a MyMemory-compatible translation endpoint. The client
//! never fails: every outcome is a string to show in the output box.

use reqwest::{Client, Url};
use serde::Deserialize;

/// Shown when the service answers without a translation
pub const TRANSLATION_FAILED: &str = "Translation failed.";
/// Shown when the request or its body could not be read
pub const TRANSLATION_ERROR: &str = "An error occurred during translation.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    Spanish,
    French,
    German,
    Italian,
    Japanese,
    Korean,
    Chinese,
}

impl Language {
    pub const ALL: [Language; 8] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::German,
        Language::Italian,
        Language::Japanese,
        Language::Korean,
        Language::Chinese,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::German => "de",
            Language::Italian => "it",
            Language::Japanese => "ja",
            Language::Korean => "ko",
            Language::Chinese => "zh",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::German => "German",
            Language::Italian => "Italian",
            Language::Japanese => "Japanese",
            Language::Korean => "Korean",
            Language::Chinese => "Chinese (Simplified)",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }
}

/// `source|target` as the service expects it
pub fn language_pair(source: Language, target: Language) -> String {
    format!("{}|{}", source.code(), target.code())
}

#[derive(Debug, Deserialize)]
struct TranslationResponse {
    #[serde(rename = "responseData")]
    response_data: Option<ResponseData>,
}

#[derive(Debug, Deserialize)]
struct ResponseData {
    #[serde(rename = "translatedText")]
    translated_text: Option<String>,
}

/// Pull the translated text out of a response body.
///
/// A well-formed body without the nested field is a translation failure,
/// not an error.
pub fn interpret_response(body: &str) -> Result<String, serde_json::Error> {
    let response: TranslationResponse = serde_json::from_str(body)?;
    Ok(response
        .response_data
        .and_then(|data| data.translated_text)
        .unwrap_or_else(|| TRANSLATION_FAILED.to_string()))
}

#[derive(Debug, Clone)]
pub struct TranslationClient {
    http: Client,
    endpoint: Url,
}

impl TranslationClient {
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(Client::new(), endpoint)
    }

    pub fn with_client(http: Client, endpoint: Url) -> Self {
        Self { http, endpoint }
    }

    pub fn request_url(&self, text: &str, source: Language, target: Language) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("q", text)
            .append_pair("langpair", &language_pair(source, target));
        url
    }

    /// One attempt; the result is always displayable
    pub async fn translate(&self, text: &str, source: Language, target: Language) -> String {
        let url = self.request_url(text, source, target);
        log::debug!("[TRANSLATE] {} -> {}", source.code(), target.code());

        let body = match self.fetch(url).await {
            Ok(body) => body,
            Err(e) => {
                log::error!("[TRANSLATE] Request failed: {}", e);
                return TRANSLATION_ERROR.to_string();
            }
        };

        match interpret_response(&body) {
            Ok(text) => text,
            Err(e) => {
                log::error!("[TRANSLATE] Unreadable response: {}", e);
                TRANSLATION_ERROR.to_string()
            }
        }
    }

    async fn fetch(&self, url: Url) -> Result<String, reqwest::Error> {
        self.http.get(url).send().await?.text().await
    }
}
