//! FAQ Models
//!
//! Data structures matching the remote FAQ store's JSON.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{FaqError, FaqResult};

/// Identifier assigned by the remote store.
///
/// The store is free to use numeric or string ids; whichever shape arrives
/// is kept and sent back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FaqId {
    Number(i64),
    Text(String),
}

impl fmt::Display for FaqId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaqId::Number(n) => write!(f, "{}", n),
            FaqId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for FaqId {
    fn from(value: i64) -> Self {
        FaqId::Number(value)
    }
}

impl From<&str> for FaqId {
    fn from(value: &str) -> Self {
        FaqId::Text(value.to_string())
    }
}

/// A question/answer pair as held by the remote store
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaqEntry {
    pub id: FaqId,
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    pub fn new(id: impl Into<FaqId>, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Request body for create and update. Never carries an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqDraft {
    question: String,
    answer: String,
}

impl FaqDraft {
    /// Both fields must contain something other than whitespace.
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> FaqResult<Self> {
        let question = question.into();
        let answer = answer.into();
        if question.trim().is_empty() {
            return Err(FaqError::Validation { field: "question" });
        }
        if answer.trim().is_empty() {
            return Err(FaqError::Validation { field: "answer" });
        }
        Ok(Self { question, answer })
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }
}
