//! Wire types for the breakdown service's structured output.
//!
//! The LLM is instructed to return strict JSON in camelCase; these types are
//! the parse-or-fail contract. Unknown fields are ignored, missing optional
//! fields default, but a response that is not valid JSON of this shape is a
//! model failure.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The complete structured result of one script analysis.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub scenes: Vec<ExtractedScene>,
    #[serde(default)]
    pub elements: Vec<ExtractedElement>,
    /// Element names per scene number, linking scenes to elements.
    #[serde(default)]
    pub scene_elements: HashMap<String, Vec<String>>,
}

/// One scene as extracted from the screenplay.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedScene {
    pub scene_number: String,
    #[serde(default)]
    pub slugline: String,
    #[serde(default)]
    pub int_ext: String,
    #[serde(default)]
    pub day_night: String,
    #[serde(default)]
    pub set_name: String,
    #[serde(default)]
    pub location: String,
    /// Eighths string, e.g. `"1 4/8"`. Empty means unknown.
    #[serde(default)]
    pub page_eighths: String,
    #[serde(default)]
    pub synopsis: String,
}

/// One production element as extracted from the screenplay.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedElement {
    pub name: String,
    /// Free-text category label; classified into the closed taxonomy at
    /// import time.
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub cast_index: Option<i32>,
}

// -- chat-completions request/response shapes --------------------------------

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage<'a> {
    pub role: &'a str,
    pub content: Vec<ContentPart<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum ContentPart<'a> {
    Text { text: &'a str },
    File { file: FilePart<'a> },
}

#[derive(Debug, Serialize)]
pub(crate) struct FilePart<'a> {
    pub filename: &'a str,
    /// `data:application/pdf;base64,...` data URL.
    pub file_data: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoice {
    pub message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponseMessage {
    pub content: String,
}
