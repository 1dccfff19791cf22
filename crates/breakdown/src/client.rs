//! HTTP client for the external breakdown (LLM) service.
//!
//! The service is an OpenAI-compatible chat-completions endpoint. One
//! request per analysis: the instruction prompt plus the screenplay PDF as a
//! base64 data URL. The configured model list is tried in order until one
//! returns parseable JSON; there is a single fallback loop here rather than
//! one per call site.

use crate::messages::{
    ChatMessage, ChatRequest, ChatResponse, ContentPart, ExtractionResult, FilePart,
};

/// Fixed instruction prompt sent with every analysis request.
///
/// The response contract is strict JSON with camelCase keys; anything else
/// fails the attempt.
const INSTRUCTION_PROMPT: &str = "You are a film production script breakdown assistant. \
Read the attached screenplay PDF and return ONLY a JSON object, no prose and no code fences, \
with this exact shape: \
{\"scenes\": [{\"sceneNumber\", \"slugline\", \"intExt\", \"dayNight\", \"setName\", \
\"location\", \"pageEighths\", \"synopsis\"}], \
\"elements\": [{\"name\", \"category\", \"castIndex\"}], \
\"sceneElements\": {\"<sceneNumber>\": [\"<element name>\", ...]}}. \
intExt is INT, EXT or INT/EXT. dayNight is DAY or NIGHT. pageEighths is a page length \
in eighths such as \"1 4/8\". castIndex is a 1-based billing position for cast, null otherwise.";

/// Errors from the breakdown service.
#[derive(Debug, thiserror::Error)]
pub enum BreakdownError {
    /// No API credential is configured; surfaced as a distinct status so the
    /// caller can tell configuration problems from model problems.
    #[error("Breakdown API credential is not configured")]
    MissingCredential,

    /// Transport-level failure talking to the service.
    #[error("Breakdown request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The model returned something that is not the required strict JSON.
    #[error("Model returned invalid JSON: {0}")]
    InvalidJson(String),

    /// Every configured model was tried and failed.
    #[error("All breakdown models failed: {0}")]
    AllModelsFailed(String),
}

/// Client for the external breakdown service.
pub struct BreakdownClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    models: Vec<String>,
}

impl BreakdownClient {
    /// Create a client.
    ///
    /// * `base_url` - chat-completions base, e.g. `https://openrouter.ai/api/v1`.
    /// * `api_key`  - bearer credential; `None` means unconfigured.
    /// * `models`   - model identifiers to try in order.
    pub fn new(base_url: String, api_key: Option<String>, models: Vec<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key,
            models,
        }
    }

    /// Whether a credential is configured. Checked before a job is even
    /// created so the caller can reject with a distinct status.
    pub fn has_credential(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.is_empty())
    }

    /// Analyze a screenplay PDF (already base64-encoded), trying each
    /// configured model until one succeeds.
    pub async fn extract(
        &self,
        filename: &str,
        pdf_base64: &str,
    ) -> Result<ExtractionResult, BreakdownError> {
        if !self.has_credential() {
            return Err(BreakdownError::MissingCredential);
        }

        let mut failures: Vec<String> = Vec::new();
        for model in &self.models {
            match self.attempt(model, filename, pdf_base64).await {
                Ok(result) => {
                    tracing::info!(
                        model = %model,
                        scenes = result.scenes.len(),
                        elements = result.elements.len(),
                        "Breakdown extraction succeeded"
                    );
                    return Ok(result);
                }
                Err(e) => {
                    tracing::warn!(model = %model, error = %e, "Breakdown model attempt failed");
                    failures.push(format!("{model}: {e}"));
                }
            }
        }

        Err(BreakdownError::AllModelsFailed(failures.join("; ")))
    }

    /// One model attempt: request, status check, strict parse.
    async fn attempt(
        &self,
        model: &str,
        filename: &str,
        pdf_base64: &str,
    ) -> Result<ExtractionResult, BreakdownError> {
        let request = ChatRequest {
            model,
            messages: vec![ChatMessage {
                role: "user",
                content: vec![
                    ContentPart::Text {
                        text: INSTRUCTION_PROMPT,
                    },
                    ContentPart::File {
                        file: FilePart {
                            filename,
                            file_data: format!("data:application/pdf;base64,{pdf_base64}"),
                        },
                    },
                ],
            }],
        };

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(self.api_key.as_deref().unwrap_or_default())
            .json(&request)
            .send()
            .await?
            .error_for_status()?;

        let body: ChatResponse = response.json().await?;
        let content = body
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .unwrap_or_default();

        parse_extraction(content)
    }
}

/// Parse the model's reply into an [`ExtractionResult`], strict JSON only.
///
/// Models sometimes wrap JSON in markdown code fences despite instructions;
/// fences are stripped before parsing, nothing else is repaired.
pub fn parse_extraction(content: &str) -> Result<ExtractionResult, BreakdownError> {
    let trimmed = strip_code_fences(content.trim());
    serde_json::from_str(trimmed).map_err(|e| BreakdownError::InvalidJson(e.to_string()))
}

fn strip_code_fences(s: &str) -> &str {
    let Some(rest) = s.strip_prefix("```") else {
        return s;
    };
    // Drop an optional language tag after the opening fence.
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.trim_start_matches(['\r', '\n'])
        .strip_suffix("```")
        .map(str::trim_end)
        .unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    const VALID: &str = r#"{
        "scenes": [{
            "sceneNumber": "1",
            "slugline": "INT. KITCHEN - DAY",
            "intExt": "INT",
            "dayNight": "DAY",
            "setName": "Kitchen",
            "location": "Stage 4",
            "pageEighths": "1 4/8",
            "synopsis": "Breakfast goes wrong."
        }],
        "elements": [{"name": "ALICE", "category": "Cast", "castIndex": 1}],
        "sceneElements": {"1": ["ALICE"]}
    }"#;

    #[test]
    fn parses_valid_payload() {
        let result = parse_extraction(VALID).unwrap();
        assert_eq!(result.scenes.len(), 1);
        assert_eq!(result.scenes[0].scene_number, "1");
        assert_eq!(result.scenes[0].page_eighths, "1 4/8");
        assert_eq!(result.elements[0].cast_index, Some(1));
        assert_eq!(result.scene_elements["1"], vec!["ALICE"]);
    }

    #[test]
    fn strips_markdown_fences() {
        let fenced = format!("```json\n{VALID}\n```");
        assert!(parse_extraction(&fenced).is_ok());
        let fenced_plain = format!("```\n{VALID}\n```");
        assert!(parse_extraction(&fenced_plain).is_ok());
    }

    #[test]
    fn missing_optional_sections_default() {
        let result = parse_extraction(r#"{"scenes": []}"#).unwrap();
        assert!(result.scenes.is_empty());
        assert!(result.elements.is_empty());
        assert!(result.scene_elements.is_empty());
    }

    #[test]
    fn rejects_prose() {
        let err = parse_extraction("Sure! Here are your scenes: ...").unwrap_err();
        assert_matches!(err, BreakdownError::InvalidJson(_));
    }

    #[test]
    fn rejects_wrong_shape() {
        let err = parse_extraction(r#"{"scenes": "not an array"}"#).unwrap_err();
        assert_matches!(err, BreakdownError::InvalidJson(_));
    }

    #[test]
    fn missing_credential_short_circuits() {
        let client = BreakdownClient::new(
            "http://localhost:9".to_string(),
            None,
            vec!["model-a".to_string()],
        );
        assert!(!client.has_credential());
        let err = futures_block_on(client.extract("script.pdf", "AAAA"));
        assert_matches!(err.unwrap_err(), BreakdownError::MissingCredential);
    }

    /// Minimal executor so the credential check is testable without a
    /// runtime-dependent mock server.
    fn futures_block_on<F: std::future::Future>(fut: F) -> F::Output {
        tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap()
            .block_on(fut)
    }
}
