//! Gemini Flash client — `generateContent` with a response schema.
//!
//! Differences from the Anthropic client:
//! - API key in the `x-goog-api-key` header, never in the URL
//! - `responseMimeType: "application/json"` + `responseSchema` constrain the
//!   output server-side, so no fence stripping is needed
//! - Text lives in `candidates[0].content.parts[0].text`
//! - Token usage in `usageMetadata`

use super::error::LlmError;
use super::provider::StructuredGenerator;

pub const GEMINI_MODEL: &str = "gemini-2.0-flash";
pub const GEMINI_MAX_TOKENS: u32 = 1024;
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini Flash pricing:
/// Input:  $0.10 per 1M tokens (under 128k context)
/// Output: $0.40 per 1M tokens (under 128k context)
const INPUT_COST_PER_MILLION: f64 = 0.10;
const OUTPUT_COST_PER_MILLION: f64 = 0.40;

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            model: GEMINI_MODEL.to_string(),
            base_url: GEMINI_BASE_URL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

/// Request body for a schema-constrained `generateContent` call.
pub fn build_request_body(prompt: &str, schema: &serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "contents": [
            {
                "role": "user",
                "parts": [
                    {
                        "text": prompt
                    }
                ]
            }
        ],
        "generationConfig": {
            "maxOutputTokens": GEMINI_MAX_TOKENS,
            "temperature": 0.4,
            "responseMimeType": "application/json",
            "responseSchema": schema
        }
    })
}

impl StructuredGenerator for GeminiClient {
    fn name(&self) -> &'static str {
        "gemini"
    }

    async fn submit(
        &self,
        prompt: &str,
        schema: &serde_json::Value,
    ) -> Result<String, LlmError> {
        if self.api_key.is_empty() {
            return Err(LlmError::MissingApiKey("gemini"));
        }

        log::info!("[GEMINI] Model: {}", self.model);
        let start = std::time::Instant::now();

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .header("content-type", "application/json")
            .json(&build_request_body(prompt, schema))
            .send()
            .await
            .map_err(|e| LlmError::Http(e.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Status {
                provider: "gemini",
                status: status.as_u16(),
                body: body.chars().take(300).collect(),
            });
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| LlmError::Http(e.without_url()))?;
        log::info!("[GEMINI] API latency: {}ms", start.elapsed().as_millis());
        log_usage(&body);

        extract_candidate_text(&body).ok_or(LlmError::EmptyResponse)
    }
}

/// Extract text content from a `generateContent` response.
///
/// Gemini format: candidates[0].content.parts[0].text
pub fn extract_candidate_text(body: &serde_json::Value) -> Option<String> {
    body.get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
        .map(|s| s.to_string())
}

fn log_usage(body: &serde_json::Value) {
    let Some(usage) = body.get("usageMetadata") else {
        return;
    };
    let input_tokens = usage["promptTokenCount"].as_u64().unwrap_or(0);
    let output_tokens = usage["candidatesTokenCount"].as_u64().unwrap_or(0);
    if input_tokens == 0 && output_tokens == 0 {
        return;
    }
    log::info!("[GEMINI] Input tokens: {}", input_tokens);
    log::info!("[GEMINI] Output tokens: {}", output_tokens);
    let cost = (input_tokens as f64 * INPUT_COST_PER_MILLION
        + output_tokens as f64 * OUTPUT_COST_PER_MILLION)
        / 1_000_000.0;
    log::info!("[GEMINI] Estimated cost: ${:.6}", cost);
}
