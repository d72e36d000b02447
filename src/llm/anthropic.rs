//! Anthropic Claude client — Messages API, non-streaming.
//!
//! The Messages API has no server-side schema mode, so the schema is put
//! into the system prompt and the answer is unwrapped from any Markdown
//! code fence before it reaches the parser.

use super::error::LlmError;
use super::provider::StructuredGenerator;

pub const ANTHROPIC_MODEL: &str = "claude-haiku-4-5-20251001";
pub const ANTHROPIC_MAX_TOKENS: u32 = 1024;
pub const ANTHROPIC_URL: &str = "https://api.anthropic.com/v1/messages";

/// Claude Haiku 4.5 pricing:
/// Input:  $1 per 1M tokens
/// Output: $5 per 1M tokens
const INPUT_COST_PER_MILLION: f64 = 1.0;
const OUTPUT_COST_PER_MILLION: f64 = 5.0;

const SYSTEM_PREAMBLE: &str = "You are a photography settings engine. ALWAYS respond with a single JSON object that validates against the JSON schema below. No prose, no markdown, no explanation.";

pub struct AnthropicClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    url: String,
}

impl AnthropicClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            model: ANTHROPIC_MODEL.to_string(),
            url: ANTHROPIC_URL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }
}

/// System prompt carrying the response schema.
pub fn build_system_prompt(schema: &serde_json::Value) -> String {
    let schema_str = serde_json::to_string_pretty(schema).unwrap_or_default();
    format!("{}\n\n<schema>\n{}\n</schema>", SYSTEM_PREAMBLE, schema_str)
}

impl StructuredGenerator for AnthropicClient {
    fn name(&self) -> &'static str {
        "anthropic"
    }

    async fn submit(
        &self,
        prompt: &str,
        schema: &serde_json::Value,
    ) -> Result<String, LlmError> {
        if self.api_key.is_empty() {
            return Err(LlmError::MissingApiKey("anthropic"));
        }

        log::info!("[ANTHROPIC] Model: {}", self.model);
        let start = std::time::Instant::now();

        let response = self
            .http
            .post(&self.url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&serde_json::json!({
                "model": self.model,
                "max_tokens": ANTHROPIC_MAX_TOKENS,
                "system": build_system_prompt(schema),
                "messages": [{"role": "user", "content": prompt}]
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Status {
                provider: "anthropic",
                status: status.as_u16(),
                body: body.chars().take(300).collect(),
            });
        }

        let body: serde_json::Value = response.json().await?;
        log::info!("[ANTHROPIC] API latency: {}ms", start.elapsed().as_millis());

        if let Some(usage) = body.get("usage") {
            let input_tokens = usage["input_tokens"].as_u64().unwrap_or(0);
            let output_tokens = usage["output_tokens"].as_u64().unwrap_or(0);
            let cost = estimated_cost(input_tokens, output_tokens);
            log::info!(
                "[ANTHROPIC] Tokens: {} in / {} out, estimated cost ${:.6}",
                input_tokens,
                output_tokens,
                cost
            );
        }

        let text = extract_text(&body).ok_or(LlmError::EmptyResponse)?;
        Ok(strip_code_fences(&text))
    }
}

/// Estimated USD cost of one call.
pub fn estimated_cost(input_tokens: u64, output_tokens: u64) -> f64 {
    (input_tokens as f64 * INPUT_COST_PER_MILLION + output_tokens as f64 * OUTPUT_COST_PER_MILLION)
        / 1_000_000.0
}

/// First text block of a Messages API response.
pub fn extract_text(body: &serde_json::Value) -> Option<String> {
    body.get("content")?
        .as_array()?
        .iter()
        .find(|block| block.get("type").and_then(|t| t.as_str()) == Some("text"))?
        .get("text")?
        .as_str()
        .map(|s| s.to_string())
}

/// Remove a surrounding ```json ... ``` fence, if any.
pub fn strip_code_fences(text: &str) -> String {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed.to_string();
    };
    // Drop the info string ("json") on the opening line.
    let body = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };
    body.trim_end()
        .strip_suffix("```")
        .unwrap_or(body)
        .trim()
        .to_string()
}
