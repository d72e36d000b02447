//! Generation provider trait — the "structured text generation service".
//!
//! One operation: submit a prompt plus a response schema, get back the raw
//! JSON text or an error. The requestor only sees this trait, so providers
//! can be swapped without touching the fallback logic.

use super::anthropic::AnthropicClient;
use super::error::LlmError;
use super::gemini::GeminiClient;
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::str::FromStr;

/// A service that answers a prompt with JSON constrained by a schema.
pub trait StructuredGenerator {
    /// Short provider id used in log lines.
    fn name(&self) -> &'static str;

    /// Send `prompt` and ask for output matching `schema`.
    fn submit(
        &self,
        prompt: &str,
        schema: &serde_json::Value,
    ) -> impl Future<Output = Result<String, LlmError>> + Send;
}

/// Known provider ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    Gemini,
    Anthropic,
    Offline,
}

impl ProviderId {
    pub fn as_str(self) -> &'static str {
        match self {
            ProviderId::Gemini => "gemini",
            ProviderId::Anthropic => "anthropic",
            ProviderId::Offline => "offline",
        }
    }

    /// Environment variable holding this provider's API key.
    pub fn env_key(self) -> Option<&'static str> {
        match self {
            ProviderId::Gemini => Some("GEMINI_API_KEY"),
            ProviderId::Anthropic => Some("ANTHROPIC_API_KEY"),
            ProviderId::Offline => None,
        }
    }
}

impl FromStr for ProviderId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "gemini" => Ok(ProviderId::Gemini),
            "anthropic" => Ok(ProviderId::Anthropic),
            "offline" => Ok(ProviderId::Offline),
            other => Err(format!("Unknown provider: {}", other)),
        }
    }
}

impl std::fmt::Display for ProviderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provider metadata shown by `photoset provider list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderInfo {
    pub id: ProviderId,
    pub name: String,
    pub env_key: Option<String>,
    pub schema_mode: String,
}

/// All known providers and their display info.
pub fn all_providers() -> Vec<ProviderInfo> {
    vec![
        ProviderInfo {
            id: ProviderId::Gemini,
            name: "Gemini Flash — native JSON schema".to_string(),
            env_key: Some("GEMINI_API_KEY".to_string()),
            schema_mode: "responseSchema".to_string(),
        },
        ProviderInfo {
            id: ProviderId::Anthropic,
            name: "Claude Haiku — schema in system prompt".to_string(),
            env_key: Some("ANTHROPIC_API_KEY".to_string()),
            schema_mode: "prompt".to_string(),
        },
        ProviderInfo {
            id: ProviderId::Offline,
            name: "Offline — baseline settings only".to_string(),
            env_key: None,
            schema_mode: "none".to_string(),
        },
    ]
}

/// The concrete provider chosen at startup.
pub enum Provider {
    Gemini(GeminiClient),
    Anthropic(AnthropicClient),
    Offline,
}

impl Provider {
    pub fn id(&self) -> ProviderId {
        match self {
            Provider::Gemini(_) => ProviderId::Gemini,
            Provider::Anthropic(_) => ProviderId::Anthropic,
            Provider::Offline => ProviderId::Offline,
        }
    }
}

impl StructuredGenerator for Provider {
    fn name(&self) -> &'static str {
        self.id().as_str()
    }

    async fn submit(
        &self,
        prompt: &str,
        schema: &serde_json::Value,
    ) -> Result<String, LlmError> {
        match self {
            Provider::Gemini(client) => client.submit(prompt, schema).await,
            Provider::Anthropic(client) => client.submit(prompt, schema).await,
            Provider::Offline => Err(LlmError::MissingApiKey("offline")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_info_matches_ids() {
        for info in all_providers() {
            assert_eq!(info.env_key.as_deref(), info.id.env_key());
            assert!(!info.schema_mode.is_empty());
        }
    }

    #[test]
    fn provider_ids_parse_case_insensitively() {
        assert_eq!("Gemini".parse::<ProviderId>().unwrap(), ProviderId::Gemini);
        assert_eq!(" anthropic ".parse::<ProviderId>().unwrap(), ProviderId::Anthropic);
        assert_eq!("offline".parse::<ProviderId>().unwrap(), ProviderId::Offline);
        assert!("openai".parse::<ProviderId>().is_err());
    }

    #[test]
    fn every_provider_is_listed() {
        let ids: Vec<ProviderId> = all_providers().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![ProviderId::Gemini, ProviderId::Anthropic, ProviderId::Offline]);
    }

    #[tokio::test]
    async fn offline_provider_always_fails() {
        let err = Provider::Offline
            .submit("anything", &serde_json::json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, LlmError::MissingApiKey("offline")));
    }
}
