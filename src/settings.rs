//! Runtime settings and provider resolution.
//!
//! Handles:
//! - Provider selection (LLM_PROVIDER override, else first configured key)
//! - API key storage (OS keychain via keyring crate + env var)
//! - Provider connection testing
//! - Answer language, clamp toggle and data directory

use crate::llm::anthropic::AnthropicClient;
use crate::llm::gemini::GeminiClient;
use crate::llm::prompts::DEFAULT_LANGUAGE;
use crate::llm::{LlmError, Provider, ProviderId, RequestOptions, StructuredGenerator};
use std::path::PathBuf;
use thiserror::Error;

/// Keychain service name under which API keys are stored.
pub const KEYCHAIN_SERVICE: &str = "photoset";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("keychain error: {0}")]
    Keyring(#[from] keyring::Error),

    #[error("provider '{0}' does not use an API key")]
    NoKeyNeeded(ProviderId),
}

/// Everything the session needs to know about its environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub provider: ProviderId,
    pub language: String,
    pub clamp_to_gear: bool,
    pub data_dir: PathBuf,
    pub gemini_model: Option<String>,
    pub anthropic_model: Option<String>,
}

impl Settings {
    /// Read settings from the process environment (after dotenv loading).
    pub fn from_env() -> Self {
        Self {
            provider: resolve_provider(),
            language: env_non_empty("PHOTOSET_LANGUAGE")
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            clamp_to_gear: !env_flag("PHOTOSET_TRUST_MODEL"),
            data_dir: data_dir(),
            gemini_model: env_non_empty("GEMINI_MODEL"),
            anthropic_model: env_non_empty("ANTHROPIC_MODEL"),
        }
    }

    pub fn request_options(&self) -> RequestOptions {
        RequestOptions {
            language: self.language.clone(),
            clamp_to_gear: self.clamp_to_gear,
        }
    }

    /// Instantiate the configured provider.
    ///
    /// A provider without a key degrades to offline, which always yields
    /// the fallback recommendation.
    pub fn build_provider(&self) -> Provider {
        self.build(self.provider)
    }

    /// Instantiate a specific provider with this environment's model overrides.
    pub fn build(&self, id: ProviderId) -> Provider {
        let model = match id {
            ProviderId::Gemini => self.gemini_model.as_deref(),
            ProviderId::Anthropic => self.anthropic_model.as_deref(),
            ProviderId::Offline => None,
        };
        build_provider(id, model)
    }
}

/// Construct a provider client with its key from env or keychain.
///
/// `model` overrides the provider's default model id.
pub fn build_provider(id: ProviderId, model: Option<&str>) -> Provider {
    match (id, api_key(id)) {
        (ProviderId::Gemini, Some(key)) => {
            let client = GeminiClient::new(key);
            Provider::Gemini(match model {
                Some(model) => client.with_model(model),
                None => client,
            })
        }
        (ProviderId::Anthropic, Some(key)) => {
            let client = AnthropicClient::new(key);
            Provider::Anthropic(match model {
                Some(model) => client.with_model(model),
                None => client,
            })
        }
        (ProviderId::Offline, _) => Provider::Offline,
        (other, None) => {
            log::warn!("[SETTINGS] No API key for {} — running offline", other);
            Provider::Offline
        }
    }
}

fn env_non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn env_flag(name: &str) -> bool {
    matches!(
        env_non_empty(name).as_deref().map(str::to_lowercase).as_deref(),
        Some("1" | "true" | "yes" | "on")
    )
}

/// Directory holding favorites: `PHOTOSET_DATA_DIR`, else `<data dir>/photoset`.
pub fn data_dir() -> PathBuf {
    if let Some(dir) = env_non_empty("PHOTOSET_DATA_DIR") {
        return PathBuf::from(dir);
    }
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("photoset")
}

// ── Provider resolution ──────────────────────────────────────────────

/// Determine which provider to use.
///
/// Priority:
/// 1. LLM_PROVIDER env var (explicit override)
/// 2. First provider with an API key set (env var or keychain)
/// 3. Offline
pub fn resolve_provider() -> ProviderId {
    if let Some(raw) = env_non_empty("LLM_PROVIDER") {
        match raw.parse::<ProviderId>() {
            Ok(id) => {
                log::info!("[SETTINGS] Provider override: {}", id);
                return id;
            }
            Err(e) => log::warn!("[SETTINGS] Ignoring LLM_PROVIDER: {}", e),
        }
    }

    for id in [ProviderId::Gemini, ProviderId::Anthropic] {
        if api_key(id).is_some() {
            return id;
        }
    }

    ProviderId::Offline
}

/// API key for a provider: env var first, then the OS keychain.
pub fn api_key(id: ProviderId) -> Option<String> {
    let env_key = id.env_key()?;
    if let Some(key) = env_non_empty(env_key) {
        return Some(key);
    }

    let entry = keyring::Entry::new(KEYCHAIN_SERVICE, id.as_str()).ok()?;
    match entry.get_password() {
        Ok(key) if !key.is_empty() => {
            log::info!("[SETTINGS] Loaded {} key from OS keychain", id);
            Some(key)
        }
        _ => None,
    }
}

/// Whether a provider can be used right now.
pub fn is_provider_configured(id: ProviderId) -> bool {
    id == ProviderId::Offline || api_key(id).is_some()
}

/// Save an API key to the OS keychain.
pub fn save_api_key(id: ProviderId, key: &str) -> Result<(), SettingsError> {
    if id.env_key().is_none() {
        return Err(SettingsError::NoKeyNeeded(id));
    }
    let entry = keyring::Entry::new(KEYCHAIN_SERVICE, id.as_str())?;
    entry.set_password(key)?;
    log::info!("[SETTINGS] API key saved for provider: {}", id);
    Ok(())
}

/// Send a minimal schema-constrained request and check for an answer.
pub async fn test_provider(provider: &Provider) -> Result<(), LlmError> {
    let schema = serde_json::json!({
        "type": "OBJECT",
        "properties": { "ok": { "type": "BOOLEAN" } },
        "required": ["ok"]
    });
    let start = std::time::Instant::now();
    let raw = provider
        .submit("Reply with the JSON object {\"ok\": true}.", &schema)
        .await?;
    let _: serde_json::Value = serde_json::from_str(raw.trim())?;
    log::info!(
        "[SETTINGS] Test {} — ok in {}ms",
        provider.id(),
        start.elapsed().as_millis()
    );
    Ok(())
}
