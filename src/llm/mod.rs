//! LLM domain — schema-constrained recommendation requests.
//!
//! External code should only use the items re-exported here.
//!
//! Providers:
//!   - Google Gemini Flash (gemini.rs)
//!   - Anthropic Claude Haiku (anthropic.rs)
//!
//! Shared:
//!   - provider.rs  — StructuredGenerator trait + provider metadata
//!   - prompts.rs   — prompt builder + response schema
//!   - requestor.rs — request/parse/fallback pipeline
//!   - limits.rs    — clamp answers to the gear's physical limits

pub mod anthropic;
mod error;
pub mod gemini;
pub mod limits;
pub mod prompts;
pub mod provider;
pub mod requestor;
pub mod types;

pub use error::LlmError;
pub use provider::{Provider, ProviderId, StructuredGenerator};
pub use requestor::{Produced, RequestOptions, Requestor, Source};
pub use types::Recommendation;
