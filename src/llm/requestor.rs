//! RECOMMEND pipeline — gear + scenario → Recommendation.
//!
//! prompt → provider.submit(prompt, schema) → parse → (optional) clamp.
//! Never fails from the caller's point of view: any error along the way is
//! logged and replaced by [`Recommendation::fallback`].

use super::error::LlmError;
use super::limits::{self, LimitAdjustment};
use super::prompts::{self, DEFAULT_LANGUAGE};
use super::provider::StructuredGenerator;
use super::types::Recommendation;
use crate::catalog::{Camera, Lens, Scenario};

/// Knobs for the requestor.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// Language the model is asked to answer in.
    pub language: String,
    /// Rewrite model answers that exceed the gear's physical limits.
    pub clamp_to_gear: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            clamp_to_gear: true,
        }
    }
}

/// Where a recommendation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Model,
    Fallback,
}

/// A recommendation plus how it was produced.
#[derive(Debug, Clone)]
pub struct Produced {
    pub recommendation: Recommendation,
    pub source: Source,
    pub adjustments: Vec<LimitAdjustment>,
}

pub struct Requestor<G> {
    generator: G,
    options: RequestOptions,
}

impl<G: StructuredGenerator> Requestor<G> {
    pub fn new(generator: G) -> Self {
        Self::with_options(generator, RequestOptions::default())
    }

    pub fn with_options(generator: G, options: RequestOptions) -> Self {
        Self { generator, options }
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Always returns a well-formed recommendation (model answer or fallback).
    pub async fn request_recommendation(
        &self,
        camera: &Camera,
        lens: &Lens,
        scenario: &Scenario,
    ) -> Recommendation {
        self.request_detailed(camera, lens, scenario)
            .await
            .recommendation
    }

    /// Like [`request_recommendation`](Self::request_recommendation), but
    /// also reports the source and any clamp adjustments.
    pub async fn request_detailed(
        &self,
        camera: &Camera,
        lens: &Lens,
        scenario: &Scenario,
    ) -> Produced {
        log::info!(
            "[LLM] Provider: {} — {} {} + {} for '{}'",
            self.generator.name(),
            camera.brand,
            camera.model,
            lens.name,
            scenario.name
        );

        let parsed = match self.try_request(camera, lens, scenario).await {
            Ok(rec) => rec,
            Err(e) => {
                log::error!("[LLM] Recommendation request failed: {}", e);
                log::info!("[LLM] Parse result: fallback");
                return Produced {
                    recommendation: Recommendation::fallback(lens),
                    source: Source::Fallback,
                    adjustments: Vec::new(),
                };
            }
        };
        log::info!("[LLM] Parse result: success (mode={})", parsed.mode);

        let (recommendation, adjustments) = if self.options.clamp_to_gear {
            limits::enforce_gear_limits(parsed, camera, lens)
        } else {
            (parsed, Vec::new())
        };

        Produced {
            recommendation,
            source: Source::Model,
            adjustments,
        }
    }

    async fn try_request(
        &self,
        camera: &Camera,
        lens: &Lens,
        scenario: &Scenario,
    ) -> Result<Recommendation, LlmError> {
        let prompt =
            prompts::build_recommendation_prompt(camera, lens, scenario, &self.options.language);
        let schema = prompts::recommendation_schema();
        let raw = self.generator.submit(&prompt, &schema).await?;
        parse_recommendation(&raw)
    }
}

/// Parse service output into a Recommendation.
///
/// Tolerates surrounding whitespace and a Markdown code fence.
pub fn parse_recommendation(raw: &str) -> Result<Recommendation, LlmError> {
    let text = super::anthropic::strip_code_fences(raw);
    if text.is_empty() {
        return Err(LlmError::EmptyResponse);
    }
    match serde_json::from_str::<Recommendation>(&text) {
        Ok(rec) => Ok(rec),
        Err(e) => {
            log::warn!(
                "[LLM] Failed to parse Recommendation: {} — raw: {}",
                e,
                text.chars().take(200).collect::<String>()
            );
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fenced_json() {
        let raw = "```json\n{\"mode\":\"M\",\"iso\":\"100\",\"aperture\":\"f/8\",\"shutter\":\"1/60\",\"wb\":\"Auto\",\"focusMode\":\"AF-S\",\"focusPoints\":\"single\",\"metering\":\"spot\",\"reason\":\"r\",\"tips\":[],\"composition\":[],\"alerts\":[]}\n```";
        let rec = parse_recommendation(raw).unwrap();
        assert_eq!(rec.aperture, "f/8");
    }

    #[test]
    fn empty_text_is_an_error() {
        assert!(matches!(
            parse_recommendation("   "),
            Err(LlmError::EmptyResponse)
        ));
    }

    #[test]
    fn non_json_is_a_parse_error() {
        assert!(matches!(
            parse_recommendation("Sure! Here are your settings"),
            Err(LlmError::Parse(_))
        ));
    }
}
