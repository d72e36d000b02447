//! Request → parse → fallback/clamp behavior of the requestor.

mod common;

use common::{model_answer, ScriptedGenerator};
use photoset_lib::catalog::{self, find_camera, find_lens, find_scenario};
use photoset_lib::llm::types::FALLBACK_REASON;
use photoset_lib::llm::{LlmError, Recommendation, RequestOptions, Requestor, Source};

fn gear(camera: &str, lens: &str, scenario: &str) -> (catalog::Camera, catalog::Lens, catalog::Scenario) {
    (
        find_camera(camera).unwrap(),
        find_lens(lens).unwrap(),
        find_scenario(scenario).unwrap(),
    )
}

#[tokio::test]
async fn service_failure_yields_fallback() {
    let (camera, lens, scenario) = gear("c1", "l1", "s1");
    let requestor = Requestor::new(ScriptedGenerator::failing());

    let produced = requestor.request_detailed(&camera, &lens, &scenario).await;

    assert_eq!(produced.source, Source::Fallback);
    assert!(produced.adjustments.is_empty());
    assert_eq!(produced.recommendation, Recommendation::fallback(&lens));
}

#[tokio::test]
async fn retrato_on_rebel_t7_with_fifty_falls_back_to_f_1_8() {
    let (camera, lens, scenario) = gear("c1", "l1", "s1");
    assert_eq!(camera.max_iso, 6400);
    assert_eq!(scenario.name, "Retrato");

    let requestor = Requestor::new(ScriptedGenerator::failing());
    let rec = requestor
        .request_recommendation(&camera, &lens, &scenario)
        .await;

    assert_eq!(rec.mode, "Manual");
    assert_eq!(rec.iso, "400");
    assert_eq!(rec.aperture, "f/1.8");
    assert_eq!(rec.shutter, "1/125");
    assert_eq!(rec.wb, "Auto");
    assert_eq!(rec.focus_mode, "AF-S");
    assert_eq!(rec.reason, FALLBACK_REASON);
    assert_eq!(rec.tips.len(), 2);
    assert_eq!(rec.composition.len(), 2);
    assert_eq!(rec.alerts.len(), 1);
}

#[tokio::test]
async fn invalid_json_yields_fallback() {
    let (camera, lens, scenario) = gear("c3", "l13", "s7");
    for raw in [
        "I would suggest f/2.8 and ISO 800.",
        "{\"mode\": \"Manual\"}",
        "",
    ] {
        let requestor = Requestor::new(ScriptedGenerator::answering(raw));
        let produced = requestor.request_detailed(&camera, &lens, &scenario).await;
        assert_eq!(produced.source, Source::Fallback, "raw: {:?}", raw);
        assert_eq!(produced.recommendation, Recommendation::fallback(&lens));
    }
}

#[tokio::test]
async fn fallback_aperture_matches_every_lens() {
    let (camera, _, scenario) = gear("c1", "l1", "s1");
    for lens in catalog::lenses() {
        let requestor = Requestor::new(ScriptedGenerator::failing());
        let rec = requestor
            .request_recommendation(&camera, lens, &scenario)
            .await;
        assert_eq!(rec.aperture, lens.max_aperture_label(), "lens {}", lens.id);
    }
}

#[tokio::test]
async fn valid_answer_is_used_and_prompt_names_the_gear() {
    let (camera, lens, scenario) = gear("c1", "l1", "s1");
    let generator = ScriptedGenerator::answering(&model_answer("f/2.0", "200"));
    let requestor = Requestor::new(generator);

    let produced = requestor.request_detailed(&camera, &lens, &scenario).await;

    assert_eq!(produced.source, Source::Model);
    assert!(produced.adjustments.is_empty());
    assert_eq!(produced.recommendation.aperture, "f/2.0");
    assert_eq!(produced.recommendation.iso, "200");
    assert_eq!(produced.recommendation.metering, "spot");

    let prompts = requestor.generator().prompts();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("Canon EOS Rebel T7"));
    assert!(prompts[0].contains("max ISO: 6400"));
    assert!(prompts[0].contains("Canon EF 50mm f/1.8 STM"));
    assert!(prompts[0].contains("Retrato"));
}

#[tokio::test]
async fn answer_beyond_gear_is_clamped_with_alerts() {
    let (camera, lens, scenario) = gear("c1", "l1", "s1");
    let requestor = Requestor::new(ScriptedGenerator::answering(&model_answer("f/1.2", "12800")));

    let produced = requestor.request_detailed(&camera, &lens, &scenario).await;

    assert_eq!(produced.source, Source::Model);
    assert_eq!(produced.recommendation.aperture, "f/1.8");
    assert_eq!(produced.recommendation.iso, "6400");
    assert_eq!(produced.adjustments.len(), 2);
    assert_eq!(produced.adjustments[0].field, "aperture");
    assert_eq!(produced.adjustments[0].original, "f/1.2");
    assert_eq!(produced.adjustments[1].field, "iso");
    assert_eq!(produced.recommendation.alerts.len(), 2);
}

#[tokio::test]
async fn trusting_the_model_skips_the_clamp() {
    let (camera, lens, scenario) = gear("c1", "l1", "s1");
    let options = RequestOptions {
        clamp_to_gear: false,
        ..RequestOptions::default()
    };
    let requestor = Requestor::with_options(
        ScriptedGenerator::answering(&model_answer("f/1.2", "12800")),
        options,
    );

    let produced = requestor.request_detailed(&camera, &lens, &scenario).await;

    assert_eq!(produced.recommendation.aperture, "f/1.2");
    assert_eq!(produced.recommendation.iso, "12800");
    assert!(produced.adjustments.is_empty());
}

#[tokio::test]
async fn language_option_reaches_the_prompt() {
    let (camera, lens, scenario) = gear("c2", "l3", "s11");
    let options = RequestOptions {
        language: "English".to_string(),
        ..RequestOptions::default()
    };
    let requestor = Requestor::with_options(
        ScriptedGenerator::new(vec![Err(LlmError::EmptyResponse)]),
        options,
    );
    requestor.request_detailed(&camera, &lens, &scenario).await;
    assert!(requestor.generator().prompts()[0].contains("Answer in English"));
}
