//! Recommendation prompt and response schema.
//!
//! These two values are the contract between PhotoSet and the generation
//! service. The schema lists exactly the fields of [`Recommendation`];
//! change both together.
//!
//! [`Recommendation`]: super::types::Recommendation

use crate::catalog::{Camera, Lens, Scenario};

/// Language the model is asked to answer in when none is configured.
pub const DEFAULT_LANGUAGE: &str = "Brazilian Portuguese";

/// Scalar string fields of the response, in schema order.
pub const STRING_FIELDS: [&str; 9] = [
    "mode",
    "iso",
    "aperture",
    "shutter",
    "wb",
    "focusMode",
    "focusPoints",
    "metering",
    "reason",
];

/// Fields holding arrays of strings.
pub const LIST_FIELDS: [&str; 3] = ["tips", "composition", "alerts"];

/// Build the instruction for one camera + lens + scenario.
///
/// Embeds both physical limits: the aperture f-number may not go below the
/// lens's widest stop and the ISO may not exceed the camera maximum.
pub fn build_recommendation_prompt(
    camera: &Camera,
    lens: &Lens,
    scenario: &Scenario,
    language: &str,
) -> String {
    let max_aperture = lens.max_aperture_label();
    format!(
        r#"As a master photographer, provide detailed camera settings for the following setup:
Camera: {brand} {model} (max ISO: {max_iso})
Lens: {lens_name} (max aperture: {max_aperture})
Scenario: {scenario_name} ({scenario_description})

IMPORTANT:
1. Respect the physical limits! The lens opens no wider than {max_aperture}: never recommend a smaller f-number than {max_aperture_value}.
2. The camera's maximum ISO is {max_iso}: never recommend a higher ISO.
3. Answer in {language}.

Return a JSON object with exactly these fields:
{{
  "mode": "Shooting mode (e.g. Aperture priority Av/A)",
  "iso": "Recommended ISO value",
  "aperture": "Recommended f/ aperture",
  "shutter": "Recommended shutter speed",
  "wb": "Recommended white balance",
  "focusMode": "Focus mode (e.g. AF-S, AF-C)",
  "focusPoints": "Focus point configuration",
  "metering": "Metering mode",
  "reason": "Two-sentence teaching explanation of why these settings work",
  "tips": ["Practical tip 1", "Practical tip 2"],
  "composition": ["Composition idea 1", "Composition idea 2"],
  "alerts": ["Important equipment warning"]
}}"#,
        brand = camera.brand,
        model = camera.model,
        max_iso = camera.max_iso,
        lens_name = lens.name,
        max_aperture = max_aperture,
        max_aperture_value = lens.max_aperture,
        scenario_name = scenario.name,
        scenario_description = scenario.description,
        language = language,
    )
}

/// Response schema in the OpenAPI subset accepted by `responseSchema`.
///
/// All twelve fields are required.
pub fn recommendation_schema() -> serde_json::Value {
    let mut properties = serde_json::Map::new();
    for field in STRING_FIELDS {
        properties.insert(field.to_string(), serde_json::json!({ "type": "STRING" }));
    }
    for field in LIST_FIELDS {
        properties.insert(
            field.to_string(),
            serde_json::json!({ "type": "ARRAY", "items": { "type": "STRING" } }),
        );
    }
    let required: Vec<&str> = STRING_FIELDS.iter().chain(LIST_FIELDS.iter()).copied().collect();

    serde_json::json!({
        "type": "OBJECT",
        "properties": properties,
        "required": required,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{find_camera, find_lens, find_scenario};

    #[test]
    fn prompt_embeds_gear_and_limits() {
        let camera = find_camera("c1").unwrap();
        let lens = find_lens("l1").unwrap();
        let scenario = find_scenario("s1").unwrap();
        let prompt = build_recommendation_prompt(&camera, &lens, &scenario, DEFAULT_LANGUAGE);

        assert!(prompt.contains("Canon EOS Rebel T7"));
        assert!(prompt.contains("max ISO: 6400"));
        assert!(prompt.contains("Canon EF 50mm f/1.8 STM"));
        assert!(prompt.contains("max aperture: f/1.8"));
        assert!(prompt.contains("Retrato"));
        assert!(prompt.contains(&scenario.description));
        assert!(prompt.contains("never recommend a smaller f-number than 1.8"));
        assert!(prompt.contains("never recommend a higher ISO"));
        assert!(prompt.contains("Answer in Brazilian Portuguese"));
    }

    #[test]
    fn schema_requires_all_twelve_fields() {
        let schema = recommendation_schema();
        let required = schema["required"].as_array().unwrap();
        assert_eq!(required.len(), 12);
        let props = schema["properties"].as_object().unwrap();
        assert_eq!(props.len(), 12);
        assert_eq!(props["reason"]["type"], "STRING");
        assert_eq!(props["alerts"]["type"], "ARRAY");
        assert_eq!(props["alerts"]["items"]["type"], "STRING");
    }
}
