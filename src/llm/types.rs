//! Recommendation type — the JSON contract with the generation service.
//!
//! Field names serialize exactly as the response schema declares them
//! (`wb`, `focusMode`, `focusPoints`, ...). Every field is required when
//! deserializing; a response missing one is a schema violation.

use crate::catalog::Lens;
use serde::{Deserialize, Serialize};

/// Settings recommendation for one camera + lens + scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub mode: String,
    pub iso: String,
    pub aperture: String,
    pub shutter: String,
    pub wb: String,
    pub focus_mode: String,
    pub focus_points: String,
    pub metering: String,
    pub reason: String,
    pub tips: Vec<String>,
    pub composition: Vec<String>,
    pub alerts: Vec<String>,
}

pub const FALLBACK_REASON: &str = "There was a connection problem, but these are safe baseline settings for this scenario.";

impl Recommendation {
    /// Baseline settings used when the service call or the parse fails.
    ///
    /// Aperture is pinned to the lens's widest stop, so the fallback never
    /// asks for an opening the lens cannot produce.
    pub fn fallback(lens: &Lens) -> Self {
        Self {
            mode: "Manual".to_string(),
            iso: "400".to_string(),
            aperture: lens.max_aperture_label(),
            shutter: "1/125".to_string(),
            wb: "Auto".to_string(),
            focus_mode: "AF-S".to_string(),
            focus_points: "single center point".to_string(),
            metering: "matrix/average".to_string(),
            reason: FALLBACK_REASON.to_string(),
            tips: vec![
                "Check the ambient lighting".to_string(),
                "Use a tripod if needed".to_string(),
            ],
            composition: vec![
                "Rule of thirds".to_string(),
                "Keep the horizon level".to_string(),
            ],
            alerts: vec!["Make sure the battery is charged".to_string()],
        }
    }

    /// The eight technical settings as (label, value) pairs, in display order.
    pub fn settings(&self) -> [(&'static str, &str); 8] {
        [
            ("Mode", self.mode.as_str()),
            ("ISO", self.iso.as_str()),
            ("Aperture", self.aperture.as_str()),
            ("Shutter", self.shutter.as_str()),
            ("White balance", self.wb.as_str()),
            ("Focus", self.focus_mode.as_str()),
            ("Focus points", self.focus_points.as_str()),
            ("Metering", self.metering.as_str()),
        ]
    }
}
