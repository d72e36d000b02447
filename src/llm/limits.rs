//! Gear-limit clamp for model answers.
//!
//! The prompt asks the model to stay within the lens's widest stop and the
//! camera's maximum ISO; this module makes sure it did. Offending numbers
//! are rewritten in place (the rest of the text is kept) and every rewrite
//! is reported back and appended to the recommendation's alerts.

use super::types::Recommendation;
use crate::catalog::{Camera, Lens};
use regex::{Captures, Regex};
use std::sync::LazyLock;

// f/1.8, F2.8, f / 4
static F_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bf\s*/?\s*(\d+(?:[.,]\d+)?)").expect("Invalid regex")
});

// Aperture given as a bare number: "2.8"
static BARE_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+(?:[.,]\d+)?)\s*$").expect("Invalid regex")
});

// 400, 3200, 12.800, 12,800
static ISO_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\d{1,3}(?:[.,]\d{3})+|\d+").expect("Invalid regex")
});

/// One rewrite applied to a field.
#[derive(Debug, Clone, PartialEq)]
pub struct LimitAdjustment {
    pub field: &'static str,
    pub original: String,
    pub adjusted: String,
}

/// Clamp aperture and ISO to what the gear can do.
pub fn enforce_gear_limits(
    mut rec: Recommendation,
    camera: &Camera,
    lens: &Lens,
) -> (Recommendation, Vec<LimitAdjustment>) {
    let mut adjustments = Vec::new();

    let aperture = clamp_aperture(&rec.aperture, lens);
    if aperture != rec.aperture {
        log::warn!(
            "[LLM] Aperture '{}' is wider than {} allows, clamped to '{}'",
            rec.aperture,
            lens.name,
            aperture
        );
        rec.alerts.push(format!(
            "Aperture adjusted to {}: the {} does not open wider than that.",
            lens.max_aperture_label(),
            lens.name
        ));
        adjustments.push(LimitAdjustment {
            field: "aperture",
            original: std::mem::replace(&mut rec.aperture, aperture.clone()),
            adjusted: aperture,
        });
    }

    let iso = clamp_iso(&rec.iso, camera.max_iso);
    if iso != rec.iso {
        log::warn!(
            "[LLM] ISO '{}' exceeds the {} maximum, clamped to '{}'",
            rec.iso,
            camera.model,
            iso
        );
        rec.alerts.push(format!(
            "ISO adjusted to {}: the {} does not go higher natively.",
            camera.max_iso,
            camera.display_name()
        ));
        adjustments.push(LimitAdjustment {
            field: "iso",
            original: std::mem::replace(&mut rec.iso, iso.clone()),
            adjusted: iso,
        });
    }

    (rec, adjustments)
}

fn parse_decimal(raw: &str) -> Option<f64> {
    raw.replace(',', ".").parse().ok()
}

/// Rewrite every f-number wider than the lens's widest stop.
pub fn clamp_aperture(aperture: &str, lens: &Lens) -> String {
    let too_wide = |value: f64| value + 1e-9 < lens.max_aperture;

    if F_NUMBER_RE.is_match(aperture) {
        return F_NUMBER_RE
            .replace_all(aperture, |caps: &Captures| match parse_decimal(&caps[1]) {
                Some(v) if too_wide(v) => lens.max_aperture_label(),
                _ => caps[0].to_string(),
            })
            .into_owned();
    }

    if let Some(caps) = BARE_NUMBER_RE.captures(aperture) {
        if let Some(v) = parse_decimal(&caps[1]) {
            if too_wide(v) {
                return lens.max_aperture_label();
            }
        }
    }

    aperture.to_string()
}

/// Rewrite every ISO number above the camera maximum.
pub fn clamp_iso(iso: &str, max_iso: u32) -> String {
    ISO_NUMBER_RE
        .replace_all(iso, |caps: &Captures| {
            let digits: String = caps[0].chars().filter(|c| c.is_ascii_digit()).collect();
            // A run too long for u64 is far above any camera maximum.
            match digits.parse::<u64>() {
                Ok(v) if v <= u64::from(max_iso) => caps[0].to_string(),
                _ => max_iso.to_string(),
            }
        })
        .into_owned()
}
