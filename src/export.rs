//! Print/export of a recommendation.
//!
//! A [`Sheet`] bundles a recommendation with the gear it was made for and
//! renders as printable plain text or JSON. Files ending in `.json` get
//! JSON; everything else gets the text sheet.

use crate::catalog::{Camera, Lens, Scenario};
use crate::favorites::Favorite;
use crate::llm::Recommendation;
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to serialize sheet: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),
}

/// Everything printed on one settings sheet.
#[derive(Debug, Clone, Serialize)]
pub struct Sheet<'a> {
    pub camera: &'a Camera,
    pub lens: &'a Lens,
    pub scenario: &'a Scenario,
    pub recommendation: &'a Recommendation,
}

impl<'a> Sheet<'a> {
    pub fn new(
        camera: &'a Camera,
        lens: &'a Lens,
        scenario: &'a Scenario,
        recommendation: &'a Recommendation,
    ) -> Self {
        Self {
            camera,
            lens,
            scenario,
            recommendation,
        }
    }

    pub fn from_favorite(fav: &'a Favorite) -> Self {
        Self::new(&fav.camera, &fav.lens, &fav.scenario, &fav.recommendation)
    }
}

/// Plain-text rendering suitable for printing.
pub fn render_sheet(sheet: &Sheet<'_>) -> String {
    let rec = sheet.recommendation;
    let mut out = String::new();

    let _ = writeln!(out, "{} {}", sheet.scenario.icon, sheet.scenario.name);
    let _ = writeln!(out, "{} + {}", sheet.camera.model, sheet.lens.name);
    let _ = writeln!(out, "{}", "=".repeat(48));

    for (label, value) in rec.settings() {
        let _ = writeln!(out, "{:<14} {}", format!("{}:", label), value);
    }

    let _ = writeln!(out, "\nWhy these settings?\n  \"{}\"", rec.reason);

    let _ = writeln!(out, "\nPractical tips");
    for tip in &rec.tips {
        let _ = writeln!(out, "  - {}", tip);
    }

    let _ = writeln!(out, "\nComposition");
    for idea in &rec.composition {
        let _ = writeln!(out, "  - {}", idea);
    }

    if !rec.alerts.is_empty() {
        let _ = writeln!(out, "\nAlerts");
        for alert in &rec.alerts {
            let _ = writeln!(out, "  ! {}", alert);
        }
    }

    out
}

/// Write the sheet to `path` (JSON for `.json`, text otherwise).
pub fn write_export(path: &Path, sheet: &Sheet<'_>) -> Result<(), ExportError> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    let content = if is_json {
        serde_json::to_string_pretty(sheet)?
    } else {
        render_sheet(sheet)
    };

    std::fs::write(path, &content).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    log::info!("[EXPORT] Wrote {} ({} bytes)", path.display(), content.len());
    Ok(())
}

/// Copy the text sheet to the system clipboard.
pub fn copy_to_clipboard(sheet: &Sheet<'_>) -> Result<(), ExportError> {
    let text = render_sheet(sheet);
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.as_str())?;
    log::info!("[EXPORT] Copied {} chars to clipboard", text.len());
    Ok(())
}
