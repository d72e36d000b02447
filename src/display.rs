//! Terminal rendering with light/dark themes.
//!
//! Colors go through `if_supports_color`, so piped output stays plain.

use crate::catalog::{Camera, Lens, Scenario};
use crate::favorites::Favorite;
use crate::llm::limits::LimitAdjustment;
use crate::llm::{Recommendation, Source};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use std::fmt::Write as _;

/// Presentation theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn accent(self, text: &str) -> String {
        match self {
            Theme::Light => text.if_supports_color(Stdout, |t| t.yellow()).to_string(),
            Theme::Dark => text.if_supports_color(Stdout, |t| t.bright_yellow()).to_string(),
        }
    }

    pub fn heading(self, text: &str) -> String {
        match self {
            Theme::Light => text.if_supports_color(Stdout, |t| t.bold()).to_string(),
            Theme::Dark => text
                .if_supports_color(Stdout, |t| t.bright_white().bold().to_string())
                .to_string(),
        }
    }

    pub fn muted(self, text: &str) -> String {
        match self {
            Theme::Light => text.if_supports_color(Stdout, |t| t.dimmed()).to_string(),
            Theme::Dark => text.if_supports_color(Stdout, |t| t.bright_black()).to_string(),
        }
    }

    pub fn info(self, text: &str) -> String {
        match self {
            Theme::Light => text.if_supports_color(Stdout, |t| t.blue()).to_string(),
            Theme::Dark => text.if_supports_color(Stdout, |t| t.bright_cyan()).to_string(),
        }
    }

    pub fn warn(self, text: &str) -> String {
        match self {
            Theme::Light => text.if_supports_color(Stdout, |t| t.red()).to_string(),
            Theme::Dark => text.if_supports_color(Stdout, |t| t.bright_red()).to_string(),
        }
    }
}

/// Full result card for a recommendation.
pub struct ResultCard<'a> {
    pub camera: &'a Camera,
    pub lens: &'a Lens,
    pub scenario: &'a Scenario,
    pub recommendation: &'a Recommendation,
    pub source: Option<Source>,
    pub adjustments: &'a [LimitAdjustment],
    pub is_favorite: bool,
}

pub fn render_result(theme: Theme, card: &ResultCard<'_>) -> String {
    let rec = card.recommendation;
    let mut out = String::new();

    let heart = if card.is_favorite { "♥" } else { "♡" };
    let _ = writeln!(
        out,
        "{} {} {}",
        card.scenario.icon,
        theme.heading(&card.scenario.name),
        theme.warn(heart)
    );
    let _ = writeln!(
        out,
        "{}",
        theme.muted(&format!("{} + {}", card.camera.model, card.lens.name))
    );
    if card.source == Some(Source::Fallback) {
        let _ = writeln!(
            out,
            "{}",
            theme.warn("Service unavailable — showing baseline settings")
        );
    }
    let _ = writeln!(out);

    for (label, value) in rec.settings() {
        let _ = writeln!(
            out,
            "  {} {}",
            theme.muted(&format!("{:<14}", label)),
            theme.heading(value)
        );
    }

    let _ = writeln!(out, "\n{}", theme.accent("Why these settings?"));
    let _ = writeln!(out, "  \"{}\"", rec.reason);

    let _ = writeln!(out, "\n{}", theme.accent("Practical tips"));
    for tip in &rec.tips {
        let _ = writeln!(out, "  ✓ {}", tip);
    }

    let _ = writeln!(out, "\n{}", theme.info("Composition"));
    for idea in &rec.composition {
        let _ = writeln!(out, "  • {}", idea);
    }

    if !rec.alerts.is_empty() {
        let _ = writeln!(out, "\n{}", theme.warn("Important alerts"));
        for alert in &rec.alerts {
            let _ = writeln!(out, "  ⚠ {}", alert);
        }
    }

    for adj in card.adjustments {
        let _ = writeln!(
            out,
            "{}",
            theme.muted(&format!(
                "  ({} '{}' adjusted to '{}')",
                adj.field, adj.original, adj.adjusted
            ))
        );
    }

    out
}

/// One line per favorite: id, scenario, gear, ISO and aperture.
pub fn render_favorite_line(theme: Theme, fav: &Favorite) -> String {
    format!(
        "{} {} {} — {} + {} — ISO {} · {} {}",
        theme.accent(&fav.id),
        fav.scenario.icon,
        theme.heading(&fav.scenario.name),
        fav.camera.model,
        fav.lens.name,
        fav.recommendation.iso,
        fav.recommendation.aperture,
        theme.muted(&format!("({})", fav.date)),
    )
}

/// Suggested lenses for a scenario, with the versatile-zoom hint when empty.
pub fn render_suggestions(theme: Theme, scenario: &Scenario, lenses: &[Lens]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        theme.info(&format!("Recommended lenses for {}", scenario.name))
    );
    if lenses.is_empty() {
        let _ = writeln!(
            out,
            "  {}",
            theme.muted("Versatile lenses such as a 24-70mm are great options for this scenario.")
        );
    }
    for lens in lenses {
        let _ = writeln!(out, "  {} {}", theme.accent(&lens.id), lens.name);
    }
    out
}
