//! Gear catalog — cameras, lenses, scenarios and the glossary.
//!
//! Everything here is static reference data. The collections are built
//! once on first access and never mutated afterwards; lookups hand out
//! clones so callers own what they select.
//!
//! Field names serialize in camelCase (`maxIso`, `maxAperture`, `isZoom`)
//! because favorites embed these records verbatim.

mod data;
pub mod suggest;

pub use suggest::suggested_lenses;

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// A camera body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Camera {
    pub id: String,
    pub brand: String,
    pub model: String,
    /// Highest native ISO the sensor supports.
    pub max_iso: u32,
}

/// A lens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lens {
    pub id: String,
    pub name: String,
    /// Widest stop as an f-number (smaller = wider opening).
    pub max_aperture: f64,
    pub is_zoom: bool,
}

/// A shooting scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub description: String,
}

/// One entry of the technical glossary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlossaryTerm {
    pub term: String,
    pub description: String,
}

impl Camera {
    /// "Brand Model", as shown in selection lists.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.model)
    }
}

impl Lens {
    /// The widest stop rendered as an f-number, e.g. `f/1.8` or `f/4`.
    pub fn max_aperture_label(&self) -> String {
        format_f_number(self.max_aperture)
    }
}

/// Render an f-number with the shortest decimal form (`1.8` → `f/1.8`, `4.0` → `f/4`).
pub fn format_f_number(value: f64) -> String {
    format!("f/{}", value)
}

static CAMERAS: LazyLock<Vec<Camera>> = LazyLock::new(data::cameras);
static LENSES: LazyLock<Vec<Lens>> = LazyLock::new(data::lenses);
static SCENARIOS: LazyLock<Vec<Scenario>> = LazyLock::new(data::scenarios);
static GLOSSARY: LazyLock<Vec<GlossaryTerm>> = LazyLock::new(data::glossary);

pub fn cameras() -> &'static [Camera] {
    &CAMERAS
}

pub fn lenses() -> &'static [Lens] {
    &LENSES
}

pub fn scenarios() -> &'static [Scenario] {
    &SCENARIOS
}

pub fn glossary() -> &'static [GlossaryTerm] {
    &GLOSSARY
}

pub fn find_camera(id: &str) -> Option<Camera> {
    CAMERAS.iter().find(|c| c.id == id).cloned()
}

pub fn find_lens(id: &str) -> Option<Lens> {
    LENSES.iter().find(|l| l.id == id).cloned()
}

pub fn find_scenario(id: &str) -> Option<Scenario> {
    SCENARIOS.iter().find(|s| s.id == id).cloned()
}

/// Case-insensitive glossary lookup by term.
pub fn find_term(term: &str) -> Option<&'static GlossaryTerm> {
    let needle = term.trim().to_lowercase();
    GLOSSARY.iter().find(|t| t.term.to_lowercase() == needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique_per_catalog() {
        let cams: HashSet<_> = cameras().iter().map(|c| &c.id).collect();
        assert_eq!(cams.len(), cameras().len());
        let lens: HashSet<_> = lenses().iter().map(|l| &l.id).collect();
        assert_eq!(lens.len(), lenses().len());
        let scen: HashSet<_> = scenarios().iter().map(|s| &s.id).collect();
        assert_eq!(scen.len(), scenarios().len());
    }

    #[test]
    fn catalog_values_are_physically_sane() {
        assert!(cameras().iter().all(|c| c.max_iso > 0));
        assert!(lenses().iter().all(|l| l.max_aperture > 0.0));
    }

    #[test]
    fn scenarios_cover_s1_to_s15() {
        for n in 1..=15 {
            let id = format!("s{}", n);
            assert!(find_scenario(&id).is_some(), "missing scenario {}", id);
        }
        assert_eq!(find_scenario("s1").unwrap().name, "Retrato");
    }

    #[test]
    fn unknown_ids_are_none() {
        assert!(find_camera("nope").is_none());
        assert!(find_lens("").is_none());
        assert!(find_scenario("s99").is_none());
    }

    #[test]
    fn f_number_uses_shortest_form() {
        assert_eq!(format_f_number(1.8), "f/1.8");
        assert_eq!(format_f_number(4.0), "f/4");
        assert_eq!(format_f_number(3.5), "f/3.5");
    }

    #[test]
    fn glossary_lookup_ignores_case() {
        let term = find_term("iso").expect("ISO should be in the glossary");
        assert_eq!(term.term, "ISO");
        assert!(find_term("not a term").is_none());
    }
}
