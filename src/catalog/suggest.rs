//! Scenario → lens suggestions.
//!
//! A fixed rule table maps groups of scenario ids to a lens criterion.
//! The first group containing the scenario wins; scenarios outside every
//! group fall through to the versatile-zoom default. Results keep catalog
//! order and are capped at [`MAX_SUGGESTIONS`].

use super::{lenses, Lens, Scenario};

pub const MAX_SUGGESTIONS: usize = 4;

/// What a lens must satisfy to be suggested.
#[derive(Debug, Clone, Copy)]
pub enum Criterion {
    /// Lens name contains any of these substrings (focal lengths, "Macro").
    NameContains(&'static [&'static str]),
    /// Widest f-number is at most this value.
    ApertureAtMost(f64),
}

impl Criterion {
    pub fn matches(&self, lens: &Lens) -> bool {
        match self {
            Criterion::NameContains(needles) => needles.iter().any(|n| lens.name.contains(n)),
            Criterion::ApertureAtMost(limit) => lens.max_aperture <= *limit,
        }
    }
}

/// One row of the suggestion table.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionRule {
    pub group: &'static str,
    pub scenario_ids: &'static [&'static str],
    pub criterion: Criterion,
}

pub const RULES: &[SuggestionRule] = &[
    SuggestionRule {
        group: "portrait",
        scenario_ids: &["s1", "s2", "s15"],
        criterion: Criterion::NameContains(&["50mm", "85mm", "70-200mm"]),
    },
    SuggestionRule {
        group: "wide",
        scenario_ids: &["s3", "s4", "s6"],
        criterion: Criterion::NameContains(&["10-18mm", "16-35mm", "14mm", "24mm"]),
    },
    SuggestionRule {
        group: "close-up",
        scenario_ids: &["s8", "s9", "s12"],
        criterion: Criterion::NameContains(&["Macro", "60mm", "100mm", "50mm"]),
    },
    SuggestionRule {
        group: "telephoto",
        scenario_ids: &["s10", "s11"],
        criterion: Criterion::NameContains(&["70-200mm", "70-300mm", "55-200mm"]),
    },
    SuggestionRule {
        group: "low-light",
        scenario_ids: &["s5", "s13", "s14"],
        criterion: Criterion::ApertureAtMost(2.8),
    },
];

pub const DEFAULT_RULE: SuggestionRule = SuggestionRule {
    group: "versatile",
    scenario_ids: &[],
    criterion: Criterion::NameContains(&["18-55mm", "24-70mm"]),
};

/// The rule that applies to a scenario id.
pub fn rule_for(scenario_id: &str) -> &'static SuggestionRule {
    RULES
        .iter()
        .find(|r| r.scenario_ids.contains(&scenario_id))
        .unwrap_or(&DEFAULT_RULE)
}

/// Lenses from the catalog worth suggesting for a scenario (at most four).
pub fn suggested_lenses(scenario: &Scenario) -> Vec<Lens> {
    suggest_from(lenses(), scenario)
}

/// Same filter over an arbitrary lens list.
pub fn suggest_from(candidates: &[Lens], scenario: &Scenario) -> Vec<Lens> {
    let rule = rule_for(&scenario.id);
    candidates
        .iter()
        .filter(|l| rule.criterion.matches(l))
        .take(MAX_SUGGESTIONS)
        .cloned()
        .collect()
}
