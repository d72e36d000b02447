//! Advisory session — selections, current recommendation and favorites.
//!
//! One explicit state object replaces ambient globals: front-ends hold an
//! `AdvisorySession` and call into it for every user action. Favorites are
//! loaded from the store when the session opens and written back after
//! every change to the collection.

use crate::catalog::{self, Camera, Lens, Scenario};
use crate::favorites::{favorite_id, Favorite, FavoriteStore};
use crate::llm::{Produced, Recommendation, Requestor, Source, StructuredGenerator};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("unknown camera '{0}'")]
    UnknownCamera(String),

    #[error("unknown lens '{0}'")]
    UnknownLens(String),

    #[error("unknown scenario '{0}'")]
    UnknownScenario(String),

    #[error("select a camera, a lens and a scenario first")]
    IncompleteSelection,

    #[error("a recommendation request is already in progress")]
    RequestPending,

    #[error("no recommendation to save — generate one first")]
    NoRecommendation,

    #[error("no favorite with id '{0}'")]
    UnknownFavorite(String),
}

/// The user's current picks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub camera: Option<Camera>,
    pub lens: Option<Lens>,
    pub scenario: Option<Scenario>,
}

impl Selection {
    /// All three picks, if complete.
    pub fn complete(&self) -> Option<(&Camera, &Lens, &Scenario)> {
        Some((self.camera.as_ref()?, self.lens.as_ref()?, self.scenario.as_ref()?))
    }
}

/// Holds the pending flag up until dropped, including when the request
/// future itself is dropped mid-flight.
struct PendingGuard<'a>(&'a mut bool);

impl<'a> PendingGuard<'a> {
    fn set(flag: &'a mut bool) -> Self {
        *flag = true;
        Self(flag)
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

pub struct AdvisorySession<G> {
    requestor: Requestor<G>,
    store: FavoriteStore,
    selection: Selection,
    recommendation: Option<Recommendation>,
    last_source: Option<Source>,
    favorites: Vec<Favorite>,
    pending: bool,
}

impl<G: StructuredGenerator> AdvisorySession<G> {
    /// Open a session, loading stored favorites.
    pub fn open(requestor: Requestor<G>, store: FavoriteStore) -> Self {
        let favorites = store.load();
        Self {
            requestor,
            store,
            selection: Selection::default(),
            recommendation: None,
            last_source: None,
            favorites,
            pending: false,
        }
    }

    pub fn requestor(&self) -> &Requestor<G> {
        &self.requestor
    }

    // ── Selections ───────────────────────────────────────────────────

    pub fn select_camera(&mut self, id: &str) -> Result<&Camera, SessionError> {
        let camera =
            catalog::find_camera(id).ok_or_else(|| SessionError::UnknownCamera(id.to_string()))?;
        Ok(self.selection.camera.insert(camera))
    }

    pub fn select_lens(&mut self, id: &str) -> Result<&Lens, SessionError> {
        let lens = catalog::find_lens(id).ok_or_else(|| SessionError::UnknownLens(id.to_string()))?;
        Ok(self.selection.lens.insert(lens))
    }

    pub fn select_scenario(&mut self, id: &str) -> Result<&Scenario, SessionError> {
        let scenario = catalog::find_scenario(id)
            .ok_or_else(|| SessionError::UnknownScenario(id.to_string()))?;
        Ok(self.selection.scenario.insert(scenario))
    }

    /// Clear selections and the current recommendation. Favorites stay.
    pub fn reset(&mut self) {
        self.selection = Selection::default();
        self.recommendation = None;
        self.last_source = None;
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// All three picks made and nothing in flight.
    pub fn is_ready(&self) -> bool {
        self.selection.complete().is_some() && !self.pending
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Lens suggestions for the selected scenario (empty when none).
    pub fn suggested_lenses(&self) -> Vec<Lens> {
        self.selection
            .scenario
            .as_ref()
            .map(catalog::suggested_lenses)
            .unwrap_or_default()
    }

    // ── Recommendation ───────────────────────────────────────────────

    /// Ask for a recommendation for the current selection.
    pub async fn request_recommendation(&mut self) -> Result<Produced, SessionError> {
        if self.pending {
            return Err(SessionError::RequestPending);
        }
        let (camera, lens, scenario) = match self.selection.complete() {
            Some((c, l, s)) => (c.clone(), l.clone(), s.clone()),
            None => return Err(SessionError::IncompleteSelection),
        };

        let produced = {
            let _pending = PendingGuard::set(&mut self.pending);
            self.requestor
                .request_detailed(&camera, &lens, &scenario)
                .await
        };

        log::info!(
            "[SESSION] Recommendation ready ({:?}) for {}",
            produced.source,
            favorite_id(&camera, &lens, &scenario)
        );
        self.recommendation = Some(produced.recommendation.clone());
        self.last_source = Some(produced.source);
        Ok(produced)
    }

    pub fn recommendation(&self) -> Option<&Recommendation> {
        self.recommendation.as_ref()
    }

    /// Source of the current recommendation (None for restored favorites).
    pub fn last_source(&self) -> Option<Source> {
        self.last_source
    }

    // ── Favorites ────────────────────────────────────────────────────

    pub fn favorites(&self) -> &[Favorite] {
        &self.favorites
    }

    pub fn find_favorite(&self, id: &str) -> Option<&Favorite> {
        self.favorites.iter().find(|f| f.id == id)
    }

    fn current_favorite_id(&self) -> Option<String> {
        self.selection
            .complete()
            .map(|(c, l, s)| favorite_id(c, l, s))
    }

    pub fn is_current_favorite(&self) -> bool {
        self.current_favorite_id()
            .is_some_and(|id| self.find_favorite(&id).is_some())
    }

    /// Flip favorite status of the current result. Returns the new status.
    pub fn toggle_favorite(&mut self) -> Result<bool, SessionError> {
        let recommendation = self
            .recommendation
            .clone()
            .ok_or(SessionError::NoRecommendation)?;
        let (camera, lens, scenario) = self
            .selection
            .complete()
            .ok_or(SessionError::IncompleteSelection)?;
        let id = favorite_id(camera, lens, scenario);

        let now_favorite = if self.favorites.iter().any(|f| f.id == id) {
            self.favorites.retain(|f| f.id != id);
            log::info!("[SESSION] Removed favorite {}", id);
            false
        } else {
            self.favorites.push(Favorite::new(
                camera.clone(),
                lens.clone(),
                scenario.clone(),
                recommendation,
            ));
            log::info!("[SESSION] Added favorite {}", id);
            true
        };
        self.persist();
        Ok(now_favorite)
    }

    /// Remove a favorite by id. Returns whether anything was removed.
    pub fn remove_favorite(&mut self, id: &str) -> bool {
        let before = self.favorites.len();
        self.favorites.retain(|f| f.id != id);
        let removed = self.favorites.len() != before;
        if removed {
            log::info!("[SESSION] Removed favorite {}", id);
            self.persist();
        }
        removed
    }

    /// Restore a favorite's selections and recommendation as current.
    pub fn open_favorite(&mut self, id: &str) -> Result<&Recommendation, SessionError> {
        let fav = self
            .find_favorite(id)
            .cloned()
            .ok_or_else(|| SessionError::UnknownFavorite(id.to_string()))?;
        self.selection = Selection {
            camera: Some(fav.camera),
            lens: Some(fav.lens),
            scenario: Some(fav.scenario),
        };
        self.last_source = None;
        Ok(self.recommendation.insert(fav.recommendation))
    }

    /// Write favorites back. A failed write keeps the in-memory state.
    fn persist(&self) {
        if let Err(e) = self.store.save(&self.favorites) {
            log::error!("[SESSION] Failed to save favorites: {}", e);
        }
    }
}
