//! Favorites — bookmarked recommendations and their on-disk store.
//!
//! The whole collection lives in one JSON file,
//! `<data dir>/photoSet_favorites.json`, as an array of [`Favorite`]
//! records. It is read once when a session opens and rewritten after every
//! change (temp file + rename). A missing or unreadable file loads as an
//! empty collection.

use crate::catalog::{Camera, Lens, Scenario};
use crate::llm::Recommendation;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Storage namespace for the favorites collection.
pub const FAVORITES_FILE: &str = "photoSet_favorites.json";

/// A saved recommendation for one camera + lens + scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: String,
    pub camera: Camera,
    pub lens: Lens,
    pub scenario: Scenario,
    pub recommendation: Recommendation,
    pub date: String,
}

/// Deterministic favorite id: `camera-lens-scenario`.
pub fn favorite_id(camera: &Camera, lens: &Lens, scenario: &Scenario) -> String {
    format!("{}-{}-{}", camera.id, lens.id, scenario.id)
}

impl Favorite {
    /// Capture a recommendation, dated today (local time, dd/mm/yyyy).
    pub fn new(camera: Camera, lens: Lens, scenario: Scenario, recommendation: Recommendation) -> Self {
        Self {
            id: favorite_id(&camera, &lens, &scenario),
            camera,
            lens,
            scenario,
            recommendation,
            date: chrono::Local::now().format("%d/%m/%Y").to_string(),
        }
    }
}

/// Keep the first record for each id, in stored order.
fn dedup_by_id(stored: Vec<Favorite>) -> Vec<Favorite> {
    let total = stored.len();
    let mut seen = HashSet::new();
    let favorites: Vec<Favorite> = stored
        .into_iter()
        .filter(|f| seen.insert(f.id.clone()))
        .collect();
    if favorites.len() != total {
        log::warn!(
            "[FAVORITES] Dropped {} duplicate favorite(s) while loading",
            total - favorites.len()
        );
    }
    favorites
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize favorites: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Load/save boundary for the favorites collection.
#[derive(Debug, Clone)]
pub struct FavoriteStore {
    path: PathBuf,
}

impl FavoriteStore {
    /// Store at `<dir>/photoSet_favorites.json`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(FAVORITES_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored collection. Missing or malformed → empty.
    pub fn load(&self) -> Vec<Favorite> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return Vec::new(),
        };
        match serde_json::from_str::<Vec<Favorite>>(&raw) {
            Ok(stored) => {
                let favorites = dedup_by_id(stored);
                log::info!(
                    "[FAVORITES] Loaded {} favorites from {}",
                    favorites.len(),
                    self.path.display()
                );
                favorites
            }
            Err(e) => {
                log::warn!(
                    "[FAVORITES] Ignoring malformed {}: {}",
                    self.path.display(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Rewrite the stored collection.
    pub fn save(&self, favorites: &[Favorite]) -> Result<(), StoreError> {
        let io_err = |source: std::io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(favorites)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(io_err)?;
        std::fs::rename(&tmp, &self.path).map_err(io_err)?;

        log::info!(
            "[FAVORITES] Saved {} favorites to {}",
            favorites.len(),
            self.path.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{find_camera, find_lens, find_scenario};

    fn sample(camera: &str, lens: &str, scenario: &str) -> Favorite {
        let lens = find_lens(lens).unwrap();
        let rec = Recommendation::fallback(&lens);
        Favorite::new(
            find_camera(camera).unwrap(),
            lens,
            find_scenario(scenario).unwrap(),
            rec,
        )
    }

    fn temp_store(name: &str) -> FavoriteStore {
        let dir = std::env::temp_dir().join(name);
        let _ = std::fs::remove_dir_all(&dir);
        FavoriteStore::in_dir(dir)
    }

    #[test]
    fn id_is_camera_lens_scenario() {
        let fav = sample("c1", "l1", "s1");
        assert_eq!(fav.id, "c1-l1-s1");
    }

    #[test]
    fn date_is_day_month_year() {
        let fav = sample("c1", "l1", "s1");
        let parts: Vec<&str> = fav.date.split('/').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[2].len(), 4);
    }

    #[test]
    fn missing_file_loads_empty() {
        let store = temp_store("photoset-test-fav-missing");
        assert!(store.load().is_empty());
    }

    #[test]
    fn malformed_file_loads_empty() {
        let store = temp_store("photoset-test-fav-malformed");
        std::fs::create_dir_all(store.path().parent().unwrap()).unwrap();
        std::fs::write(store.path(), "{not json").unwrap();
        assert!(store.load().is_empty());
        let _ = std::fs::remove_dir_all(store.path().parent().unwrap());
    }

    #[test]
    fn save_and_load_roundtrip_keeps_order() {
        let store = temp_store("photoset-test-fav-roundtrip");
        let favorites = vec![
            sample("c2", "l3", "s11"),
            sample("c1", "l1", "s1"),
            sample("c7", "l13", "s7"),
        ];
        store.save(&favorites).unwrap();
        assert_eq!(store.load(), favorites);
        assert!(!store.path().with_extension("json.tmp").exists());
        let _ = std::fs::remove_dir_all(store.path().parent().unwrap());
    }

    #[test]
    fn duplicate_ids_load_once_keeping_first() {
        let store = temp_store("photoset-test-fav-duplicates");
        let first = sample("c1", "l1", "s1");
        let mut second = sample("c1", "l1", "s1");
        second.date = "01/01/2000".to_string();
        let other = sample("c2", "l3", "s11");
        store
            .save(&[first.clone(), other.clone(), second])
            .unwrap();

        let loaded = store.load();
        assert_eq!(loaded, vec![first, other]);
        let _ = std::fs::remove_dir_all(store.path().parent().unwrap());
    }

    #[test]
    fn stored_json_uses_client_field_names() {
        let fav = sample("c1", "l1", "s1");
        let value = serde_json::to_value(&fav).unwrap();
        assert_eq!(value["camera"]["maxIso"], 6400);
        assert_eq!(value["lens"]["maxAperture"], 1.8);
        assert_eq!(value["lens"]["isZoom"], false);
        assert_eq!(value["recommendation"]["focusMode"], "AF-S");
    }
}
