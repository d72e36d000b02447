//! Session selection, favorite toggling and persistence across sessions.

mod common;

use common::{model_answer, temp_dir, ScriptedGenerator};
use photoset_lib::favorites::{FavoriteStore, FAVORITES_FILE};
use photoset_lib::llm::{LlmError, Requestor, Source, StructuredGenerator};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use photoset_lib::session::{AdvisorySession, SessionError};

fn session_in(dir: &std::path::Path, generator: ScriptedGenerator) -> AdvisorySession<ScriptedGenerator> {
    AdvisorySession::open(Requestor::new(generator), FavoriteStore::in_dir(dir))
}

fn select(session: &mut AdvisorySession<ScriptedGenerator>, c: &str, l: &str, s: &str) {
    session.select_camera(c).unwrap();
    session.select_lens(l).unwrap();
    session.select_scenario(s).unwrap();
}

#[tokio::test]
async fn request_requires_complete_selection() {
    let dir = temp_dir("photoset-it-incomplete");
    let mut session = session_in(&dir, ScriptedGenerator::failing());

    assert!(!session.is_ready());
    session.select_camera("c1").unwrap();
    session.select_lens("l1").unwrap();
    assert_eq!(
        session.request_recommendation().await.unwrap_err(),
        SessionError::IncompleteSelection
    );
    assert!(session.recommendation().is_none());
    assert!(session.requestor().generator().prompts().is_empty());
}

#[test]
fn unknown_ids_are_rejected() {
    let dir = temp_dir("photoset-it-unknown");
    let mut session = session_in(&dir, ScriptedGenerator::failing());
    assert_eq!(
        session.select_camera("c99").unwrap_err(),
        SessionError::UnknownCamera("c99".to_string())
    );
    assert_eq!(
        session.select_lens("nope").unwrap_err(),
        SessionError::UnknownLens("nope".to_string())
    );
    assert!(session.selection().camera.is_none());
}

#[tokio::test]
async fn fallback_result_is_current_after_failure() {
    let dir = temp_dir("photoset-it-fallback");
    let mut session = session_in(&dir, ScriptedGenerator::failing());
    select(&mut session, "c1", "l1", "s1");
    assert!(session.is_ready());

    let produced = session.request_recommendation().await.unwrap();

    assert_eq!(produced.source, Source::Fallback);
    assert_eq!(session.last_source(), Some(Source::Fallback));
    assert_eq!(session.recommendation().unwrap().aperture, "f/1.8");
    assert!(!session.is_pending());
}

#[test]
fn toggle_without_result_is_an_error() {
    let dir = temp_dir("photoset-it-toggle-none");
    let mut session = session_in(&dir, ScriptedGenerator::failing());
    select(&mut session, "c1", "l1", "s1");
    assert_eq!(
        session.toggle_favorite().unwrap_err(),
        SessionError::NoRecommendation
    );
    assert!(session.favorites().is_empty());
}

#[tokio::test]
async fn toggle_is_idempotent_per_combination() {
    let dir = temp_dir("photoset-it-toggle");
    let mut session = session_in(&dir, ScriptedGenerator::failing());
    select(&mut session, "c1", "l1", "s1");
    session.request_recommendation().await.unwrap();

    assert!(session.toggle_favorite().unwrap());
    assert!(session.is_current_favorite());
    assert!(!session.toggle_favorite().unwrap());
    assert!(!session.is_current_favorite());
    assert!(session.toggle_favorite().unwrap());

    let matching: Vec<_> = session
        .favorites()
        .iter()
        .filter(|f| f.id == "c1-l1-s1")
        .collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(session.favorites().len(), 1);

    let _ = std::fs::remove_dir_all(&dir);
}

#[tokio::test]
async fn favorites_survive_a_new_session() {
    let dir = temp_dir("photoset-it-persist");
    {
        let mut session = session_in(
            &dir,
            ScriptedGenerator::new(vec![
                Ok(model_answer("f/2.8", "800")),
                Ok(model_answer("f/4", "3200")),
            ]),
        );
        select(&mut session, "c2", "l3", "s11");
        session.request_recommendation().await.unwrap();
        session.toggle_favorite().unwrap();

        select(&mut session, "c7", "l13", "s7");
        session.request_recommendation().await.unwrap();
        session.toggle_favorite().unwrap();
    }
    assert!(dir.join(FAVORITES_FILE).exists());

    let mut reopened = session_in(&dir, ScriptedGenerator::failing());
    let ids: Vec<&str> = reopened.favorites().iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, ["c2-l3-s11", "c7-l13-s7"]);

    let rec = reopened.open_favorite("c7-l13-s7").unwrap();
    assert_eq!(rec.iso, "3200");
    assert_eq!(reopened.selection().scenario.as_ref().unwrap().id, "s7");
    assert!(reopened.is_current_favorite());
    assert_eq!(reopened.last_source(), None);

    assert!(reopened.remove_favorite("c2-l3-s11"));
    assert!(!reopened.remove_favorite("c2-l3-s11"));

    let again = session_in(&dir, ScriptedGenerator::failing());
    assert_eq!(again.favorites().len(), 1);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn opening_unknown_favorite_fails() {
    let dir = temp_dir("photoset-it-open-unknown");
    let mut session = session_in(&dir, ScriptedGenerator::failing());
    assert_eq!(
        session.open_favorite("c1-l1-s1").unwrap_err(),
        SessionError::UnknownFavorite("c1-l1-s1".to_string())
    );
}

#[test]
fn suggestions_follow_selected_scenario() {
    let dir = temp_dir("photoset-it-suggest");
    let mut session = session_in(&dir, ScriptedGenerator::failing());
    assert!(session.suggested_lenses().is_empty());

    session.select_scenario("s1").unwrap();
    let names: Vec<String> = session
        .suggested_lenses()
        .into_iter()
        .map(|l| l.name)
        .collect();
    assert!(!names.is_empty() && names.len() <= 4);
    assert!(names
        .iter()
        .all(|n| n.contains("50mm") || n.contains("85mm") || n.contains("70-200mm")));

    session.reset();
    assert!(session.selection().scenario.is_none());
}

/// Never answers the first submit; fails every later one.
struct StallsOnce {
    stalled: AtomicBool,
}

impl StructuredGenerator for StallsOnce {
    fn name(&self) -> &'static str {
        "stalls-once"
    }

    async fn submit(&self, _prompt: &str, _schema: &serde_json::Value) -> Result<String, LlmError> {
        if !self.stalled.swap(true, Ordering::SeqCst) {
            std::future::pending::<()>().await;
        }
        Err(LlmError::EmptyResponse)
    }
}

#[tokio::test]
async fn abandoned_request_does_not_leave_session_pending() {
    let dir = temp_dir("photoset-it-abandoned");
    let mut session = AdvisorySession::open(
        Requestor::new(StallsOnce {
            stalled: AtomicBool::new(false),
        }),
        FavoriteStore::in_dir(&dir),
    );
    session.select_camera("c1").unwrap();
    session.select_lens("l1").unwrap();
    session.select_scenario("s1").unwrap();

    let timed_out =
        tokio::time::timeout(Duration::from_millis(50), session.request_recommendation()).await;
    assert!(timed_out.is_err());

    assert!(!session.is_pending());
    assert!(session.is_ready());
    let produced = session.request_recommendation().await.unwrap();
    assert_eq!(produced.source, Source::Fallback);
}
