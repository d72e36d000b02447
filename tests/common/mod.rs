//! Shared helpers: a scripted generator standing in for a real provider.

#![allow(dead_code)]

use photoset_lib::llm::{LlmError, StructuredGenerator};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Replies from a fixed script, one entry per submit call, and records
/// every prompt it was sent. An exhausted script answers with an error.
pub struct ScriptedGenerator {
    replies: Mutex<VecDeque<Result<String, LlmError>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn new(replies: Vec<Result<String, LlmError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn answering(raw: &str) -> Self {
        Self::new(vec![Ok(raw.to_string())])
    }

    pub fn failing() -> Self {
        Self::new(vec![Err(LlmError::MissingApiKey("scripted"))])
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl StructuredGenerator for ScriptedGenerator {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn submit(&self, prompt: &str, _schema: &serde_json::Value) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(LlmError::EmptyResponse))
    }
}

/// A well-formed service answer with the given aperture and ISO.
pub fn model_answer(aperture: &str, iso: &str) -> String {
    serde_json::json!({
        "mode": "Aperture Priority (A/Av)",
        "iso": iso,
        "aperture": aperture,
        "shutter": "1/250",
        "wb": "Daylight",
        "focusMode": "AF-S",
        "focusPoints": "single point on the nearest eye",
        "metering": "spot",
        "reason": "Wide aperture separates the subject from the background.",
        "tips": ["Focus on the eyes", "Keep the light soft"],
        "composition": ["Fill the frame"],
        "alerts": []
    })
    .to_string()
}

/// A fresh, empty directory under the system temp dir.
pub fn temp_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir
}
