use thiserror::Error;

/// Everything that can go wrong between building a prompt and holding a
/// parsed recommendation. None of these reach the caller of the requestor;
/// they are logged and replaced by the fallback.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("no API key configured for provider '{0}'")]
    MissingApiKey(&'static str),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{provider} API returned {status}: {body}")]
    Status {
        provider: &'static str,
        status: u16,
        body: String,
    },

    #[error("response contained no text")]
    EmptyResponse,

    #[error("response does not match the recommendation schema: {0}")]
    Parse(#[from] serde_json::Error),
}
