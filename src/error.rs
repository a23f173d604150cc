use thiserror::Error;

#[derive(Debug, Error)]
pub enum StudyError {
    #[error("no API key configured (set GEMINI_API_KEY)")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Http(String),
    #[error("API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error("response contained no text")]
    EmptyResponse,
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("could not read PDF: {0}")]
    Pdf(String),
    #[error("could not read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("browser error: {0}")]
    Browser(String),
    #[error("background task ended without a result")]
    Interrupted,
}

pub type Result<T, E = StudyError> = std::result::Result<T, E>;

#[cfg(not(target_arch = "wasm32"))]
impl From<reqwest::Error> for StudyError {
    fn from(err: reqwest::Error) -> Self {
        StudyError::Http(err.to_string())
    }
}

impl From<lopdf::Error> for StudyError {
    fn from(err: lopdf::Error) -> Self {
        StudyError::Pdf(err.to_string())
    }
}
