use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("WebDriver session error: {0}")]
    SessionError(#[from] fantoccini::error::NewSessionError),

    #[error("Browser automation error: {0}")]
    BrowserError(#[from] fantoccini::error::CmdError),

    #[error("Authentication failed: {0}")]
    AuthError(String),
}
