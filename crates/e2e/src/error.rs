//! Error types for the login suite

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SuiteError {
    #[error("missing required environment variable: {0}")]
    ConfigMissing(&'static str),

    #[error("invalid value for {var}: {reason}")]
    ConfigInvalid { var: &'static str, reason: String },

    #[error("WebDriver server failed to start: {0}")]
    DriverStartup(String),

    #[error("WebDriver server not ready after {0} attempts")]
    DriverHealthCheck(usize),

    #[error("navigation to {url} failed: {source}")]
    Navigation {
        url: String,
        source: fantoccini::error::CmdError,
    },

    #[error("interaction with {element} failed: {source}")]
    Interaction {
        element: &'static str,
        source: fantoccini::error::CmdError,
    },

    #[error("assertion failed: {0}")]
    Assertion(String),

    #[error("unknown scenario: {0}")]
    UnknownScenario(String),

    #[error("browser session error: {0}")]
    Session(#[from] fantoccini::error::NewSessionError),

    #[error("WebDriver command error: {0}")]
    WebDriver(#[from] fantoccini::error::CmdError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type SuiteResult<T> = Result<T, SuiteError>;
