//! Credential factory
//!
//! Pure constructors for every scenario class. Records are immutable values
//! created fresh per scenario and never persisted.

use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::Serialize;

use crate::config::SuiteConfig;

const RANDOM_USERNAME_LEN: usize = 8;
const RANDOM_PASSWORD_LEN: usize = 10;

/// A username/password pair submitted to the login form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Whether this pair is the configured known-good account.
    pub fn matches_valid(&self, config: &SuiteConfig) -> bool {
        self.username == config.valid_username && self.password == config.valid_password
    }
}

/// The caller-supplied known-good pair, verbatim.
pub fn valid_credentials(username: &str, password: &str) -> Credentials {
    Credentials::new(username, password)
}

/// A pair guaranteed by construction not to match any real account: the
/// username carries a reserved prefix no provisioned account uses.
pub fn invalid_credentials() -> Credentials {
    Credentials::new(
        format!("no_such_user_{}", alphanumeric(RANDOM_USERNAME_LEN)),
        alphanumeric(RANDOM_PASSWORD_LEN),
    )
}

/// Both fields empty.
pub fn empty_credentials() -> Credentials {
    Credentials::new("", "")
}

/// A fresh alphanumeric pair: username 8 chars, password 10 chars.
pub fn random_credentials() -> Credentials {
    Credentials::new(
        alphanumeric(RANDOM_USERNAME_LEN),
        alphanumeric(RANDOM_PASSWORD_LEN),
    )
}

/// Fixture account the target system reports as locked out.
pub fn locked_out_credentials() -> Credentials {
    Credentials::new("locked_out_user", "secret_sauce")
}

/// Fixture account the target system flags for degraded behavior.
pub fn problem_user_credentials() -> Credentials {
    Credentials::new("problem_user", "secret_sauce")
}

fn alphanumeric(len: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}
