//! Suite configuration from the environment
//!
//! The suite targets an already-deployed application, so the only required
//! inputs are the login URL and one known-good credential pair. All three
//! must be present (and non-empty) before any scenario runs.

use crate::error::{SuiteError, SuiteResult};

pub const LOGIN_URL_VAR: &str = "LOGIN_URL";
pub const VALID_USERNAME_VAR: &str = "VALID_USERNAME";
pub const VALID_PASSWORD_VAR: &str = "VALID_PASSWORD";

/// Target-application configuration shared by every scenario.
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    /// URL of the login page.
    pub login_url: String,

    /// Username accepted by the target system.
    pub valid_username: String,

    /// Password matching `valid_username`.
    pub valid_password: String,
}

impl SuiteConfig {
    /// Read the configuration from the environment, failing fast on any
    /// missing or empty value.
    pub fn from_env() -> SuiteResult<Self> {
        Ok(Self {
            login_url: require(LOGIN_URL_VAR)?,
            valid_username: require(VALID_USERNAME_VAR)?,
            valid_password: require(VALID_PASSWORD_VAR)?,
        })
    }
}

/// Whether any of the required variables is present at all. A fully unset
/// environment means "not targeting a deployment" rather than a
/// misconfiguration.
pub fn env_configured() -> bool {
    [LOGIN_URL_VAR, VALID_USERNAME_VAR, VALID_PASSWORD_VAR]
        .iter()
        .any(|var| std::env::var_os(var).is_some())
}

fn require(var: &'static str) -> SuiteResult<String> {
    match std::env::var(var) {
        Ok(value) if value.trim().is_empty() => Err(SuiteError::ConfigInvalid {
            var,
            reason: "value is empty".to_string(),
        }),
        Ok(value) => Ok(value),
        Err(_) => Err(SuiteError::ConfigMissing(var)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // All cases share one test because the vars are process-global and the
    // harness runs #[test] fns in parallel.
    #[test]
    fn from_env_requires_all_three_vars() {
        std::env::set_var(LOGIN_URL_VAR, "https://shop.example.com/login");
        std::env::set_var(VALID_USERNAME_VAR, "standard_user");
        std::env::set_var(VALID_PASSWORD_VAR, "secret_sauce");

        let config = SuiteConfig::from_env().unwrap();
        assert_eq!(config.login_url, "https://shop.example.com/login");
        assert_eq!(config.valid_username, "standard_user");
        assert_eq!(config.valid_password, "secret_sauce");

        std::env::set_var(VALID_PASSWORD_VAR, "   ");
        match SuiteConfig::from_env() {
            Err(SuiteError::ConfigInvalid { var, .. }) => {
                assert_eq!(var, VALID_PASSWORD_VAR)
            }
            other => panic!("expected ConfigInvalid, got {other:?}"),
        }

        std::env::remove_var(VALID_PASSWORD_VAR);
        match SuiteConfig::from_env() {
            Err(SuiteError::ConfigMissing(var)) => assert_eq!(var, VALID_PASSWORD_VAR),
            other => panic!("expected ConfigMissing, got {other:?}"),
        }
        assert!(env_configured());

        std::env::remove_var(LOGIN_URL_VAR);
        std::env::remove_var(VALID_USERNAME_VAR);
        assert!(!env_configured());
    }
}
