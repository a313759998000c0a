//! Suite runner that orchestrates the WebDriver server, browser sessions,
//! and scenario execution.

use std::path::PathBuf;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

use crate::config::SuiteConfig;
use crate::driver::{DriverConfig, DriverHandle};
use crate::error::{SuiteError, SuiteResult};
use crate::scenario::{
    filter_by_category, filter_by_min_severity, Category, Scenario, ScenarioContext, Severity,
};
use crate::scenarios::catalog;
use crate::session::{self, SessionConfig};

/// Result of running a single scenario.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub name: String,
    pub category: Category,
    pub severity: Severity,
    pub success: bool,
    pub duration_ms: u64,
    pub error: Option<String>,
}

/// Result of running a set of scenarios.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteReport {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub duration_ms: u64,
    pub results: Vec<ScenarioResult>,
}

/// Configuration for the suite runner.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Target application configuration.
    pub suite: SuiteConfig,

    /// WebDriver server to spawn when no external URL is given.
    pub driver: DriverConfig,

    /// Browser session settings.
    pub session: SessionConfig,

    /// Use an already-running WebDriver server instead of spawning one.
    pub external_webdriver_url: Option<String>,

    /// Output directory for the JSON report.
    pub output_dir: PathBuf,
}

/// Main suite runner. Scenarios run sequentially, each against its own
/// fresh browser session.
pub struct SuiteRunner {
    config: SuiteConfig,
    driver_config: DriverConfig,
    session_config: SessionConfig,
    external_webdriver: bool,
    driver: Option<DriverHandle>,
    output_dir: PathBuf,
}

impl SuiteRunner {
    pub fn new(config: RunnerConfig) -> Self {
        let mut session_config = config.session;
        let external_webdriver = config.external_webdriver_url.is_some();
        if let Some(url) = config.external_webdriver_url {
            session_config.webdriver_url = url;
        }

        Self {
            config: config.suite,
            driver_config: config.driver,
            session_config,
            external_webdriver,
            driver: None,
            output_dir: config.output_dir,
        }
    }

    /// Spawn the WebDriver server unless one is already available.
    pub async fn ensure_driver(&mut self) -> SuiteResult<()> {
        if self.external_webdriver || self.driver.is_some() {
            return Ok(());
        }

        let driver = DriverHandle::spawn(self.driver_config.clone()).await?;
        self.session_config.webdriver_url = driver.webdriver_url().to_string();
        self.driver = Some(driver);
        Ok(())
    }

    /// Stop the spawned WebDriver server, if any.
    pub fn stop_driver(&mut self) -> SuiteResult<()> {
        if let Some(mut driver) = self.driver.take() {
            driver.stop()?;
        }
        Ok(())
    }

    /// Run the whole catalog.
    pub async fn run_all(&mut self) -> SuiteResult<SuiteReport> {
        let scenarios = catalog();
        let selected: Vec<&Scenario> = scenarios.iter().collect();
        self.run_selected(&selected).await
    }

    /// Run the scenarios in one category.
    pub async fn run_category(&mut self, category: Category) -> SuiteResult<SuiteReport> {
        let scenarios = catalog();
        let selected = filter_by_category(&scenarios, category);
        self.run_selected(&selected).await
    }

    /// Run the scenarios at or above a severity.
    pub async fn run_min_severity(&mut self, severity: Severity) -> SuiteResult<SuiteReport> {
        let scenarios = catalog();
        let selected = filter_by_min_severity(&scenarios, severity);
        self.run_selected(&selected).await
    }

    /// Run a single scenario by name.
    pub async fn run_scenario(&mut self, name: &str) -> SuiteResult<ScenarioResult> {
        let scenarios = catalog();
        let scenario = scenarios
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| SuiteError::UnknownScenario(name.to_string()))?;

        self.run_one(scenario).await
    }

    /// Run a selection of scenarios, recording failures and continuing.
    pub async fn run_selected(&mut self, scenarios: &[&Scenario]) -> SuiteResult<SuiteReport> {
        let start = Instant::now();
        let mut results = Vec::new();
        let mut passed = 0;
        let mut failed = 0;

        self.ensure_driver().await?;

        info!("Running {} scenario(s)...", scenarios.len());

        for scenario in scenarios {
            match self.run_one(scenario).await {
                Ok(result) => {
                    if result.success {
                        passed += 1;
                        info!("✓ {} ({} ms)", result.name, result.duration_ms);
                    } else {
                        failed += 1;
                        error!(
                            "✗ {} - {}",
                            result.name,
                            result.error.as_deref().unwrap_or("unknown error")
                        );
                    }
                    results.push(result);
                }
                Err(e) => {
                    failed += 1;
                    error!("✗ {} - {}", scenario.name, e);
                    results.push(ScenarioResult {
                        name: scenario.name.clone(),
                        category: scenario.category,
                        severity: scenario.severity,
                        success: false,
                        duration_ms: 0,
                        error: Some(e.to_string()),
                    });
                }
            }
        }

        let duration_ms = start.elapsed().as_millis() as u64;

        info!("");
        info!(
            "Suite results: {} passed, {} failed ({} ms)",
            passed, failed, duration_ms
        );

        Ok(SuiteReport {
            total: scenarios.len(),
            passed,
            failed,
            duration_ms,
            results,
        })
    }

    /// Run one scenario against a fresh session. Scenario failures come
    /// back as unsuccessful results; only infrastructure failures (driver,
    /// session creation) surface as errors.
    async fn run_one(&mut self, scenario: &Scenario) -> SuiteResult<ScenarioResult> {
        self.ensure_driver().await?;
        debug!("Running scenario: {}", scenario.name);

        let start = Instant::now();
        let client = session::connect(&self.session_config).await?;

        let cx = ScenarioContext {
            config: self.config.clone(),
            client: client.clone(),
        };
        let outcome = scenario.execute(cx).await;

        if let Err(e) = client.close().await {
            warn!("Failed to close session for {}: {}", scenario.name, e);
        }

        let duration_ms = start.elapsed().as_millis() as u64;

        Ok(ScenarioResult {
            name: scenario.name.clone(),
            category: scenario.category,
            severity: scenario.severity,
            success: outcome.is_ok(),
            duration_ms,
            error: outcome.err().map(|e| e.to_string()),
        })
    }

    /// Write the suite report to a JSON file.
    pub fn write_report(&self, report: &SuiteReport) -> SuiteResult<PathBuf> {
        std::fs::create_dir_all(&self.output_dir)?;

        let path = self.output_dir.join("suite-results.json");
        let json = serde_json::to_string_pretty(report)?;
        std::fs::write(&path, json)?;

        info!("Report written to: {}", path.display());
        Ok(path)
    }
}

impl Drop for SuiteRunner {
    fn drop(&mut self) {
        let _ = self.stop_driver();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Browser;

    fn test_config(output_dir: PathBuf) -> RunnerConfig {
        RunnerConfig {
            suite: SuiteConfig {
                login_url: "https://shop.example.com/login".into(),
                valid_username: "standard_user".into(),
                valid_password: "secret_sauce".into(),
            },
            driver: DriverConfig::default(),
            session: SessionConfig {
                browser: Browser::Chrome,
                ..SessionConfig::default()
            },
            external_webdriver_url: None,
            output_dir,
        }
    }

    #[test]
    fn write_report_produces_readable_json() {
        let dir = tempfile::tempdir().unwrap();
        let runner = SuiteRunner::new(test_config(dir.path().join("results")));

        let report = SuiteReport {
            total: 2,
            passed: 1,
            failed: 1,
            duration_ms: 42,
            results: vec![ScenarioResult {
                name: "positive/valid-login".into(),
                category: Category::Positive,
                severity: Severity::Critical,
                success: true,
                duration_ms: 42,
                error: None,
            }],
        };

        let path = runner.write_report(&report).unwrap();
        let raw = std::fs::read_to_string(path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed["passed"], 1);
        assert_eq!(parsed["results"][0]["category"], "positive");
    }

    #[test]
    fn external_webdriver_url_overrides_session_target() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_config(dir.path().to_path_buf());
        config.external_webdriver_url = Some("http://127.0.0.1:9515".into());

        let runner = SuiteRunner::new(config);
        assert!(runner.external_webdriver);
        assert_eq!(runner.session_config.webdriver_url, "http://127.0.0.1:9515");
    }
}
