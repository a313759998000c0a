//! Scenario descriptors
//!
//! Each scenario is one independent, self-contained case: a name, structured
//! category/severity metadata, and an async body run against a fresh
//! browser session. Grouping is typed metadata rather than tag strings
//! embedded in names, so filtering never parses test titles.

use std::fmt;
use std::str::FromStr;

use fantoccini::Client;
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};

use crate::config::SuiteConfig;
use crate::error::SuiteResult;
use crate::page::LoginPage;

/// Concern a scenario exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Positive,
    Negative,
    Security,
    Performance,
    Uiux,
    #[serde(rename = "data")]
    DataDriven,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Positive,
        Category::Negative,
        Category::Security,
        Category::Performance,
        Category::Uiux,
        Category::DataDriven,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Positive => "positive",
            Category::Negative => "negative",
            Category::Security => "security",
            Category::Performance => "performance",
            Category::Uiux => "uiux",
            Category::DataDriven => "data",
        }
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(Category::Positive),
            "negative" => Ok(Category::Negative),
            "security" => Ok(Category::Security),
            "performance" => Ok(Category::Performance),
            "uiux" => Ok(Category::Uiux),
            "data" => Ok(Category::DataDriven),
            other => Err(format!("unknown category: {}", other)),
        }
    }
}

/// How much a failure of the scenario matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Critical,
    High,
    Normal,
    Low,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::High => "high",
            Severity::Normal => "normal",
            Severity::Low => "low",
        }
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "critical" => Ok(Severity::Critical),
            "high" => Ok(Severity::High),
            "normal" => Ok(Severity::Normal),
            "low" => Ok(Severity::Low),
            other => Err(format!("unknown severity: {}", other)),
        }
    }
}

/// Everything a scenario body receives from the runner. Sessions are handed
/// in per scenario; there is no process-wide session state.
#[derive(Clone)]
pub struct ScenarioContext {
    pub config: SuiteConfig,
    pub client: Client,
}

impl ScenarioContext {
    /// A fresh page object over this scenario's session.
    pub fn page(&self) -> LoginPage {
        LoginPage::new(self.client.clone())
    }
}

type RunFn = Box<dyn Fn(ScenarioContext) -> BoxFuture<'static, SuiteResult<()>> + Send + Sync>;

/// One independent test case with its metadata.
pub struct Scenario {
    pub name: String,
    pub description: String,
    pub category: Category,
    pub severity: Severity,
    run: RunFn,
}

impl Scenario {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        severity: Severity,
        run: impl Fn(ScenarioContext) -> BoxFuture<'static, SuiteResult<()>> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category,
            severity,
            run: Box::new(run),
        }
    }

    /// Run the scenario body against a prepared context.
    pub async fn execute(&self, cx: ScenarioContext) -> SuiteResult<()> {
        (self.run)(cx).await
    }
}

impl fmt::Debug for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scenario")
            .field("name", &self.name)
            .field("category", &self.category)
            .field("severity", &self.severity)
            .finish()
    }
}

/// Scenarios in `scenarios` exercising `category`.
pub fn filter_by_category(scenarios: &[Scenario], category: Category) -> Vec<&Scenario> {
    scenarios.iter().filter(|s| s.category == category).collect()
}

/// Scenarios at `severity` or more severe.
pub fn filter_by_min_severity(scenarios: &[Scenario], severity: Severity) -> Vec<&Scenario> {
    fn rank(s: Severity) -> u8 {
        match s {
            Severity::Critical => 0,
            Severity::High => 1,
            Severity::Normal => 2,
            Severity::Low => 3,
        }
    }
    scenarios
        .iter()
        .filter(|s| rank(s.severity) <= rank(severity))
        .collect()
}
