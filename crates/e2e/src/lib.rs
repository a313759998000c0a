//! Storefront Login E2E Suite
//!
//! This crate exercises the Storefront login page end to end through a real
//! browser:
//! - Spawns and supervises a WebDriver server (chromedriver/geckodriver)
//! - Opens one fresh browser session per scenario
//! - Drives the form through a page object instead of raw markup queries
//! - Reports per-scenario results as JSON
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Suite Runner (Rust)                      │
//! ├─────────────────────────────────────────────────────────────┤
//! │  SuiteRunner                                                │
//! │    ├── ensure_driver() -> DriverHandle                      │
//! │    ├── run_all() / run_category() / run_scenario()          │
//! │    └── write_report(report) -> suite-results.json           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Scenario (catalog)                                         │
//! │    ├── name, description, category, severity                │
//! │    └── body: async fn(&ScenarioContext)                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  LoginPage (page object over fantoccini::Client)            │
//! │    ├── goto(url)                                            │
//! │    ├── login(username, password)                            │
//! │    ├── assert_on_inventory_page()                           │
//! │    └── assert_still_on_login_page(url), focus/attr helpers  │
//! └─────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod credentials;
pub mod driver;
pub mod error;
pub mod page;
pub mod runner;
pub mod scenario;
pub mod scenarios;
pub mod session;

pub use config::SuiteConfig;
pub use credentials::Credentials;
pub use error::{SuiteError, SuiteResult};
pub use page::LoginPage;
pub use runner::{RunnerConfig, SuiteReport, SuiteRunner};
pub use scenario::{Category, Scenario, ScenarioContext, Severity};
