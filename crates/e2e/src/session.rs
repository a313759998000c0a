//! Browser session construction
//!
//! Every scenario gets its own fresh session; nothing is shared across
//! scenarios. The session's built-in timeouts are the only timeouts the
//! suite relies on beyond the page object's element wait.

use fantoccini::{Client, ClientBuilder};
use serde_json::{json, Map, Value};

use crate::error::SuiteResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Browser {
    #[default]
    Chrome,
    Firefox,
}

impl Browser {
    pub fn as_str(&self) -> &'static str {
        match self {
            Browser::Chrome => "chrome",
            Browser::Firefox => "firefox",
        }
    }

    /// Name of the matching WebDriver server binary.
    pub fn driver_binary(&self) -> &'static str {
        match self {
            Browser::Chrome => "chromedriver",
            Browser::Firefox => "geckodriver",
        }
    }

    /// W3C capabilities for a new session.
    pub fn capabilities(&self, headless: bool) -> Map<String, Value> {
        let mut caps = Map::new();
        caps.insert("browserName".to_string(), json!(self.as_str()));

        match self {
            Browser::Chrome => {
                let mut args = vec!["--disable-gpu", "--window-size=1280,720"];
                if headless {
                    args.push("--headless=new");
                }
                caps.insert("goog:chromeOptions".to_string(), json!({ "args": args }));
            }
            Browser::Firefox => {
                let args: Vec<&str> = if headless { vec!["-headless"] } else { vec![] };
                caps.insert("moz:firefoxOptions".to_string(), json!({ "args": args }));
            }
        }

        caps
    }
}

/// Configuration for new browser sessions.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// URL of the WebDriver server.
    pub webdriver_url: String,

    /// Browser to request.
    pub browser: Browser,

    /// Run without a visible window.
    pub headless: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            webdriver_url: "http://127.0.0.1:4444".to_string(),
            browser: Browser::Chrome,
            headless: true,
        }
    }
}

/// Open a fresh browser session against the WebDriver server.
pub async fn connect(config: &SessionConfig) -> SuiteResult<Client> {
    let client = ClientBuilder::native()
        .capabilities(config.browser.capabilities(config.headless))
        .connect(&config.webdriver_url)
        .await?;
    Ok(client)
}
