//! Login page object
//!
//! Binds the login form's element queries and interactions into named
//! operations so scenario code never touches raw markup. The three form
//! controls are located by accessible name (case-insensitive match over
//! id/name/placeholder/aria-label, plus text for the button), fixed once at
//! construction; the elements themselves resolve at interaction time.

use std::time::Duration;

use fantoccini::elements::Element;
use fantoccini::key::Key;
use fantoccini::{Client, Locator};
use regex::Regex;
use tracing::debug;
use url::Url;

use crate::error::{SuiteError, SuiteResult};

/// Element wait applied to every interaction.
const DEFAULT_WAIT: Duration = Duration::from_secs(5);

/// Stable identifier the target app puts on its error-message region.
const ERROR_REGION: &str = "[data-test='error'], [data-testid='error']";

/// The three controls the login form contract guarantees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormControl {
    Username,
    Password,
    Submit,
}

impl FormControl {
    /// Accessible name the control is queried by.
    pub fn accessible_name(&self) -> &'static str {
        match self {
            FormControl::Username => "username",
            FormControl::Password => "password",
            FormControl::Submit => "login",
        }
    }

    fn describe(&self) -> &'static str {
        match self {
            FormControl::Username => "username textbox",
            FormControl::Password => "password textbox",
            FormControl::Submit => "login button",
        }
    }
}

/// XPath for a textbox whose accessible name contains `name`.
pub fn textbox_query(name: &str) -> String {
    format!(
        "//input[not(@type) or @type='text' or @type='password' or @type='email']\
         [{}]",
        ci_contains("concat(@id,' ',@name,' ',@placeholder,' ',@aria-label)", name)
    )
}

/// XPath for a button (or submit input) whose accessible name contains `name`.
pub fn button_query(name: &str) -> String {
    format!(
        "//button[{}] | //input[@type='submit' or @type='button'][{}]",
        ci_contains(
            "concat(@id,' ',@name,' ',@value,' ',@aria-label,' ',normalize-space(.))",
            name
        ),
        ci_contains("concat(@id,' ',@name,' ',@value,' ',@aria-label)", name)
    )
}

fn ci_contains(haystack_expr: &str, needle: &str) -> String {
    format!(
        "contains(translate({}, 'ABCDEFGHIJKLMNOPQRSTUVWXYZ', 'abcdefghijklmnopqrstuvwxyz'), '{}')",
        haystack_expr,
        needle.to_lowercase()
    )
}

/// Page object over the login form. One instance per scenario.
pub struct LoginPage {
    client: Client,
    wait_timeout: Duration,
    username_query: String,
    password_query: String,
    submit_query: String,
}

impl LoginPage {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            wait_timeout: DEFAULT_WAIT,
            username_query: textbox_query(FormControl::Username.accessible_name()),
            password_query: textbox_query(FormControl::Password.accessible_name()),
            submit_query: button_query(FormControl::Submit.accessible_name()),
        }
    }

    /// Navigate the session to the login page.
    pub async fn goto(&self, url: &str) -> SuiteResult<()> {
        debug!("Navigating to {}", url);
        self.client
            .goto(url)
            .await
            .map_err(|source| SuiteError::Navigation {
                url: url.to_string(),
                source,
            })
    }

    /// Fill both fields without submitting.
    pub async fn fill_credentials(&self, username: &str, password: &str) -> SuiteResult<()> {
        let field = self.control(FormControl::Username).await?;
        field.clear().await.map_err(interaction(FormControl::Username))?;
        field
            .send_keys(username)
            .await
            .map_err(interaction(FormControl::Username))?;

        let field = self.control(FormControl::Password).await?;
        field.clear().await.map_err(interaction(FormControl::Password))?;
        field
            .send_keys(password)
            .await
            .map_err(interaction(FormControl::Password))?;

        Ok(())
    }

    /// Click the login button.
    pub async fn submit(&self) -> SuiteResult<()> {
        let button = self.control(FormControl::Submit).await?;
        button.click().await.map_err(interaction(FormControl::Submit))
    }

    /// Fill username, fill password, click login, in that order.
    pub async fn login(&self, username: &str, password: &str) -> SuiteResult<()> {
        debug!("Attempting login as {:?}", username);
        self.fill_credentials(username, password).await?;
        self.submit().await
    }

    /// Assert the error-message region shows exactly `expected`.
    pub async fn assert_login_error(&self, expected: &str) -> SuiteResult<()> {
        let region = self
            .client
            .wait()
            .at_most(self.wait_timeout)
            .for_element(Locator::Css(ERROR_REGION))
            .await
            .map_err(|_| SuiteError::Assertion("error message region not present".to_string()))?;

        let actual = region.text().await?;
        if actual != expected {
            return Err(SuiteError::Assertion(format!(
                "error message mismatch: expected {:?}, got {:?}",
                expected, actual
            )));
        }
        Ok(())
    }

    /// Assert the session lands on the post-login inventory view. Polls
    /// until the element-wait timeout since the navigation triggered by
    /// submit completes asynchronously.
    pub async fn assert_on_inventory_page(&self) -> SuiteResult<()> {
        let deadline = std::time::Instant::now() + self.wait_timeout;
        loop {
            let url = self.client.current_url().await?;
            if url.as_str().contains("inventory") {
                return Ok(());
            }
            if std::time::Instant::now() >= deadline {
                return Err(SuiteError::Assertion(format!(
                    "expected an inventory URL within {:?}, still on {}",
                    self.wait_timeout, url
                )));
            }
            tokio::time::sleep(Duration::from_millis(100)).await;
        }
    }

    /// Assert the session never left the login page.
    pub async fn assert_still_on_login_page(&self, login_url: &str) -> SuiteResult<()> {
        let expected = Url::parse(login_url).map_err(|e| {
            SuiteError::Assertion(format!("login URL {:?} does not parse: {}", login_url, e))
        })?;
        let actual = self.client.current_url().await?;
        if actual != expected {
            return Err(SuiteError::Assertion(format!(
                "expected to remain on {}, got {}",
                expected, actual
            )));
        }
        Ok(())
    }

    /// Assert the control is rendered visible.
    pub async fn assert_visible(&self, control: FormControl) -> SuiteResult<()> {
        let element = self.control(control).await?;
        if !element.is_displayed().await? {
            return Err(SuiteError::Assertion(format!(
                "{} is not visible",
                control.describe()
            )));
        }
        Ok(())
    }

    /// Assert the control accepts interaction.
    pub async fn assert_enabled(&self, control: FormControl) -> SuiteResult<()> {
        let element = self.control(control).await?;
        if !element.is_enabled().await? {
            return Err(SuiteError::Assertion(format!(
                "{} is not enabled",
                control.describe()
            )));
        }
        Ok(())
    }

    /// Assert an attribute of the control matches `pattern` case-insensitively.
    pub async fn assert_attr_matches(
        &self,
        control: FormControl,
        attr: &str,
        pattern: &str,
    ) -> SuiteResult<()> {
        let element = self.control(control).await?;
        let value = element.attr(attr).await?.ok_or_else(|| {
            SuiteError::Assertion(format!(
                "{} has no {:?} attribute",
                control.describe(),
                attr
            ))
        })?;

        if !ci_regex(pattern)?.is_match(&value) {
            return Err(SuiteError::Assertion(format!(
                "{} attribute {:?} is {:?}, expected it to match {:?}",
                control.describe(),
                attr,
                value,
                pattern
            )));
        }
        Ok(())
    }

    /// Send a forward Tab to whatever currently holds focus (the body, on a
    /// freshly loaded page).
    pub async fn press_tab(&self) -> SuiteResult<()> {
        let tab = char::from(Key::Tab).to_string();
        let active = self.client.active_element().await?;
        active
            .send_keys(&tab)
            .await
            .map_err(|source| SuiteError::Interaction {
                element: "active element",
                source,
            })
    }

    /// Assert keyboard focus currently sits on `control`, judged by the
    /// active element's accessible-name attributes.
    pub async fn assert_focused(&self, control: FormControl) -> SuiteResult<()> {
        let active = self.client.active_element().await?;

        let mut parts = Vec::new();
        for attr in ["id", "name", "placeholder", "aria-label", "value"] {
            if let Some(value) = active.attr(attr).await? {
                parts.push(value);
            }
        }
        let accessible = parts.join(" ");

        if !ci_regex(control.accessible_name())?.is_match(&accessible) {
            return Err(SuiteError::Assertion(format!(
                "expected focus on {}, active element is {:?}",
                control.describe(),
                accessible
            )));
        }
        Ok(())
    }

    async fn control(&self, control: FormControl) -> SuiteResult<Element> {
        let query = match control {
            FormControl::Username => &self.username_query,
            FormControl::Password => &self.password_query,
            FormControl::Submit => &self.submit_query,
        };
        self.client
            .wait()
            .at_most(self.wait_timeout)
            .for_element(Locator::XPath(query.as_str()))
            .await
            .map_err(interaction(control))
    }
}

fn interaction(control: FormControl) -> impl FnOnce(fantoccini::error::CmdError) -> SuiteError {
    move |source| SuiteError::Interaction {
        element: control.describe(),
        source,
    }
}

fn ci_regex(pattern: &str) -> SuiteResult<Regex> {
    Regex::new(&format!("(?i){}", pattern))
        .map_err(|e| SuiteError::Assertion(format!("bad assertion pattern {:?}: {}", pattern, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn textbox_query_lowercases_the_name() {
        let query = textbox_query("UserName");
        assert!(query.contains("'username'"));
        assert!(query.contains("translate("));
        assert!(query.contains("@placeholder"));
        assert!(query.contains("@aria-label"));
    }

    #[test]
    fn button_query_matches_buttons_and_submit_inputs() {
        let query = button_query("login");
        assert!(query.starts_with("//button["));
        assert!(query.contains("//input[@type='submit' or @type='button']"));
        assert!(query.contains("normalize-space(.)"));
    }

    #[test]
    fn error_region_uses_stable_test_ids() {
        assert!(ERROR_REGION.contains("data-test"));
        assert!(ERROR_REGION.contains("data-testid"));
    }

    #[test]
    fn ci_regex_ignores_case() {
        let re = ci_regex("username").unwrap();
        assert!(re.is_match("user-name USERNAME field"));
        assert!(!re.is_match("password"));
    }

    #[test]
    fn accessible_names_cover_the_form_contract() {
        assert_eq!(FormControl::Username.accessible_name(), "username");
        assert_eq!(FormControl::Password.accessible_name(), "password");
        assert_eq!(FormControl::Submit.accessible_name(), "login");
    }
}
