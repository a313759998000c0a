//! Positive scenarios: the happy path and static form contract checks.

use crate::credentials::valid_credentials;
use crate::error::SuiteResult;
use crate::page::FormControl;
use crate::scenario::ScenarioContext;

pub async fn valid_login_lands_on_inventory(cx: &ScenarioContext) -> SuiteResult<()> {
    let page = cx.page();
    page.goto(&cx.config.login_url).await?;
    let creds = valid_credentials(&cx.config.valid_username, &cx.config.valid_password);
    page.login(&creds.username, &creds.password).await?;
    page.assert_on_inventory_page().await
}

pub async fn fields_expose_placeholders(cx: &ScenarioContext) -> SuiteResult<()> {
    let page = cx.page();
    page.goto(&cx.config.login_url).await?;
    page.assert_attr_matches(FormControl::Username, "placeholder", "username")
        .await?;
    page.assert_attr_matches(FormControl::Password, "placeholder", "password")
        .await?;
    page.assert_visible(FormControl::Submit).await
}

/// Presence of all three controls, as a basic accessibility proxy.
pub async fn form_controls_visible(cx: &ScenarioContext) -> SuiteResult<()> {
    let page = cx.page();
    page.goto(&cx.config.login_url).await?;
    page.assert_visible(FormControl::Username).await?;
    page.assert_visible(FormControl::Password).await?;
    page.assert_visible(FormControl::Submit).await
}
