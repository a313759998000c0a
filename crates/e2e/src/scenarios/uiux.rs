//! UI/UX scenarios: keyboard focus order and accessible labelling.

use crate::error::SuiteResult;
use crate::page::FormControl;
use crate::scenario::ScenarioContext;

/// The target app keeps the submit control clickable even with empty
/// fields; rejection happens server-side.
pub async fn submit_enabled_with_empty_fields(cx: &ScenarioContext) -> SuiteResult<()> {
    let page = cx.page();
    page.goto(&cx.config.login_url).await?;
    page.assert_enabled(FormControl::Submit).await
}

/// Forward-tab order from an unfocused page: username, password, submit.
pub async fn tab_order_is_logical(cx: &ScenarioContext) -> SuiteResult<()> {
    let page = cx.page();
    page.goto(&cx.config.login_url).await?;

    page.press_tab().await?;
    page.assert_focused(FormControl::Username).await?;
    page.press_tab().await?;
    page.assert_focused(FormControl::Password).await?;
    page.press_tab().await?;
    page.assert_focused(FormControl::Submit).await
}

pub async fn fields_carry_accessible_labels(cx: &ScenarioContext) -> SuiteResult<()> {
    let page = cx.page();
    page.goto(&cx.config.login_url).await?;
    page.assert_attr_matches(FormControl::Username, "aria-label", "username")
        .await?;
    page.assert_attr_matches(FormControl::Password, "aria-label", "password")
        .await
}
