//! Negative scenarios: rejected credential classes.
//!
//! These assert only that the session never leaves the login URL. The
//! target page's error region is not a confirmed stable contract, so no
//! scenario here depends on a specific error message.

use crate::credentials::{
    empty_credentials, invalid_credentials, locked_out_credentials, problem_user_credentials,
    Credentials,
};
use crate::error::SuiteResult;
use crate::scenario::ScenarioContext;

/// Attempt a login and require the session to stay on the login URL.
pub(crate) async fn rejected(cx: &ScenarioContext, creds: Credentials) -> SuiteResult<()> {
    let page = cx.page();
    page.goto(&cx.config.login_url).await?;
    page.login(&creds.username, &creds.password).await?;
    page.assert_still_on_login_page(&cx.config.login_url).await
}

pub async fn rejects_invalid_credentials(cx: &ScenarioContext) -> SuiteResult<()> {
    rejected(cx, invalid_credentials()).await
}

pub async fn rejects_empty_credentials(cx: &ScenarioContext) -> SuiteResult<()> {
    rejected(cx, empty_credentials()).await
}

pub async fn rejects_locked_out_user(cx: &ScenarioContext) -> SuiteResult<()> {
    rejected(cx, locked_out_credentials()).await
}

pub async fn rejects_problem_user(cx: &ScenarioContext) -> SuiteResult<()> {
    rejected(cx, problem_user_credentials()).await
}
