//! Performance scenario: the login round trip against a fixed wall-clock
//! budget, measured from submit to the landing page being confirmed.

use std::time::{Duration, Instant};

use crate::error::{SuiteError, SuiteResult};
use crate::scenario::ScenarioContext;

pub const LOGIN_TIME_BUDGET: Duration = Duration::from_millis(2000);

pub async fn login_within_time_budget(cx: &ScenarioContext) -> SuiteResult<()> {
    let page = cx.page();
    page.goto(&cx.config.login_url).await?;
    page.fill_credentials(&cx.config.valid_username, &cx.config.valid_password)
        .await?;

    let start = Instant::now();
    page.submit().await?;
    page.assert_on_inventory_page().await?;
    let elapsed = start.elapsed();

    if elapsed > LOGIN_TIME_BUDGET {
        return Err(SuiteError::Assertion(format!(
            "login took {} ms, budget is {} ms",
            elapsed.as_millis(),
            LOGIN_TIME_BUDGET.as_millis()
        )));
    }
    Ok(())
}
