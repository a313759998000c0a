//! Data-driven scenarios: one login attempt per credential class, with the
//! expected outcome chosen by comparison against the configured valid pair.

use crate::config::SuiteConfig;
use crate::credentials::{
    invalid_credentials, locked_out_credentials, problem_user_credentials, valid_credentials,
    Credentials,
};
use crate::error::SuiteResult;
use crate::scenario::ScenarioContext;

pub type MakeCredentials = fn(&SuiteConfig) -> Credentials;

pub const CREDENTIAL_CASES: [(&str, MakeCredentials); 4] = [
    ("valid-pair", |config| {
        valid_credentials(&config.valid_username, &config.valid_password)
    }),
    ("random-pair", |_| invalid_credentials()),
    ("locked-out-pair", |_| locked_out_credentials()),
    ("problem-pair", |_| problem_user_credentials()),
];

pub async fn login_case(cx: &ScenarioContext, make: MakeCredentials) -> SuiteResult<()> {
    let creds = make(&cx.config);
    let page = cx.page();
    page.goto(&cx.config.login_url).await?;
    page.login(&creds.username, &creds.password).await?;

    if creds.matches_valid(&cx.config) {
        page.assert_on_inventory_page().await
    } else {
        page.assert_still_on_login_page(&cx.config.login_url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cases_cover_every_credential_class_once() {
        let labels: Vec<&str> = CREDENTIAL_CASES.iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            ["valid-pair", "random-pair", "locked-out-pair", "problem-pair"]
        );
    }

    #[test]
    fn only_the_valid_case_matches_the_configured_pair() {
        let config = SuiteConfig {
            login_url: "https://shop.example.com/login".into(),
            valid_username: "standard_user".into(),
            valid_password: "secret_sauce".into(),
        };
        let matching: Vec<&str> = CREDENTIAL_CASES
            .iter()
            .filter(|(_, make)| make(&config).matches_valid(&config))
            .map(|(label, _)| *label)
            .collect();
        assert_eq!(matching, ["valid-pair"]);
    }
}
