//! The scenario suites and the catalog that assembles them.
//!
//! Every scenario is independent: it re-navigates from scratch against its
//! own session, and no ordering between catalog entries matters.

pub mod data;
pub mod negative;
pub mod performance;
pub mod positive;
pub mod security;
pub mod uiux;

use crate::scenario::{Category, Scenario, Severity};

/// The full flat list of scenarios, in catalog order.
pub fn catalog() -> Vec<Scenario> {
    let mut scenarios = vec![
        Scenario::new(
            "positive/valid-login",
            "valid credentials land on the inventory page",
            Category::Positive,
            Severity::Critical,
            |cx| Box::pin(async move { positive::valid_login_lands_on_inventory(&cx).await }),
        ),
        Scenario::new(
            "positive/field-placeholders",
            "username and password fields expose matching placeholders",
            Category::Positive,
            Severity::Normal,
            |cx| Box::pin(async move { positive::fields_expose_placeholders(&cx).await }),
        ),
        Scenario::new(
            "positive/controls-visible",
            "all three form controls are visible",
            Category::Positive,
            Severity::Normal,
            |cx| Box::pin(async move { positive::form_controls_visible(&cx).await }),
        ),
        Scenario::new(
            "negative/invalid-credentials",
            "random unknown credentials are rejected",
            Category::Negative,
            Severity::High,
            |cx| Box::pin(async move { negative::rejects_invalid_credentials(&cx).await }),
        ),
        Scenario::new(
            "negative/empty-credentials",
            "empty credentials are rejected",
            Category::Negative,
            Severity::Normal,
            |cx| Box::pin(async move { negative::rejects_empty_credentials(&cx).await }),
        ),
        Scenario::new(
            "negative/locked-out-user",
            "the locked-out fixture account is rejected",
            Category::Negative,
            Severity::Normal,
            |cx| Box::pin(async move { negative::rejects_locked_out_user(&cx).await }),
        ),
        Scenario::new(
            "negative/problem-user",
            "the problem fixture account is rejected",
            Category::Negative,
            Severity::Normal,
            |cx| Box::pin(async move { negative::rejects_problem_user(&cx).await }),
        ),
        Scenario::new(
            "performance/login-time-budget",
            "submit-to-landing completes within 2000 ms",
            Category::Performance,
            Severity::Normal,
            |cx| Box::pin(async move { performance::login_within_time_budget(&cx).await }),
        ),
        Scenario::new(
            "uiux/submit-enabled-when-empty",
            "the submit control stays enabled with empty fields",
            Category::Uiux,
            Severity::Low,
            |cx| Box::pin(async move { uiux::submit_enabled_with_empty_fields(&cx).await }),
        ),
        Scenario::new(
            "uiux/tab-order",
            "forward tab moves username, then password, then submit",
            Category::Uiux,
            Severity::Normal,
            |cx| Box::pin(async move { uiux::tab_order_is_logical(&cx).await }),
        ),
        Scenario::new(
            "uiux/accessible-labels",
            "both textboxes carry matching aria-labels",
            Category::Uiux,
            Severity::Normal,
            |cx| Box::pin(async move { uiux::fields_carry_accessible_labels(&cx).await }),
        ),
    ];

    for (i, payload) in security::SQL_INJECTION_PAYLOADS.iter().copied().enumerate() {
        scenarios.push(Scenario::new(
            format!("security/sql-injection-{}", i + 1),
            format!("login rejects SQL injection payload {:?}", payload),
            Category::Security,
            Severity::High,
            move |cx| Box::pin(async move { security::rejects_payload(&cx, payload).await }),
        ));
    }

    for (i, payload) in security::XSS_PAYLOADS.iter().copied().enumerate() {
        scenarios.push(Scenario::new(
            format!("security/xss-{}", i + 1),
            format!("login rejects XSS payload {:?}", payload),
            Category::Security,
            Severity::High,
            move |cx| Box::pin(async move { security::rejects_payload(&cx, payload).await }),
        ));
    }

    for (label, make) in data::CREDENTIAL_CASES {
        scenarios.push(Scenario::new(
            format!("data/{}", label),
            format!("login attempt with the {} credential class", label),
            Category::DataDriven,
            Severity::Normal,
            move |cx| Box::pin(async move { data::login_case(&cx, make).await }),
        ));
    }

    scenarios
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_names_are_unique() {
        let scenarios = catalog();
        let names: HashSet<&str> = scenarios.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names.len(), scenarios.len());
    }

    #[test]
    fn every_category_is_represented() {
        let scenarios = catalog();
        for category in Category::ALL {
            assert!(
                scenarios.iter().any(|s| s.category == category),
                "no scenario in category {:?}",
                category
            );
        }
    }

    #[test]
    fn one_security_scenario_per_payload() {
        let scenarios = catalog();
        let security = scenarios
            .iter()
            .filter(|s| s.category == Category::Security)
            .count();
        assert_eq!(
            security,
            security::SQL_INJECTION_PAYLOADS.len() + security::XSS_PAYLOADS.len()
        );
    }
}
