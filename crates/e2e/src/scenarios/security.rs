//! Security scenarios: denial-of-exploit smoke checks.
//!
//! Fixed payload lists submitted as both username and password. This only
//! verifies the payloads are rejected like any bad credentials; it is not a
//! vulnerability scanner.

use crate::credentials::Credentials;
use crate::error::SuiteResult;
use crate::scenario::ScenarioContext;

pub const SQL_INJECTION_PAYLOADS: [&str; 4] = [
    "' OR '1'='1' --",
    "admin\" --",
    "\" OR \"1\"=\"1",
    "1=1;--",
];

pub const XSS_PAYLOADS: [&str; 2] = ["<script>alert(1)</script>", "\" onmouseover=alert(1) \""];

pub async fn rejects_payload(cx: &ScenarioContext, payload: &str) -> SuiteResult<()> {
    super::negative::rejected(cx, Credentials::new(payload, payload)).await
}
