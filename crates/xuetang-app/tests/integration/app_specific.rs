use salvo::http::StatusCode;
use salvo::test::{ResponseExt, TestClient};
use serde_json::Value;
use xuetang_app::app::api::APP_ROUTE_PREFIX;

use super::helpers::{test_service, url};

#[test_log::test(tokio::test)]
async fn healthcheck_returns_ok() {
    let service = test_service(1000);

    let mut resp = TestClient::get(url(&format!("{APP_ROUTE_PREFIX}/healthcheck")))
        .send(&service)
        .await;

    assert_eq!(resp.status_code, Some(StatusCode::OK));
    assert_eq!(resp.take_string().await.expect("body"), "OK");
}

#[test_log::test(tokio::test)]
async fn settings_expose_schedule_limits() {
    let service = test_service(250);

    let mut resp = TestClient::get(url(&format!("{APP_ROUTE_PREFIX}/settings")))
        .send(&service)
        .await;

    assert_eq!(resp.status_code, Some(StatusCode::OK));
    let body: Value = resp.take_json().await.expect("json body");
    assert_eq!(body["timezone"], "UTC");
    assert_eq!(body["maxOccurrences"], 250);
    assert_eq!(body["maxSpanDays"], 3660);
}
