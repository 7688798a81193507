use salvo::http::StatusCode;
use salvo::test::{ResponseExt, TestClient};
use serde_json::{Value, json};
use uuid::Uuid;
use xuetang_app::app::api::SCHEDULE_ROUTE_PREFIX;

use super::helpers::{test_service, url};

fn schedule_url(path: &str) -> String {
    url(&format!("{SCHEDULE_ROUTE_PREFIX}/{path}"))
}

fn weekly_series(class_id: Uuid) -> Value {
    json!({
        "session": {
            "startTime": "2024-01-01T18:00:00",
            "endTime": "2024-01-01T20:00:00",
            "title": "少儿中文 B1",
            "classId": class_id,
            "location": "Room 204"
        },
        "rule": {
            "frequency": "WEEKLY",
            "weekdays": [1, 3, 5],
            "endDate": "2024-01-14"
        }
    })
}

#[test_log::test(tokio::test)]
async fn validate_reports_every_violation() {
    let service = test_service(1000);

    let mut resp = TestClient::post(schedule_url("validate"))
        .json(&json!({
            "frequency": "WEEKLY",
            "interval": 0,
            "weekdays": [],
            "endDate": "2023-12-31"
        }))
        .send(&service)
        .await;

    assert_eq!(resp.status_code, Some(StatusCode::OK));
    let body: Value = resp.take_json().await.expect("json body");
    assert_eq!(body["valid"], false);

    let codes: Vec<&str> = body["errors"]
        .as_array()
        .expect("errors array")
        .iter()
        .filter_map(|e| e["code"].as_str())
        .collect();
    assert_eq!(
        codes,
        ["invalid_interval", "missing_weekdays", "end_date_not_future"]
    );
}

#[test_log::test(tokio::test)]
async fn validate_accepts_good_rule() {
    let service = test_service(1000);

    let mut resp = TestClient::post(schedule_url("validate"))
        .json(&json!({ "frequency": "DAILY", "interval": 2, "endDate": "2024-02-01" }))
        .send(&service)
        .await;

    assert_eq!(resp.status_code, Some(StatusCode::OK));
    let body: Value = resp.take_json().await.expect("json body");
    assert_eq!(body["valid"], true);
    assert_eq!(body["errors"], json!([]));
}

#[test_log::test(tokio::test)]
async fn malformed_body_is_bad_request() {
    let service = test_service(1000);

    let mut resp = TestClient::post(schedule_url("validate"))
        .json(&json!({ "frequency": "MONTHLY", "endDate": "2024-02-01" }))
        .send(&service)
        .await;

    assert_eq!(resp.status_code, Some(StatusCode::BAD_REQUEST));
    let body: Value = resp.take_json().await.expect("json body");
    assert_eq!(body["code"], "invalid_body");
}

#[test_log::test(tokio::test)]
async fn out_of_range_weekday_is_bad_request() {
    let service = test_service(1000);

    let mut resp = TestClient::post(schedule_url("preview"))
        .json(&json!({
            "startDate": "2024-01-01",
            "rule": { "frequency": "WEEKLY", "weekdays": [1, 7], "endDate": "2024-06-30" }
        }))
        .send(&service)
        .await;

    assert_eq!(resp.status_code, Some(StatusCode::BAD_REQUEST));
    let body: Value = resp.take_json().await.expect("json body");
    assert_eq!(body["code"], "invalid_body");
}

#[test_log::test(tokio::test)]
async fn preview_counts_weekend_sessions() {
    let service = test_service(1000);

    let mut resp = TestClient::post(schedule_url("preview"))
        .json(&json!({
            "startDate": "2024-06-01",
            "rule": { "frequency": "WEEKLY", "weekdays": [6, 0], "endDate": "2024-06-30" }
        }))
        .send(&service)
        .await;

    assert_eq!(resp.status_code, Some(StatusCode::OK));
    let body: Value = resp.take_json().await.expect("json body");
    assert_eq!(body["count"], 10);
    assert_eq!(body["weekdaysLabel"], "周六, 周日");
    assert_eq!(body["description"], "每周 周日, 周六，至 2024-06-30");
}

#[test_log::test(tokio::test)]
async fn preview_rejects_invalid_rule() {
    let service = test_service(1000);

    let mut resp = TestClient::post(schedule_url("preview"))
        .json(&json!({
            "startDate": "2024-01-01",
            "rule": { "frequency": "WEEKLY", "weekdays": [], "endDate": "2024-06-30" }
        }))
        .send(&service)
        .await;

    assert_eq!(resp.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));
    let body: Value = resp.take_json().await.expect("json body");
    assert_eq!(body["code"], "missing_weekdays");
    assert_eq!(body["field"], "weekdays");
}

#[test_log::test(tokio::test)]
async fn creates_series_and_lists_by_class() {
    let service = test_service(1000);
    let class_id = Uuid::now_v7();

    let mut resp = TestClient::post(schedule_url("sessions"))
        .json(&weekly_series(class_id))
        .send(&service)
        .await;

    assert_eq!(resp.status_code, Some(StatusCode::CREATED));
    let created: Value = resp.take_json().await.expect("json body");
    assert_eq!(created["sessions"].as_array().map(Vec::len), Some(6));
    assert_eq!(created["syncFailures"], 0);
    assert!(
        created["rrule"]
            .as_str()
            .is_some_and(|r| r.contains("BYDAY=MO,WE,FR"))
    );

    let mut resp = TestClient::get(schedule_url(&format!("classes/{class_id}/sessions")))
        .send(&service)
        .await;

    assert_eq!(resp.status_code, Some(StatusCode::OK));
    let listed: Value = resp.take_json().await.expect("json body");
    let listed = listed.as_array().expect("array");
    assert_eq!(listed.len(), 6);
    assert_eq!(listed[0]["startTime"], "2024-01-01T18:00:00");
    assert_eq!(listed[5]["endTime"], "2024-01-12T20:00:00");
    assert!(listed.iter().all(|s| s["title"] == "少儿中文 B1"));

    let other = Uuid::now_v7();
    let mut resp = TestClient::get(schedule_url(&format!("classes/{other}/sessions")))
        .send(&service)
        .await;
    let empty: Value = resp.take_json().await.expect("json body");
    assert_eq!(empty, json!([]));
}

#[test_log::test(tokio::test)]
async fn oversized_series_is_unprocessable() {
    let service = test_service(3);

    let mut resp = TestClient::post(schedule_url("sessions"))
        .json(&weekly_series(Uuid::now_v7()))
        .send(&service)
        .await;

    assert_eq!(resp.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));
    let body: Value = resp.take_json().await.expect("json body");
    assert_eq!(body["code"], "range_too_large");
    assert_eq!(body["field"], "endDate");
}

#[test_log::test(tokio::test)]
async fn session_after_end_date_is_unprocessable() {
    let service = test_service(1000);
    let mut body = weekly_series(Uuid::now_v7());
    body["session"]["startTime"] = json!("2024-03-04T18:00:00");
    body["session"]["endTime"] = json!("2024-03-04T20:00:00");

    let mut resp = TestClient::post(schedule_url("sessions"))
        .json(&body)
        .send(&service)
        .await;

    assert_eq!(resp.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));
    let body: Value = resp.take_json().await.expect("json body");
    assert_eq!(body["code"], "empty_series");
    assert_eq!(body["field"], "endDate");
}

#[test_log::test(tokio::test)]
async fn inverted_session_is_unprocessable() {
    let service = test_service(1000);
    let mut body = weekly_series(Uuid::now_v7());
    body["session"]["endTime"] = json!("2024-01-01T17:00:00");

    let mut resp = TestClient::post(schedule_url("sessions"))
        .json(&body)
        .send(&service)
        .await;

    assert_eq!(resp.status_code, Some(StatusCode::UNPROCESSABLE_ENTITY));
    let body: Value = resp.take_json().await.expect("json body");
    assert_eq!(body["code"], "invalid_session");
    assert_eq!(body["field"], "endTime");
}

#[test_log::test(tokio::test)]
async fn non_uuid_class_id_is_bad_request() {
    let service = test_service(1000);

    let resp = TestClient::get(schedule_url("classes/not-a-uuid/sessions"))
        .send(&service)
        .await;

    assert_eq!(resp.status_code, Some(StatusCode::BAD_REQUEST));
}
