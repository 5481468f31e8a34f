//! API Handlers
//!
//! Thin wrappers over the rule engine. Every handler answers with either a
//! complete classification or a single error object; partial results are
//! never returned. Dates arrive as ISO-8601 calendar dates and callers are
//! expected to normalize to one reference timezone before calling.
use axum::{http::StatusCode, Json};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{json, Value};

use fleetgate_core::model::{DefectCounts, DownloadEvent, ShiftRecord, SubjectKind};
use fleetgate_core::{parse_date, ComplianceError, FLEETGATE_VERSION};
use fleetgate_rules::{downloads, due_date, hours, score};

use crate::metrics;

/// Body of `POST /v1/compliance/classify-date`.
///
/// Dates come in as strings so a malformed value is rejected here, at the
/// parsing boundary, rather than inside the classifier.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyDateRequest {
    #[serde(default)]
    pub due_date: Option<String>,
    pub rule_interval_days: u32,
    pub today: String,
}

/// Body of `POST /v1/tacho/status`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TachoStatusRequest {
    pub events: Vec<DownloadEvent>,
    pub subject_kind: SubjectKind,
    pub today: NaiveDate,
}

/// Body of `POST /v1/compliance/score`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRequest {
    pub open_defects: DefectCounts,
    pub overdue_vehicle_count: u32,
    pub hours_violation_count: u32,
}

pub async fn evaluate_driver_hours(
    Json(shift): Json<ShiftRecord>,
) -> (StatusCode, Json<Value>) {
    metrics::record_evaluation("driver_hours");
    let violations = hours::evaluate_shift(&shift);
    tracing::debug!(
        driver = %shift.driver_ref,
        violations = violations.len(),
        "shift evaluated"
    );
    (StatusCode::OK, Json(json!({ "violations": violations })))
}

pub async fn classify_date(
    Json(request): Json<ClassifyDateRequest>,
) -> (StatusCode, Json<Value>) {
    metrics::record_evaluation("classify_date");

    let today = match parse_date(&request.today) {
        Ok(date) => date,
        Err(err) => return invalid_input(err),
    };
    let due = match request.due_date.as_deref().map(parse_date).transpose() {
        Ok(date) => date,
        Err(err) => return invalid_input(err),
    };

    let tier = due_date::classify(due, request.rule_interval_days, today);
    (StatusCode::OK, Json(json!({ "tier": tier })))
}

pub async fn tacho_status(
    Json(request): Json<TachoStatusRequest>,
) -> (StatusCode, Json<Value>) {
    metrics::record_evaluation("tacho_status");
    let status = downloads::status(&request.events, request.subject_kind, request.today);
    (
        StatusCode::OK,
        Json(json!({
            "tier": status.tier,
            "lastDownload": status.last_download,
            "daysUntilDue": status.days_until_due,
        })),
    )
}

pub async fn compliance_score(
    Json(request): Json<ScoreRequest>,
) -> (StatusCode, Json<Value>) {
    metrics::record_evaluation("score");
    let result = score::fleet_score(
        &request.open_defects,
        request.overdue_vehicle_count,
        request.hours_violation_count,
    );
    (
        StatusCode::OK,
        Json(json!({ "score": result.score, "band": result.band })),
    )
}

pub async fn health() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "version": FLEETGATE_VERSION })),
    )
}

pub async fn export_metrics() -> (StatusCode, String) {
    match metrics::encode() {
        Ok(body) => (StatusCode::OK, body),
        Err(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    }
}

fn invalid_input(err: ComplianceError) -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "error": err.to_string() })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_evaluate_driver_hours_handler() {
        let shift = ShiftRecord::new("drv-1", date(2026, 2, 16), 660, 30, 0);
        let (status, Json(body)) = evaluate_driver_hours(Json(shift)).await;

        assert_eq!(status, StatusCode::OK);
        let violations = body["violations"].as_array().unwrap();
        assert!(violations.contains(&json!("EXTENSION_LIMIT_EXCEEDED")));
        assert!(violations.contains(&json!("BREAK_NOT_TAKEN")));
    }

    #[tokio::test]
    async fn test_classify_date_handler() {
        let request = ClassifyDateRequest {
            due_date: Some("2026-02-15".to_string()),
            rule_interval_days: 0,
            today: "2026-02-16".to_string(),
        };
        let (status, Json(body)) = classify_date(Json(request)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tier"], json!("HIGH"));
    }

    #[tokio::test]
    async fn test_classify_date_null_due_date() {
        let request = ClassifyDateRequest {
            due_date: None,
            rule_interval_days: 28,
            today: "2026-02-16".to_string(),
        };
        let (status, Json(body)) = classify_date(Json(request)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tier"], json!("GREEN"));
    }

    #[tokio::test]
    async fn test_classify_date_rejects_malformed_date() {
        let request = ClassifyDateRequest {
            due_date: Some("16/02/2026".to_string()),
            rule_interval_days: 0,
            today: "2026-02-16".to_string(),
        };
        let (status, Json(body)) = classify_date(Json(request)).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], json!("DATE/16/02/2026"));
    }

    #[tokio::test]
    async fn test_tacho_status_handler_never_downloaded() {
        let request = TachoStatusRequest {
            events: vec![],
            subject_kind: SubjectKind::DriverCard,
            today: date(2026, 2, 16),
        };
        let (status, Json(body)) = tacho_status(Json(request)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["tier"], json!("HIGH"));
        assert_eq!(body["lastDownload"], json!(null));
        assert_eq!(body["daysUntilDue"], json!(null));
    }

    #[tokio::test]
    async fn test_tacho_status_handler_fresh_download() {
        let request = TachoStatusRequest {
            events: vec![DownloadEvent::new(SubjectKind::DriverCard, date(2026, 2, 16))],
            subject_kind: SubjectKind::DriverCard,
            today: date(2026, 2, 16),
        };
        let (_, Json(body)) = tacho_status(Json(request)).await;

        assert_eq!(body["tier"], json!("GREEN"));
        assert_eq!(body["daysUntilDue"], json!(28));
    }

    #[tokio::test]
    async fn test_compliance_score_handler() {
        let request = ScoreRequest {
            open_defects: DefectCounts::new(0, 2, 0),
            overdue_vehicle_count: 1,
            hours_violation_count: 1,
        };
        let (status, Json(body)) = compliance_score(Json(request)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], json!(72));
        assert_eq!(body["band"], json!("ATTENTION"));
    }

    #[tokio::test]
    async fn test_health() {
        let (status, Json(body)) = health().await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], json!("ok"));
        assert_eq!(body["version"], json!(FLEETGATE_VERSION));
    }
}
