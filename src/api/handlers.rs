//! HTTP request handlers for the shift engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    check_vacation_request, day_status, is_work_day, parse_date, resolve_effective_config,
    team_coverage, vacation_periods, work_streak, DayStatus,
};
use crate::config::ConfigLoader;
use crate::error::EngineResult;

use super::request::{CalendarRequest, TeamCoverageRequest, VacationCheckRequest, WorkDayRequest};
use super::response::{
    ApiError, ApiErrorResponse, CalendarDay, CalendarResponse, CalendarTotals, WorkDayResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/work-day", post(work_day_handler))
        .route("/calendar", post(calendar_handler))
        .route("/team/coverage", post(team_coverage_handler))
        .route("/vacation/check", post(vacation_check_handler))
        .with_state(state)
}

/// Handler for POST /work-day.
///
/// Answers whether the worker is scheduled on the given date. A date that
/// does not parse yields `is_work_day: false`, not an error.
async fn work_day_handler(payload: Result<Json<WorkDayRequest>, JsonRejection>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing work-day request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Err(err) = request.worker.validate() {
        return engine_error_response(correlation_id, err);
    }

    let (is_work_day, effective_config) = match parse_date(&request.date) {
        Ok(date) => (
            is_work_day(date, &request.worker),
            Some(resolve_effective_config(date, &request.worker)),
        ),
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Unparseable date");
            (false, None)
        }
    };

    info!(
        correlation_id = %correlation_id,
        worker_id = %request.worker.id,
        date = %request.date,
        is_work_day,
        "Work-day evaluated"
    );

    json_response(
        StatusCode::OK,
        WorkDayResponse {
            date: request.date,
            is_work_day,
            effective_config,
        },
    )
}

/// Handler for POST /calendar.
///
/// Renders the worker's day statuses over an inclusive date range.
async fn calendar_handler(
    State(state): State<AppState>,
    payload: Result<Json<CalendarRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calendar request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match build_calendar(&request, state.config()) {
        Ok(calendar) => {
            info!(
                correlation_id = %correlation_id,
                worker_id = %calendar.worker_id,
                days = calendar.days.len(),
                work_days = calendar.totals.work_days,
                duration_us = start_time.elapsed().as_micros(),
                "Calendar built"
            );
            if calendar.streak.exceeds_limit {
                warn!(
                    correlation_id = %correlation_id,
                    worker_id = %calendar.worker_id,
                    streak = calendar.streak.count,
                    limit = calendar.streak.limit,
                    "Consecutive work-day limit exceeded"
                );
            }
            json_response(StatusCode::OK, calendar)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Handler for POST /team/coverage.
async fn team_coverage_handler(
    payload: Result<Json<TeamCoverageRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing team coverage request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Err(err) = request.validate() {
        return engine_error_response(correlation_id, err);
    }

    let coverage = team_coverage(request.date, &request.workers, &request.absences);
    info!(
        correlation_id = %correlation_id,
        date = %coverage.date,
        total_active = coverage.total_active,
        total_team = coverage.total_team,
        coverage_percent = %coverage.coverage_percent,
        "Team coverage computed"
    );

    json_response(StatusCode::OK, coverage)
}

/// Handler for POST /vacation/check.
async fn vacation_check_handler(
    payload: Result<Json<VacationCheckRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing vacation check request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    if let Err(err) = request.validate() {
        return engine_error_response(correlation_id, err);
    }

    let vacation = request.vacation();
    match check_vacation_request(&vacation, &request.worker, &request.team, &request.absences) {
        Ok(check) => {
            info!(
                correlation_id = %correlation_id,
                worker_id = %request.worker.id,
                start_date = %check.start_date,
                end_date = %check.end_date,
                has_personal_conflict = check.has_personal_conflict,
                peer_conflicts = check.peer_conflicts.len(),
                "Vacation request checked"
            );
            json_response(StatusCode::OK, check)
        }
        Err(err) => engine_error_response(correlation_id, err),
    }
}

/// Expands a calendar request into per-day statuses and totals.
fn build_calendar(request: &CalendarRequest, config: &ConfigLoader) -> EngineResult<CalendarResponse> {
    request.validate()?;

    let worker = &request.worker;
    let state = worker.state.as_deref();
    let mut totals = CalendarTotals::default();

    let days: Vec<CalendarDay> = request
        .start_date
        .iter_days()
        .take_while(|d| *d <= request.end_date)
        .map(|date| {
            let status = day_status(date, worker, &request.absences);
            match status {
                DayStatus::Work => totals.work_days += 1,
                DayStatus::Overtime => totals.overtime_days += 1,
                DayStatus::Vacation => totals.vacation_days += 1,
                DayStatus::Absence => totals.absence_days += 1,
                DayStatus::Off => totals.off_days += 1,
            }
            CalendarDay {
                date,
                status,
                is_work_day: is_work_day(date, worker),
                shift_pattern: resolve_effective_config(date, worker).shift_pattern,
                holiday: config.holiday_on(date, state),
            }
        })
        .collect();

    let streak = work_streak(request.end_date, worker, &request.absences, config.compliance());

    Ok(CalendarResponse {
        worker_id: worker.id.clone(),
        days,
        totals,
        streak,
        vacation_periods: vacation_periods(worker.vacation_dates.iter().copied()),
    })
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], Json(body)).into_response()
}

fn engine_error_response(correlation_id: Uuid, err: crate::error::EngineError) -> Response {
    warn!(correlation_id = %correlation_id, error = %err, "Request failed");
    let api_error: ApiErrorResponse = err.into();
    json_response(api_error.status, api_error.error)
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // serde's message for the offending field
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::{TeamCoverage, VacationCheck};
    use axum::{body::Body, http::Request};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn create_test_state() -> AppState {
        let config = ConfigLoader::load("./config/brazil").expect("Failed to load config");
        AppState::new(config)
    }

    fn worker_json(id: &str, pattern: &str) -> Value {
        json!({
            "id": id,
            "name": "Test Worker",
            "role": "Nurse",
            "turn": "morning",
            "shift_pattern": pattern,
            "cycle_start_date": "2024-01-01",
            "state": "SP"
        })
    }

    async fn post_json(uri: &str, body: String) -> Response {
        create_router(create_test_state())
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    async fn body_bytes(response: Response) -> axum::body::Bytes {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_work_day_returns_200_with_effective_config() {
        let body = json!({ "worker": worker_json("w_001", "5x2"), "date": "2024-01-03" });
        let response = post_json("/work-day", body.to_string()).await;

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let result: WorkDayResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!(result.is_work_day);
        assert_eq!(result.date, "2024-01-03");
        assert!(result.effective_config.is_some());
    }

    #[tokio::test]
    async fn test_work_day_unparseable_date_is_not_work_day() {
        let body = json!({ "worker": worker_json("w_001", "5x2"), "date": "2024-02-30" });
        let response = post_json("/work-day", body.to_string()).await;

        assert_eq!(response.status(), StatusCode::OK);
        let result: WorkDayResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!(!result.is_work_day);
        assert!(result.effective_config.is_none());
    }

    #[tokio::test]
    async fn test_work_day_malformed_json_returns_400() {
        let response = post_json("/work-day", "{invalid json".to_string()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_work_day_missing_worker_id_returns_400() {
        let body = r#"{
            "worker": {
                "role": "Nurse",
                "turn": "morning",
                "shift_pattern": "5x2",
                "cycle_start_date": "2024-01-01"
            },
            "date": "2024-01-03"
        }"#;
        let response = post_json("/work-day", body.to_string()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!(
            error.message.contains("missing field"),
            "Expected error message to mention missing field, got: {}",
            error.message
        );
    }

    #[tokio::test]
    async fn test_work_day_zero_cadence_returns_invalid_worker() {
        let mut worker = worker_json("w_001", "Revezamento");
        worker["rotating_work_days"] = json!(0);
        let body = json!({ "worker": worker, "date": "2024-01-03" });
        let response = post_json("/work-day", body.to_string()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "INVALID_WORKER");
    }

    #[tokio::test]
    async fn test_calendar_marks_statuses_and_holidays() {
        let mut worker = worker_json("w_001", "5x2");
        worker["vacation_dates"] = json!(["2024-07-08"]);
        worker["overtime_dates"] = json!(["2024-07-06"]);
        let body = json!({
            "worker": worker,
            "absences": [
                { "id": "a1", "worker_id": "w_001", "date": "2024-07-10", "reason": "Medical" }
            ],
            "start_date": "2024-07-06",
            "end_date": "2024-07-10"
        });
        let response = post_json("/calendar", body.to_string()).await;

        assert_eq!(response.status(), StatusCode::OK);
        let calendar: CalendarResponse =
            serde_json::from_slice(&body_bytes(response).await).unwrap();

        let statuses: Vec<DayStatus> = calendar.days.iter().map(|d| d.status).collect();
        assert_eq!(
            statuses,
            vec![
                DayStatus::Overtime, // Sat
                DayStatus::Off,      // Sun
                DayStatus::Vacation, // Mon
                DayStatus::Work,     // Tue (SP holiday, still scheduled)
                DayStatus::Absence,  // Wed
            ]
        );
        assert!(calendar.days[3].holiday.is_some());
        assert!(calendar.days[0].holiday.is_none());
        assert_eq!(calendar.totals.work_days, 1);
        assert_eq!(calendar.totals.overtime_days, 1);
        assert_eq!(calendar.totals.vacation_days, 1);
        assert_eq!(calendar.totals.absence_days, 1);
        assert_eq!(calendar.totals.off_days, 1);
        assert_eq!(calendar.streak.count, 0);
        assert_eq!(calendar.vacation_periods.len(), 1);
    }

    #[tokio::test]
    async fn test_calendar_reversed_range_returns_400() {
        let body = json!({
            "worker": worker_json("w_001", "5x2"),
            "start_date": "2024-02-01",
            "end_date": "2024-01-01"
        });
        let response = post_json("/calendar", body.to_string()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_team_coverage_counts_active_workers() {
        let body = json!({
            "workers": [
                worker_json("w_001", "5x2"),
                worker_json("w_002", "5x2"),
                worker_json("w_003", "12x36")
            ],
            "absences": [
                { "id": "a1", "worker_id": "w_002", "date": "2024-01-03", "reason": "Medical" }
            ],
            "date": "2024-01-03"
        });
        let response = post_json("/team/coverage", body.to_string()).await;

        assert_eq!(response.status(), StatusCode::OK);
        let coverage: TeamCoverage = serde_json::from_slice(&body_bytes(response).await).unwrap();
        // 2024-01-03 is day 2 of the 12x36 cycle: work
        assert_eq!(coverage.total_team, 3);
        assert_eq!(coverage.total_active, 2);
    }

    #[tokio::test]
    async fn test_vacation_check_flags_off_day_start() {
        let body = json!({
            "worker": worker_json("w_001", "5x2"),
            "team": [],
            "start_date": "2024-01-06",
            "duration_days": 10
        });
        let response = post_json("/vacation/check", body.to_string()).await;

        assert_eq!(response.status(), StatusCode::OK);
        let check: VacationCheck = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!(!check.start_is_work_day);
        assert!(check.has_personal_conflict);
        assert_eq!(check.end_date.to_string(), "2024-01-15");
    }

    #[tokio::test]
    async fn test_vacation_check_oversized_duration_returns_400() {
        let body = json!({
            "worker": worker_json("w_001", "5x2"),
            "team": [worker_json("w_002", "5x2")],
            "start_date": "2024-01-08",
            "duration_days": 80_000_000
        });
        let response = post_json("/vacation/check", body.to_string()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert!(error.message.contains("at most 30"));
    }

    #[tokio::test]
    async fn test_vacation_check_zero_duration_returns_400() {
        let body = json!({
            "worker": worker_json("w_001", "5x2"),
            "start_date": "2024-01-08",
            "duration_days": 0
        });
        let response = post_json("/vacation/check", body.to_string()).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let error: ApiError = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(error.code, "VALIDATION_ERROR");
    }
}
