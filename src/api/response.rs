//! Response types for the shift engine API.
//!
//! This module defines the success payloads that are not plain domain types,
//! the error response structure, and the mapping from [`EngineError`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calculation::{DayStatus, VacationPeriod, WorkStreak};
use crate::error::EngineError;
use crate::models::{EffectiveConfig, Holiday, ShiftPattern};

/// Response body for `/work-day`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkDayResponse {
    /// The date as received.
    pub date: String,
    /// Whether the date is a scheduled work day.
    pub is_work_day: bool,
    /// The configuration in force, or `null` if the date did not parse.
    pub effective_config: Option<EffectiveConfig>,
}

/// One day of a `/calendar` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarDay {
    /// The day.
    pub date: NaiveDate,
    /// Status after overlays.
    pub status: DayStatus,
    /// Whether the schedule alone makes this a work day.
    pub is_work_day: bool,
    /// Pattern in force on the day.
    pub shift_pattern: ShiftPattern,
    /// Holiday falling on the day, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday: Option<Holiday>,
}

/// Totals over a `/calendar` range.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalendarTotals {
    /// Scheduled work days.
    pub work_days: u32,
    /// Overtime days outside the schedule.
    pub overtime_days: u32,
    /// Vacation days.
    pub vacation_days: u32,
    /// Absence days.
    pub absence_days: u32,
    /// Days off.
    pub off_days: u32,
}

/// Response body for `/calendar`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarResponse {
    /// The worker the calendar belongs to.
    pub worker_id: String,
    /// One entry per day, in order.
    pub days: Vec<CalendarDay>,
    /// Totals per status.
    pub totals: CalendarTotals,
    /// On-duty streak ending at the last day of the range.
    pub streak: WorkStreak,
    /// The worker's vacation periods.
    pub vacation_periods: Vec<VacationPeriod>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidWorker { field, message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_WORKER",
                    format!("Invalid worker field '{}': {}", field, message),
                    "The worker configuration contains invalid information",
                ),
            },
            EngineError::InvalidDate { value } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_DATE",
                    format!("Invalid date '{}'", value),
                    "Dates must be formatted as yyyy-MM-dd",
                ),
            },
            EngineError::InvalidRequest { message } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::validation_error(message),
            },
        }
    }
}
