//! HTTP API module for the shift engine.
//!
//! This module exposes the work-day query and the schedule aggregates as
//! JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CalendarRequest, MAX_CALENDAR_DAYS, TeamCoverageRequest, VacationCheckRequest,
    WorkDayRequest,
};
pub use response::{
    ApiError, ApiErrorResponse, CalendarDay, CalendarResponse, CalendarTotals, WorkDayResponse,
};
pub use state::AppState;
