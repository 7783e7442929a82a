//! Shift-pattern evaluation engine for Brazilian-style work schedules
//!
//! This crate decides whether a worker is scheduled to work on a given date
//! under one of the common regimes (5x2, 6x1, 12x36, rotating and flexible),
//! honoring a dated history of regime changes. On top of that predicate it
//! builds day statuses, consecutive-day streaks, monthly presence, team
//! coverage and vacation checks, and serves them over a small JSON API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
