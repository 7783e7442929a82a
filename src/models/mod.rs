//! Core data models for the shift engine.
//!
//! This module contains all the domain models used throughout the engine.

mod absence;
mod effective_config;
mod holiday;
mod shift_pattern;
mod worker;

pub use absence::{Absence, AbsenceStatus};
pub use effective_config::{
    DEFAULT_ROTATING_OFF_DAYS, DEFAULT_ROTATING_WORK_DAYS, EffectiveConfig,
};
pub use holiday::{Holiday, HolidayKind};
pub use shift_pattern::{ShiftPattern, WorkTurn};
pub use worker::{CareerChange, WorkerConfig};
