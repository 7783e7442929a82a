//! Configuration loading and management for the shift engine.
//!
//! This module loads the compliance policy and the holiday calendar from YAML
//! files.
//!
//! # Example
//!
//! ```no_run
//! use shift_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/brazil").unwrap();
//! println!("Max consecutive days: {}", config.compliance().max_consecutive_work_days);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CompliancePolicy, DEFAULT_MAX_CONSECUTIVE_WORK_DAYS, DEFAULT_STREAK_LOOKBACK_DAYS,
    EngineConfig, HolidayCalendar, HolidayEntry, HolidaysConfig, PolicyConfig,
};
