//! Core library modules for the moro application.
//!
//! ## Features
//!
//! - **Daily Record Engine**: [`time_of_day`], [`record`] (merge) and
//!   [`hours`] (worked time and end-of-day prediction)
//! - **Core Infrastructure**: configuration, data storage, errors, messaging
//! - **User Interface**: console tables and formatting
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use moro::libs::config::Config;
//! use moro::libs::hours::compute_work_hours;
//! use moro::libs::record::{merge, Update};
//! use moro::libs::time_of_day::TimeOfDay;
//!
//! let config = Config::default();
//! let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let day = merge(None, &Update::set_start(date, TimeOfDay::parse("09:00")?), &config);
//! let day = merge(Some(day), &Update::set_end(date, TimeOfDay::parse("17:30")?), &config);
//! assert_eq!(compute_work_hours(Some(&day)).unwrap().formatted, "8h 0m");
//! # Ok::<(), moro::libs::error::AppError>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod error;
pub mod formatter;
pub mod hours;
pub mod logging;
pub mod messages;
pub mod record;
pub mod time_of_day;
pub mod view;
