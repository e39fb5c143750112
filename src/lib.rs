//! # Moro - a personal work day tracker
//!
//! Register when your work day starts and ends, how long your breaks were
//! and what you did, then let moro tell you how much you worked.
//!
//! ## Features
//!
//! - **Daily records**: one record per date, built from partial updates
//! - **Worked hours**: net time after breaks, with a clear in-progress state
//! - **End-of-day prediction**: when a full work day is reached
//! - **Reports**: today's table or every registered day
//!
//! ## Usage
//!
//! ```rust,no_run
//! use moro::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
