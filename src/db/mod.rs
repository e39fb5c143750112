//! Database layer for the moro application.
//!
//! A small SQLite store keyed by calendar date. The schema evolves through
//! versioned migrations applied whenever a connection is opened.

/// Connection setup: resolves the database path, enables foreign keys and
/// applies pending migrations.
pub mod db;

/// Versioned schema changes and their tracking table.
pub mod migrations;

/// Read, upsert and wipe operations for daily records and their notes.
pub mod records;
