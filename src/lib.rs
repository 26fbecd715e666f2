//! # Coursework - study task tracking
//!
//! A command-line utility for planning course activities, tracking the time
//! spent on them, and producing periodic progress reports.
//!
//! ## Features
//!
//! - **Task Store**: tasks keyed by id in a self-balancing tree with ids that are never reused
//! - **Progress Tracking**: planned and spent minutes, expiry and completion dates
//! - **Reports**: completed, yet to begin, ongoing and expired tasks for a period
//! - **Data Export**: tasks and reports as CSV or JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use coursework::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
