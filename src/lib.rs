//! # Taskkeep - personal task tracker
//!
//! A command-line utility for keeping a small list of tasks in a JSON file.
//!
//! ## Features
//!
//! - **Task Store**: add, delete, update and search tasks, persisted after every change
//! - **Interactive Menu**: the default mode when no subcommand is given
//! - **Subcommands**: scriptable equivalents of every menu action
//! - **Case-Insensitive Search**: by id, text fields, due date, priority or status
//!
//! ## Usage
//!
//! ```rust,no_run
//! use taskkeep::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
