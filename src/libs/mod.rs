//! Core library modules for taskkeep.
//!
//! ## Features
//!
//! - **Task Model**: task record, priorities, statuses, partial updates and search criteria
//! - **Input Validation**: typed parsing of dates, ids and labels with reasoned errors
//! - **Configuration**: task file location, data directory, interactive setup
//! - **User Interface**: central messages, console tables, tracing setup
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use taskkeep::libs::input::TaskParams;
//!
//! let params = TaskParams {
//!     category: Some("work".to_string()),
//!     priority: Some("High".to_string()),
//!     ..Default::default()
//! };
//! let today = NaiveDate::from_ymd_opt(2030, 1, 1).unwrap();
//! let update = params.parse(today)?;
//! assert!(!update.is_empty());
//! # Ok::<(), taskkeep::libs::input::InputError>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod input;
pub mod logging;
pub mod messages;
pub mod task;
pub mod view;
