//! Persistence layer for taskkeep.
//!
//! Tasks are kept in a single JSON file. The [`tasks::Tasks`] store loads the
//! file once, serves every query from memory and rewrites the file after each
//! change.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use taskkeep::db::tasks::Tasks;
//! use taskkeep::libs::task::Priority;
//!
//! let mut tasks = Tasks::open("tasks.json")?;
//! let due = NaiveDate::from_ymd_opt(2030, 5, 1).unwrap();
//! tasks.add("Renew passport", "Bring two photos", "Documents", due, Priority::High)?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## File Format
//!
//! A JSON array of task objects, pretty-printed:
//!
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "title": "Renew passport",
//!     "description": "Bring two photos",
//!     "category": "Documents",
//!     "due_date": "2030-05-01",
//!     "priority": "high",
//!     "status": "not done"
//!   }
//! ]
//! ```

/// File-backed task store.
///
/// Handles id assignment, creation, updates, deletion and search.
pub mod tasks;
