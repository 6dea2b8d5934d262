//! Collapse repeated lines so every entry appears once, at its last occurrence.
//!
//! ```rust
//! use keeplast::dedup::dedupe_keep_last;
//!
//! let history = vec!["ls", "make", "ls", "git status", "make"];
//! assert_eq!(dedupe_keep_last(&history), ["ls", "git status", "make"]);
//! ```

pub mod cli;
pub mod dedup;
pub mod history;
pub mod io;
pub mod sort;
pub mod timer;

pub use dedup::{dedupe_keep_last, keep_last_counted, keep_last_reverse_scan, Strategy};
