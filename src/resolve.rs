//! Duplicate Resolver
//!
//! Everything downstream of grouping: picking out duplicated identifiers, reporting them,
//! deleting superseded files and exporting the kept ones.

pub mod delete;
pub mod duplicates;
pub mod export;
pub mod report;

pub use delete::{delete_older, DeletionLedger, SharedFilePolicy};
pub use duplicates::{find_duplicates, DuplicateSet};
pub use export::{export, ExportSummary, ExportedFile};
pub use report::{format_report_json, format_report_text, DuplicateReport};
