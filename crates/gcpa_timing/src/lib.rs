//! Critical path extraction from static timing analysis reports.
//!
//! Each report describes one design block. This crate pulls the design name
//! and delays out of the loosely structured report text, resolves every
//! block's critical path from its slack blocks, and selects the block with
//! the largest critical path across all reports.
//!
//! # Usage
//!
//! ```ignore
//! use gcpa_timing::{analyze_file, GlobalSummary, ResolveOptions};
//!
//! let mut summary = GlobalSummary::new();
//! for path in &paths {
//!     summary.insert(analyze_file(path, ResolveOptions::default())?);
//! }
//! let summary = summary.finish()?;
//! println!("{} at {}", summary.global().display_name(), summary.global().critical_path);
//! ```
//!
//! # Architecture
//!
//! - [`field`] — the labels recognized in report lines and how they match
//! - [`report`] — report text loaded once into memory
//! - [`scanner`] — headline and slack-block passes over the lines
//! - [`module`] — slack entries and per-report module records
//! - [`resolve`] — per-report critical path resolution
//! - [`summary`] — cross-report aggregation and global selection

#![warn(missing_docs)]

pub mod error;
pub mod field;
pub mod module;
pub mod report;
pub mod resolve;
pub mod scanner;
pub mod summary;

pub use error::AnalysisError;
pub use field::{FieldKind, SLACK_MARKER};
pub use module::{Headline, ModuleRecord, SlackEntry, UNNAMED_DESIGN};
pub use report::Report;
pub use resolve::{analyze_file, resolve_module, ResolveOptions};
pub use scanner::ReportScanner;
pub use summary::{AnalysisSummary, GlobalCriticalPath, GlobalSummary};
