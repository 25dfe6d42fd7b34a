//! # Scripture Refs Core
//!
//! Pure logic for Scripture Refs: the book-name normalizer, the citation
//! scanner, and the data model they share.
//!
//! This crate performs no I/O and holds no mutable global state. The only
//! process-wide value is the built-in alias table, which is initialized once
//! and read-only afterwards, so scans can run concurrently on independent
//! inputs.
//!
//! ```rust
//! use scripture_refs_core::scan::extract_references;
//!
//! let refs = extract_references("Matt. 1:16, 20; Luke 2:5; Deut. 20:7; 24:5");
//! assert_eq!(
//!     refs,
//!     vec![
//!         "Matthew 1:16",
//!         "Matthew 1:20",
//!         "Luke 2:5",
//!         "Deuteronomy 20:7",
//!         "Deuteronomy 24:5",
//!     ]
//! );
//! ```

pub mod books;
pub mod models;
pub mod scan;

pub use books::{normalize, BookAliases};
pub use models::{Citation, Context, References};
pub use scan::{extract_references, BrokenContinuation, ScanOptions, Scanner};
