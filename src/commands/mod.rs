//! Command implementations for the textsift CLI
//!
//! - `scan` - extract text from a file or directory, print a summary and
//!   optionally export JSON / text reports

pub mod scan;

pub use scan::run_scan;
