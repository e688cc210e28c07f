//! Console output formatting.
//!
//! Each shape has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! ## Report
//!
//! ```text
//! Saved to JPEG format.
//! Original size: 245.32 KB
//! Compressed size: 98.10 KB
//! Total size reduction: 60.01%
//! ```

use crate::optimize::OptimizeReport;

/// Format the four-line success report.
pub fn format_report(report: &OptimizeReport) -> Vec<String> {
    vec![
        format!("Saved to {} format.", report.format),
        format!("Original size: {:.2} KB", report.original_kb()),
        format!("Compressed size: {:.2} KB", report.compressed_kb()),
        format!("Total size reduction: {:.2}%", report.reduction_percent()),
    ]
}

pub fn print_report(report: &OptimizeReport) {
    for line in format_report(report) {
        println!("{line}");
    }
}
