//! Export of a calculation result.
//!
//! Flattens a result into an ordered record and renders the two-line
//! comma-separated document other tools import. No file I/O happens
//! here; callers decide where the document goes.

use crate::models::calculation::CalculationResult;

/// Column headers, in the exact order values are written.
pub const EXPORT_HEADERS: [&str; 3] = ["Life Percentage Used", "Days Lived", "Remaining Days"];

/// One exported calculation: values aligned with `EXPORT_HEADERS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportRecord {
    values: [String; 3],
}

impl ExportRecord {
    /// The (header, value) pairs in export order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        EXPORT_HEADERS
            .iter()
            .copied()
            .zip(self.values.iter().map(String::as_str))
    }

    /// Render the header row and the value row, newline-separated, with
    /// no trailing newline.
    pub fn to_csv(&self) -> String {
        let mut doc = String::new();
        doc.push_str(&EXPORT_HEADERS.join(","));
        doc.push('\n');
        doc.push_str(&self.values.join(","));
        doc
    }
}

/// Flatten a result into the fixed-order record. The percentage is
/// formatted to two decimals with a trailing percent sign; day counts are
/// written as plain integers.
pub fn to_record(result: &CalculationResult) -> ExportRecord {
    ExportRecord {
        values: [
            format!("{:.2}%", result.percentage_used),
            result.days_lived.to_string(),
            result.days_remaining.to_string(),
        ],
    }
}

/// Render a result straight to the two-line document.
pub fn to_csv(result: &CalculationResult) -> String {
    to_record(result).to_csv()
}
