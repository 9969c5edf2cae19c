//! Output formatting utilities

use crate::application::ConversionReport;

/// Format a conversion report for display
pub fn format_report(report: &ConversionReport) -> String {
    let mut output = String::new();

    for conversion in &report.converted {
        if conversion.is_renamed() {
            output.push_str(&format!("{} -> {}\n", conversion.source, conversion.target));
        } else {
            output.push_str(&format!("{}\n", conversion.source));
        }
    }

    for failure in &report.failures {
        output.push_str(&format!("FAILED {}: {}\n", failure.file_name, failure.message));
    }

    if report.dry_run {
        output.push_str(&format!(
            "Dry run: {} file(s) would be converted, skipped {}.",
            report.converted.len(),
            report.skipped.len()
        ));
    } else {
        output.push_str(&format!(
            "Converted {} file(s), skipped {}.",
            report.converted.len(),
            report.skipped.len()
        ));
    }

    if report.has_failures() {
        output.push_str(&format!(" {} file(s) failed.", report.failures.len()));
    }

    output
}
