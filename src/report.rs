//! Human-readable rendering of evaluation results.
//!
//! Formatting is deliberately separate from computation so the evaluator
//! can run headless in automated tests. The table layout (fixed-width
//! columns, one row per class) is a documented external interface
//! consumed by humans and logs; treat it as stable.

use std::fmt::Write;

use crate::types::EvaluationReport;

const RULE_WIDTH: usize = 65;

/// Render an evaluation report as a fixed-width text table.
///
/// Header carries mAP (tagged with the IoU threshold it was computed at)
/// and dataset totals, followed by one row per class with AP, precision,
/// recall, and ground-truth count.
pub fn format_report(report: &EvaluationReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "\n{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(out, "Detection Evaluation Report");
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));

    let _ = writeln!(out, "\nmAP@{}: {:.4}", report.iou_threshold, report.map);
    let _ = writeln!(out, "Total Predictions: {}", report.total_predictions);
    let _ = writeln!(out, "Total Ground Truth: {}", report.total_ground_truth);

    let _ = writeln!(
        out,
        "\n{:<25} {:>8} {:>8} {:>8} {:>6}",
        "Class", "AP", "Prec", "Recall", "GT"
    );
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));

    for (class_name, metrics) in &report.per_class {
        let _ = writeln!(
            out,
            "{:<25} {:>8.4} {:>8.4} {:>8.4} {:>6}",
            class_name, metrics.ap, metrics.precision, metrics.recall, metrics.n_ground_truth
        );
    }

    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));

    out
}

/// Print the formatted report to stdout.
pub fn print_report(report: &EvaluationReport) {
    print!("{}", format_report(report));
}
