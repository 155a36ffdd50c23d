//! Cumulative precision-recall curve construction.

use crate::types::MatchRecord;

/// Build the cumulative precision-recall curve for one class.
///
/// `records` must be sorted by descending confidence, pooled globally
/// across all images of the class. Entry `i` of the returned
/// `(recalls, precisions)` arrays reflects the running true/false positive
/// counts after consuming the first `i + 1` detections:
/// `recall[i] = TP(i) / n_ground_truth` and
/// `precision[i] = TP(i) / (TP(i) + FP(i))`.
///
/// Callers short-circuit classes with `n_ground_truth == 0` to AP = 0
/// before reaching this step; the zero guard here mirrors that contract
/// rather than replacing it.
pub fn cumulative_curve(records: &[MatchRecord], n_ground_truth: usize) -> (Vec<f64>, Vec<f64>) {
    let mut recalls = Vec::with_capacity(records.len());
    let mut precisions = Vec::with_capacity(records.len());

    let mut tp = 0usize;
    let mut fp = 0usize;

    for record in records {
        if record.is_true_positive {
            tp += 1;
        } else {
            fp += 1;
        }

        let recall = if n_ground_truth > 0 {
            tp as f64 / n_ground_truth as f64
        } else {
            0.0
        };
        let precision = tp as f64 / (tp + fp) as f64;

        recalls.push(recall);
        precisions.push(precision);
    }

    (recalls, precisions)
}
