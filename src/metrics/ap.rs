//! Average Precision (AP) and mean Average Precision (mAP) calculation.

/// Calculate Average Precision from a precision-recall curve.
///
/// Uses 11-point interpolation over the recall thresholds
/// `{0.0, 0.1, ..., 1.0}`: for each threshold `t`, take the maximum
/// precision among points with recall >= `t` (0 if no detection reached
/// that recall level), then average the 11 values. This is the standard
/// PASCAL VOC approximation of the area under the curve; fidelity to the
/// exact scheme matters for scores comparable across runs and tools, so
/// it is intentionally not the 101-point or continuous variant.
///
/// # Example
///
/// ```
/// use detection_eval::metrics::ap::calculate_ap;
///
/// // A single true positive covering the only ground truth
/// let ap = calculate_ap(&[1.0], &[1.0]);
/// assert!((ap - 1.0).abs() < 1e-10);
/// ```
pub fn calculate_ap(recalls: &[f64], precisions: &[f64]) -> f64 {
    if recalls.is_empty() || precisions.is_empty() {
        return 0.0;
    }

    let mut ap = 0.0;
    for step in 0..=10 {
        let t = step as f64 / 10.0;
        let p = recalls
            .iter()
            .zip(precisions.iter())
            .filter(|(&r, _)| r >= t)
            .map(|(_, &p)| p)
            .fold(0.0f64, f64::max);
        ap += p / 11.0;
    }

    ap
}

/// Calculate mean Average Precision across classes.
///
/// The caller is responsible for the scoping rule: only classes with at
/// least one ground-truth instance belong in `class_aps`. Empty input
/// yields 0.
///
/// # Example
///
/// ```
/// use detection_eval::metrics::ap::calculate_map;
///
/// let map = calculate_map(&[0.8, 0.9, 0.7]);
/// assert!((map - 0.8).abs() < 1e-10);
/// ```
pub fn calculate_map(class_aps: &[f64]) -> f64 {
    if class_aps.is_empty() {
        return 0.0;
    }

    class_aps.iter().sum::<f64>() / class_aps.len() as f64
}
