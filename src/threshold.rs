//! Confidence score thresholding utilities.
//!
//! The inference side usually applies a confidence floor before handing
//! detections over for scoring; these helpers reproduce that step so a
//! dataset can be evaluated at different operating points.

use crate::error::{EvalError, Result};
use crate::types::{Detection, ImageSample};

/// Keep only detections with `score >= threshold`.
///
/// # Errors
///
/// Returns an error if the threshold is outside `[0.0, 1.0]`.
///
/// # Example
///
/// ```
/// use detection_eval::threshold::filter_by_confidence;
/// use detection_eval::types::{BoundingBox, Detection};
///
/// let detections = vec![
///     Detection::new(BoundingBox::new(0.0, 0.0, 10.0, 10.0), 0.9, 0),
///     Detection::new(BoundingBox::new(5.0, 5.0, 15.0, 15.0), 0.3, 0),
/// ];
/// let kept = filter_by_confidence(&detections, 0.5).unwrap();
/// assert_eq!(kept.len(), 1);
/// ```
pub fn filter_by_confidence(detections: &[Detection], threshold: f64) -> Result<Vec<Detection>> {
    validate_threshold(threshold)?;

    Ok(detections
        .iter()
        .filter(|d| d.score >= threshold)
        .copied()
        .collect())
}

/// Apply a confidence floor to every sample's detections.
///
/// Annotations are untouched; only the prediction side is filtered.
pub fn filter_samples_by_confidence(
    samples: &[ImageSample],
    threshold: f64,
) -> Result<Vec<ImageSample>> {
    validate_threshold(threshold)?;

    Ok(samples
        .iter()
        .map(|sample| {
            ImageSample::new(
                sample
                    .detections
                    .iter()
                    .filter(|d| d.score >= threshold)
                    .copied()
                    .collect(),
                sample.annotations.clone(),
            )
        })
        .collect())
}

fn validate_threshold(threshold: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&threshold) {
        return Err(EvalError::InvalidThreshold(format!(
            "threshold must be in [0.0, 1.0], got {threshold}"
        )));
    }
    Ok(())
}
