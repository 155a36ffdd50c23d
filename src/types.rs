//! Core value types for detections, annotations, and evaluation results.

use serde::{Deserialize, Serialize};

use crate::metrics::f1_score::calculate_f1_score;

/// Axis-aligned bounding box in corner format (x1, y1, x2, y2).
///
/// Well-formed boxes satisfy `x1 < x2` and `y1 < y2`. This is not
/// re-validated: degenerate or inverted boxes yield zero area and are
/// absorbed by the zero-union guard in the IoU computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl BoundingBox {
    /// Create a new bounding box from corner coordinates.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Box width (`x2 - x1`). Negative for inverted boxes.
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    /// Box height (`y2 - y1`). Negative for inverted boxes.
    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Signed area of the box.
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Check that the box has positive extent on both axes.
    pub fn is_valid(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }
}

impl From<[f64; 4]> for BoundingBox {
    fn from(corners: [f64; 4]) -> Self {
        Self::new(corners[0], corners[1], corners[2], corners[3])
    }
}

/// A predicted box with confidence score and class label.
///
/// Produced by the external inference process; owned by the evaluation
/// call for its duration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub bbox: BoundingBox,
    /// Confidence score in (0, 1].
    pub score: f64,
    /// Class id in `0..num_classes`.
    pub label: usize,
}

impl Detection {
    pub fn new(bbox: BoundingBox, score: f64, label: usize) -> Self {
        Self { bbox, score, label }
    }
}

/// A ground-truth box with class label. No score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub bbox: BoundingBox,
    /// Class id in `0..num_classes`.
    pub label: usize,
}

impl Annotation {
    pub fn new(bbox: BoundingBox, label: usize) -> Self {
        Self { bbox, label }
    }
}

/// One image's detections paired with its ground-truth annotations.
///
/// The evaluation input is an ordered sequence of samples; image order
/// does not affect the results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageSample {
    pub detections: Vec<Detection>,
    pub annotations: Vec<Annotation>,
}

impl ImageSample {
    pub fn new(detections: Vec<Detection>, annotations: Vec<Annotation>) -> Self {
        Self {
            detections,
            annotations,
        }
    }

    /// Pair per-image detections with per-image annotations by index.
    ///
    /// Image `i`'s detections are only ever matched against image `i`'s
    /// annotations. Mismatched sequence lengths are rejected rather than
    /// truncated, since truncation would corrupt per-class ground-truth
    /// counts.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::LengthMismatch`](crate::error::EvalError) when
    /// the two sequences have different lengths.
    pub fn pair(
        predictions: &[Vec<Detection>],
        ground_truths: &[Vec<Annotation>],
    ) -> crate::error::Result<Vec<ImageSample>> {
        if predictions.len() != ground_truths.len() {
            return Err(crate::error::EvalError::LengthMismatch {
                predictions: predictions.len(),
                ground_truths: ground_truths.len(),
            });
        }

        Ok(predictions
            .iter()
            .zip(ground_truths.iter())
            .map(|(dets, anns)| ImageSample::new(dets.clone(), anns.clone()))
            .collect())
    }
}

/// Outcome of matching one detection, immutable once produced.
///
/// Every detection produces exactly one record; detections are never
/// discarded during matching.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub score: f64,
    pub is_true_positive: bool,
}

/// Final metrics for a single class.
///
/// `precision` and `recall` are the values at the last point of the
/// cumulative curve, after all detections for the class are consumed --
/// not a threshold-specific snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassMetrics {
    pub ap: f64,
    pub precision: f64,
    pub recall: f64,
    pub n_predictions: usize,
    pub n_ground_truth: usize,
}

impl ClassMetrics {
    /// F1 score derived from the final precision/recall point.
    pub fn f1(&self) -> f64 {
        calculate_f1_score(self.precision, self.recall)
    }
}

/// Complete evaluation output for one `evaluate_detections` call.
///
/// `per_class` lists every declared class in class-id order, including
/// classes with zero ground truth (those carry `ap = 0` and are excluded
/// from the mAP mean, but are still surfaced since they signal a labeling
/// or dataset-construction gap).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    /// Mean AP over classes with at least one ground-truth instance.
    pub map: f64,
    /// IoU threshold the evaluation ran at.
    pub iou_threshold: f64,
    /// Per-class metrics, one entry per declared class, in class-id order.
    pub per_class: Vec<(String, ClassMetrics)>,
    pub total_predictions: usize,
    pub total_ground_truth: usize,
}

impl EvaluationReport {
    /// Look up a class's metrics by name.
    pub fn class_metrics(&self, name: &str) -> Option<&ClassMetrics> {
        self.per_class
            .iter()
            .find(|(class_name, _)| class_name == name)
            .map(|(_, metrics)| metrics)
    }
}
