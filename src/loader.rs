//! JSON ingestion of raw per-image detection and annotation records.
//!
//! The external inference process emits loosely-shaped records: per image,
//! predictions expose `boxes`, `scores`, and `labels`, ground truth only
//! `boxes` and `labels`, any of which may be absent (defaulting to empty).
//! This module parses that shape and converts it into the crate's typed
//! [`ImageSample`]s, failing fast on ragged or mismatched input instead of
//! carrying optional-key lookups into the engine.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{EvalError, Result};
use crate::types::{Annotation, BoundingBox, Detection, ImageSample};

/// Raw prediction record for one image, as emitted by inference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPrediction {
    /// Boxes in corner format `[x1, y1, x2, y2]`.
    #[serde(default)]
    pub boxes: Vec<[f64; 4]>,
    #[serde(default)]
    pub scores: Vec<f64>,
    #[serde(default)]
    pub labels: Vec<usize>,
}

/// Raw ground-truth record for one image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawGroundTruth {
    /// Boxes in corner format `[x1, y1, x2, y2]`.
    #[serde(default)]
    pub boxes: Vec<[f64; 4]>,
    #[serde(default)]
    pub labels: Vec<usize>,
}

/// Top-level document pairing prediction and ground-truth sequences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawDataset {
    #[serde(default)]
    pub predictions: Vec<RawPrediction>,
    #[serde(default)]
    pub ground_truths: Vec<RawGroundTruth>,
}

/// Load paired image samples from a JSON string.
///
/// # Errors
///
/// Returns an error if the JSON cannot be parsed, if the prediction and
/// ground-truth sequences differ in length, or if any per-image record is
/// ragged (boxes/scores/labels of inconsistent lengths).
///
/// # Example
///
/// ```
/// use detection_eval::loader::load_samples_from_str;
///
/// let json = r#"{
///     "predictions": [{"boxes": [[0.0, 0.0, 10.0, 10.0]], "scores": [0.9], "labels": [0]}],
///     "ground_truths": [{"boxes": [[0.0, 0.0, 10.0, 10.0]], "labels": [0]}]
/// }"#;
/// let samples = load_samples_from_str(json).unwrap();
/// assert_eq!(samples.len(), 1);
/// assert_eq!(samples[0].detections.len(), 1);
/// ```
pub fn load_samples_from_str(json: &str) -> Result<Vec<ImageSample>> {
    let dataset: RawDataset = serde_json::from_str(json)?;
    samples_from_raw(&dataset.predictions, &dataset.ground_truths)
}

/// Load paired image samples from a JSON file.
///
/// # Errors
///
/// Same failure modes as [`load_samples_from_str`], plus I/O errors.
pub fn load_samples_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<ImageSample>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let dataset: RawDataset = serde_json::from_reader(reader)?;
    samples_from_raw(&dataset.predictions, &dataset.ground_truths)
}

/// Convert raw records into typed, validated image samples.
///
/// Prediction and ground-truth sequences are paired by index; a length
/// mismatch beyond that pairing is a precondition violation and is
/// rejected rather than truncated.
pub fn samples_from_raw(
    predictions: &[RawPrediction],
    ground_truths: &[RawGroundTruth],
) -> Result<Vec<ImageSample>> {
    if predictions.len() != ground_truths.len() {
        return Err(EvalError::LengthMismatch {
            predictions: predictions.len(),
            ground_truths: ground_truths.len(),
        });
    }

    predictions
        .iter()
        .zip(ground_truths.iter())
        .enumerate()
        .map(|(image_idx, (pred, gt))| {
            Ok(ImageSample::new(
                detections_from_raw(pred, image_idx)?,
                annotations_from_raw(gt, image_idx)?,
            ))
        })
        .collect()
}

fn detections_from_raw(raw: &RawPrediction, image_idx: usize) -> Result<Vec<Detection>> {
    if raw.boxes.len() != raw.scores.len() || raw.boxes.len() != raw.labels.len() {
        return Err(EvalError::RaggedRecord(format!(
            "image {image_idx}: {} boxes, {} scores, {} labels",
            raw.boxes.len(),
            raw.scores.len(),
            raw.labels.len()
        )));
    }

    Ok(raw
        .boxes
        .iter()
        .zip(raw.scores.iter())
        .zip(raw.labels.iter())
        .map(|((&corners, &score), &label)| {
            Detection::new(BoundingBox::from(corners), score, label)
        })
        .collect())
}

fn annotations_from_raw(raw: &RawGroundTruth, image_idx: usize) -> Result<Vec<Annotation>> {
    if raw.boxes.len() != raw.labels.len() {
        return Err(EvalError::RaggedRecord(format!(
            "image {image_idx}: {} boxes, {} labels",
            raw.boxes.len(),
            raw.labels.len()
        )));
    }

    Ok(raw
        .boxes
        .iter()
        .zip(raw.labels.iter())
        .map(|(&corners, &label)| Annotation::new(BoundingBox::from(corners), label))
        .collect())
}
