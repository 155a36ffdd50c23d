//! Evaluation orchestrator: drives per-class matching, curve building,
//! and AP aggregation into an [`EvaluationReport`].

use std::cmp::Ordering;

use rayon::prelude::*;

use crate::error::{EvalError, Result};
use crate::matching::match_detections;
use crate::metrics::ap::{calculate_ap, calculate_map};
use crate::metrics::precision_recall::cumulative_curve;
use crate::types::{
    Annotation, ClassMetrics, Detection, EvaluationReport, ImageSample, MatchRecord,
};

/// IoU threshold used when the caller does not supply one.
pub const DEFAULT_IOU_THRESHOLD: f64 = 0.5;

/// Evaluate per-image detections against per-image ground truth.
///
/// `predictions` and `ground_truths` are paired by index: image `i`'s
/// detections are only ever matched against image `i`'s annotations.
/// Mismatched lengths are rejected up front rather than truncated.
///
/// Class ids `0..num_classes` are all evaluated and all appear in the
/// report, whether or not they occur in the data. Classes with zero
/// ground truth are reported with AP = 0 but excluded from the mAP mean,
/// distinguishing "no instances to score" from "scored as worthless".
///
/// `class_names`, when given, must contain exactly `num_classes` entries;
/// otherwise names default to `class_{id}`.
///
/// The computation is pure and headless: rendering lives in
/// [`crate::report`].
pub fn evaluate_detections(
    predictions: &[Vec<Detection>],
    ground_truths: &[Vec<Annotation>],
    iou_threshold: Option<f64>,
    num_classes: usize,
    class_names: Option<&[String]>,
) -> Result<EvaluationReport> {
    let samples = ImageSample::pair(predictions, ground_truths)?;
    evaluate_samples(&samples, iou_threshold, num_classes, class_names)
}

/// Evaluate already-paired image samples.
///
/// Same semantics as [`evaluate_detections`]; this entry point suits
/// callers that build [`ImageSample`]s directly (e.g. via the loader or
/// the DataFrame adapter).
pub fn evaluate_samples(
    samples: &[ImageSample],
    iou_threshold: Option<f64>,
    num_classes: usize,
    class_names: Option<&[String]>,
) -> Result<EvaluationReport> {
    let iou_threshold = iou_threshold.unwrap_or(DEFAULT_IOU_THRESHOLD);
    let class_names = resolve_class_names(num_classes, class_names)?;

    // Pool match records per class across all images. Ground truth is
    // counted once per annotation, independent of whether it is matched.
    let mut records_per_class: Vec<Vec<MatchRecord>> = vec![Vec::new(); num_classes];
    let mut gt_counts = vec![0usize; num_classes];

    for sample in samples {
        for annotation in &sample.annotations {
            if annotation.label < num_classes {
                gt_counts[annotation.label] += 1;
            }
        }

        for class_id in 0..num_classes {
            let detections: Vec<Detection> = sample
                .detections
                .iter()
                .filter(|d| d.label == class_id)
                .copied()
                .collect();
            if detections.is_empty() {
                continue;
            }

            let annotations: Vec<Annotation> = sample
                .annotations
                .iter()
                .filter(|a| a.label == class_id)
                .copied()
                .collect();

            records_per_class[class_id].extend(match_detections(
                &detections,
                &annotations,
                iou_threshold,
            ));
        }
    }

    // Per-class curve building and AP are independent across classes, so
    // they run in parallel. Collection preserves class-id order and each
    // class re-sorts its own pool, keeping results deterministic.
    let per_class_metrics: Vec<ClassMetrics> = records_per_class
        .par_iter()
        .zip(gt_counts.par_iter())
        .map(|(records, &n_ground_truth)| single_class_metrics(records, n_ground_truth))
        .collect();

    let scored_aps: Vec<f64> = per_class_metrics
        .iter()
        .filter(|m| m.n_ground_truth > 0)
        .map(|m| m.ap)
        .collect();
    let map = calculate_map(&scored_aps);

    let total_predictions = per_class_metrics.iter().map(|m| m.n_predictions).sum();
    let total_ground_truth = gt_counts.iter().sum();

    Ok(EvaluationReport {
        map,
        iou_threshold,
        per_class: class_names.into_iter().zip(per_class_metrics).collect(),
        total_predictions,
        total_ground_truth,
    })
}

/// Compute the final metrics for one class from its pooled match records.
fn single_class_metrics(records: &[MatchRecord], n_ground_truth: usize) -> ClassMetrics {
    let n_predictions = records.len();

    if n_ground_truth == 0 {
        return ClassMetrics {
            ap: 0.0,
            precision: 0.0,
            recall: 0.0,
            n_predictions,
            n_ground_truth: 0,
        };
    }

    // Global per-class ordering across images. Stable sort keeps the
    // deterministic tie-break from the per-image pass.
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    let (recalls, precisions) = cumulative_curve(&sorted, n_ground_truth);
    let ap = calculate_ap(&recalls, &precisions);

    ClassMetrics {
        ap,
        precision: precisions.last().copied().unwrap_or(0.0),
        recall: recalls.last().copied().unwrap_or(0.0),
        n_predictions,
        n_ground_truth,
    }
}

fn resolve_class_names(num_classes: usize, class_names: Option<&[String]>) -> Result<Vec<String>> {
    match class_names {
        Some(names) if names.len() != num_classes => Err(EvalError::ClassNameCount {
            provided: names.len(),
            num_classes,
        }),
        Some(names) => Ok(names.to_vec()),
        None => Ok((0..num_classes).map(|id| format!("class_{id}")).collect()),
    }
}
