//! Greedy matching of detections to ground truth within one image.

use std::cmp::Ordering;

use crate::metrics::iou::calculate_iou;
use crate::types::{Annotation, Detection, MatchRecord};

/// Match detections to ground-truth annotations for a single image and
/// class, producing one [`MatchRecord`] per detection.
///
/// Both slices must already be restricted to the same class; the
/// evaluator performs that scoping. Matching is greedy and
/// confidence-first:
///
/// 1. Detections are visited in descending score order. Ties keep their
///    encounter order (stable sort), so results are deterministic.
/// 2. Each detection claims the unconsumed ground truth with the highest
///    IoU. If that IoU clears `iou_threshold`, the detection is a true
///    positive and the ground truth becomes ineligible for later
///    detections.
/// 3. Everything else is a false positive, including detections whose
///    best overlap was already claimed by a higher-confidence detection.
///
/// Once a ground truth is consumed, a later detection with higher IoU
/// cannot reclaim it. This is the standard PASCAL VOC / COCO convention;
/// an optimal bipartite assignment is not equivalent and would produce
/// different AP values.
///
/// Records are returned in descending-score order.
pub fn match_detections(
    detections: &[Detection],
    annotations: &[Annotation],
    iou_threshold: f64,
) -> Vec<MatchRecord> {
    let mut order: Vec<usize> = (0..detections.len()).collect();
    order.sort_by(|&a, &b| {
        detections[b]
            .score
            .partial_cmp(&detections[a].score)
            .unwrap_or(Ordering::Equal)
    });

    let mut consumed = vec![false; annotations.len()];
    let mut records = Vec::with_capacity(detections.len());

    for &det_idx in &order {
        let detection = &detections[det_idx];

        let mut best_iou = 0.0;
        let mut best_gt: Option<usize> = None;

        for (gt_idx, annotation) in annotations.iter().enumerate() {
            if consumed[gt_idx] {
                continue;
            }

            let iou = calculate_iou(&detection.bbox, &annotation.bbox);
            if iou > best_iou {
                best_iou = iou;
                best_gt = Some(gt_idx);
            }
        }

        let is_true_positive = match best_gt {
            Some(gt_idx) if best_iou >= iou_threshold => {
                consumed[gt_idx] = true;
                true
            }
            _ => false,
        };

        records.push(MatchRecord {
            score: detection.score,
            is_true_positive,
        });
    }

    records
}
