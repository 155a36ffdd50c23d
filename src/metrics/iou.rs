//! Intersection over Union (IoU) calculation.

use crate::types::BoundingBox;

/// Calculate the Intersection over Union (IoU) between two bounding boxes.
///
/// IoU is defined as the area of intersection divided by the area of union.
/// Degenerate boxes (zero area, or inverted corners) yield an IoU of 0
/// rather than an error: a zero or negative union short-circuits to 0, so
/// malformed upstream data can never cause a division by zero.
///
/// # Example
///
/// ```
/// use detection_eval::metrics::iou::calculate_iou;
/// use detection_eval::types::BoundingBox;
///
/// let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
/// let b = BoundingBox::new(1.0, 1.0, 9.0, 9.0);
/// let iou = calculate_iou(&a, &b);
/// assert!((iou - 0.64).abs() < 1e-10);
/// ```
pub fn calculate_iou(a: &BoundingBox, b: &BoundingBox) -> f64 {
    let x1 = a.x1.max(b.x1);
    let y1 = a.y1.max(b.y1);
    let x2 = a.x2.min(b.x2);
    let y2 = a.y2.min(b.y2);

    // Clamped per axis, so disjoint boxes contribute zero, never negative
    let intersection = (x2 - x1).max(0.0) * (y2 - y1).max(0.0);

    let union = a.area() + b.area() - intersection;
    if union <= 0.0 {
        return 0.0;
    }

    intersection / union
}

/// Calculate the IoU matrix between two sets of bounding boxes.
///
/// `result[i][j]` is the IoU between `boxes_a[i]` and `boxes_b[j]`.
///
/// # Example
///
/// ```
/// use detection_eval::metrics::iou::calculate_iou_matrix;
/// use detection_eval::types::BoundingBox;
///
/// let boxes_a = vec![BoundingBox::new(0.0, 0.0, 10.0, 10.0)];
/// let boxes_b = vec![BoundingBox::new(5.0, 5.0, 15.0, 15.0)];
/// let matrix = calculate_iou_matrix(&boxes_a, &boxes_b);
/// assert_eq!(matrix.len(), 1);
/// assert_eq!(matrix[0].len(), 1);
/// ```
pub fn calculate_iou_matrix(boxes_a: &[BoundingBox], boxes_b: &[BoundingBox]) -> Vec<Vec<f64>> {
    boxes_a
        .iter()
        .map(|a| boxes_b.iter().map(|b| calculate_iou(a, b)).collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_boxes() {
        let bbox = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let iou = calculate_iou(&bbox, &bbox);
        assert!((iou - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_no_overlap() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(20.0, 20.0, 30.0, 30.0);
        assert_eq!(calculate_iou(&a, &b), 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(5.0, 5.0, 15.0, 15.0);

        // Intersection: 5x5 = 25, union: 100 + 100 - 25 = 175
        let iou = calculate_iou(&a, &b);
        assert!((iou - 25.0 / 175.0).abs() < 1e-10);
    }

    #[test]
    fn test_contained_box() {
        let outer = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let inner = BoundingBox::new(1.0, 1.0, 9.0, 9.0);

        // Intersection = area(inner) = 64, union = area(outer) = 100
        let iou = calculate_iou(&outer, &inner);
        assert!((iou - 0.64).abs() < 1e-10);
    }

    #[test]
    fn test_zero_area_boxes_yield_zero() {
        let a = BoundingBox::new(5.0, 5.0, 5.0, 5.0);
        let b = BoundingBox::new(5.0, 5.0, 5.0, 5.0);

        // Zero union must not divide by zero
        assert_eq!(calculate_iou(&a, &b), 0.0);
    }

    #[test]
    fn test_inverted_box_yields_zero() {
        let a = BoundingBox::new(10.0, 10.0, 0.0, 0.0);
        let b = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        assert_eq!(calculate_iou(&a, &b), 0.0);
    }

    #[test]
    fn test_edge_touching_boxes() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(10.0, 0.0, 20.0, 10.0);
        assert_eq!(calculate_iou(&a, &b), 0.0);
    }

    #[test]
    fn test_iou_matrix_shape() {
        let boxes_a = vec![
            BoundingBox::new(0.0, 0.0, 10.0, 10.0),
            BoundingBox::new(5.0, 5.0, 15.0, 15.0),
        ];
        let boxes_b = vec![BoundingBox::new(0.0, 0.0, 10.0, 10.0)];

        let matrix = calculate_iou_matrix(&boxes_a, &boxes_b);
        assert_eq!(matrix.len(), 2);
        assert_eq!(matrix[0].len(), 1);
        assert!((matrix[0][0] - 1.0).abs() < 1e-10);
    }
}
