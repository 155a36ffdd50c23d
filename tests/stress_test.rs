//! Larger synthetic workloads exercising the full pipeline.

use detection_eval::evaluator::evaluate_detections;
use detection_eval::types::{Annotation, BoundingBox, Detection};

/// Deterministic pseudo-random sequence, good enough for layout variety.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn next_f64(&mut self) -> f64 {
        (self.next() % 10_000) as f64 / 10_000.0
    }
}

fn synthetic_dataset(
    num_images: usize,
    num_classes: usize,
    seed: u64,
) -> (Vec<Vec<Detection>>, Vec<Vec<Annotation>>) {
    let mut rng = Lcg(seed);
    let mut predictions = Vec::with_capacity(num_images);
    let mut ground_truths = Vec::with_capacity(num_images);

    for _ in 0..num_images {
        let n_gt = (rng.next() % 4) as usize + 1;
        let mut annotations = Vec::with_capacity(n_gt);
        let mut detections = Vec::new();

        for _ in 0..n_gt {
            let x = rng.next_f64() * 500.0;
            let y = rng.next_f64() * 500.0;
            let w = 20.0 + rng.next_f64() * 80.0;
            let h = 20.0 + rng.next_f64() * 80.0;
            let label = (rng.next() % num_classes as u64) as usize;

            annotations.push(Annotation::new(BoundingBox::new(x, y, x + w, y + h), label));

            // Most ground truths get a jittered detection, some are missed
            if rng.next() % 10 < 8 {
                let dx = rng.next_f64() * 8.0 - 4.0;
                let dy = rng.next_f64() * 8.0 - 4.0;
                detections.push(Detection::new(
                    BoundingBox::new(x + dx, y + dy, x + w + dx, y + h + dy),
                    0.3 + rng.next_f64() * 0.69,
                    label,
                ));
            }
        }

        // Sprinkle in spurious detections
        let n_fp = (rng.next() % 3) as usize;
        for _ in 0..n_fp {
            let x = rng.next_f64() * 500.0;
            let y = rng.next_f64() * 500.0;
            detections.push(Detection::new(
                BoundingBox::new(x, y, x + 30.0, y + 30.0),
                0.3 + rng.next_f64() * 0.5,
                (rng.next() % num_classes as u64) as usize,
            ));
        }

        predictions.push(detections);
        ground_truths.push(annotations);
    }

    (predictions, ground_truths)
}

#[test]
fn test_large_dataset_produces_sane_report() {
    let (predictions, ground_truths) = synthetic_dataset(500, 8, 42);

    let report = evaluate_detections(&predictions, &ground_truths, None, 8, None).unwrap();

    assert!((0.0..=1.0).contains(&report.map));
    assert_eq!(report.per_class.len(), 8);
    assert!(report.total_ground_truth >= 500);

    for (name, metrics) in &report.per_class {
        assert!(
            (0.0..=1.0).contains(&metrics.ap),
            "{name}: AP out of range: {}",
            metrics.ap
        );
        assert!((0.0..=1.0).contains(&metrics.precision));
        assert!((0.0..=1.0).contains(&metrics.recall));
    }
}

#[test]
fn test_jittered_detections_score_high() {
    // Jitter of at most 4px on 20-100px boxes keeps IoU above 0.5 in the
    // overwhelming majority of cases; spurious detections cap precision
    // well below 1.0 but the curve should stay far from worthless
    let (predictions, ground_truths) = synthetic_dataset(300, 4, 7);

    let report = evaluate_detections(&predictions, &ground_truths, None, 4, None).unwrap();
    assert!(
        report.map > 0.3,
        "expected decent mAP on jittered data, got {}",
        report.map
    );
}

#[test]
fn test_repeat_evaluation_is_deterministic() {
    let (predictions, ground_truths) = synthetic_dataset(200, 8, 99);

    let first = evaluate_detections(&predictions, &ground_truths, None, 8, None).unwrap();
    let second = evaluate_detections(&predictions, &ground_truths, None, 8, None).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_many_declared_classes_with_sparse_data() {
    let (predictions, ground_truths) = synthetic_dataset(50, 3, 11);

    // Declare far more classes than the data uses
    let report = evaluate_detections(&predictions, &ground_truths, None, 64, None).unwrap();

    assert_eq!(report.per_class.len(), 64);
    let empty_classes = report
        .per_class
        .iter()
        .filter(|(_, m)| m.n_ground_truth == 0)
        .count();
    assert!(empty_classes >= 61);
}
