//! End-to-end evaluation demo on a small hand-built crop-disease dataset.
//!
//! Run with: `cargo run --example basic_evaluation`

use detection_eval::evaluator::evaluate_detections;
use detection_eval::metrics::iou::calculate_iou;
use detection_eval::report::print_report;
use detection_eval::threshold::filter_by_confidence;
use detection_eval::types::{Annotation, BoundingBox, Detection};

const CLASS_NAMES: [&str; 8] = [
    "early_leaf_spot",
    "late_leaf_spot",
    "rust",
    "collar_rot",
    "aphid",
    "thrips",
    "tobacco_caterpillar",
    "healthy",
];

fn main() -> detection_eval::Result<()> {
    println!("=== Detection Evaluation Example ===\n");

    // Example 1: IoU between two boxes
    println!("1. IoU Calculation");
    let a = BoundingBox::new(10.0, 10.0, 60.0, 60.0);
    let b = BoundingBox::new(30.0, 30.0, 80.0, 80.0);
    println!("   IoU between overlapping boxes: {:.4}\n", calculate_iou(&a, &b));

    // Example 2: three images of peanut leaves with mixed outcomes
    println!("2. Full Evaluation");

    let predictions = vec![
        // Image 0: both leaf-spot findings localized well
        vec![
            Detection::new(BoundingBox::new(12.0, 8.0, 118.0, 96.0), 0.92, 0),
            Detection::new(BoundingBox::new(200.0, 150.0, 310.0, 260.0), 0.81, 1),
        ],
        // Image 1: a correct rust hit, a duplicate, and a spurious aphid
        vec![
            Detection::new(BoundingBox::new(45.0, 45.0, 150.0, 160.0), 0.88, 2),
            Detection::new(BoundingBox::new(48.0, 44.0, 152.0, 158.0), 0.64, 2),
            Detection::new(BoundingBox::new(400.0, 400.0, 440.0, 440.0), 0.35, 4),
        ],
        // Image 2: the thrips infestation is missed entirely
        vec![],
    ];

    let ground_truths = vec![
        vec![
            Annotation::new(BoundingBox::new(10.0, 10.0, 120.0, 100.0), 0),
            Annotation::new(BoundingBox::new(198.0, 148.0, 312.0, 262.0), 1),
        ],
        vec![Annotation::new(BoundingBox::new(44.0, 42.0, 152.0, 162.0), 2)],
        vec![Annotation::new(BoundingBox::new(60.0, 60.0, 90.0, 90.0), 5)],
    ];

    let class_names: Vec<String> = CLASS_NAMES.iter().map(|s| s.to_string()).collect();
    let report = evaluate_detections(
        &predictions,
        &ground_truths,
        None,
        CLASS_NAMES.len(),
        Some(&class_names),
    )?;

    print_report(&report);

    if let Some(metrics) = report.class_metrics("rust") {
        println!(
            "\nrust: AP {:.4}, F1 {:.4} ({} predictions, {} ground truth)",
            metrics.ap,
            metrics.f1(),
            metrics.n_predictions,
            metrics.n_ground_truth
        );
    }

    // Example 3: re-evaluate at a confidence floor
    println!("\n3. Evaluation at a 0.5 confidence floor");
    let filtered: Vec<Vec<Detection>> = predictions
        .iter()
        .map(|dets| filter_by_confidence(dets, 0.5))
        .collect::<detection_eval::Result<_>>()?;

    let floored = evaluate_detections(
        &filtered,
        &ground_truths,
        None,
        CLASS_NAMES.len(),
        Some(&class_names),
    )?;
    println!(
        "   mAP@0.5 without confidence floor: {:.4}",
        report.map
    );
    println!("   mAP@0.5 at 0.5 confidence floor:  {:.4}", floored.map);

    Ok(())
}
