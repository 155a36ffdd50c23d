//! # detection-eval
//!
//! A Rust library for evaluating object-detection predictions against
//! ground-truth annotations.
//!
//! Given per-image detections (boxes, confidence scores, class labels)
//! and per-image ground truth (boxes, labels), it computes:
//! - **IoU** (Intersection over Union) based greedy matching
//! - Per-class **precision** and **recall** curves
//! - Per-class **AP** (Average Precision, 11-point interpolation)
//! - **mAP** (mean Average Precision over classes with ground truth)
//!
//! The engine is pure and stateless: each call owns its inputs, touches
//! no files or network, and returns the same report for the same inputs.
//! Model training, inference, NMS, and image preprocessing all live
//! outside this crate.
//!
//! ## Quick Start
//!
//! ```rust
//! use detection_eval::evaluator::evaluate_detections;
//! use detection_eval::report::format_report;
//! use detection_eval::types::{Annotation, BoundingBox, Detection};
//!
//! # fn main() -> detection_eval::Result<()> {
//! // One image: one ground-truth box, one well-placed detection
//! let predictions = vec![vec![Detection::new(
//!     BoundingBox::new(1.0, 1.0, 9.0, 9.0),
//!     0.9,
//!     0,
//! )]];
//! let ground_truths = vec![vec![Annotation::new(
//!     BoundingBox::new(0.0, 0.0, 10.0, 10.0),
//!     0,
//! )]];
//!
//! let report = evaluate_detections(&predictions, &ground_truths, None, 1, None)?;
//! assert!((report.map - 1.0).abs() < 1e-10);
//!
//! println!("{}", format_report(&report));
//! # Ok(())
//! # }
//! ```
//!
//! ## Input Format
//!
//! Inputs are plain in-memory values ([`types::Detection`],
//! [`types::Annotation`]), paired per image by index. Raw JSON records
//! from an inference process (`boxes`/`scores`/`labels` per image) can be
//! ingested with [`loader`], and flat Polars DataFrames with [`frames`].

pub mod error;
pub mod evaluator;
pub mod frames;
pub mod loader;
pub mod matching;
pub mod metrics;
pub mod report;
pub mod threshold;
pub mod types;

// Re-export commonly used types and functions
pub use error::{EvalError, Result};
pub use evaluator::{evaluate_detections, evaluate_samples, DEFAULT_IOU_THRESHOLD};
pub use loader::{load_samples_from_file, load_samples_from_str};
pub use report::{format_report, print_report};
pub use threshold::{filter_by_confidence, filter_samples_by_confidence};
pub use types::{
    Annotation, BoundingBox, ClassMetrics, Detection, EvaluationReport, ImageSample, MatchRecord,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_compiles() {
        // Basic smoke test to ensure the library compiles
        let bbox = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        assert!(bbox.is_valid());
    }
}
