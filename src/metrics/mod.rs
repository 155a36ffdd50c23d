//! Metrics calculation modules for detection evaluation.

pub mod ap;
pub mod f1_score;
pub mod iou;
pub mod precision_recall;

pub use ap::{calculate_ap, calculate_map};
pub use f1_score::calculate_f1_score;
pub use iou::calculate_iou;
pub use precision_recall::cumulative_curve;
