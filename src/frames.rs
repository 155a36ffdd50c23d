//! Polars DataFrame interop.
//!
//! Detection pipelines that stage results in DataFrames can hand them to
//! the evaluator through this adapter. Detections and annotations arrive
//! as flat frames, one row per box, keyed by `image_id`; the adapter
//! validates the schema and regroups rows into per-image
//! [`ImageSample`]s. The union of `image_id` values across both frames
//! defines the sample set, so an image present only on one side still
//! contributes its false positives or missed ground truth.

use std::collections::BTreeMap;

use polars::prelude::*;

use crate::error::{EvalError, Result};
use crate::types::{Annotation, BoundingBox, Detection, ImageSample};

const DETECTION_COLUMNS: [&str; 7] = ["image_id", "label", "score", "x1", "y1", "x2", "y2"];
const ANNOTATION_COLUMNS: [&str; 6] = ["image_id", "label", "x1", "y1", "x2", "y2"];

/// Validate that a DataFrame contains all required columns.
pub fn validate_columns(df: &DataFrame, required_columns: &[&str]) -> Result<()> {
    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    for col in required_columns {
        if !column_names.iter().any(|c| c == col) {
            return Err(EvalError::MissingColumn(col.to_string()));
        }
    }

    Ok(())
}

/// Validate the schema of a detections DataFrame.
///
/// Expected columns: `image_id` (Int64), `label` (Int64), `score`
/// (Float64), and corner coordinates `x1, y1, x2, y2` (Float64).
pub fn validate_detections_schema(df: &DataFrame) -> Result<()> {
    validate_columns(df, &DETECTION_COLUMNS)?;
    validate_int_column(df, "image_id")?;
    validate_int_column(df, "label")?;
    for col in ["score", "x1", "y1", "x2", "y2"] {
        validate_float_column(df, col)?;
    }
    Ok(())
}

/// Validate the schema of an annotations DataFrame.
///
/// Expected columns: `image_id` (Int64), `label` (Int64), and corner
/// coordinates `x1, y1, x2, y2` (Float64). No score column.
pub fn validate_annotations_schema(df: &DataFrame) -> Result<()> {
    validate_columns(df, &ANNOTATION_COLUMNS)?;
    validate_int_column(df, "image_id")?;
    validate_int_column(df, "label")?;
    for col in ["x1", "y1", "x2", "y2"] {
        validate_float_column(df, col)?;
    }
    Ok(())
}

fn validate_int_column(df: &DataFrame, name: &str) -> Result<()> {
    let dtype = df.column(name)?.dtype();
    if !matches!(dtype, DataType::Int64) {
        return Err(EvalError::InvalidFrame(format!(
            "{name} must be Int64, got {dtype:?}"
        )));
    }
    Ok(())
}

fn validate_float_column(df: &DataFrame, name: &str) -> Result<()> {
    let dtype = df.column(name)?.dtype();
    if !matches!(dtype, DataType::Float64) {
        return Err(EvalError::InvalidFrame(format!(
            "{name} must be Float64, got {dtype:?}"
        )));
    }
    Ok(())
}

/// Convert flat detection and annotation frames into per-image samples.
///
/// # Errors
///
/// Returns an error on missing columns, unexpected dtypes, null values,
/// or negative labels.
pub fn samples_from_frames(
    detections: &DataFrame,
    annotations: &DataFrame,
) -> Result<Vec<ImageSample>> {
    validate_detections_schema(detections)?;
    validate_annotations_schema(annotations)?;

    let mut by_image: BTreeMap<i64, ImageSample> = BTreeMap::new();

    {
        let ids = detections.column("image_id")?.i64()?;
        let labels = detections.column("label")?.i64()?;
        let scores = detections.column("score")?.f64()?;
        let corners = corner_columns(detections)?;

        for row in 0..detections.height() {
            let image_id = int_at(ids, row, "image_id")?;
            let label = label_at(labels, row)?;
            let score = float_at(scores, row, "score")?;
            let bbox = bbox_at(&corners, row)?;

            by_image
                .entry(image_id)
                .or_default()
                .detections
                .push(Detection::new(bbox, score, label));
        }
    }

    {
        let ids = annotations.column("image_id")?.i64()?;
        let labels = annotations.column("label")?.i64()?;
        let corners = corner_columns(annotations)?;

        for row in 0..annotations.height() {
            let image_id = int_at(ids, row, "image_id")?;
            let label = label_at(labels, row)?;
            let bbox = bbox_at(&corners, row)?;

            by_image
                .entry(image_id)
                .or_default()
                .annotations
                .push(Annotation::new(bbox, label));
        }
    }

    Ok(by_image.into_values().collect())
}

fn corner_columns(df: &DataFrame) -> Result<[&Float64Chunked; 4]> {
    Ok([
        df.column("x1")?.f64()?,
        df.column("y1")?.f64()?,
        df.column("x2")?.f64()?,
        df.column("y2")?.f64()?,
    ])
}

fn bbox_at(corners: &[&Float64Chunked; 4], row: usize) -> Result<BoundingBox> {
    Ok(BoundingBox::new(
        float_at(corners[0], row, "x1")?,
        float_at(corners[1], row, "y1")?,
        float_at(corners[2], row, "x2")?,
        float_at(corners[3], row, "y2")?,
    ))
}

fn int_at(column: &Int64Chunked, row: usize, name: &str) -> Result<i64> {
    column
        .get(row)
        .ok_or_else(|| EvalError::InvalidFrame(format!("null {name} at row {row}")))
}

fn float_at(column: &Float64Chunked, row: usize, name: &str) -> Result<f64> {
    column
        .get(row)
        .ok_or_else(|| EvalError::InvalidFrame(format!("null {name} at row {row}")))
}

fn label_at(column: &Int64Chunked, row: usize) -> Result<usize> {
    let label = int_at(column, row, "label")?;
    usize::try_from(label)
        .map_err(|_| EvalError::InvalidFrame(format!("negative label {label} at row {row}")))
}
