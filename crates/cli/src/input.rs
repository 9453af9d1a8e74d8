//! Point sources for the CLI: `x,y,z` flags and tabular files (CSV/Parquet).
//!
//! Tables must carry numeric `x`, `y`, `z` columns; integer columns are cast.

use anyhow::{bail, Context, Result};
use nalgebra::Vector3;
use polars::prelude::*;
use std::path::Path;

/// Parse `"x,y,z"` into a vector.
pub fn parse_point(s: &str) -> Result<Vector3<f64>> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        bail!("expected x,y,z but got {s:?}");
    }
    let mut xyz = [0.0; 3];
    for (slot, part) in xyz.iter_mut().zip(&parts) {
        *slot = part
            .parse::<f64>()
            .with_context(|| format!("bad coordinate {part:?} in {s:?}"))?;
    }
    Ok(Vector3::from(xyz))
}

/// Read points from a `.csv` or `.parquet` file, in row order.
pub fn read_table(path: &str) -> Result<Vec<Vector3<f64>>> {
    let lf = match Path::new(path).extension().and_then(|e| e.to_str()) {
        Some("csv") => LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()?,
        Some("parquet") => LazyFrame::scan_parquet(path, ScanArgsParquet::default())?,
        _ => bail!("unsupported input {path:?} (expected .csv or .parquet)"),
    };
    let df = lf
        .collect()
        .with_context(|| format!("reading points from {path}"))?;
    tracing::info!(rows = df.height(), cols = df.width(), "input_table_shape");
    points_from_frame(&df)
}

pub(crate) fn points_from_frame(df: &DataFrame) -> Result<Vec<Vector3<f64>>> {
    let xs = column_f64(df, "x")?;
    let ys = column_f64(df, "y")?;
    let zs = column_f64(df, "z")?;
    Ok(xs
        .into_iter()
        .zip(ys)
        .zip(zs)
        .map(|((x, y), z)| Vector3::new(x, y, z))
        .collect())
}

fn column_f64(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let series = df
        .column(name)
        .with_context(|| format!("missing column {name:?}"))?
        .cast(&DataType::Float64)?;
    series
        .f64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.with_context(|| format!("null {name} at row {row}")))
        .collect()
}
