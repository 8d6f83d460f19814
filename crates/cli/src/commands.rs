//! Subcommand bodies. Each writes its artifact plus a provenance sidecar.

use std::fs::{self, File};
use std::path::Path;

use anyhow::{bail, Context, Result};
use polars::prelude::*;
use serde::Serialize;
use serde_json::json;
use sketchkit::ease::Easing;
use sketchkit::sink::Polyline;
use sketchkit::trim::shapes::sweep_window;
use sketchkit::trim::PathTable;

use crate::input::load_vertices;
use crate::provenance::{write_sidecar, Payload};

#[derive(Debug, Serialize)]
pub struct TrimOutput {
    pub start: f64,
    pub end: f64,
    pub perimeter: f64,
    pub length: f64,
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Serialize)]
pub struct SweepFrame {
    pub frame: u32,
    pub start: f64,
    pub end: f64,
    pub length: f64,
}

fn ensure_parent(out: &Path) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    Ok(())
}

fn load_table(input: &Path) -> Result<PathTable> {
    let vertices = load_vertices(input)?;
    PathTable::checked(vertices)
        .with_context(|| format!("building path table from {}", input.display()))
}

pub fn trim(
    input: &Path,
    start: f64,
    end: f64,
    out: &Path,
    label: Option<&str>,
) -> Result<TrimOutput> {
    if !(0.0..=1.0).contains(&start) || !(0.0..=1.0).contains(&end) || start > end {
        bail!("trim window must satisfy 0 <= start <= end <= 1, got [{start}, {end}]");
    }
    let table = load_table(input)?;
    let mut line = Polyline::default();
    table.trace(start, end, &mut line);
    let output = TrimOutput {
        start,
        end,
        perimeter: table.perimeter(),
        length: line.length(),
        points: line.points.iter().map(|p| [p.x, p.y]).collect(),
    };
    tracing::info!(
        start,
        end,
        perimeter = output.perimeter,
        emitted = output.points.len(),
        "trim"
    );

    ensure_parent(out)?;
    fs::write(out, serde_json::to_vec_pretty(&output)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let payload = Payload::new(
        "trim",
        json!({ "input": input.to_string_lossy(), "start": start, "end": end }),
    )
    .with_label(label);
    write_sidecar(out, payload)?;
    Ok(output)
}

/// Sample `easing` at `samples + 1` evenly spaced points of [0, 1].
pub fn ease(
    easing: Easing,
    samples: usize,
    out: &Path,
    label: Option<&str>,
) -> Result<DataFrame> {
    if samples == 0 {
        bail!("need at least one sample interval");
    }
    let xs: Vec<f64> = (0..=samples).map(|i| i as f64 / samples as f64).collect();
    let ys: Vec<f64> = xs.iter().map(|&x| easing.apply(x)).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    tracing::info!(easing = %easing, rows = df.height(), "ease");

    ensure_parent(out)?;
    let mut file = File::create(out).with_context(|| format!("creating {}", out.display()))?;
    match out.extension().and_then(|e| e.to_str()) {
        Some("parquet") => {
            ParquetWriter::new(&mut file).finish(&mut df)?;
        }
        _ => CsvWriter::new(&mut file).include_header(true).finish(&mut df)?,
    }
    let payload = Payload::new(
        "ease",
        json!({ "easing": easing.to_string(), "samples": samples }),
    )
    .with_label(label);
    write_sidecar(out, payload)?;
    Ok(df)
}

/// Run one grow-then-shrink cycle of `frames` frames over the polygon.
pub fn sweep(
    input: &Path,
    frames: u32,
    out: &Path,
    label: Option<&str>,
) -> Result<Vec<SweepFrame>> {
    if frames == 0 {
        bail!("need at least one frame");
    }
    let table = load_table(input)?;
    let mut line = Polyline::default();
    let result: Vec<SweepFrame> = (0..frames)
        .map(|frame| {
            let (start, end) = sweep_window(frame as f64 / frames as f64);
            table.trace(start, end, &mut line);
            SweepFrame {
                frame,
                start,
                end,
                length: line.length(),
            }
        })
        .collect();
    tracing::info!(frames, perimeter = table.perimeter(), "sweep");

    ensure_parent(out)?;
    fs::write(out, serde_json::to_vec_pretty(&result)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let payload = Payload::new(
        "sweep",
        json!({ "input": input.to_string_lossy(), "frames": frames }),
    )
    .with_label(label);
    write_sidecar(out, payload)?;
    Ok(result)
}
