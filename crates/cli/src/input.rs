//! Polygon vertex loading (CSV with `x,y` columns, or a JSON array of `{x, y}`).

use std::fs;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use polars::prelude::*;
use serde::Deserialize;
use sketchkit::Vec2;

#[derive(Debug, Deserialize)]
struct PointRecord {
    x: f64,
    y: f64,
}

/// Read polygon vertices in file order; the format follows the extension.
pub fn load_vertices(path: &Path) -> Result<Vec<Vec2<f64>>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let vertices = match ext.as_deref() {
        Some("csv") => load_csv(path)?,
        Some("json") => load_json(path)?,
        other => bail!(
            "unsupported input extension {:?} for {} (expected .csv or .json)",
            other,
            path.display()
        ),
    };
    tracing::info!(path = %path.display(), vertices = vertices.len(), "vertices_loaded");
    Ok(vertices)
}

fn load_json(path: &Path) -> Result<Vec<Vec2<f64>>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let records: Vec<PointRecord> =
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))?;
    Ok(records.into_iter().map(|p| Vec2::new(p.x, p.y)).collect())
}

fn load_csv(path: &Path) -> Result<Vec<Vec2<f64>>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .finish()?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x,y columns from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    xs.into_iter()
        .zip(ys.into_iter())
        .enumerate()
        .map(|(row, (x, y))| match (x, y) {
            (Some(x), Some(y)) => Ok(Vec2::new(x, y)),
            _ => Err(anyhow!("row {row} of {} has a missing coordinate", path.display())),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn json_and_csv_agree() {
        let dir = tempdir().unwrap();
        let json_path = dir.path().join("square.json");
        fs::write(
            &json_path,
            r#"[{"x":0,"y":0},{"x":10,"y":0},{"x":10,"y":10},{"x":0,"y":10}]"#,
        )
        .unwrap();
        let csv_path = dir.path().join("square.csv");
        fs::write(&csv_path, "x,y\n0,0\n10,0\n10,10\n0,10\n").unwrap();

        let a = load_vertices(&json_path).unwrap();
        let b = load_vertices(&csv_path).unwrap();
        assert_eq!(a.len(), 4);
        assert_eq!(a, b);
        assert_eq!(a[2], Vec2::new(10.0, 10.0));
    }

    #[test]
    fn rejects_unknown_extension_and_bad_rows() {
        let dir = tempdir().unwrap();
        let txt = dir.path().join("poly.txt");
        fs::write(&txt, "0 0").unwrap();
        let err = load_vertices(&txt).unwrap_err();
        assert!(err.to_string().contains("unsupported input extension"));

        let gap = dir.path().join("gap.csv");
        fs::write(&gap, "x,y\n0,0\n1,\n2,2\n").unwrap();
        let err = load_vertices(&gap).unwrap_err();
        assert!(err.to_string().contains("row 1"));

        let missing = dir.path().join("missing.json");
        assert!(load_vertices(&missing).is_err());
    }
}
