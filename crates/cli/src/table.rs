//! CSV export of a polygon sequence via a Polars DataFrame.

use anyhow::{Context, Result};
use polars::prelude::*;
use polyseq::{ConvexPolygon, PolygonSequence};
use std::fs::File;
use std::path::Path;

/// One column per polygon property, one row per side count.
pub fn to_frame(seq: &PolygonSequence) -> PolarsResult<DataFrame> {
    let polys: Vec<_> = seq.iterate().collect();
    let col = |f: fn(&ConvexPolygon) -> f64| polys.iter().map(|p| f(p)).collect::<Vec<f64>>();
    df!(
        "sides" => polys.iter().map(|p| p.sides()).collect::<Vec<u32>>(),
        "circumradius" => col(|p| p.circumradius()),
        "side_length" => col(|p| p.side_length()),
        "interior_angle" => col(|p| p.interior_angle()),
        "apothem" => col(|p| p.apothem()),
        "area" => col(|p| p.area()),
        "perimeter" => col(|p| p.perimeter()),
        "efficiency" => col(|p| p.efficiency())
    )
}

/// Write the table to `out`, creating parent directories. Returns the row count.
pub fn write_csv(seq: &PolygonSequence, out: &str) -> Result<usize> {
    let mut df = to_frame(seq)?;
    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let mut file = File::create(out_path).with_context(|| format!("creating {out}"))?;
    CsvWriter::new(&mut file).finish(&mut df)?;
    Ok(df.height())
}
