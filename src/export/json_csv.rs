// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::model::AlarmExport;
use serde::Serialize;
use std::io::Write;

/// Pretty-printed JSON of any serializable document.
pub(crate) fn write_json<T: Serialize + ?Sized, W: Write>(value: &T, mut out: W) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}

/// CSV with header row (from serde field names).
pub(crate) fn write_csv<W: Write>(rows: &[AlarmExport], out: W) -> AppResult<()> {
    let mut wtr = csv::Writer::from_writer(out);
    for item in rows {
        wtr.serialize(item)?;
    }
    wtr.flush()?;
    Ok(())
}
