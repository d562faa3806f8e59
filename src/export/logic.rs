// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{write_csv, write_json};
use crate::export::model::{AlarmExport, alarm_to_row, alarms_to_export, get_headers};
use crate::export::{ExportFormat, notify_export_success};
use crate::core::lexicon::ScanResult;
use crate::models::prescription::ScheduleResult;
use crate::ui::messages::info;
use crate::utils::colors::{colorize_optional, paint_timing};
use crate::utils::formatting::bold;
use crate::utils::table::{Column, Table};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

/// High-level output of command results.
pub struct ExportLogic;

impl ExportLogic {
    /// Write a schedule.
    ///
    /// - `format`: table | csv | json
    /// - `file`: output path, `None` for stdout
    /// - `force`: overwrite an existing file without asking
    pub fn export_schedule(
        result: &ScheduleResult,
        format: &ExportFormat,
        file: Option<&str>,
        force: bool,
    ) -> AppResult<()> {
        log::debug!(
            "exporting {} alarms as {}",
            result.alarms.len(),
            format.as_str()
        );
        match (format, file) {
            (ExportFormat::Table, None) => {
                print!("{}", render_schedule(result, true));
                Ok(())
            }
            (ExportFormat::Table, Some(f)) => {
                let path = Path::new(f);
                ensure_writable(path, force)?;
                std::fs::write(path, render_schedule(result, false))?;
                notify_export_success("Table", path);
                Ok(())
            }
            (ExportFormat::Csv, None) => {
                write_csv(&alarms_to_export(&result.alarms), io::stdout().lock())
            }
            (ExportFormat::Csv, Some(f)) => {
                let path = Path::new(f);
                ensure_writable(path, force)?;
                info(format!("Exporting to CSV: {}", path.display()));
                let out = BufWriter::new(File::create(path)?);
                write_csv(&alarms_to_export(&result.alarms), out)?;
                notify_export_success("CSV", path);
                Ok(())
            }
            (ExportFormat::Json, _) => Self::export_json(result, file, force),
        }
    }

    /// Pretty JSON to `file`, or stdout when `None`.
    pub fn export_json<T: Serialize + ?Sized>(
        value: &T,
        file: Option<&str>,
        force: bool,
    ) -> AppResult<()> {
        match file {
            None => write_json(value, io::stdout().lock()),
            Some(f) => {
                let path = Path::new(f);
                ensure_writable(path, force)?;
                info(format!("Exporting to JSON: {}", path.display()));
                write_json(value, BufWriter::new(File::create(path)?))?;
                notify_export_success("JSON", path);
                Ok(())
            }
        }
    }

    /// Scanned prescriptions with their lexicon candidates, as JSON.
    pub fn export_scan(scan: &ScanResult, file: Option<&str>, force: bool) -> AppResult<()> {
        log::debug!(
            "exporting {} medicines from {} candidates",
            scan.medicines.len(),
            scan.candidates.len()
        );
        Self::export_json(scan, file, force)
    }
}

/// Alarm table followed by one summary line per medicine.
pub fn render_schedule(result: &ScheduleResult, colour: bool) -> String {
    let mut table = Table::new(get_headers().into_iter().map(Column::new).collect());

    for alarm in &result.alarms {
        let mut row = alarm_to_row(&AlarmExport::from(alarm));
        if colour {
            row[2] = paint_timing(alarm.condition, &row[2]);
            row[4] = colorize_optional(&row[4]);
        }
        table.add_row(row);
    }

    let mut out = table.render();
    if result.alarms.is_empty() {
        out.push_str("(no alarms)\n");
    }

    let title = if colour {
        bold("Medicines")
    } else {
        "Medicines".to_string()
    };
    out.push_str(&format!("\n{title}\n"));
    for m in &result.medicines {
        out.push_str(&format!(
            "- {} | {} | 1회 {}{} | 1일 {}회 | {}일\n",
            m.name,
            m.timing.label(),
            m.per_dose,
            m.unit,
            m.frequency,
            m.duration
        ));
    }

    out
}
