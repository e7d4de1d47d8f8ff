// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Serialize;
use tracing::info;

use crate::{
    chart::ChartOptions,
    compare::Comparison,
    config::options::{AppOptions, ExportFormat},
    csv,
    error::ExportError,
    types::MergedRow,
};

#[derive(Serialize)]
struct JsonExport<'a> {
    cities: Vec<String>,
    rows: &'a [MergedRow],
    chart: ChartOptions,
}

/// Export text for the current format (also used for Copy).
pub fn to_export_string(opts: &AppOptions, cmp: &Comparison) -> Result<String, ExportError> {
    match opts.export.format.delim() {
        Some(sep) => {
            let columns = cmp.columns(&opts.compare.shown_sub_fields);
            let (headers, rows) = cmp.table(&columns);
            let headers = opts.export.include_headers.then_some(headers.as_slice());
            Ok(csv::to_export_string(headers, &rows, sep))
        }
        None => {
            let doc = JsonExport { cities: cmp.cities(), rows: &cmp.rows, chart: cmp.chart_options() };
            Ok(serde_json::to_string_pretty(&doc)?)
        }
    }
}

/// Write the comparison to `opts.export.out_path()`. Returns the path written.
pub fn export_comparison(opts: &AppOptions, cmp: &Comparison) -> Result<PathBuf, ExportError> {
    if cmp.is_empty() {
        return Err(ExportError::Empty);
    }
    let path = opts.export.out_path();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let contents = to_export_string(opts, cmp)?;
    fs::write(&path, contents)?;
    info!(path = %path.display(), rows = cmp.rows.len(), format = ?opts.export.format, "exported");
    Ok(path)
}

/// Chart options alone, pretty JSON.
pub fn chart_json(cmp: &Comparison) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(&cmp.chart_options())?)
}

pub fn ensure_directory(p: &Path) -> std::io::Result<()> {
    if !p.exists() {
        fs::create_dir_all(p)?;
    }
    Ok(())
}

/// Format from a path's extension, if recognizable.
pub fn format_for_path(p: &Path) -> Option<ExportFormat> {
    match p.extension()?.to_str()?.to_ascii_lowercase().as_str() {
        "csv" => Some(ExportFormat::Csv),
        "tsv" | "tab" => Some(ExportFormat::Tsv),
        "json" => Some(ExportFormat::Json),
        _ => None,
    }
}
