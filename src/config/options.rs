// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::core::ident;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppOptions {
    pub compare: CompareOptions,
    pub export: ExportOptions,
}

/// How per-city row sequences are aligned into one wide table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum JoinStrategy {
    /// Row k of every city merges into output row k; stops at the shortest city.
    #[default]
    PositionalTruncate,
    /// Rows keyed by (category, item); every key seen in any city is kept.
    OuterByItem,
}

impl JoinStrategy {
    pub fn label(&self) -> &'static str {
        match self {
            JoinStrategy::PositionalTruncate => "positional",
            JoinStrategy::OuterByItem => "outer",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompareOptions {
    /// Free-text, comma-separated city list as typed by the user
    pub cities_text: String,
    pub base_url: String,
    pub join: JoinStrategy,
    /// Sub-fields shown per city in the grid/CSV (e.g. "median")
    pub shown_sub_fields: Vec<String>,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            cities_text: s!(DEFAULT_CITIES),
            base_url: s!(BASE_URL),
            join: JoinStrategy::default(),
            shown_sub_fields: SHOWN_SUB_FIELDS.iter().map(|s| s!(*s)).collect(),
        }
    }
}

impl CompareOptions {
    /// Canonical city identifiers from the text field, falling back to the
    /// default list when the text yields nothing.
    pub fn city_ids(&self) -> Vec<String> {
        ident::normalize_cities(&self.cities_text)
            .or_else(|| ident::normalize_cities(DEFAULT_CITIES))
            .unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }

    /// Field separator; JSON has none.
    pub fn delim(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            ExportFormat::Json => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`; an extension typed by the user wins over the format's.
    pub fn out_path(&self) -> PathBuf {
        let file_name = match &self.out_path.ext {
            Some(ext) => join!(self.out_path.file_stem.to_string_lossy(), ".", &ext.to_string_lossy()),
            None => join!(self.out_path.file_stem.to_string_lossy(), ".", self.format.ext()),
        };
        self.out_path.dir.join(file_name)
    }

    /// Parse GUI/CLI text into dir + stem (+ explicit extension, if any).
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
        self.out_path.ext = p.extension().map(|e| e.to_os_string());
    }

    pub fn current_dir(&self) -> &Path { &self.out_path.dir }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: OsString,
    ext: Option<OsString>,
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_FILE),
            ext: None,
        }
    }
}
