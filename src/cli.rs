// src/cli.rs
use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};

use crate::{
    compare,
    config::consts::{BASE_URL, DEFAULT_CITIES},
    config::options::{AppOptions, ExportFormat, JoinStrategy},
    file,
    progress::Progress,
};

#[derive(Parser, Debug)]
#[command(name = "col_compare")]
#[command(about = "Compare cost-of-living line items across cities")]
#[command(version)]
pub struct Cli {
    /// Comma-separated city names; multi-word names use hyphens (new-york)
    #[arg(short, long, default_value = DEFAULT_CITIES)]
    pub cities: String,

    /// How rows from different cities are aligned
    #[arg(short, long, value_enum, default_value_t = JoinArg::Positional)]
    pub join: JoinArg,

    /// Output format; inferred from --out's extension when omitted
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Output file (stdout when omitted)
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Emit a header row in CSV/TSV output
    #[arg(long)]
    pub include_headers: bool,

    /// Print the bar-chart options (JSON) instead of the table
    #[arg(long)]
    pub chart: bool,

    /// Base URL the city identifier is appended to
    #[arg(long, default_value = BASE_URL)]
    pub base_url: String,

    /// Verbose logging (-v INFO, -vv DEBUG)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum JoinArg {
    Positional,
    Outer,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum FormatArg {
    Csv,
    Tsv,
    Json,
}

impl From<JoinArg> for JoinStrategy {
    fn from(j: JoinArg) -> Self {
        match j {
            JoinArg::Positional => JoinStrategy::PositionalTruncate,
            JoinArg::Outer => JoinStrategy::OuterByItem,
        }
    }
}

impl From<FormatArg> for ExportFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Tsv => ExportFormat::Tsv,
            FormatArg::Json => ExportFormat::Json,
        }
    }
}

impl Cli {
    pub fn to_options(&self) -> AppOptions {
        let mut opts = AppOptions::default();
        opts.compare.cities_text = self.cities.clone();
        opts.compare.base_url = self.base_url.clone();
        opts.compare.join = self.join.into();
        opts.export.include_headers = self.include_headers;

        if let Some(out) = &self.out {
            opts.export.set_path(&out.to_string_lossy());
        }
        opts.export.format = self
            .format
            .map(ExportFormat::from)
            .or_else(|| self.out.as_deref().and_then(file::format_for_path))
            .unwrap_or_default();
        opts
    }
}

/// Progress lines on stderr.
struct CliProgress {
    done: usize,
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn log(&mut self, msg: &str) { eprintln!("{msg}"); }
    fn item_done(&mut self, city: &str) {
        self.done += 1;
        eprintln!("  {city}: ok ({}/{})", self.done, self.total);
    }
    fn item_failed(&mut self, city: &str) {
        self.done += 1;
        eprintln!("  {city}: no data ({}/{})", self.done, self.total);
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    crate::log::init(cli.verbose, cli.verbose > 0);

    let opts = cli.to_options();
    let mut progress = CliProgress { done: 0, total: 0 };

    let Some(cmp) = compare::run_blocking(&opts.compare, Some(&mut progress))
        .wrap_err("comparison failed")?
    else {
        return Ok(());
    };

    if cmp.is_empty() {
        eprintln!("No data for any of: {}", cmp.requested.join(", "));
        return Ok(());
    }

    if cli.chart {
        println!("{}", file::chart_json(&cmp)?);
        return Ok(());
    }

    match &cli.out {
        Some(_) => {
            let path = file::export_comparison(&opts, &cmp)?;
            eprintln!("Wrote {}", path.display());
        }
        None => {
            let text = file::to_export_string(&opts, &cmp)?;
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
