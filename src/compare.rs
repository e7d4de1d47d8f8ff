// src/compare.rs
//
// One comparison request, end to end:
//   city ids → fetch (join-all) → extract per city → merge → chart projection
//
// Everything produced lives in a `Comparison` owned by the caller; nothing is
// kept between runs.

use tracing::{error, info, warn};

use crate::{
    chart::{self, ChartOptions, ChartProjection},
    config::consts::{CATEGORY_KEY, ITEM_KEY, MEDIAN_KEY, RANGE_KEY},
    config::options::{CompareOptions, JoinStrategy},
    core::net::{self, DocumentSource, HttpSource},
    error::CompareError,
    merge,
    progress::{NullProgress, Progress},
    specs::cost_table,
    types::{CityDataset, MergedRow},
};

/// Grid column description handed to the presentation layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnSpec {
    pub title: String,
    pub field: String,
    /// Owning city, for grouped headers; `None` for the shared columns
    pub group: Option<String>,
    pub numeric: bool,
}

#[derive(Clone, Debug)]
pub struct Comparison {
    /// Cities as requested (including ones that produced nothing)
    pub requested: Vec<String>,
    pub join: JoinStrategy,
    pub dataset: CityDataset,
    pub rows: Vec<MergedRow>,
    pub chart: ChartProjection,
}

impl Comparison {
    /// Cities that made it into the table, in request order.
    pub fn cities(&self) -> Vec<String> { self.dataset.cities_with_data() }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Fixed Category/Item columns, then one column per shown sub-field per city.
    pub fn columns<S: AsRef<str>>(&self, shown_sub_fields: &[S]) -> Vec<ColumnSpec> {
        let mut cols = vec![
            ColumnSpec { title: s!("Category"), field: s!(CATEGORY_KEY), group: None, numeric: false },
            ColumnSpec { title: s!("Item"), field: s!(ITEM_KEY), group: None, numeric: false },
        ];
        for city in self.cities() {
            for sub in shown_sub_fields.iter().map(AsRef::as_ref) {
                if sub != MEDIAN_KEY && sub != RANGE_KEY {
                    continue;
                }
                cols.push(ColumnSpec {
                    title: s!(sub),
                    field: join!(&city, "-", sub),
                    group: Some(city.clone()),
                    numeric: sub == MEDIAN_KEY,
                });
            }
        }
        cols
    }

    /// Headers + string cells for the given columns (absent → empty cell).
    pub fn table(&self, columns: &[ColumnSpec]) -> (Vec<String>, Vec<Vec<String>>) {
        let headers = columns
            .iter()
            .map(|c| match &c.group {
                Some(_) => c.field.clone(),
                None => c.title.clone(),
            })
            .collect();
        let rows = self.rows.iter().map(|r| cells(r, columns)).collect();
        (headers, rows)
    }

    pub fn chart_options(&self) -> ChartOptions {
        ChartOptions::from(&self.chart)
    }
}

pub fn cell(row: &MergedRow, field: &str) -> String {
    match field {
        CATEGORY_KEY => row.category.clone(),
        ITEM_KEY => row.item.clone(),
        _ => row.get(field).map(|v| v.display()).unwrap_or_default(),
    }
}

fn cells(row: &MergedRow, columns: &[ColumnSpec]) -> Vec<String> {
    columns.iter().map(|c| cell(row, &c.field)).collect()
}

/// Pure part of the pipeline: documents in, comparison out.
pub fn build(requested: Vec<String>, docs: Vec<(String, Option<String>)>, join: JoinStrategy) -> Comparison {
    let dataset: CityDataset = docs
        .into_iter()
        .map(|(city, doc)| {
            let rows = doc.as_deref().and_then(cost_table::extract_cost_rows);
            if doc.is_some() && rows.is_none() {
                warn!(%city, "no cost table found");
            }
            (city, rows)
        })
        .collect();

    let rows = merge::merge_rows(&dataset, join);
    let chart = chart::project(&dataset.cities_with_data(), &rows);

    Comparison { requested, join, dataset, rows, chart }
}

/// Run one comparison against `source`. `None` when there are no cities.
pub async fn run<S>(
    source: &S,
    cities: &[String],
    join: JoinStrategy,
    progress: Option<&mut dyn Progress>,
) -> Option<Comparison>
where
    S: DocumentSource + ?Sized,
{
    if cities.is_empty() {
        info!("no cities to compare");
        return None;
    }

    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };
    progress.begin(cities.len());
    progress.log("Fetching…");

    let docs = net::fetch_documents(source, cities).await;
    let cmp = build(cities.to_vec(), docs, join);

    for city in &cmp.requested {
        match cmp.dataset.get(city) {
            Some(_) => progress.item_done(city),
            None => progress.item_failed(city),
        }
    }
    progress.finish();

    info!(
        requested = cmp.requested.len(),
        with_data = cmp.dataset.with_data().count(),
        rows = cmp.rows.len(),
        "comparison built"
    );
    Some(cmp)
}

/// Blocking entry point for the CLI and the GUI worker thread: HTTP source
/// from the options, on a current-thread runtime.
pub fn run_blocking(
    opts: &CompareOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<Option<Comparison>, CompareError> {
    let cities = opts.city_ids();
    if cities.is_empty() {
        return Ok(None);
    }

    let source = HttpSource::new(opts.base_url.clone())?;
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CompareError::Runtime)?;

    let out = rt.block_on(run(&source, &cities, opts.join, progress));
    Ok(out)
}

/// `run_blocking` with the top-level catch: errors are logged, not returned.
pub fn run_logged(opts: &CompareOptions, progress: Option<&mut dyn Progress>) -> Option<Comparison> {
    match run_blocking(opts, progress) {
        Ok(cmp) => cmp,
        Err(e) => {
            error!(error = %e, "comparison failed");
            None
        }
    }
}
