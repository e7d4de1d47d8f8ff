use criterion::{black_box, criterion_group, criterion_main, Criterion};

use col_compare::chart::project;
use col_compare::config::options::JoinStrategy;
use col_compare::merge::merge_rows;
use col_compare::specs::cost_table::extract_cost_rows;
use col_compare::types::CityDataset;

/// A page with `categories` header rows, each followed by `per` item rows.
fn synthetic_page(categories: usize, per: usize) -> String {
    let mut body = String::new();
    for c in 0..categories {
        body.push_str(&format!("<tr><th>Category {c}</th><th>Edit</th><th>Range</th></tr>"));
        for i in 0..per {
            let v = (c * per + i) as f64 * 1.25;
            body.push_str(&format!(
                "<tr><td>Item {c}.{i}</td><td class=\"priceValue\">{v:.2}&nbsp;$</td><td>{:.2}-{:.2}</td></tr>",
                v * 0.8,
                v * 1.2
            ));
        }
    }
    format!("<html><body><table class=\"data_wide_table\">{body}</table></body></html>")
}

fn bench_extract(c: &mut Criterion) {
    let page = synthetic_page(8, 10);
    c.bench_function("extract_cost_rows_80", |b| {
        b.iter(|| {
            let rows = extract_cost_rows(black_box(&page));
            black_box(rows);
        })
    });
}

fn bench_merge_and_project(c: &mut Criterion) {
    let page = synthetic_page(8, 10);
    let rows = extract_cost_rows(&page).unwrap_or_default();
    let cities: Vec<String> = (0..6).map(|i| format!("City{i}")).collect();
    let mut data = CityDataset::new();
    for city in &cities {
        data.push(city.clone(), Some(rows.clone()));
    }

    c.bench_function("merge_positional_6x80", |b| {
        b.iter(|| black_box(merge_rows(black_box(&data), JoinStrategy::PositionalTruncate)))
    });
    c.bench_function("merge_outer_6x80", |b| {
        b.iter(|| black_box(merge_rows(black_box(&data), JoinStrategy::OuterByItem)))
    });

    let merged = merge_rows(&data, JoinStrategy::PositionalTruncate);
    c.bench_function("project_chart_6x80", |b| {
        b.iter(|| black_box(project(black_box(&cities), black_box(&merged))))
    });
}

criterion_group!(benches, bench_extract, bench_merge_and_project);
criterion_main!(benches);
