//! Scraping rules for a city cost-of-living page.
//!
//! The page carries one or more `table.data_wide_table` blocks. Rows come in
//! two shapes:
//! - category header: `<tr><th>Restaurants</th>…</tr>`
//! - line item: `<tr><td>Meal, Inexpensive Restaurant</td><td>20.00 $</td><td>15.00-30.00</td></tr>`
//!
//! Every line item inherits the most recent header above it. Row indices count
//! *all* scanned rows (headers too) so the same page layout yields the same
//! indices for every city.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::config::consts::{COST_TABLE_SELECTOR, UNKNOWN_CATEGORY};
use crate::core::number::to_number;
use crate::types::LineItem;

// Compile-time constant selector; parse only fails on invalid CSS.
static COST_ROWS: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(&format!("{COST_TABLE_SELECTOR} tr")).unwrap()
});

/// What a single `<tr>` contributes.
#[derive(Debug, PartialEq)]
enum RowShape {
    /// First cell is `<th>`: new running category.
    Header(String),
    /// First cell is `<td>`: trimmed text of every cell.
    Data(Vec<String>),
    /// No cells at all.
    Other,
}

/// Extract line items from one city document.
///
/// `None` when the document is blank, has no cost table, the table has no
/// rows, or no row carries an item name.
pub fn extract_cost_rows(doc: &str) -> Option<Vec<LineItem>> {
    if doc.trim().is_empty() {
        return None;
    }

    let html = Html::parse_document(doc);
    let rows: Vec<ElementRef> = html.select(&COST_ROWS).collect();
    if rows.is_empty() {
        return None;
    }

    // Fold with (current category, records) as the accumulator.
    let (_, items) = rows.iter().enumerate().fold(
        (s!(UNKNOWN_CATEGORY), Vec::<LineItem>::new()),
        |(category, mut items), (idx, tr)| match classify(tr) {
            RowShape::Header(text) => (text, items),
            RowShape::Data(cells) => {
                items.push(candidate(idx, &category, &cells));
                (category, items)
            }
            RowShape::Other => (category, items),
        },
    );

    let items: Vec<LineItem> = items.into_iter().filter(|r| !r.item.is_empty()).collect();
    if items.is_empty() { None } else { Some(items) }
}

fn classify(tr: &ElementRef) -> RowShape {
    let cells: Vec<ElementRef> = tr
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| matches!(el.value().name(), "td" | "th"))
        .collect();

    match cells.first().map(|c| c.value().name()) {
        Some("th") => RowShape::Header(cell_text(&cells[0])),
        Some(_) => RowShape::Data(cells.iter().map(cell_text).collect()),
        None => RowShape::Other,
    }
}

fn cell_text(el: &ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Line item from data-row cells: [item, median, range].
fn candidate(idx: usize, category: &str, cells: &[String]) -> LineItem {
    LineItem {
        idx,
        category: s!(category),
        item: cells.first().cloned().unwrap_or_default(),
        median: to_number(cells.get(1).map(String::as_str)),
        range: cells.get(2).cloned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(html: &str) -> RowShape {
        let doc = format!(r#"<table class="data_wide_table">{html}</table>"#);
        let parsed = Html::parse_document(&doc);
        let tr = parsed.select(&COST_ROWS).next().unwrap();
        classify(&tr)
    }

    #[test]
    fn classify_header_and_data_rows() {
        assert_eq!(row("<tr><th> Markets </th><th>Edit</th></tr>"), RowShape::Header(s!("Markets")));
        assert_eq!(
            row("<tr><td>Milk</td><td> 1.50&nbsp;$ </td></tr>"),
            RowShape::Data(vec![s!("Milk"), s!("1.50\u{a0}$")])
        );
        assert_eq!(row("<tr></tr>"), RowShape::Other);
    }

    #[test]
    fn first_cell_decides_shape() {
        // A trailing <th> does not turn a data row into a header.
        assert!(matches!(row("<tr><td>Eggs</td><th>x</th></tr>"), RowShape::Data(_)));
    }

    #[test]
    fn nested_markup_text_is_flattened() {
        let shape = row(r#"<tr><td><a href="/x">Rent <b>1 bed</b></a></td><td><span>900.00</span> $</td></tr>"#);
        assert_eq!(shape, RowShape::Data(vec![s!("Rent 1 bed"), s!("900.00 $")]));
    }

    #[test]
    fn missing_cells_yield_absent_fields() {
        let doc = r#"<table class="data_wide_table"><tr><td>Water</td></tr></table>"#;
        let rows = extract_cost_rows(doc).unwrap();
        assert_eq!(rows[0].median, None);
        assert_eq!(rows[0].range, None);
        assert_eq!(rows[0].category, UNKNOWN_CATEGORY);
    }

    #[test]
    fn blank_document_is_none() {
        assert_eq!(extract_cost_rows(""), None);
        assert_eq!(extract_cost_rows("   \n"), None);
    }
}
