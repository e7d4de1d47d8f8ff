// tests/extraction.rs
mod common;

use col_compare::specs::cost_table::extract_cost_rows;
use common::{Row, city_page, page};

#[test]
fn header_then_items_share_category_and_row_index() {
    let doc = page(&[
        Row::Header("Food"),
        Row::Item("Milk", "$1.50", "1.00-2.00"),
        Row::Item("Bread", "$3.00", "2.50-3.50"),
    ]);

    let rows = extract_cost_rows(&doc).expect("rows");
    assert_eq!(rows.len(), 2);

    assert_eq!(rows[0].category, "Food");
    assert_eq!(rows[0].item, "Milk");
    assert_eq!(rows[0].median, Some(1.5));
    assert_eq!(rows[0].range.as_deref(), Some("1.00-2.00"));
    assert_eq!(rows[0].idx, 1);

    assert_eq!(rows[1].category, "Food");
    assert_eq!(rows[1].item, "Bread");
    assert_eq!(rows[1].median, Some(3.0));
    assert_eq!(rows[1].range.as_deref(), Some("2.50-3.50"));
    assert_eq!(rows[1].idx, 2);
}

#[test]
fn no_matching_table_is_none() {
    let doc = "<html><body><table class=\"other\"><tr><td>Milk</td><td>1</td></tr></table></body></html>";
    assert!(extract_cost_rows(doc).is_none());
    assert!(extract_cost_rows("not even html <<<").is_none());
}

#[test]
fn table_without_rows_is_none() {
    let doc = "<table class=\"data_wide_table\"></table>";
    assert!(extract_cost_rows(doc).is_none());
}

#[test]
fn items_before_any_header_are_unknown() {
    let doc = page(&[Row::Item("Water", "0.80 $", ""), Row::Header("Markets"), Row::Item("Eggs", "3", "")]);
    let rows = extract_cost_rows(&doc).unwrap();
    assert_eq!(rows[0].category, "Unknown");
    assert_eq!(rows[1].category, "Markets");
    assert_eq!(rows[1].idx, 2);
}

#[test]
fn empty_item_rows_are_dropped_but_still_counted() {
    let doc = page(&[
        Row::Header("Transport"),
        Row::Item("", "1.00", "x"),
        Row::Item("Taxi 1km", "2.00", "1.50-3.00"),
    ]);
    let rows = extract_cost_rows(&doc).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].item, "Taxi 1km");
    assert_eq!(rows[0].idx, 2);
}

#[test]
fn numbers_with_separators_and_ranges_untouched() {
    let rows = extract_cost_rows(&city_page(1.0)).unwrap();
    let rent = rows.iter().find(|r| r.item.starts_with("Apartment")).unwrap();
    assert_eq!(rent.median, Some(1500.0));
    assert_eq!(rent.range.as_deref(), Some("1,200.00-2,000.00"));
    assert_eq!(rent.category, "Rent Per Month");
    assert_eq!(rent.idx, 4);
}

#[test]
fn unparsable_median_is_absent_not_an_error() {
    let doc = page(&[Row::Header("Misc"), Row::Item("Mystery", "?", "")]);
    let rows = extract_cost_rows(&doc).unwrap();
    assert_eq!(rows[0].median, None);
}

#[test]
fn rows_across_several_tables_share_one_index_space() {
    let doc = "<table class=\"data_wide_table\"><tr><th>A</th></tr><tr><td>x</td><td>1</td></tr></table>\
               <table class=\"data_wide_table\"><tr><th>B</th></tr><tr><td>y</td><td>2</td></tr></table>";
    let rows = extract_cost_rows(doc).unwrap();
    let got: Vec<(usize, &str, &str)> = rows.iter().map(|r| (r.idx, r.category.as_str(), r.item.as_str())).collect();
    assert_eq!(got, vec![(1, "A", "x"), (3, "B", "y")]);
}

#[test]
fn extraction_is_repeatable() {
    let doc = city_page(1.3);
    assert_eq!(extract_cost_rows(&doc), extract_cost_rows(&doc));
}
