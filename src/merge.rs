// src/merge.rs
//
// Per-city line items → one wide table.
//
// Each city's non-reserved fields are namespaced `<city>-<field>` so they can
// live side by side; `idx`, `item` and `category` stay shared.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::config::options::JoinStrategy;
use crate::types::{CityDataset, FieldValue, LineItem, MergedRow};

/// Namespace one city's records.
pub fn rename_keys(city: &str, rows: &[LineItem]) -> Vec<MergedRow> {
    rows.iter()
        .map(|r| MergedRow {
            idx: r.idx,
            item: r.item.clone(),
            category: r.category.clone(),
            fields: namespaced_fields(city, r),
        })
        .collect()
}

fn namespaced_fields(city: &str, r: &LineItem) -> BTreeMap<String, Option<FieldValue>> {
    r.fields()
        .into_iter()
        .map(|(key, val)| (join!(city, "-", key), val))
        .collect()
}

/// Shallow right-biased merge: fields of `right` overwrite fields of `left`.
fn merge_right(mut left: MergedRow, right: MergedRow) -> MergedRow {
    left.idx = right.idx;
    left.item = right.item;
    left.category = right.category;
    left.fields.extend(right.fields);
    left
}

/// Merge every city that has data, using the chosen join.
/// Cities without data are skipped; no cities with data → empty table.
pub fn merge_rows(data: &CityDataset, join: JoinStrategy) -> Vec<MergedRow> {
    let rows = match join {
        JoinStrategy::PositionalTruncate => merge_positional(data),
        JoinStrategy::OuterByItem => merge_outer_by_item(data),
    };
    debug!(join = join.label(), cities = data.with_data().count(), rows = rows.len(), "merged");
    rows
}

/// Row k of the output is the merge of row k from every city, in city order.
/// The result is as long as the shortest city.
pub fn merge_positional(data: &CityDataset) -> Vec<MergedRow> {
    data.with_data()
        .map(|(city, rows)| rename_keys(city, rows))
        .reduce(|acc, curr| {
            acc.into_iter()
                .zip(curr)
                .map(|(left, right)| merge_right(left, right))
                .collect()
        })
        .unwrap_or_default()
}

/// Outer join on (category, item).
///
/// Row order is first appearance, walking cities in order; `idx` is the first
/// index seen for that key. Cities lacking a row still get their namespaced
/// fields on it, set to absent.
pub fn merge_outer_by_item(data: &CityDataset) -> Vec<MergedRow> {
    let mut out: Vec<MergedRow> = Vec::new();
    let mut by_key: HashMap<(String, String), usize> = HashMap::new();
    let mut all_fields: Vec<String> = Vec::new();

    for (city, rows) in data.with_data() {
        for row in rename_keys(city, rows) {
            for key in row.fields.keys() {
                if !all_fields.contains(key) {
                    all_fields.push(key.clone());
                }
            }
            let key = (row.category.clone(), row.item.clone());
            match by_key.get(&key) {
                Some(&pos) => out[pos].fields.extend(row.fields),
                None => {
                    by_key.insert(key, out.len());
                    out.push(row);
                }
            }
        }
    }

    for row in &mut out {
        for field in &all_fields {
            row.fields.entry(field.clone()).or_insert(None);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn li(idx: usize, item: &str, median: f64) -> LineItem {
        LineItem {
            idx,
            category: s!("Housing"),
            item: s!(item),
            median: Some(median),
            range: Some(s!("x-y")),
        }
    }

    #[test]
    fn rename_keeps_reserved_fields_shared() {
        let rows = rename_keys("Austin", &[li(3, "Rent", 1.0)]);
        let r = &rows[0];
        assert_eq!((r.idx, r.item.as_str(), r.category.as_str()), (3, "Rent", "Housing"));
        let keys: Vec<&str> = r.fields.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Austin-median", "Austin-range"]);
    }

    #[test]
    fn later_city_wins_on_reserved_collision() {
        let mut data = CityDataset::new();
        data.push("a", Some(vec![li(0, "Rent", 1.0)]));
        data.push("b", Some(vec![li(5, "Rent (b)", 2.0)]));
        let rows = merge_positional(&data);
        assert_eq!(rows[0].idx, 5);
        assert_eq!(rows[0].item, "Rent (b)");
        assert_eq!(rows[0].number("a-median"), Some(1.0));
    }

    #[test]
    fn outer_join_fills_missing_city_fields() {
        let mut data = CityDataset::new();
        data.push("a", Some(vec![li(0, "Rent", 1.0), li(1, "Milk", 2.0)]));
        data.push("b", Some(vec![li(0, "Milk", 3.0)]));
        let rows = merge_outer_by_item(&data);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].item, "Rent");
        assert_eq!(rows[0].fields.get("b-median"), Some(&None));
        assert_eq!(rows[1].number("a-median"), Some(2.0));
        assert_eq!(rows[1].number("b-median"), Some(3.0));
        assert_eq!(rows[1].idx, 1);
    }
}
