// src/types.rs
//
// Shared data shapes flowing through the pipeline:
//   document → Vec<LineItem> (per city) → CityDataset → Vec<MergedRow>

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::consts::{MEDIAN_KEY, RANGE_KEY};

/// One row extracted from a single city's cost table.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LineItem {
    /// Position among *all* rows scanned in the document (header rows included).
    pub idx: usize,
    pub category: String,
    pub item: String,
    pub median: Option<f64>,
    pub range: Option<String>,
}

impl LineItem {
    /// Non-reserved fields, in a stable order. These are the ones that get a
    /// `<city>-` prefix when rows are merged.
    pub fn fields(&self) -> [(&'static str, Option<FieldValue>); 2] {
        [
            (MEDIAN_KEY, self.median.map(FieldValue::Number)),
            (RANGE_KEY, self.range.clone().map(FieldValue::Text)),
        ]
    }
}

/// A namespaced cell value in the wide table.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl FieldValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) if n.is_finite() => Some(*n),
            _ => None,
        }
    }

    /// Cell text for grid/CSV output.
    pub fn display(&self) -> String {
        match self {
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(t) => t.clone(),
        }
    }
}

/// One line of the merged comparison table.
///
/// `idx`, `item` and `category` are shared; every other field is keyed
/// `<city>-<field>` (e.g. `Seattle-median`).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MergedRow {
    pub idx: usize,
    pub item: String,
    pub category: String,
    #[serde(flatten)]
    pub fields: BTreeMap<String, Option<FieldValue>>,
}

impl MergedRow {
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field).and_then(|v| v.as_ref())
    }

    pub fn number(&self, field: &str) -> Option<f64> {
        self.get(field).and_then(FieldValue::as_f64)
    }
}

/// Per-city extraction results, in the order the cities were requested.
/// `None` means the city produced no data (fetch failure or no table).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CityDataset {
    entries: Vec<(String, Option<Vec<LineItem>>)>,
}

impl CityDataset {
    pub fn new() -> Self { Self::default() }

    /// Add a city. A city already present keeps its position and takes the
    /// new rows, so each identifier is listed once and the later one wins.
    pub fn push(&mut self, city: impl Into<String>, rows: Option<Vec<LineItem>>) {
        let city = city.into();
        match self.entries.iter_mut().find(|(c, _)| *c == city) {
            Some(entry) => entry.1 = rows,
            None => self.entries.push((city, rows)),
        }
    }

    pub fn len(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Cities that actually produced rows, in request order.
    pub fn with_data(&self) -> impl Iterator<Item = (&str, &[LineItem])> {
        self.entries
            .iter()
            .filter_map(|(city, rows)| rows.as_deref().map(|r| (city.as_str(), r)))
    }

    pub fn cities_with_data(&self) -> Vec<String> {
        self.with_data().map(|(c, _)| s!(c)).collect()
    }

    pub fn get(&self, city: &str) -> Option<&[LineItem]> {
        self.entries
            .iter()
            .find(|(c, _)| c == city)
            .and_then(|(_, rows)| rows.as_deref())
    }
}

impl FromIterator<(String, Option<Vec<LineItem>>)> for CityDataset {
    fn from_iter<T: IntoIterator<Item = (String, Option<Vec<LineItem>>)>>(iter: T) -> Self {
        let mut data = Self::new();
        for (city, rows) in iter {
            data.push(city, rows);
        }
        data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn li(item: &str, median: f64) -> LineItem {
        LineItem { idx: 1, category: s!("Food"), item: s!(item), median: Some(median), range: None }
    }

    #[test]
    fn repeated_city_is_listed_once_and_later_wins() {
        let mut data = CityDataset::new();
        data.push("Austin", Some(vec![li("Milk", 1.0)]));
        data.push("Seattle", Some(vec![li("Milk", 2.0)]));
        data.push("Austin", Some(vec![li("Milk", 3.0)]));

        assert_eq!(data.len(), 2);
        assert_eq!(data.cities_with_data(), vec!["Austin", "Seattle"]);
        assert_eq!(data.get("Austin").map(|r| r[0].median), Some(Some(3.0)));
    }

    #[test]
    fn collecting_collapses_repeats_too() {
        let data: CityDataset = vec![
            (s!("Austin"), Some(vec![li("Milk", 1.0)])),
            (s!("Austin"), None),
        ]
        .into_iter()
        .collect();
        assert_eq!(data.len(), 1);
        assert!(data.get("Austin").is_none());
    }
}
