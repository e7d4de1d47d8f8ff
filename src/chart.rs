// src/chart.rs
//
// Merged rows → bar-chart series. Rows are ordered by the sum of their
// `*-median` values (cheapest first); the item axis and every city's series
// are read off that one sorted sequence so they always line up.

use serde::Serialize;

use crate::config::consts::{CHART_TITLE, CHART_VALUE_AXIS, MEDIAN_SUFFIX};
use crate::types::MergedRow;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub data: Vec<Option<f64>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ChartProjection {
    /// Shared category axis (item labels), sorted by ascending median sum
    pub categories: Vec<String>,
    /// Legend keys: one per city
    pub legend: Vec<String>,
    pub series: Vec<Series>,
}

impl ChartProjection {
    pub fn is_empty(&self) -> bool { self.categories.is_empty() }

    /// Largest plotted value, for scaling.
    pub fn max_value(&self) -> f64 {
        self.series
            .iter()
            .flat_map(|s| s.data.iter().flatten())
            .copied()
            .fold(0.0, f64::max)
    }
}

/// Sum of every `*-median` field on the row; absent values count as zero.
pub fn sum_median(row: &MergedRow) -> f64 {
    row.fields
        .iter()
        .filter(|(k, _)| k.ends_with(MEDIAN_SUFFIX))
        .filter_map(|(_, v)| v.as_ref().and_then(|v| v.as_f64()))
        .sum()
}

/// Project merged rows onto a category axis plus one series per city.
pub fn project(cities: &[String], rows: &[MergedRow]) -> ChartProjection {
    let mut keyed: Vec<(f64, &MergedRow)> = rows.iter().map(|r| (sum_median(r), r)).collect();
    // Stable: equal sums keep merge order.
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));

    let categories = keyed.iter().map(|(_, r)| r.item.clone()).collect();
    let series = cities
        .iter()
        .map(|city| {
            let field = join!(city, MEDIAN_SUFFIX);
            Series {
                name: city.clone(),
                data: keyed.iter().map(|(_, r)| r.number(&field)).collect(),
            }
        })
        .collect();

    ChartProjection {
        categories,
        legend: cities.to_vec(),
        series,
    }
}

/* ---------------- Chart options document (JSON export) ---------------- */

#[derive(Clone, Debug, Serialize)]
pub struct ChartOptions {
    pub title: Title,
    pub legend: Legend,
    #[serde(rename = "xAxis")]
    pub x_axis: Axis,
    #[serde(rename = "yAxis")]
    pub y_axis: Axis,
    pub series: Vec<BarSeries>,
}

#[derive(Clone, Debug, Serialize)]
pub struct Title { pub text: String }

#[derive(Clone, Debug, Serialize)]
pub struct Legend { pub data: Vec<String> }

#[derive(Clone, Debug, Serialize)]
pub struct Axis {
    #[serde(rename = "type")]
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<String>,
}

#[derive(Clone, Debug, Serialize)]
pub struct BarSeries {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub data: Vec<Option<f64>>,
}

impl From<&ChartProjection> for ChartOptions {
    fn from(p: &ChartProjection) -> Self {
        Self {
            title: Title { text: s!(CHART_TITLE) },
            legend: Legend { data: p.legend.clone() },
            x_axis: Axis { kind: "value", name: Some(s!(CHART_VALUE_AXIS)), data: Vec::new() },
            y_axis: Axis { kind: "category", name: None, data: p.categories.clone() },
            series: p
                .series
                .iter()
                .map(|s| BarSeries { name: s.name.clone(), kind: "bar", data: s.data.clone() })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FieldValue;
    use std::collections::BTreeMap;

    fn row(item: &str, fields: &[(&str, Option<f64>)]) -> MergedRow {
        let fields: BTreeMap<String, Option<FieldValue>> = fields
            .iter()
            .map(|(k, v)| (s!(*k), v.map(FieldValue::Number)))
            .collect();
        MergedRow { idx: 0, item: s!(item), category: s!("c"), fields }
    }

    #[test]
    fn sum_ignores_absent_and_non_median_fields() {
        let mut r = row("x", &[("a-median", Some(2.0)), ("b-median", None)]);
        r.fields.insert(s!("a-range"), Some(FieldValue::Text(s!("1-3"))));
        assert_eq!(sum_median(&r), 2.0);
    }

    #[test]
    fn ties_keep_input_order() {
        let rows = vec![row("first", &[("a-median", Some(1.0))]), row("second", &[("a-median", Some(1.0))])];
        let p = project(&[s!("a")], &rows);
        assert_eq!(p.categories, vec!["first", "second"]);
    }

    #[test]
    fn options_document_shape() {
        let rows = vec![row("Milk", &[("a-median", Some(1.5))])];
        let p = project(&[s!("a")], &rows);
        let json = serde_json::to_value(ChartOptions::from(&p)).unwrap();
        assert_eq!(json["title"]["text"], "Cost of Living");
        assert_eq!(json["yAxis"]["data"][0], "Milk");
        assert_eq!(json["xAxis"]["name"], "USD");
        assert_eq!(json["series"][0]["type"], "bar");
        assert_eq!(json["legend"]["data"][0], "a");
    }
}
