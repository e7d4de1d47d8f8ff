// tests/common/mod.rs
//
// Synthetic city pages shaped like the real cost-of-living table.
#![allow(dead_code)]

/// One table row: either a category header or an item with median/range.
pub enum Row<'a> {
    Header(&'a str),
    Item(&'a str, &'a str, &'a str),
}

pub fn page(rows: &[Row]) -> String {
    let mut body = String::new();
    for r in rows {
        match r {
            Row::Header(h) => body.push_str(&format!(
                "<tr><th><div class=\"category_title\">{h}</div></th><th>Edit</th><th>Range</th></tr>\n"
            )),
            Row::Item(item, median, range) => body.push_str(&format!(
                "<tr><td>{item} </td><td style=\"text-align: right\" class=\"priceValue\">\n  <span>{median}</span>\n</td><td class=\"priceBarTd\"><span class=\"barTextLeft\">{range}</span></td></tr>\n"
            )),
        }
    }
    format!(
        "<!DOCTYPE html><html><head><title>Cost of Living</title></head><body>\
         <table class=\"other\"><tr><td>ignore me</td></tr></table>\
         <table class=\"data_wide_table new_bar_table\">{body}</table></body></html>"
    )
}

/// Small two-category page; `scale` multiplies every median.
pub fn city_page(scale: f64) -> String {
    let fmt = |v: f64| format!("{:.2}&nbsp;$", v * scale);
    page(&[
        Row::Header("Restaurants"),
        Row::Item("Meal, Inexpensive Restaurant", &fmt(15.0), "10.00-25.00"),
        Row::Item("Cappuccino (regular)", &fmt(4.5), "3.00-6.00"),
        Row::Header("Rent Per Month"),
        Row::Item("Apartment (1 bedroom) in City Centre", &fmt(1500.0), "1,200.00-2,000.00"),
    ])
}
