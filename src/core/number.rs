// src/core/number.rs
//
// Tolerant number parsing for currency-formatted cells ("1,234.56 $", "-3.5 €").

/// Keep only `[0-9.-]` from the trimmed input and parse what is left.
///
/// The kept characters are parsed as a leading float: "1.2.3" → 1.2,
/// "12-5" → 12. `None` when nothing numeric can be read ("abc", "-", ".").
pub fn to_number(s: Option<&str>) -> Option<f64> {
    let kept: String = s?
        .trim()
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    if kept.is_empty() {
        return None;
    }
    parse_leading_float(&kept)
}

/// Longest prefix of `s` that reads as `-?digits[.digits]`.
fn parse_leading_float(s: &str) -> Option<f64> {
    let b = s.as_bytes();
    let mut end = 0usize;
    if b.first() == Some(&b'-') { end = 1; }

    let int_start = end;
    while end < b.len() && b[end].is_ascii_digit() { end += 1; }
    let mut digits = end - int_start;

    if end < b.len() && b[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < b.len() && b[frac_end].is_ascii_digit() { frac_end += 1; }
        if frac_end > frac_start || digits > 0 {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }
    s[..end].trim_end_matches('.').parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_in_absent_out() {
        assert_eq!(to_number(None), None);
    }

    #[test]
    fn strips_currency_and_separators() {
        assert_eq!(to_number(Some("$1,234.56")), Some(1234.56));
        assert_eq!(to_number(Some("  2.50 € ")), Some(2.5));
        assert_eq!(to_number(Some("-3.5")), Some(-3.5));
    }

    #[test]
    fn nothing_numeric_is_none() {
        assert_eq!(to_number(Some("abc")), None);
        assert_eq!(to_number(Some("")), None);
        assert_eq!(to_number(Some("-")), None);
        assert_eq!(to_number(Some(".")), None);
    }

    #[test]
    fn reads_leading_float_only() {
        assert_eq!(to_number(Some("1.2.3")), Some(1.2));
        assert_eq!(to_number(Some("12-5")), Some(12.0));
        assert_eq!(to_number(Some(".5")), Some(0.5));
        assert_eq!(to_number(Some("7.")), Some(7.0));
    }
}
