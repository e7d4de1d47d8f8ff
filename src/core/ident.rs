// src/core/ident.rs
//
// City identifiers: free text → canonical lookup keys used in URLs and as
// column namespaces ("new-york" → "New-York").

/// Upper-case the first character and every character right after a '-'.
/// Everything else is left untouched.
pub fn camelize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut boundary = true;
    for ch in s.chars() {
        if boundary {
            out.extend(ch.to_uppercase());
        } else {
            out.push(ch);
        }
        boundary = ch == '-';
    }
    out
}

/// Split a comma-separated city list, trim, lower-case and camelize each part.
///
/// Order and duplicates are preserved; blank parts are skipped. `None` when
/// nothing usable remains, so callers can fall back to a default list.
/// Spaces are not hyphenated: "los angeles" becomes "Los angeles".
pub fn normalize_cities(text: &str) -> Option<Vec<String>> {
    let ids: Vec<String> = text
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| camelize(&part.to_lowercase()))
        .collect();

    if ids.is_empty() { None } else { Some(ids) }
}

/// Same as `normalize_cities` for an already-split list.
pub fn normalize_list<S: AsRef<str>>(names: &[S]) -> Option<Vec<String>> {
    let joined = names.iter().map(|s| s.as_ref()).collect::<Vec<_>>().join(",");
    normalize_cities(&joined)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn camelize_after_start_and_hyphen() {
        assert_eq!(camelize("new-york"), "New-York");
        assert_eq!(camelize("los angeles"), "Los angeles");
        assert_eq!(camelize("a--b"), "A--B");
        assert_eq!(camelize(""), "");
    }

    #[test]
    fn normalize_trims_lowercases_and_keeps_order() {
        let ids = normalize_cities("Los Angeles, new-york ,SEATTLE,seattle").unwrap();
        assert_eq!(ids, vec!["Los angeles", "New-York", "Seattle", "Seattle"]);
    }

    #[test]
    fn normalize_empty_is_none() {
        assert_eq!(normalize_cities(""), None);
        assert_eq!(normalize_cities(" , ,"), None);
    }

    #[test]
    fn normalize_list_matches_text_form() {
        assert_eq!(
            normalize_list(&["Austin", " hoboken "]),
            Some(vec![s!("Austin"), s!("Hoboken")])
        );
        assert_eq!(normalize_list::<&str>(&[]), None);
    }

    #[test]
    fn normalize_list_accepts_comma_joined_arguments() {
        let args = vec![s!("austin,seattle"), s!("NEW-YORK")];
        assert_eq!(
            normalize_list(&args),
            Some(vec![s!("Austin"), s!("Seattle"), s!("New-York")])
        );
    }
}
