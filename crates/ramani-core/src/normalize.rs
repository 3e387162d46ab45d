/// Normalizes a raw region code for table lookup.
///
/// Strips punctuation (commas, parentheses, periods), collapses runs of whitespace, hyphens and
/// underscores into a single underscore, and trims separators at the edges. Idempotent:
/// `normalize_region_code` of its own output is a no-op, so punctuation variants of the same
/// logical name (`"Dar-es-salaam"`, `"Dar es salaam."`) share one key.
pub fn normalize_region_code(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_sep = false;
    for ch in raw.chars() {
        match ch {
            ',' | '(' | ')' | '.' => {}
            c if c.is_whitespace() || c == '-' || c == '_' => {
                if !out.is_empty() {
                    pending_sep = true;
                }
            }
            c => {
                if pending_sep {
                    out.push('_');
                    pending_sep = false;
                }
                out.push(c);
            }
        }
    }
    out
}

/// Derives the friendly name shown in tooltips from a raw identifier: underscores and hyphens
/// become spaces.
pub fn display_region_name(raw: &str) -> String {
    raw.chars()
        .map(|c| if c == '_' || c == '-' { ' ' } else { c })
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_punctuation_and_collapses_separators() {
        assert_eq!(normalize_region_code("Dar es salaam."), "Dar_es_salaam");
        assert_eq!(normalize_region_code("Dar-es-salaam"), "Dar_es_salaam");
        assert_eq!(normalize_region_code("Kaskazini Pemba"), "Kaskazini_Pemba");
        assert_eq!(normalize_region_code("Mwanza (Lake)"), "Mwanza_Lake");
        assert_eq!(normalize_region_code("  Arusha  "), "Arusha");
        assert_eq!(normalize_region_code("a.b"), "ab");
    }

    #[test]
    fn is_idempotent() {
        for raw in [
            "Dar-es-salaam",
            "Dar es salaam.",
            "Kagera_Lake",
            "a  -  b",
            "__edge__case__",
            "",
            "   ",
            "TZ01",
        ] {
            let once = normalize_region_code(raw);
            assert_eq!(normalize_region_code(&once), once, "input: {raw:?}");
        }
    }

    #[test]
    fn empty_and_separator_only_inputs_normalize_to_empty() {
        assert_eq!(normalize_region_code(""), "");
        assert_eq!(normalize_region_code(" - _ "), "");
        assert_eq!(normalize_region_code("()..,"), "");
    }

    #[test]
    fn display_name_replaces_underscores_and_hyphens() {
        assert_eq!(display_region_name("Dar-es-salaam"), "Dar es salaam");
        assert_eq!(display_region_name("Kagera_Lake"), "Kagera Lake");
        assert_eq!(display_region_name("Arusha"), "Arusha");
    }
}
