//! Search normalization and small text helpers

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize a string for destination search.
///
/// Decomposes to NFD, drops combining marks, lowercases and trims, so
/// "Canadá", "CANADA" and " canada " all become "canada". Internal
/// whitespace is left untouched.
///
/// # Examples
///
/// ```
/// use rhai_domain::normalize;
///
/// assert_eq!(normalize("  Unión Europea "), "union europea");
/// assert_eq!(normalize("MÉXICO"), "mexico");
/// ```
#[must_use]
pub fn normalize(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}

/// Trim a value and turn blank input into `None`.
#[must_use]
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_accents_and_case() {
        assert_eq!(normalize("Canadá"), "canada");
        assert_eq!(normalize("Otros países"), "otros paises");
        assert_eq!(normalize("SUDAMÉRICA"), "sudamerica");
        assert_eq!(normalize("ñandú"), "nandu");
    }

    #[test]
    fn accent_variants_collapse_to_one_form() {
        let forms = ["México", "MEXICO", "mexico", "méxico"];
        for form in forms {
            assert_eq!(normalize(form), "mexico", "form {form}");
        }
    }

    #[test]
    fn trims_but_keeps_inner_spacing() {
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize("\testados  unidos\n"), "estados  unidos");
    }

    #[test]
    fn precomposed_and_decomposed_input_agree() {
        // "e" followed by U+0301 COMBINING ACUTE ACCENT
        assert_eq!(normalize("Me\u{301}xico"), normalize("México"));
    }

    #[test]
    fn non_blank_filters_whitespace() {
        assert_eq!(non_blank(Some("  hi ")), Some("hi".to_string()));
        assert_eq!(non_blank(Some("   ")), None);
        assert_eq!(non_blank(None), None);
    }
}
