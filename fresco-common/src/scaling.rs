//! Ingredient quantity scaling
//!
//! A per-person quantity is free text such as `"200 g"` or `"1 (medium)"`.
//! Scaling multiplies the leading number by the servings count and keeps the
//! trailing unit/description. Quantities without a leading number ("a pinch")
//! are opaque labels and pass through unchanged.

/// Label shown when an ingredient carries no quantity at all
pub const MISSING_QUANTITY_LABEL: &str = "As needed";

/// Consume a leading decimal literal from `text`.
///
/// Accepts one or more digits, optionally followed by `.` and more digits,
/// at the very start of the string. Returns the parsed value and the
/// remainder with any whitespace after the number skipped, or `None` when
/// the text does not start with a digit.
///
/// # Examples
///
/// ```
/// use fresco_common::scaling::parse_leading_quantity;
///
/// assert_eq!(parse_leading_quantity("200 g"), Some((200.0, "g")));
/// assert_eq!(parse_leading_quantity("33.3 g"), Some((33.3, "g")));
/// assert_eq!(parse_leading_quantity("1 (medium)"), Some((1.0, "(medium)")));
/// assert_eq!(parse_leading_quantity("a pinch"), None);
/// ```
pub fn parse_leading_quantity(text: &str) -> Option<(f64, &str)> {
    let bytes = text.as_bytes();
    let mut end = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == 0 {
        return None;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        end += 1;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
    }
    let value: f64 = text[..end].parse().ok()?;
    Some((value, text[end..].trim_start()))
}

/// Format a scaled quantity value.
///
/// Mathematically exact integers render with no decimal places, everything
/// else with exactly one (standard rounding).
///
/// # Examples
///
/// ```
/// use fresco_common::scaling::format_quantity;
///
/// assert_eq!(format_quantity(400.0), "400");
/// assert_eq!(format_quantity(66.6), "66.6");
/// assert_eq!(format_quantity(0.25), "0.2");
/// ```
pub fn format_quantity(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

/// Scale a per-person quantity string by a servings count.
///
/// Returns the text unchanged when `servings` is 0 or 1, when the text is
/// empty, or when it carries no leading number. When the remainder after the
/// number contains a parenthetical note, the first closing parenthesis is
/// rewritten to read `" per serving)"` so the note stays accurate at higher
/// counts.
///
/// # Examples
///
/// ```
/// use fresco_common::scaling::scale_quantity;
///
/// assert_eq!(scale_quantity("200 g", 2), "400 g");
/// assert_eq!(scale_quantity("1 (medium)", 2), "2 (medium per serving)");
/// assert_eq!(scale_quantity("a pinch", 5), "a pinch");
/// ```
pub fn scale_quantity(text: &str, servings: u32) -> String {
    if text.is_empty() || servings <= 1 {
        return text.to_string();
    }

    let Some((base, rest)) = parse_leading_quantity(text) else {
        // No leading number: opaque label, never scaled
        return text.to_string();
    };

    let scaled = format_quantity(base * servings as f64);

    let rest = if rest.contains('(') {
        rest.replacen(')', " per serving)", 1)
    } else {
        rest.to_string()
    };

    if rest.is_empty() {
        scaled
    } else {
        format!("{} {}", scaled, rest)
    }
}

/// Display text for an ingredient quantity at the given servings count,
/// substituting the missing-quantity label when no quantity is present.
pub fn display_quantity(quantity: Option<&str>, servings: u32) -> String {
    match quantity {
        Some(q) if !q.is_empty() => scale_quantity(q, servings),
        _ => MISSING_QUANTITY_LABEL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_at_one_serving() {
        for q in ["200 g", "1 (medium)", "a pinch", "33.3 g", ""] {
            assert_eq!(scale_quantity(q, 1), q);
        }
    }

    #[test]
    fn test_integer_scaling() {
        assert_eq!(scale_quantity("200 g", 2), "400 g");
        assert_eq!(scale_quantity("150 g", 3), "450 g");
    }

    #[test]
    fn test_fractional_scaling_one_decimal() {
        assert_eq!(scale_quantity("33.3 g", 2), "66.6 g");
        assert_eq!(scale_quantity("0.5 tsp", 3), "1.5 tsp");
    }

    #[test]
    fn test_fractional_result_collapses_to_integer() {
        // 0.5 * 2 is exactly 1, so no decimal places
        assert_eq!(scale_quantity("0.5 l", 2), "1 l");
    }

    #[test]
    fn test_parenthetical_rewrite() {
        assert_eq!(scale_quantity("1 (medium)", 2), "2 (medium per serving)");
        // Only the first closing parenthesis is rewritten
        assert_eq!(
            scale_quantity("2 (15 ml) spoons (heaped)", 2),
            "4 (15 ml per serving) spoons (heaped)"
        );
    }

    #[test]
    fn test_open_parenthesis_without_close() {
        assert_eq!(scale_quantity("1 (medium", 2), "2 (medium");
    }

    #[test]
    fn test_unscalable_label_passes_through() {
        assert_eq!(scale_quantity("a pinch", 5), "a pinch");
        assert_eq!(scale_quantity("to taste", 2), "to taste");
    }

    #[test]
    fn test_bare_number_has_no_trailing_space() {
        assert_eq!(scale_quantity("2", 3), "6");
    }

    #[test]
    fn test_zero_servings_does_not_scale_or_panic() {
        assert_eq!(scale_quantity("200 g", 0), "200 g");
    }

    #[test]
    fn test_parse_trailing_dot() {
        assert_eq!(parse_leading_quantity("2. eggs"), Some((2.0, "eggs")));
    }

    #[test]
    fn test_parse_number_glued_to_unit() {
        assert_eq!(parse_leading_quantity("1.5kg"), Some((1.5, "kg")));
    }

    #[test]
    fn test_parse_rejects_leading_dot() {
        assert_eq!(parse_leading_quantity(".5 g"), None);
    }

    #[test]
    fn test_display_quantity_fallback() {
        assert_eq!(display_quantity(None, 3), MISSING_QUANTITY_LABEL);
        assert_eq!(display_quantity(Some(""), 3), MISSING_QUANTITY_LABEL);
        assert_eq!(display_quantity(Some("200 g"), 3), "600 g");
    }
}
