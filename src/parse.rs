//! Input Parsing Helpers
//!
//! Shared form-field parsing: comma-separated lists and numeric ranges.

/// Split a comma-separated input into trimmed, non-empty segments.
///
/// Blank input yields an empty list; stray commas are dropped.
pub fn split_comma_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a likelihood/impact field and clamp it into the 1..=5 scale.
pub fn parse_scale(input: &str) -> Result<f64, String> {
    let trimmed = input.trim();
    trimmed
        .parse::<f64>()
        .map(clamp_scale)
        .map_err(|_| format!("'{trimmed}' is not a number"))
}

/// Clamp a scale value into [1, 5].
pub fn clamp_scale(value: f64) -> f64 {
    value.clamp(1.0, 5.0)
}

/// Parse an optional numeric field. Blank input means "not set";
/// anything non-numeric is an error. No range is enforced here.
pub fn parse_optional_number(input: &str) -> Result<Option<f64>, String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| format!("'{trimmed}' is not a number"))
}

/// Parse a factor weight, defaulting to 1 when the field is left blank.
pub fn parse_weight(input: &str) -> Result<f64, String> {
    Ok(parse_optional_number(input)?.unwrap_or(1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comma_list_drops_empty_segments() {
        assert_eq!(split_comma_list("a,, b ,"), vec!["a", "b"]);
    }

    #[test]
    fn comma_list_blank_is_empty() {
        assert!(split_comma_list("").is_empty());
        assert!(split_comma_list("  , ,").is_empty());
    }

    #[test]
    fn scale_clamps_out_of_range() {
        assert_eq!(parse_scale("9"), Ok(5.0));
        assert_eq!(parse_scale("0"), Ok(1.0));
        assert_eq!(parse_scale("3.5"), Ok(3.5));
    }

    #[test]
    fn scale_rejects_non_numeric() {
        assert!(parse_scale("high").is_err());
    }

    #[test]
    fn optional_number_blank_is_none() {
        assert_eq!(parse_optional_number("   "), Ok(None));
        assert_eq!(parse_optional_number("0.4"), Ok(Some(0.4)));
        // Out-of-range values pass through untouched.
        assert_eq!(parse_optional_number("7.5"), Ok(Some(7.5)));
    }

    #[test]
    fn weight_defaults_to_one() {
        assert_eq!(parse_weight(""), Ok(1.0));
        assert_eq!(parse_weight("2"), Ok(2.0));
    }
}
