//! Ratio parsing for preview playback
//!
//! Ratios are written `numerator/denominator` or as a bare numerator.

/// Parse a ratio string into a frequency multiplier.
///
/// The denominator is optional. A denominator that is missing, empty, zero or not a
/// number leaves the bare numerator. Components after a second `/` are ignored.
/// Returns `None` only when the numerator is not a finite number.
///
/// # Examples
/// ```
/// use scalefind::audio::parse_ratio;
///
/// assert_eq!(parse_ratio("3/2"), Some(1.5));
/// assert_eq!(parse_ratio("2"), Some(2.0));
/// assert_eq!(parse_ratio("5/0"), Some(5.0));
/// assert_eq!(parse_ratio("x/2"), None);
/// ```
pub fn parse_ratio(ratio: &str) -> Option<f64> {
    let mut parts = ratio.split('/');
    let numerator = parse_component(parts.next()?)?;

    match parts.next().and_then(parse_component) {
        Some(denominator) if denominator != 0.0 => Some(numerator / denominator),
        _ => Some(numerator),
    }
}

fn parse_component(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fractions() {
        assert_eq!(parse_ratio("1/1"), Some(1.0));
        assert_eq!(parse_ratio("9/8"), Some(1.125));
        assert_eq!(parse_ratio("81/64"), Some(1.265625));
        assert_eq!(parse_ratio(" 5 / 4 "), Some(1.25));
    }

    #[test]
    fn test_bare_numerator() {
        assert_eq!(parse_ratio("3"), Some(3.0));
        assert_eq!(parse_ratio("3/"), Some(3.0));
    }

    #[test]
    fn test_degenerate_denominator() {
        assert_eq!(parse_ratio("7/0"), Some(7.0));
        assert_eq!(parse_ratio("7/abc"), Some(7.0));
    }

    #[test]
    fn test_extra_components_ignored() {
        assert_eq!(parse_ratio("3/2/5"), Some(1.5));
    }

    #[test]
    fn test_unusable_numerator() {
        assert_eq!(parse_ratio(""), None);
        assert_eq!(parse_ratio("/2"), None);
        assert_eq!(parse_ratio("abc"), None);
    }
}
