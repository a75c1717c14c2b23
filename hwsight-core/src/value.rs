//! Raw reading value parsing.

/// Parse a raw sensor value such as `"45,2 °C"` or `"1.3 GB"` into a number.
///
/// Takes the first whitespace-delimited token, accepts a comma as decimal
/// separator and returns `0.0` for anything that does not yield a finite
/// number, including empty input.
pub fn parse_value(raw: &str) -> f64 {
    let Some(token) = raw.split_whitespace().next() else {
        return 0.0;
    };

    match token.replace(',', ".").parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_suffixes() {
        assert_eq!(parse_value("62.5 °C"), 62.5);
        assert_eq!(parse_value("34,2 %"), 34.2);
        assert_eq!(parse_value("12.7 W"), 12.7);
        assert_eq!(parse_value("7,8 GB"), 7.8);
        assert_eq!(parse_value("1024 MB"), 1024.0);
        assert_eq!(parse_value("  3.5   KB/s"), 3.5);
    }

    #[test]
    fn test_bare_numbers() {
        assert_eq!(parse_value("42"), 42.0);
        assert_eq!(parse_value("-5,5"), -5.5);
        assert_eq!(parse_value("+1.25"), 1.25);
    }

    #[test]
    fn test_malformed_degrades_to_zero() {
        assert_eq!(parse_value(""), 0.0);
        assert_eq!(parse_value("   "), 0.0);
        assert_eq!(parse_value("°C"), 0.0);
        assert_eq!(parse_value("N/A"), 0.0);
        assert_eq!(parse_value("45°C"), 0.0);
        assert_eq!(parse_value("1,234.5 MB"), 0.0);
        assert_eq!(parse_value("true"), 0.0);
    }

    #[test]
    fn test_non_finite_degrades_to_zero() {
        for raw in ["NaN", "nan %", "inf", "-inf W", "infinity", "1e400"] {
            let v = parse_value(raw);
            assert_eq!(v, 0.0, "{raw:?} should parse to zero");
        }
    }

    #[test]
    fn test_always_finite() {
        for raw in ["", "x", "1.", ".5", "--1", "1,2,3", "٣", "\u{00a0}5"] {
            assert!(parse_value(raw).is_finite(), "{raw:?}");
        }
        assert_eq!(parse_value("5\u{00a0}°C"), 5.0);
    }
}
