//! Lenient numeric reading of score text.
//!
//! Score inputs are stored exactly as typed. Totals read them the way a
//! browser number field's value is usually read: skip leading whitespace,
//! take the longest numeric prefix, and fall back to zero.

/// Returns the numeric value of `text`, or `0.0` if it has no numeric
/// prefix or the value is not finite.
pub fn coerce(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let len = numeric_prefix_len(trimmed);
    if len == 0 {
        return 0.0;
    }

    match trimmed[..len].parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Byte length of the leading `[+-]digits[.digits][(e|E)[+-]digits]` run.
/// Zero when no mantissa digit is present.
fn numeric_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - frac_start;
        if digits > 0 {
            i = j;
        }
    }

    if digits == 0 {
        return 0;
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}

#[cfg(test)]
mod tests {
    use super::coerce;

    #[test]
    fn empty_and_blank_are_zero() {
        assert_eq!(coerce(""), 0.0);
        assert_eq!(coerce("   "), 0.0);
    }

    #[test]
    fn plain_numbers() {
        assert_eq!(coerce("25"), 25.0);
        assert_eq!(coerce("7.5"), 7.5);
        assert_eq!(coerce("-3"), -3.0);
        assert_eq!(coerce("+4"), 4.0);
        assert_eq!(coerce(".5"), 0.5);
        assert_eq!(coerce("3."), 3.0);
    }

    #[test]
    fn leading_whitespace_is_skipped() {
        assert_eq!(coerce(" 7.5"), 7.5);
        assert_eq!(coerce("\t12"), 12.0);
    }

    #[test]
    fn trailing_garbage_is_ignored() {
        assert_eq!(coerce("12abc"), 12.0);
        assert_eq!(coerce("10 pts"), 10.0);
        assert_eq!(coerce("1.2.3"), 1.2);
        assert_eq!(coerce("4e"), 4.0);
        assert_eq!(coerce("4e+"), 4.0);
    }

    #[test]
    fn exponents() {
        assert_eq!(coerce("1e1"), 10.0);
        assert_eq!(coerce("2.5E-1"), 0.25);
    }

    #[test]
    fn non_numeric_is_zero() {
        assert_eq!(coerce("abc"), 0.0);
        assert_eq!(coerce("."), 0.0);
        assert_eq!(coerce("-"), 0.0);
        assert_eq!(coerce("NaN"), 0.0);
        assert_eq!(coerce("inf"), 0.0);
    }

    #[test]
    fn overflow_is_zero() {
        assert_eq!(coerce("1e400"), 0.0);
    }
}
