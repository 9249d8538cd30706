//! Fixed-locale (pt-BR) number formatting.
//!
//! The host locale is never consulted: grouping is always `.` and the
//! decimal separator is always `,`, so output is identical on every machine.

const GROUP_SEPARATOR: char = '.';
const DECIMAL_SEPARATOR: char = ',';

/// Formats `value` with exactly `decimals` fraction digits in pt-BR notation.
///
/// Rounding is half-to-even on the exact binary value, which is what Rust's
/// fixed-precision float formatting does. A result that rounds to zero never
/// carries a minus sign.
///
/// ```
/// use yla_energy::utils::format::format_pt_br;
///
/// assert_eq!(format_pt_br(1234.5, 2), "1.234,50");
/// assert_eq!(format_pt_br(1_284.0, 0), "1.284");
/// ```
pub fn format_pt_br(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (integer, fraction) = match fixed.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (fixed.as_str(), None),
    };

    let rounds_to_zero = fixed.bytes().all(|b| b == b'0' || b == b'.');
    let sign = if value.is_sign_negative() && !rounds_to_zero {
        "-"
    } else {
        ""
    };

    let grouped = group_thousands(integer);
    match fraction {
        Some(fraction) => format!("{sign}{grouped}{DECIMAL_SEPARATOR}{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Formats a currency amount as Brazilian reais, e.g. `R$ 18,50`.
pub fn format_brl(value: f64) -> String {
    format!("R$ {}", format_pt_br(value, 2))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping_and_decimal_separator() {
        assert_eq!(format_pt_br(1234.5, 2), "1.234,50");
        assert_eq!(format_pt_br(1_245.8, 1), "1.245,8");
        assert_eq!(format_pt_br(1_234_567.0, 0), "1.234.567");
    }

    #[test]
    fn test_small_values_are_not_grouped() {
        assert_eq!(format_pt_br(0.0, 0), "0");
        assert_eq!(format_pt_br(999.0, 0), "999");
        assert_eq!(format_pt_br(4.82, 2), "4,82");
    }

    #[test]
    fn test_decimals_pad_trailing_zeros() {
        assert_eq!(format_pt_br(42.0, 2), "42,00");
        assert_eq!(format_pt_br(98.2, 1), "98,2");
    }

    #[test]
    fn test_rounds_half_to_even_on_exact_ties() {
        assert_eq!(format_pt_br(0.5, 0), "0");
        assert_eq!(format_pt_br(1.5, 0), "2");
        assert_eq!(format_pt_br(2.5, 0), "2");
        assert_eq!(format_pt_br(0.125, 2), "0,12");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_pt_br(-1234.5, 1), "-1.234,5");
        assert_eq!(format_pt_br(-0.0004, 0), "0");
        assert_eq!(format_pt_br(-0.0, 2), "0,00");
    }

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(18.5), "R$ 18,50");
        assert_eq!(format_brl(842.5), "R$ 842,50");
        assert_eq!(format_brl(1_284.0), "R$ 1.284,00");
    }
}
