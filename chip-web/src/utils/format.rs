//! # Formatting Utilities for Chip Web
//!
//! Number formatting for balances shown in the wallet widget.
//! For address formatting, use [`shared::utils::truncate_address`].
//!
//! - [`format_number`] - Format numbers with comma separators
//! - [`format_mist_to_sui`] - Convert MIST to SUI with formatting

use super::constants::MIST_PER_SUI;

/// Format a number with commas (e.g., 1234567.89 -> "1,234,567.89")
///
/// ```rust
/// use chip_web::utils::format::format_number;
///
/// assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
/// assert_eq!(format_number(100.0, 2), "100.00");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, dec),
        None => (formatted.as_str(), ""),
    };

    let mut result = String::new();
    for (i, ch) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }

    let sign = if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };
    let integer_with_commas: String = result.chars().rev().collect();

    if decimal_part.is_empty() {
        format!("{}{}", sign, integer_with_commas)
    } else {
        format!("{}{}.{}", sign, integer_with_commas, decimal_part)
    }
}

/// Format MIST as SUI with 4 decimals (1 SUI = 1,000,000,000 MIST)
///
/// ```rust
/// use chip_web::utils::format::format_mist_to_sui;
///
/// assert_eq!(format_mist_to_sui(1_000_000_000), "1.0000");
/// assert_eq!(format_mist_to_sui(500_000_000), "0.5000");
/// ```
pub fn format_mist_to_sui(mist: u128) -> String {
    let whole = mist / MIST_PER_SUI;
    let fraction = mist % MIST_PER_SUI;
    // Truncate, never round up into the next whole SUI.
    let fraction_4 = fraction / (MIST_PER_SUI / 10_000);
    format!("{}.{:04}", format_number(whole as f64, 0), fraction_4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
        assert_eq!(format_number(100.0, 2), "100.00");
        assert_eq!(format_number(999.0, 0), "999");
        assert_eq!(format_number(-1234.5, 1), "-1,234.5");
    }

    #[test]
    fn test_format_mist_to_sui() {
        assert_eq!(format_mist_to_sui(0), "0.0000");
        assert_eq!(format_mist_to_sui(1_500_000_000), "1.5000");
        assert_eq!(format_mist_to_sui(1_234_567_890_123_456), "1,234,567.8901");
        assert_eq!(format_mist_to_sui(999_999_999), "0.9999");
    }
}
