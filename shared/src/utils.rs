//! # Shared Utility Functions
//!
//! Address formatting for display in the wallet widget.
//!
//! Sui addresses are `0x`-prefixed 64-digit hex strings. [`truncate_address`]
//! keeps the `0x` and four digits at each end:
//!
//! ```rust
//! use shared::utils::truncate_address;
//!
//! let address = "0x7d20dcdb2bca4f508ea9613994683eb4e76e9c4ed371169677c1be02aaf0b58e";
//! assert_eq!(truncate_address(address), "0x7d20...b58e");
//! ```

/// Format an address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is too short to shorten, it is returned as-is.
///
/// ```rust
/// use shared::utils::format_address;
///
/// assert_eq!(format_address("0x7d20dcdb2bca4f50", 6, 4), "0x7d20...4f50");
/// assert_eq!(format_address("0x1", 6, 4), "0x1");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let chars: Vec<char> = address.chars().collect();
    let len = chars.len();

    if len <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix: String = chars[..prefix_len].iter().collect();
    let suffix: String = chars[len - suffix_len..].iter().collect();

    format!("{}...{}", prefix, suffix)
}

/// Shorten a Sui address to `0x` plus four leading and four trailing digits.
pub fn truncate_address(address: &str) -> String {
    let prefix_len = if address.starts_with("0x") { 6 } else { 4 };
    format_address(address, prefix_len, 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "0x7d20dcdb2bca4f508ea9613994683eb4e76e9c4ed371169677c1be02aaf0b58e";

    #[test]
    fn test_format_address() {
        assert_eq!(format_address(ADDR, 6, 4), "0x7d20...b58e");
        assert_eq!(format_address(ADDR, 2, 2), "0x...8e");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("0x1", 6, 4), "0x1");
        assert_eq!(format_address("0x12345678", 6, 4), "0x12345678");
    }

    #[test]
    fn test_format_address_non_ascii_does_not_panic() {
        assert_eq!(format_address("ééééééééééé", 2, 2), "éé...éé");
    }

    #[test]
    fn test_truncate_address() {
        assert_eq!(truncate_address(ADDR), "0x7d20...b58e");
        assert_eq!(truncate_address("abcdefghijkl"), "abcd...ijkl");
    }
}
