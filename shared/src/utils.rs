//! # Shared Formatting Helpers
//!
//! Display formatting for addresses and balances, used wherever the UI shows
//! account or token information.
//!
//! ```rust
//! use shared::utils::{format_balance, truncate_address};
//!
//! let addr = "5GrwvaEF5zXb26Fz9rcQpDWS57CtERHpNehXCPcNoHGKutQY";
//! assert_eq!(truncate_address(addr), "5Grw...utQY");
//! assert_eq!(format_balance(1_234_500_000_000, 12, "TZERO"), "1.2345 TZERO");
//! ```

/// Number of fractional digits shown by [`format_balance`].
const BALANCE_DISPLAY_DECIMALS: usize = 4;

/// Ellipsize an address, keeping the first `prefix_len` and last `suffix_len`
/// characters. Addresses too short to truncate meaningfully come back as-is.
///
/// ss58 addresses are base58 and therefore ASCII, so byte slicing is safe;
/// the length guard below also covers any non-ASCII input.
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    if !address.is_ascii() || address.len() <= prefix_len + suffix_len {
        return address.to_string();
    }

    format!(
        "{}...{}",
        &address[..prefix_len],
        &address[address.len() - suffix_len..]
    )
}

/// [`format_address`] with the default 4/4 split.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 4, 4)
}

/// Render a raw balance (smallest indivisible unit) in token units.
///
/// Shows at most [`BALANCE_DISPLAY_DECIMALS`] fractional digits, dropping
/// trailing zeros; whole balances render without a fractional part.
pub fn format_balance(raw: u128, decimals: u8, symbol: &str) -> String {
    let base = 10u128.pow(u32::from(decimals));
    if base == 1 {
        return format!("{raw} {symbol}");
    }

    let whole = raw / base;
    let frac = raw % base;
    if frac == 0 {
        return format!("{whole} {symbol}");
    }

    let mut frac_digits = format!("{frac:0width$}", width = decimals as usize);
    frac_digits.truncate(BALANCE_DISPLAY_DECIMALS);
    while frac_digits.ends_with('0') {
        frac_digits.pop();
    }

    if frac_digits.is_empty() {
        format!("{whole} {symbol}")
    } else {
        format!("{whole}.{frac_digits} {symbol}")
    }
}
