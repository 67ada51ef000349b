//! Rupiah formatting and parsing.
//!
//! Display convention: `Rp` prefix, dot thousands separator, no decimal
//! places. `format_rupiah(1234567)` is `"Rp 1.234.567"`.

use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::errors::{Result, ValidationError};

/// Formats an amount as whole Rupiah. Fractions round midpoint-away-from-zero;
/// negative amounts carry the sign ahead of the prefix.
pub fn format_rupiah(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    // A zero-scale Decimal always fits i128.
    let value = rounded.abs().to_i128().unwrap_or(0);
    let grouped = group_thousands(&value.to_string());

    if rounded.is_sign_negative() && value != 0 {
        format!("-Rp {}", grouped)
    } else {
        format!("Rp {}", grouped)
    }
}

/// Parses a Rupiah string back into a Decimal. Accepts the output of
/// [`format_rupiah`] as well as bare numbers with or without separators.
pub fn parse_rupiah(input: &str) -> Result<Decimal> {
    let trimmed = input.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest.trim_start()),
        None => (false, trimmed),
    };
    let rest = rest.strip_prefix("Rp").unwrap_or(rest);

    // Dots are thousands separators; a comma is the decimal separator.
    let cleaned: String = rest
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '.')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    if cleaned.is_empty() {
        return Err(ValidationError::InvalidInput(format!(
            "not a currency amount: '{}'",
            input
        ))
        .into());
    }

    let value: Decimal = cleaned.parse().map_err(ValidationError::DecimalParse)?;
    Ok(if negative { -value } else { value })
}

fn group_thousands(digits: &str) -> String {
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(*b as char);
    }
    out
}
