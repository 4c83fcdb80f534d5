//! Two-decimal rounding
//!
//! Matches `Number.prototype.toFixed(2)`: pick the two-decimal value nearest
//! to the exact binary value of the input, and on an exact tie take the one
//! farther from zero. `1.005` is stored as 1.00499999999999989... and so
//! rounds down; `0.125` is an exact tie and rounds up.

/// Format `value` with exactly two decimals
pub fn to_fixed_2(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    if is_exact_cent_tie(value) {
        // value * 100 is exact here, so round() sees the true tie
        let cents = (value * 100.0).round();
        return format!("{:.2}", cents / 100.0);
    }

    // Rust float formatting is correctly rounded from the exact binary
    // value; it only differs from toFixed on exact ties (half to even).
    format!("{:.2}", value)
}

/// Round `value` to two decimals with `to_fixed_2` semantics
pub fn round_to_cents(value: f64) -> f64 {
    to_fixed_2(value).parse().unwrap_or(value)
}

/// True when `value` lies exactly halfway between two cent values.
///
/// A binary double can only sit exactly on `k + 0.005` when its fractional
/// part is a multiple of 1/8 (`.125`, `.375`, `.625`, `.875`).
fn is_exact_cent_tie(value: f64) -> bool {
    if (value * 8.0).fract() != 0.0 {
        return false;
    }
    (value * 100.0).fract().abs() == 0.5
}
