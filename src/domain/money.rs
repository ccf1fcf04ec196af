//! Currency formatting for estimated project values.
//!
//! Values are stored in plain currency units; cards show them scaled to
//! millions or billions with a `$` prefix.

const MILLION: f64 = 1_000_000.0;
const BILLION: f64 = 1_000_000_000.0;

/// Formats `value` in millions with `decimals` fractional digits.
///
/// ```
/// use aecintel::domain::money::millions;
///
/// assert_eq!(millions(850_000_000.0, 1), "$850.0M");
/// assert_eq!(millions(15_000_000_000.0, 0), "$15000M");
/// ```
#[must_use]
pub fn millions(value: f64, decimals: usize) -> String {
    format!("${:.*}M", decimals, value / MILLION)
}

/// Formats `value` in billions with one fractional digit (`$2.1B`).
#[must_use]
pub fn billions(value: f64) -> String {
    format!("${:.1}B", value / BILLION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn billions_uses_one_decimal() {
        assert_eq!(billions(2_100_000_000.0), "$2.1B");
        assert_eq!(billions(4_500_000_000.0), "$4.5B");
    }

    #[test]
    fn millions_without_decimals_rounds() {
        assert_eq!(millions(680_000_000.0, 0), "$680M");
        assert_eq!(millions(1_750_000_000.0, 1), "$1750.0M");
    }
}
