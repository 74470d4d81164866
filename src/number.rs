// SPDX-License-Identifier: MIT OR Apache-2.0
use std::fmt::Debug;

/// Renders numbers for display.
pub trait NumberFormatter: Debug + Send + Sync {
    /// Formats `n` with exactly `precision` fractional digits.
    fn format_number(&self, n: f64, precision: usize) -> String;

    /// Formats an exact integer, given as its decimal digits with an optional leading `-`.
    fn format_integer(&self, digits: &str) -> String;
}

/**
Fixed-precision decimal formatting with digit grouping.

```
use tagwise::{DecimalFormatter, NumberFormatter};
let numbers = DecimalFormatter::new();
assert_eq!(numbers.format_number(1234567.891, 2), "1,234,567.89");
assert_eq!(numbers.format_number(-42.0, 0), "-42");
assert_eq!(numbers.format_integer(&u64::MAX.to_string()), "18,446,744,073,709,551,615");
```
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DecimalFormatter {
    thousands: String,
    decimal: String,
}

impl Default for DecimalFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DecimalFormatter {
    /// `,` between digit groups, `.` before the fraction.
    pub fn new() -> Self {
        Self::with_separators(",", ".")
    }

    pub fn with_separators(thousands: impl Into<String>, decimal: impl Into<String>) -> Self {
        Self {
            thousands: thousands.into(),
            decimal: decimal.into(),
        }
    }

    fn grouped(&self, negative: bool, integral: &str, fraction: Option<&str>) -> String {
        let mut out = String::with_capacity(integral.len() * 4 / 3 + 8);
        if negative {
            out.push('-');
        }
        let digits = integral.len();
        for (i, digit) in integral.chars().enumerate() {
            if i > 0 && (digits - i) % 3 == 0 {
                out.push_str(&self.thousands);
            }
            out.push(digit);
        }
        if let Some(fraction) = fraction {
            out.push_str(&self.decimal);
            out.push_str(fraction);
        }
        out
    }
}

impl NumberFormatter for DecimalFormatter {
    fn format_number(&self, n: f64, precision: usize) -> String {
        if !n.is_finite() {
            return n.to_string();
        }
        let fixed = format!("{:.*}", precision, n.abs());
        let (integral, fraction) = match fixed.split_once('.') {
            Some((integral, fraction)) => (integral, Some(fraction)),
            None => (fixed.as_str(), None),
        };

        // no "-0"
        let negative = n < 0.0 && fixed.bytes().any(|b| matches!(b, b'1'..=b'9'));
        self.grouped(negative, integral, fraction)
    }

    fn format_integer(&self, digits: &str) -> String {
        match digits.strip_prefix('-') {
            Some(magnitude) => self.grouped(true, magnitude, None),
            None => self.grouped(false, digits, None),
        }
    }
}
