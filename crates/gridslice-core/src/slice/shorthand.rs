//! CSS edge-shorthand parsing for slice insets and border widths.
//!
//! Slice specifications arrive as CSS shorthand strings
//! (`border-image-slice`, `border-image-width`): one to four
//! whitespace-separated values, each a plain number, a `px` length, or a
//! percentage. Parsing never fails; unparseable tokens read as zero.

use serde::{Deserialize, Serialize};

/// One side's value from a CSS shorthand: an amount plus a percent flag.
///
/// Percentages are resolved against a reference extent (the source
/// image dimension for slice insets, the rendered extent for border
/// widths) at composition time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeValue {
    /// Magnitude in pixels, or in percent when `percent` is set.
    pub amount: f64,
    /// True when `amount` is a percentage of the reference extent.
    pub percent: bool,
}

impl EdgeValue {
    /// A pixel value. Negative or non-finite amounts read as zero.
    pub fn px(amount: f64) -> Self {
        Self {
            amount: sanitize(amount),
            percent: false,
        }
    }

    /// A percentage value. Negative or non-finite amounts read as zero.
    pub fn percent(amount: f64) -> Self {
        Self {
            amount: sanitize(amount),
            percent: true,
        }
    }

    /// Resolve to pixels against a reference extent.
    pub fn resolve(&self, reference: f64) -> f64 {
        if self.percent {
            sanitize(self.amount) / 100.0 * sanitize(reference)
        } else {
            sanitize(self.amount)
        }
    }

    fn parse_token(token: &str) -> Self {
        let token = token.trim();
        if let Some(number) = token.strip_suffix('%') {
            Self::percent(number.trim().parse().unwrap_or(0.0))
        } else {
            let number = token.strip_suffix("px").unwrap_or(token);
            Self::px(number.trim().parse().unwrap_or(0.0))
        }
    }
}

/// Negative and non-finite inputs are treated as zero.
fn sanitize(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// The four sides of a CSS edge shorthand.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EdgeValues {
    pub top: EdgeValue,
    pub right: EdgeValue,
    pub bottom: EdgeValue,
    pub left: EdgeValue,
}

impl EdgeValues {
    /// The same value on all four sides.
    pub fn uniform(value: EdgeValue) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Pixel values in CSS order (top, right, bottom, left).
    pub fn px(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top: EdgeValue::px(top),
            right: EdgeValue::px(right),
            bottom: EdgeValue::px(bottom),
            left: EdgeValue::px(left),
        }
    }

    /// Parse a CSS shorthand with standard 1-4 value expansion:
    /// one value applies to all sides, two to vertical/horizontal,
    /// three to top/horizontal/bottom, four to top/right/bottom/left.
    /// Tokens past the fourth are ignored.
    pub fn parse(shorthand: &str) -> Self {
        let values: Vec<EdgeValue> = shorthand
            .split_whitespace()
            .map(EdgeValue::parse_token)
            .collect();

        match values.as_slice() {
            [] => Self::default(),
            [all] => Self::uniform(*all),
            [vertical, horizontal] => Self {
                top: *vertical,
                right: *horizontal,
                bottom: *vertical,
                left: *horizontal,
            },
            [top, horizontal, bottom] => Self {
                top: *top,
                right: *horizontal,
                bottom: *bottom,
                left: *horizontal,
            },
            [top, right, bottom, left, ..] => Self {
                top: *top,
                right: *right,
                bottom: *bottom,
                left: *left,
            },
        }
    }
}
