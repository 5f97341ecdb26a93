//! `Display` formatting for [`Complex`].

use core::fmt;

use crate::config::DEFAULT_DISPLAY_PRECISION;

use super::Complex;

/// Renders `"<re> + <im>i"`. The `+` is always written, so a negative
/// imaginary part prints as `"1.00 + -2.00i"`. Precision defaults to
/// [`DEFAULT_DISPLAY_PRECISION`] and follows `{:.N}` when given.
impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(DEFAULT_DISPLAY_PRECISION);
        write!(f, "{:.*} + {:.*}i", p, self.re, p, self.im)
    }
}
