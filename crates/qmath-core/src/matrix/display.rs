//! `Display` formatting for [`Matrix`].

use core::fmt;

use crate::config::DEFAULT_DISPLAY_PRECISION;

use super::Matrix;

/// One line per row, `"| e0,  e1, ..., en |"`, with elements separated by a
/// comma and two spaces and no trailing newline. A precision given as
/// `{:.N}` is forwarded to every element.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = f.precision().unwrap_or(DEFAULT_DISPLAY_PRECISION);
        for r in 0..self.rows {
            if r > 0 {
                writeln!(f)?;
            }
            write!(f, "| ")?;
            for c in 0..self.cols {
                if c > 0 {
                    write!(f, ",  ")?;
                }
                write!(f, "{:.*}", p, self.data[r * self.cols + c])?;
            }
            write!(f, " |")?;
        }
        Ok(())
    }
}
