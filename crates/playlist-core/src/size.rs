//! Human readable byte counts

use std::fmt;

const UNITS: [&str; 5] = ["bytes", "KB", "MB", "GB", "TB"];

/// A byte count displayed in the largest binary unit that keeps it under 1024
///
/// Values beyond the terabyte range stay in TB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ByteSize(pub u64);

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        #[allow(clippy::cast_precision_loss)]
        let mut value = self.0 as f64;
        let mut unit = UNITS[0];

        for &next in &UNITS[1..] {
            if value < 1024.0 {
                break;
            }
            value /= 1024.0;
            unit = next;
        }

        write!(f, "{value:3.1} {unit}")
    }
}
