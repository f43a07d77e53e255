use serde::{Deserialize, Serialize};

/// Wall-clock time expressed as minutes since midnight.
///
/// Values are not range-checked: `"25:90"` is a valid, if odd, 1590.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ClockMinutes(i64);

impl ClockMinutes {
    pub const MIDNIGHT: ClockMinutes = ClockMinutes(0);

    pub fn new(minutes: i64) -> Self {
        Self(minutes)
    }

    /// Raw minute count.
    pub fn value(&self) -> i64 {
        self.0
    }

    /// Parse an `"HH:MM"` string.
    ///
    /// Anything that is not exactly two integers separated by a single colon
    /// yields [`ClockMinutes::MIDNIGHT`]. Surrounding whitespace around either
    /// component and an explicit sign are tolerated.
    pub fn parse_lenient(text: &str) -> Self {
        Self::try_parse(text).unwrap_or(Self::MIDNIGHT)
    }

    /// Strict variant of [`parse_lenient`](Self::parse_lenient).
    pub fn try_parse(text: &str) -> Option<Self> {
        let mut parts = text.split(':');
        let hours = parts.next()?.trim().parse::<i64>().ok()?;
        let minutes = parts.next()?.trim().parse::<i64>().ok()?;
        if parts.next().is_some() {
            return None;
        }
        hours
            .checked_mul(60)
            .and_then(|h| h.checked_add(minutes))
            .map(Self)
    }

    /// Absolute distance in minutes between two clock values.
    pub fn distance(self, other: ClockMinutes) -> u64 {
        self.0.abs_diff(other.0)
    }
}

impl From<&str> for ClockMinutes {
    fn from(text: &str) -> Self {
        ClockMinutes::parse_lenient(text)
    }
}
