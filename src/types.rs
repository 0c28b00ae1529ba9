// =============================================================================
// Shared types used across the candlemetrics indicator engine
// =============================================================================

use serde::{Deserialize, Serialize};

/// Timestamp of a bar, as supplied by the data layer.
///
/// The data layer feeds timestamps in one of two representations: a numeric
/// unix-seconds value, or a calendar/ISO-8601 text value such as
/// `"2024-03-01T14:30:00"`. Output points carry the timestamp verbatim from
/// the originating bar, so both representations are preserved end to end.
///
/// Ordering is derived: within a representation it is the natural numeric or
/// lexicographic order. The engine never sorts — it trusts the caller's
/// ascending order — and only compares timestamps for the MACD merge-join.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Unix(i64),
    Text(String),
}

impl Timestamp {
    /// Derive the calendar-session key used by the VWAP reset logic.
    ///
    /// - Numeric unix-seconds timestamps map to their UTC calendar date
    ///   (`"2024-03-01"`).
    /// - Text timestamps map to the substring before the first `T` (an ISO
    ///   datetime collapses to its date part; a bare date passes through).
    ///
    /// A numeric value outside chrono's representable range falls back to the
    /// raw number so that accumulation still groups identical timestamps.
    pub fn session_key(&self) -> String {
        match self {
            Timestamp::Unix(secs) => match chrono::DateTime::from_timestamp(*secs, 0) {
                Some(dt) => dt.format("%Y-%m-%d").to_string(),
                None => secs.to_string(),
            },
            Timestamp::Text(s) => match s.split_once('T') {
                Some((date, _)) => date.to_string(),
                None => s.clone(),
            },
        }
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Timestamp::Unix(secs) => write!(f, "{secs}"),
            Timestamp::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for Timestamp {
    fn from(secs: i64) -> Self {
        Timestamp::Unix(secs)
    }
}

impl From<&str> for Timestamp {
    fn from(s: &str) -> Self {
        Timestamp::Text(s.to_string())
    }
}

/// A single OHLCV bar.
///
/// Input invariant (enforced by the data layer, trusted here): bar sequences
/// are strictly ascending in `time` with no duplicate timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub time: Timestamp,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

/// One output point of a single-valued indicator.
///
/// `time` is always copied from an input bar, never synthesized, so every
/// output series is a subsequence of the input's time axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorPoint {
    pub time: Timestamp,
    pub value: f64,
}

/// One output point of the MACD component.
///
/// Invariant: `histogram == macd - signal` exactly, for every emitted point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacdPoint {
    pub time: Timestamp,
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
}
