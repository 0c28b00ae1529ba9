// =============================================================================
// candlemetrics — batch technical-indicator computation for charting
// =============================================================================
//
// Given a finite, time-ordered OHLCV bar sequence, derive the secondary
// series a chart renders: SMA, EMA, RSI, MACD, session-reset VWAP and ATR.
// Every component is a pure function of the bar slice and its scalar
// parameters; insufficient history yields an empty series, never an error.
//
// The caller owns sorting and deduplication of the input. Feeding an
// unsorted or duplicate-containing sequence is outside this crate's
// contract.
// =============================================================================

pub mod config;
pub mod engine;
pub mod indicators;
pub mod types;

pub use config::{EngineConfig, MacdConfig};
pub use engine::{compute, IndicatorBundle};
pub use types::{Bar, IndicatorPoint, MacdPoint, Timestamp};
