// =============================================================================
// Technical Indicators Module
// =============================================================================
//
// Pure, side-effect-free batch implementations of the indicators the charting
// layer renders. Every function recomputes its full output series from the
// caller's bar slice on each call; nothing is cached between invocations.
//
// Failure semantics are binary: a series is either computable (non-empty,
// well-formed output) or not yet computable (empty output). No function here
// returns an error or panics — short history, a zero period, zero average
// loss, or a zero-volume session opener are all absorbed by guards.

pub mod atr;
pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;
pub mod vwap;

pub use atr::calculate_atr;
pub use ema::calculate_ema;
pub use macd::calculate_macd;
pub use rsi::calculate_rsi;
pub use sma::calculate_sma;
pub use vwap::calculate_vwap;
