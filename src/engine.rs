// =============================================================================
// Indicator Engine — one recompute pass over a shared bar slice
// =============================================================================
//
// The charting layer triggers a recompute whenever data loads or a parameter
// changes, handing over the full deduplicated, time-ascending bar array.
// Every enabled indicator consumes that same slice independently; outputs are
// bundled for the renderer to merge onto a shared time axis.
//
// The pass is synchronous and pure: no state survives a call, and the same
// input always produces the same bundle.

use serde::Serialize;
use tracing::debug;

use crate::config::EngineConfig;
use crate::indicators::{
    calculate_atr, calculate_ema, calculate_macd, calculate_rsi, calculate_sma, calculate_vwap,
};
use crate::types::{Bar, IndicatorPoint, MacdPoint};

/// All indicator outputs of one recompute pass. A disabled or not-yet-
/// computable indicator is simply an empty series — the renderer treats both
/// the same way.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IndicatorBundle {
    pub sma: Vec<IndicatorPoint>,
    pub ema: Vec<IndicatorPoint>,
    pub rsi: Vec<IndicatorPoint>,
    pub macd: Vec<MacdPoint>,
    pub vwap: Vec<IndicatorPoint>,
    pub atr: Vec<IndicatorPoint>,
}

/// Run every enabled indicator over `bars` and bundle the results.
pub fn compute(bars: &[Bar], config: &EngineConfig) -> IndicatorBundle {
    let mut bundle = IndicatorBundle::default();

    if config.sma_enabled {
        bundle.sma = calculate_sma(bars, config.sma_period);
    }
    if config.ema_enabled {
        bundle.ema = calculate_ema(bars, config.ema_period);
    }
    if config.rsi_enabled {
        bundle.rsi = calculate_rsi(bars, config.rsi_period);
    }
    if config.macd_enabled {
        bundle.macd = calculate_macd(bars, &config.macd);
    }
    if config.vwap_enabled {
        bundle.vwap = calculate_vwap(bars);
    }
    if config.atr_enabled {
        bundle.atr = calculate_atr(bars, config.atr_period);
    }

    debug!(
        bars = bars.len(),
        sma = bundle.sma.len(),
        ema = bundle.ema.len(),
        rsi = bundle.rsi.len(),
        macd = bundle.macd.len(),
        vwap = bundle.vwap.len(),
        atr = bundle.atr.len(),
        "indicator recompute complete"
    );

    bundle
}
