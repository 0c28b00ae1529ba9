// =============================================================================
// Engine Configuration — indicator selection and look-back periods
// =============================================================================
//
// The charting layer decides which indicators are active and with what
// periods, and hands the whole block over on every recompute trigger. All
// fields carry `#[serde(default)]` so that a partial (or empty) config block
// from an older caller still deserializes to the standard defaults.
//
// MACD periods are a frozen default policy: callers today always run with
// (12, 26, 9), but the triple is kept in its own struct so it can be
// parameterized without an interface break.
// =============================================================================

use serde::{Deserialize, Serialize};

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_true() -> bool {
    true
}

fn default_sma_period() -> usize {
    20
}

fn default_ema_period() -> usize {
    20
}

fn default_rsi_period() -> usize {
    14
}

fn default_atr_period() -> usize {
    14
}

fn default_macd_fast() -> usize {
    12
}

fn default_macd_slow() -> usize {
    26
}

fn default_macd_signal() -> usize {
    9
}

// =============================================================================
// MACD period triple
// =============================================================================

/// Fast/slow/signal periods for the MACD component. Defaults to the
/// standard (12, 26, 9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacdConfig {
    #[serde(default = "default_macd_fast")]
    pub fast: usize,
    #[serde(default = "default_macd_slow")]
    pub slow: usize,
    #[serde(default = "default_macd_signal")]
    pub signal: usize,
}

impl Default for MacdConfig {
    fn default() -> Self {
        Self {
            fast: default_macd_fast(),
            slow: default_macd_slow(),
            signal: default_macd_signal(),
        }
    }
}

// =============================================================================
// Engine configuration
// =============================================================================

/// Which indicators to compute, and with what look-back periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_true")]
    pub sma_enabled: bool,
    #[serde(default = "default_sma_period")]
    pub sma_period: usize,

    #[serde(default = "default_true")]
    pub ema_enabled: bool,
    #[serde(default = "default_ema_period")]
    pub ema_period: usize,

    #[serde(default = "default_true")]
    pub rsi_enabled: bool,
    #[serde(default = "default_rsi_period")]
    pub rsi_period: usize,

    #[serde(default = "default_true")]
    pub macd_enabled: bool,
    #[serde(default)]
    pub macd: MacdConfig,

    #[serde(default = "default_true")]
    pub vwap_enabled: bool,

    #[serde(default = "default_true")]
    pub atr_enabled: bool,
    #[serde(default = "default_atr_period")]
    pub atr_period: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            sma_enabled: true,
            sma_period: default_sma_period(),
            ema_enabled: true,
            ema_period: default_ema_period(),
            rsi_enabled: true,
            rsi_period: default_rsi_period(),
            macd_enabled: true,
            macd: MacdConfig::default(),
            vwap_enabled: true,
            atr_enabled: true,
            atr_period: default_atr_period(),
        }
    }
}
