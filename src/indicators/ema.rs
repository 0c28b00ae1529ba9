// =============================================================================
// Exponential Moving Average (EMA)
// =============================================================================
//
// Recursive smoother used standalone over closing prices and reused by the
// MACD composer over MACD-line values.
//
// Formula:
//   k     = 2 / (period + 1)
//   EMA_t = (x_t - EMA_{t-1}) * k + EMA_{t-1}
//
// The first value is seeded with the arithmetic mean of the first `period`
// inputs and emitted at the window-closing timestamp. The seeding choice is
// load-bearing for reproducibility: a first-value seed or an infinite-history
// EMA produces a visibly different warm-up segment on the chart.

use crate::types::{Bar, IndicatorPoint};

/// Apply the EMA recurrence to an arbitrary `(time, value)` point series.
///
/// This is the core the MACD signal line runs on. The seed (mean of the
/// first `period` values) is emitted at `source[period - 1].time`; every
/// later input contributes one smoothed point at its own timestamp, so the
/// output length is `source.len() - period + 1`.
///
/// Returns an empty vec when `period == 0` or `source.len() < period`.
pub fn smooth(source: &[IndicatorPoint], period: usize) -> Vec<IndicatorPoint> {
    if period == 0 || source.len() < period {
        return Vec::new();
    }

    let k = 2.0 / (period as f64 + 1.0);
    let seed = source[..period].iter().map(|p| p.value).sum::<f64>() / period as f64;

    let mut result = Vec::with_capacity(source.len() - period + 1);
    result.push(IndicatorPoint {
        time: source[period - 1].time.clone(),
        value: seed,
    });

    let mut prev = seed;
    for point in &source[period..] {
        let ema = (point.value - prev) * k + prev;
        result.push(IndicatorPoint {
            time: point.time.clone(),
            value: ema,
        });
        prev = ema;
    }

    result
}

/// Compute the EMA series over the closes of `bars`.
///
/// Same contract as [`smooth`], with the close price as the smoothed value.
pub fn calculate_ema(bars: &[Bar], period: usize) -> Vec<IndicatorPoint> {
    let closes: Vec<IndicatorPoint> = bars
        .iter()
        .map(|b| IndicatorPoint {
            time: b.time.clone(),
            value: b.close,
        })
        .collect();
    smooth(&closes, period)
}
