// =============================================================================
// Average True Range (ATR) — Wilder's Smoothing Method
// =============================================================================
//
// Volatility series over the full range of each bar.
//
// True Range (TR) for each bar after the first:
//   TR = max(H - L, |H - prevClose|, |L - prevClose|)
//
// The series is seeded with the SMA of the first `period` TR values and then
// smoothed with Wilder's recursion:
//   ATR_t = (ATR_{t-1} * (period - 1) + TR_t) / period

use crate::types::{Bar, IndicatorPoint};

/// Compute the ATR series over `bars`.
///
/// Each TR value needs the previous bar's close, so `period + 1` bars are
/// consumed before the seed is emitted at `bars[period].time`; one point
/// follows per later bar.
///
/// # Edge cases
/// - `period == 0` => empty vec
/// - `bars.len() < period + 1` => empty vec
pub fn calculate_atr(bars: &[Bar], period: usize) -> Vec<IndicatorPoint> {
    if period == 0 || bars.len() < period + 1 {
        return Vec::new();
    }

    let period_f = period as f64;

    let mut seed_sum = 0.0;
    for i in 1..=period {
        seed_sum += true_range(&bars[i], bars[i - 1].close);
    }
    let mut atr = seed_sum / period_f;

    let mut result = Vec::with_capacity(bars.len() - period);
    result.push(IndicatorPoint {
        time: bars[period].time.clone(),
        value: atr,
    });

    for i in period + 1..bars.len() {
        let tr = true_range(&bars[i], bars[i - 1].close);
        atr = (atr * (period_f - 1.0) + tr) / period_f;
        result.push(IndicatorPoint {
            time: bars[i].time.clone(),
            value: atr,
        });
    }

    result
}

/// True Range of one bar given the previous close.
fn true_range(bar: &Bar, prev_close: f64) -> f64 {
    let hl = bar.high - bar.low;
    let hc = (bar.high - prev_close).abs();
    let lc = (bar.low - prev_close).abs();
    hl.max(hc).max(lc)
}
