// =============================================================================
// Relative Strength Index (RSI) — Wilder's Smoothing
// =============================================================================
//
// Bounded 0–100 momentum oscillator over smoothed gain/loss averages.
//
// Step 1 — Seed: sum the positive close-to-close deltas (gains) and the
//          absolute negative deltas (losses) over the first `period` deltas,
//          then divide by `period`.
// Step 2 — First point at `bars[period].time` from the seeded averages.
// Step 3 — Wilder's recursion for every later bar:
//            avg_gain = (avg_gain * (period - 1) + gain) / period
//            avg_loss = (avg_loss * (period - 1) + loss) / period
// Step 4 — RSI = 100 - 100 / (1 + avg_gain / avg_loss)
//
// A zero average loss yields the fixed value 100 at that step. That branch is
// a division-by-zero guard, applied on the seed and on every recursive step
// alike.

use crate::types::{Bar, IndicatorPoint};

/// Compute the RSI series over the closes of `bars`.
///
/// The first `period` deltas (hence `period + 1` bars) are consumed to seed
/// the averages; one point is then emitted per bar starting at
/// `bars[period].time`. Every emitted value lies in `[0, 100]`.
///
/// # Edge cases
/// - `period == 0` => empty vec
/// - `bars.len() <= period` => empty vec (need `period` deltas)
/// - zero average loss => 100.0 at that step
pub fn calculate_rsi(bars: &[Bar], period: usize) -> Vec<IndicatorPoint> {
    if period == 0 || bars.len() <= period {
        return Vec::new();
    }

    let period_f = period as f64;

    // --- Seed averages from the first `period` deltas ------------------------
    let mut sum_gain = 0.0;
    let mut sum_loss = 0.0;
    for i in 1..=period {
        let delta = bars[i].close - bars[i - 1].close;
        if delta > 0.0 {
            sum_gain += delta;
        } else {
            sum_loss += -delta;
        }
    }
    let mut avg_gain = sum_gain / period_f;
    let mut avg_loss = sum_loss / period_f;

    let mut result = Vec::with_capacity(bars.len() - period);
    result.push(IndicatorPoint {
        time: bars[period].time.clone(),
        value: rsi_from_averages(avg_gain, avg_loss),
    });

    // --- Wilder's smoothing for subsequent bars -------------------------------
    for i in period + 1..bars.len() {
        let delta = bars[i].close - bars[i - 1].close;
        let gain = if delta > 0.0 { delta } else { 0.0 };
        let loss = if delta < 0.0 { -delta } else { 0.0 };

        avg_gain = (avg_gain * (period_f - 1.0) + gain) / period_f;
        avg_loss = (avg_loss * (period_f - 1.0) + loss) / period_f;

        result.push(IndicatorPoint {
            time: bars[i].time.clone(),
            value: rsi_from_averages(avg_gain, avg_loss),
        });
    }

    result
}

/// Convert gain/loss averages into an RSI value in [0, 100].
///
/// A zero average loss short-circuits to 100.0 before the ratio is formed.
fn rsi_from_averages(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        100.0
    } else {
        100.0 - 100.0 / (1.0 + avg_gain / avg_loss)
    }
}
