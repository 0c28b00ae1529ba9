// =============================================================================
// Simple Moving Average (SMA)
// =============================================================================
//
// Fixed-width running average over closing prices. The window sum is kept
// incrementally (add the entering close, subtract the exiting close) so the
// whole series costs O(n) regardless of the period.

use crate::types::{Bar, IndicatorPoint};

/// Compute the SMA series over the closes of `bars`.
///
/// One point is emitted per index `i >= period - 1`, at `bars[i].time`, so
/// the output length is `max(0, n - period + 1)`.
///
/// # Edge cases
/// - `period == 0` => empty vec
/// - `bars.len() < period` => empty vec
pub fn calculate_sma(bars: &[Bar], period: usize) -> Vec<IndicatorPoint> {
    if period == 0 || bars.len() < period {
        return Vec::new();
    }

    let mut result = Vec::with_capacity(bars.len() - period + 1);
    let mut sum = 0.0;

    for (i, bar) in bars.iter().enumerate() {
        sum += bar.close;
        if i >= period {
            sum -= bars[i - period].close;
        }
        if i + 1 >= period {
            result.push(IndicatorPoint {
                time: bar.time.clone(),
                value: sum / period as f64,
            });
        }
    }

    result
}
