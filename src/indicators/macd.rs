// =============================================================================
// Moving Average Convergence/Divergence (MACD)
// =============================================================================
//
// Composition over the EMA core: a fast and a slow EMA are computed
// independently over the closes, joined on timestamp equality into the MACD
// line, the MACD line is smoothed again into the signal line, and a second
// equality join produces the final points with the histogram residual.
//
// Alignment is a two-pointer merge over the two sorted series, never
// positional subtraction, so the composition stays correct when either EMA
// series has internal gaps. A point with no timestamp match on the other
// side is dropped without diagnostics; a debug event reports the drop count.

use tracing::debug;

use crate::config::MacdConfig;
use crate::indicators::ema;
use crate::types::{Bar, IndicatorPoint, MacdPoint};

/// Compute the MACD series (macd / signal / histogram) over `bars`.
///
/// Callers run with the standard `MacdConfig::default()` of (12, 26, 9).
///
/// # Edge cases
/// - any period of zero => empty vec
/// - `bars.len() < config.slow` => empty vec
/// - MACD line shorter than `config.signal` => empty vec. Non-empty MACD
///   values exist at that point, but there is not enough history for a
///   signal line, and a MACD pane without its signal is not rendered.
pub fn calculate_macd(bars: &[Bar], config: &MacdConfig) -> Vec<MacdPoint> {
    if config.fast == 0 || config.slow == 0 || config.signal == 0 {
        return Vec::new();
    }
    if bars.len() < config.slow {
        return Vec::new();
    }

    let fast = ema::calculate_ema(bars, config.fast);
    let slow = ema::calculate_ema(bars, config.slow);

    // MACD line: fast minus slow wherever both series share a timestamp.
    let macd_line: Vec<IndicatorPoint> = join_on_time(&fast, &slow)
        .map(|(left, right)| IndicatorPoint {
            time: left.time.clone(),
            value: left.value - right.value,
        })
        .collect();

    // The slow series starts `slow - fast` points later, so that many fast
    // points always fall off the front; anything beyond that is a data gap.
    let dropped = fast.len() - macd_line.len();
    if dropped > slow.len().abs_diff(fast.len()) {
        debug!(
            dropped,
            fast_len = fast.len(),
            slow_len = slow.len(),
            "macd merge dropped unmatched points beyond the warm-up offset"
        );
    }

    // Not enough MACD history for a signal line.
    if macd_line.len() < config.signal {
        return Vec::new();
    }

    let signal_line = ema::smooth(&macd_line, config.signal);

    join_on_time(&macd_line, &signal_line)
        .map(|(m, s)| MacdPoint {
            time: m.time.clone(),
            macd: m.value,
            signal: s.value,
            histogram: m.value - s.value,
        })
        .collect()
}

/// Two-pointer equality join over two time-ascending point series.
///
/// For each left point, the right cursor advances past everything strictly
/// behind it; a pair is yielded only when the timestamps match exactly.
/// Unmatched points on either side are skipped.
fn join_on_time<'a>(
    left: &'a [IndicatorPoint],
    right: &'a [IndicatorPoint],
) -> impl Iterator<Item = (&'a IndicatorPoint, &'a IndicatorPoint)> {
    let mut j = 0;
    left.iter().filter_map(move |l| {
        while j < right.len() && right[j].time < l.time {
            j += 1;
        }
        match right.get(j) {
            Some(r) if r.time == l.time => {
                j += 1;
                Some((l, r))
            }
            _ => None,
        }
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Timestamp;

    fn bar(time: i64, close: f64) -> Bar {
        Bar {
            time: Timestamp::Unix(time),
            open: close,
            high: close,
            low: close,
            close,
            volume: 100.0,
        }
    }

    fn bars_from_closes(closes: &[f64]) -> Vec<Bar> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &c)| bar(i as i64, c))
            .collect()
    }

    fn trending(n: usize) -> Vec<Bar> {
        bars_from_closes(&(1..=n).map(|x| x as f64).collect::<Vec<_>>())
    }

    #[test]
    fn macd_empty_input() {
        assert!(calculate_macd(&[], &MacdConfig::default()).is_empty());
    }

    #[test]
    fn macd_zero_period_config() {
        let bars = trending(100);
        for config in [
            MacdConfig { fast: 0, slow: 26, signal: 9 },
            MacdConfig { fast: 12, slow: 0, signal: 9 },
            MacdConfig { fast: 12, slow: 26, signal: 0 },
        ] {
            assert!(calculate_macd(&bars, &config).is_empty());
        }
    }

    #[test]
    fn macd_below_slow_period_is_empty() {
        let bars = trending(25);
        assert!(calculate_macd(&bars, &MacdConfig::default()).is_empty());
    }

    #[test]
    fn macd_insufficient_signal_history_is_empty() {
        // With n in [slow, slow + signal - 1] the MACD line is non-empty but
        // shorter than the signal period, so the output must still be empty.
        let config = MacdConfig::default();
        for n in config.slow..config.slow + config.signal {
            let bars = trending(n);
            assert!(
                calculate_macd(&bars, &config).is_empty(),
                "expected empty output for {n} bars"
            );
        }
        // One more bar crosses the boundary.
        let bars = trending(config.slow + config.signal);
        assert!(!calculate_macd(&bars, &config).is_empty());
    }

    #[test]
    fn macd_histogram_identity() {
        let bars: Vec<Bar> = (0..120)
            .map(|i| bar(i, 100.0 + (i as f64 * 0.3).sin() * 5.0))
            .collect();
        let macd = calculate_macd(&bars, &MacdConfig::default());
        assert!(!macd.is_empty());
        for point in &macd {
            // Exact equality: the histogram is stored as the same subtraction
            // the join performs, not recomputed by another route.
            assert_eq!(point.histogram, point.macd - point.signal);
        }
    }

    #[test]
    fn macd_first_point_time() {
        // The slow EMA starts at index slow - 1; the signal line consumes
        // another signal - 1 MACD points. First output at index
        // slow + signal - 2.
        let config = MacdConfig::default();
        let bars = trending(60);
        let macd = calculate_macd(&bars, &config);
        assert_eq!(
            macd[0].time,
            Timestamp::Unix((config.slow + config.signal - 2) as i64)
        );
        assert_eq!(macd.last().unwrap().time, bars.last().unwrap().time);
    }

    #[test]
    fn macd_output_times_are_strictly_ascending() {
        let bars: Vec<Bar> = (0..150)
            .map(|i| bar(i * 60, 50.0 + ((i % 13) as f64) * 0.7))
            .collect();
        let macd = calculate_macd(&bars, &MacdConfig::default());
        for pair in macd.windows(2) {
            assert!(pair[0].time < pair[1].time);
        }
    }

    #[test]
    fn macd_positive_on_sustained_uptrend() {
        let bars = trending(120);
        let macd = calculate_macd(&bars, &MacdConfig::default());
        let last = macd.last().unwrap();
        // Fast EMA sits above slow EMA in a steady rally.
        assert!(last.macd > 0.0);
    }

    #[test]
    fn join_drops_unmatched_timestamps() {
        let left: Vec<IndicatorPoint> = [0, 1, 2, 4, 6]
            .iter()
            .map(|&t| IndicatorPoint { time: Timestamp::Unix(t), value: t as f64 })
            .collect();
        let right: Vec<IndicatorPoint> = [1, 3, 4, 5, 6]
            .iter()
            .map(|&t| IndicatorPoint { time: Timestamp::Unix(t), value: -(t as f64) })
            .collect();

        let joined: Vec<_> = join_on_time(&left, &right).collect();
        let times: Vec<_> = joined.iter().map(|(l, _)| l.time.clone()).collect();
        assert_eq!(
            times,
            vec![Timestamp::Unix(1), Timestamp::Unix(4), Timestamp::Unix(6)]
        );
        for (l, r) in joined {
            assert_eq!(l.time, r.time);
        }
    }
}
