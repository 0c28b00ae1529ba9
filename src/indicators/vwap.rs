// =============================================================================
// Volume-Weighted Average Price (VWAP) — session-reset cumulative form
// =============================================================================
//
// Cumulative typical-price * volume over cumulative volume, reset at every
// calendar-session boundary found in the input. The session key is the bar's
// UTC calendar date (see `Timestamp::session_key`), so an intraday series
// restarts its accumulation at each day change.
//
// The running state is an explicit accumulator value threaded through a fold
// over the bars — nothing module-level, nothing mutable across calls.

use crate::types::{Bar, IndicatorPoint};

/// Accumulator carried across the fold: the active session and its running
/// sums, plus the points emitted so far.
struct SessionState {
    session_key: String,
    cum_tpv: f64,
    cum_volume: f64,
    points: Vec<IndicatorPoint>,
}

/// Compute the session-reset VWAP series over `bars`.
///
/// Each bar contributes `typical * volume` with `typical = (h + l + c) / 3`.
/// The very first bar always opens a new session (the initial key is empty
/// and session keys never are). A point is emitted for every bar whose
/// session has accumulated positive volume; a zero-volume bar at the start
/// of a session emits nothing but still participates in later accumulation.
pub fn calculate_vwap(bars: &[Bar]) -> Vec<IndicatorPoint> {
    let state = bars.iter().fold(
        SessionState {
            session_key: String::new(),
            cum_tpv: 0.0,
            cum_volume: 0.0,
            points: Vec::with_capacity(bars.len()),
        },
        |mut acc, bar| {
            let key = bar.time.session_key();
            if key != acc.session_key {
                acc.session_key = key;
                acc.cum_tpv = 0.0;
                acc.cum_volume = 0.0;
            }

            let typical = (bar.high + bar.low + bar.close) / 3.0;
            acc.cum_tpv += typical * bar.volume;
            acc.cum_volume += bar.volume;

            if acc.cum_volume > 0.0 {
                acc.points.push(IndicatorPoint {
                    time: bar.time.clone(),
                    value: acc.cum_tpv / acc.cum_volume,
                });
            }
            acc
        },
    );

    state.points
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Timestamp;

    const DAY_A: i64 = 1_709_251_200; // 2024-03-01T00:00:00Z

    fn bar(time: Timestamp, high: f64, low: f64, close: f64, volume: f64) -> Bar {
        Bar {
            time,
            open: close,
            high,
            low,
            close,
            volume,
        }
    }

    #[test]
    fn vwap_empty_input() {
        assert!(calculate_vwap(&[]).is_empty());
    }

    #[test]
    fn vwap_single_bar_equals_typical_price() {
        let bars = vec![bar(Timestamp::Unix(DAY_A), 10.0, 9.0, 9.5, 100.0)];
        let vwap = calculate_vwap(&bars);
        assert_eq!(vwap.len(), 1);
        assert!((vwap[0].value - 9.5).abs() < 1e-12);
    }

    #[test]
    fn vwap_two_days_with_reset() {
        // Day A: (10, 9, 9.5, 100) then (11, 10, 10.5, 200).
        // Day B: (5, 4, 4.5, 50) — the reset makes the single-bar session's
        // VWAP equal its typical price exactly.
        let bars = vec![
            bar(Timestamp::Unix(DAY_A), 10.0, 9.0, 9.5, 100.0),
            bar(Timestamp::Unix(DAY_A + 3_600), 11.0, 10.0, 10.5, 200.0),
            bar(Timestamp::Unix(DAY_A + 86_400), 5.0, 4.0, 4.5, 50.0),
        ];
        let vwap = calculate_vwap(&bars);
        assert_eq!(vwap.len(), 3);

        assert!((vwap[0].value - 9.5).abs() < 1e-12);
        let expected = (9.5 * 100.0 + 10.5 * 200.0) / 300.0;
        assert!((vwap[1].value - expected).abs() < 1e-12);
        assert!((vwap[2].value - 4.5).abs() < 1e-12);
    }

    #[test]
    fn vwap_reset_zeroes_prior_accumulation() {
        // After the first bar of a new session the cumulative volume equals
        // that bar's own volume: its point ignores the previous day entirely.
        let bars = vec![
            bar(Timestamp::Unix(DAY_A), 100.0, 90.0, 95.0, 10_000.0),
            bar(Timestamp::Unix(DAY_A + 86_400), 5.0, 4.0, 4.5, 1.0),
        ];
        let vwap = calculate_vwap(&bars);
        assert!((vwap[1].value - 4.5).abs() < 1e-12);
    }

    #[test]
    fn vwap_zero_volume_opener_is_skipped_but_accumulates() {
        let bars = vec![
            bar(Timestamp::Unix(DAY_A), 10.0, 9.0, 9.5, 0.0),
            bar(Timestamp::Unix(DAY_A + 60), 11.0, 10.0, 10.5, 200.0),
        ];
        let vwap = calculate_vwap(&bars);
        // The zero-volume bar emits nothing.
        assert_eq!(vwap.len(), 1);
        assert_eq!(vwap[0].time, Timestamp::Unix(DAY_A + 60));
        // It contributed 0 to both sums, so the second point is bar 2's
        // typical price.
        assert!((vwap[0].value - 10.5).abs() < 1e-12);
    }

    #[test]
    fn vwap_text_timestamps_reset_on_date_prefix() {
        let bars = vec![
            bar(Timestamp::from("2024-03-01T09:30:00"), 10.0, 9.0, 9.5, 100.0),
            bar(Timestamp::from("2024-03-01T10:30:00"), 11.0, 10.0, 10.5, 200.0),
            bar(Timestamp::from("2024-03-02T09:30:00"), 5.0, 4.0, 4.5, 50.0),
        ];
        let vwap = calculate_vwap(&bars);
        assert_eq!(vwap.len(), 3);
        let expected = (9.5 * 100.0 + 10.5 * 200.0) / 300.0;
        assert!((vwap[1].value - expected).abs() < 1e-12);
        assert!((vwap[2].value - 4.5).abs() < 1e-12);
    }

    #[test]
    fn vwap_times_copied_verbatim() {
        let bars = vec![
            bar(Timestamp::Unix(DAY_A), 10.0, 9.0, 9.5, 100.0),
            bar(Timestamp::Unix(DAY_A + 60), 11.0, 10.0, 10.5, 200.0),
        ];
        let vwap = calculate_vwap(&bars);
        for (point, source) in vwap.iter().zip(bars.iter()) {
            assert_eq!(point.time, source.time);
        }
    }
}
