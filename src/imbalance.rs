// =============================================================================
// Order-Flow Imbalance — Bid/Ask volume normalizer
// =============================================================================
//
// Collapses a two-sided volume pair into a single bounded imbalance value:
//
//   imbalance = (askVol - bidVol) / (askVol + bidVol)
//
// which is algebraically confined to [-1, +1]:
//   -1.0 => all volume hit the bid (pure selling)
//   +1.0 => all volume lifted the ask (pure buying)
//    0.0 => perfectly balanced flow
//
// A bar with no volume on either side carries no directional information and
// must not enter the percentile history, so it is reported as `None` rather
// than as a fabricated zero sample.
// =============================================================================

/// Normalize a bid/ask volume pair into an imbalance value in [-1, 1].
///
/// # Edge cases
/// - `bid_volume + ask_volume <= 0.0` => `None` (data gap; the caller must
///   skip window insertion and emit its neutral output directly).
///
/// Pure function — no state, no side effects.
pub fn imbalance(bid_volume: f64, ask_volume: f64) -> Option<f64> {
    let total = bid_volume + ask_volume;
    if total <= 0.0 {
        return None;
    }
    Some((ask_volume - bid_volume) / total)
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_volume_is_a_gap() {
        assert_eq!(imbalance(0.0, 0.0), None);
    }

    #[test]
    fn all_ask_volume_is_plus_one() {
        assert_eq!(imbalance(0.0, 500.0), Some(1.0));
    }

    #[test]
    fn all_bid_volume_is_minus_one() {
        assert_eq!(imbalance(500.0, 0.0), Some(-1.0));
    }

    #[test]
    fn balanced_volume_is_zero() {
        let imb = imbalance(250.0, 250.0).unwrap();
        assert!(imb.abs() < f64::EPSILON, "expected 0.0, got {imb}");
    }

    #[test]
    fn ask_heavy_is_positive() {
        let imb = imbalance(100.0, 300.0).unwrap();
        assert!((imb - 0.5).abs() < 1e-12, "expected 0.5, got {imb}");
    }

    #[test]
    fn result_is_always_bounded() {
        let pairs = [
            (1.0, 0.0),
            (0.0, 1.0),
            (1234.5, 6789.0),
            (1e9, 1.0),
            (0.001, 0.002),
        ];
        for (bid, ask) in pairs {
            let imb = imbalance(bid, ask).unwrap();
            assert!(
                (-1.0..=1.0).contains(&imb),
                "imbalance {imb} out of range for bid={bid} ask={ask}"
            );
        }
    }
}
