// =============================================================================
// Percentile Rank Estimators — uniform and recency-weighted
// =============================================================================
//
// Both estimators answer the same question — "what fraction of the window
// lies strictly below the new sample?" — under two weighting policies:
//
// Uniform:   every sample counts equally.  Sort a copy of the window, find
//            the lower bound of the sample, divide by the window length.
//
// Weighted:  position i (0 = oldest, n-1 = newest) carries weight
//              w_i = alpha * (1 - alpha)^(n - 1 - i)
//            so recent samples dominate.  Sort (value, weight) pairs by
//            value and accumulate weight while value < sample; the scan
//            stops at the first non-smaller value, which is equivalent to
//            summing the full strictly-less subset because the sequence is
//            sorted ascending.
//
// Tie policy (both): samples equal to the probe count toward the upper side.
// The rank uses the strictly-less count only, so for a probe appearing k
// times with j strictly smaller elements the uniform rank is j / n for any k.
// =============================================================================

/// Percentile rank of `sample` within `values` with uniform weighting.
///
/// `values` is the full window contents including the new sample itself.
///
/// # Edge cases
/// - Empty `values` => `None` (callers gate on minimum history, so this only
///   protects against direct misuse).
/// - Rank of the window minimum is 0.0; rank of a probe strictly above every
///   element is 1.0.
pub fn uniform(values: &[f64], sample: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    // Lower bound: number of elements strictly less than the probe.
    let below = sorted.partition_point(|&v| v < sample);
    Some(below as f64 / sorted.len() as f64)
}

/// Percentile rank of `sample` within `values` with exponential recency
/// weighting.
///
/// `values` must be ordered oldest-first (the window's natural order);
/// `alpha` is the decay rate in (0, 0.5].  The weights are not normalized in
/// place — the rank divides the cumulative strictly-less weight by the total
/// weight, which is always positive for a non-empty window and `alpha > 0`.
///
/// # Edge cases
/// - Empty `values` => `None`.
pub fn weighted(values: &[f64], sample: f64, alpha: f64) -> Option<f64> {
    let n = values.len();
    if n == 0 {
        return None;
    }

    // --- Assign position weights, newest heaviest -----------------------------
    let mut pairs: Vec<(f64, f64)> = Vec::with_capacity(n);
    let mut total_weight = 0.0;
    for (i, &value) in values.iter().enumerate() {
        let w = alpha * (1.0 - alpha).powi((n - 1 - i) as i32);
        pairs.push((value, w));
        total_weight += w;
    }

    // --- Sorted scan, stopping at the first non-smaller value -----------------
    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut cum_weight = 0.0;
    for &(value, weight) in &pairs {
        if value < sample {
            cum_weight += weight;
        } else {
            break;
        }
    }

    Some(cum_weight / total_weight)
}
