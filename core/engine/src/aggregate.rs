//! FILENAME: core/engine/src/aggregate.rs
//! PURPOSE: Weighted averaging used for both term averages (GPA) and the
//! overall average (CGPA).
//! CONTEXT: One function serves both levels. For a term the pairs are
//! (score, credits); for the overall average they are (term average,
//! included term credits). Pairs with a non-positive weight are ignored.

/// Rounds to 2 decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Computes the weighted average of `(value, weight)` pairs, rounded to
/// 2 decimal places.
///
/// Pairs whose weight is `<= 0` contribute to neither the numerator nor the
/// denominator. If no pair remains the result is exactly `0.0`.
/// Sums are accumulated in input order.
pub fn weighted_average<I>(pairs: I) -> f64
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let (weighted_sum, weight_sum) = pairs
        .into_iter()
        .filter(|&(_, weight)| weight > 0.0)
        .fold((0.0, 0.0), |(sum, total), (value, weight)| {
            (sum + value * weight, total + weight)
        });

    if weight_sum > 0.0 {
        round2(weighted_sum / weight_sum)
    } else {
        0.0
    }
}
