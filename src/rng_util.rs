/// Generate a random `f64` in the range `[low, high)`.
///
/// Returns `low` when the range is degenerate.
#[inline]
pub(crate) fn f64_range(rng: &mut fastrand::Rng, low: f64, high: f64) -> f64 {
    if low >= high {
        return low;
    }
    low + rng.f64() * (high - low)
}
