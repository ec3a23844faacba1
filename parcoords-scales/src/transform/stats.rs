//! Order statistics used by the winsorize, robust and quantile transforms

/// Finite values in ascending order
pub fn sorted_finite(values: &[f32]) -> Vec<f32> {
    let mut sorted: Vec<f32> = values.iter().copied().filter(|v| v.is_finite()).collect();
    sorted.sort_by(f32::total_cmp);
    sorted
}

/// Quantile `p` in [0, 1] of an ascending slice, interpolating linearly
/// between the order statistics at `floor(p * (n - 1))` and the next one.
///
/// Returns NaN for an empty slice.
pub fn quantile_sorted(sorted: &[f32], p: f32) -> f32 {
    match sorted.len() {
        0 => f32::NAN,
        1 => sorted[0],
        n => {
            let pos = p.clamp(0.0, 1.0) * (n - 1) as f32;
            let lower = pos.floor() as usize;
            let upper = (lower + 1).min(n - 1);
            let frac = pos - lower as f32;
            if frac == 0.0 {
                sorted[lower]
            } else {
                sorted[lower] + (sorted[upper] - sorted[lower]) * frac
            }
        }
    }
}

pub fn median_sorted(sorted: &[f32]) -> f32 {
    quantile_sorted(sorted, 0.5)
}

/// Clipping bounds that replace the lowest `lower` and highest `upper`
/// fractions of the sample with the nearest retained order statistic
pub fn winsor_bounds(sorted: &[f32], lower: f32, upper: f32) -> Option<(f32, f32)> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    let low_idx = floor_count(lower, n).min(n - 1);
    let high_cut = floor_count(upper, n);
    let high_idx = (n - 1).saturating_sub(high_cut).max(low_idx);
    Some((sorted[low_idx], sorted[high_idx]))
}

/// `floor(fraction * n)`, tolerant of single precision error in `fraction`
fn floor_count(fraction: f32, n: usize) -> usize {
    let raw = fraction.max(0.0) * n as f32;
    let nearest = raw.round();
    if (raw - nearest).abs() < 1e-4 {
        nearest as usize
    } else {
        raw.floor() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_quantiles() {
        let sorted = sorted_finite(&[4.0, 1.0, 3.0, 2.0, f32::NAN]);
        assert_eq!(sorted, vec![1.0, 2.0, 3.0, 4.0]);
        assert_approx_eq!(f32, median_sorted(&sorted), 2.5);
        assert_approx_eq!(f32, quantile_sorted(&sorted, 0.25), 1.75);
        assert_approx_eq!(f32, quantile_sorted(&sorted, 0.75), 3.25);
        assert_eq!(quantile_sorted(&sorted, 0.0), 1.0);
        assert_eq!(quantile_sorted(&sorted, 1.0), 4.0);
        assert!(quantile_sorted(&[], 0.5).is_nan());
    }

    #[test]
    fn test_winsor_bounds() {
        let sorted: Vec<f32> = (0..200).map(|v| v as f32).collect();
        // 1% of 200 is two values from each tail
        assert_eq!(winsor_bounds(&sorted, 0.01, 0.01), Some((2.0, 197.0)));
        assert_eq!(winsor_bounds(&sorted, 0.0, 0.0), Some((0.0, 199.0)));
        // Fewer than 100 values leaves the tails untouched at 1%
        assert_eq!(winsor_bounds(&[1.0, 5.0, 9.0], 0.01, 0.01), Some((1.0, 9.0)));
        assert_eq!(winsor_bounds(&[], 0.1, 0.1), None);
    }
}
