use super::ContinuousNumericScale;

#[derive(Clone, Debug)]
pub struct LinearNumericScaleConfig {
    pub domain: (f32, f32),
    pub range: (f32, f32),
    pub clamp: bool,
}

impl Default for LinearNumericScaleConfig {
    fn default() -> Self {
        Self {
            domain: (0.0, 1.0),
            range: (0.0, 1.0),
            clamp: false,
        }
    }
}

/// A linear scale that maps numeric input values from a domain to a range.
///
/// A degenerate domain (start == end) maps every value to the midpoint of the range.
#[derive(Clone, Debug)]
pub struct LinearNumericScale {
    domain_start: f32,
    domain_end: f32,
    range_start: f32,
    range_end: f32,
    clamp: bool,
}

impl LinearNumericScale {
    pub fn new(config: &LinearNumericScaleConfig) -> Self {
        Self {
            domain_start: config.domain.0,
            domain_end: config.domain.1,
            range_start: config.range.0,
            range_end: config.range.1,
            clamp: config.clamp,
        }
    }

    /// Min-max scale onto [0, 1] with the domain taken from the extent of `values`
    pub fn from_extent(values: &[f32]) -> Self {
        let (min, max) = extent(values).unwrap_or((0.0, 1.0));
        Self::new(&LinearNumericScaleConfig {
            domain: (min, max),
            ..Default::default()
        })
    }

    fn range_midpoint(&self) -> f32 {
        (self.range_start + self.range_end) / 2.0
    }
}

impl ContinuousNumericScale for LinearNumericScale {
    fn domain(&self) -> (f32, f32) {
        (self.domain_start, self.domain_end)
    }

    fn scale(&self, values: &[f32]) -> Vec<f32> {
        if self.is_degenerate() {
            let mid = self.range_midpoint();
            return values.iter().map(|_| mid).collect();
        }

        let domain_span = self.domain_end - self.domain_start;
        let range_span = self.range_end - self.range_start;
        let (range_min, range_max) = if self.range_start <= self.range_end {
            (self.range_start, self.range_end)
        } else {
            (self.range_end, self.range_start)
        };

        values
            .iter()
            .map(|v| {
                // Divide first so the domain endpoints land exactly on the range endpoints
                let scaled = self.range_start + (v - self.domain_start) / domain_span * range_span;
                if self.clamp {
                    scaled.clamp(range_min, range_max)
                } else {
                    scaled
                }
            })
            .collect()
    }

    fn ticks(&self, count: usize) -> Vec<f32> {
        if self.is_degenerate() || count == 0 {
            return vec![self.domain_start];
        }
        let step = (self.domain_end - self.domain_start) / count as f32;
        (0..=count)
            .map(|j| {
                if j == count {
                    self.domain_end
                } else {
                    self.domain_start + j as f32 * step
                }
            })
            .collect()
    }
}

/// Minimum and maximum of the finite values, if any
pub fn extent(values: &[f32]) -> Option<(f32, f32)> {
    values
        .iter()
        .filter(|v| v.is_finite())
        .fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((min, max)) => Some((min.min(v), max.max(v))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_defaults() {
        let scale = LinearNumericScale::new(&Default::default());
        assert_eq!(scale.domain(), (0.0, 1.0));
        assert_eq!(scale.scale(&[0.0, 0.5, 1.0]), vec![0.0, 0.5, 1.0]);
        assert!(!scale.clamp);
    }

    #[test]
    fn test_scale() {
        let scale = LinearNumericScale::new(&LinearNumericScaleConfig {
            domain: (10.0, 30.0),
            range: (0.0, 100.0),
            clamp: true,
        });

        let values = vec![
            0.0,  // < domain
            10.0, // domain start
            15.0, 20.0, 25.0, 30.0, // in domain
            40.0, // > domain
        ];

        let result = scale.scale(&values);

        assert_approx_eq!(f32, result[0], 0.0); // clamped
        assert_approx_eq!(f32, result[1], 0.0); // domain start
        assert_approx_eq!(f32, result[2], 25.0); // interpolated
        assert_approx_eq!(f32, result[3], 50.0); // interpolated
        assert_approx_eq!(f32, result[4], 75.0); // interpolated
        assert_approx_eq!(f32, result[5], 100.0); // domain end
        assert_approx_eq!(f32, result[6], 100.0); // clamped
    }

    #[test]
    fn test_min_max_exact_endpoints() {
        let values = vec![3.7, -12.1, 8.25, 101.3];
        let scale = LinearNumericScale::from_extent(&values);
        let result = scale.scale(&values);
        assert_eq!(result[1], 0.0);
        assert_eq!(result[3], 1.0);
        assert!(result.iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn test_degenerate_domain() {
        let scale = LinearNumericScale::from_extent(&[4.0, 4.0, 4.0]);
        assert!(scale.is_degenerate());
        assert_eq!(scale.scale(&[4.0, 4.0]), vec![0.5, 0.5]);
        assert_eq!(scale.ticks(10), vec![4.0]);
    }

    #[test]
    fn test_ticks() {
        let scale = LinearNumericScale::from_extent(&[0.0, 5.0]);
        let ticks = scale.ticks(10);
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks[0], 0.0);
        assert_approx_eq!(f32, ticks[5], 2.5);
        assert_eq!(ticks[10], 5.0);
    }

    #[test]
    fn test_extent_ignores_non_finite() {
        assert_eq!(extent(&[f32::NAN, 2.0, -1.0]), Some((-1.0, 2.0)));
        assert_eq!(extent(&[]), None);
    }
}
