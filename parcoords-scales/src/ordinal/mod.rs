use indexmap::IndexMap;
use parcoords_common::value::Scalar;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;
use tracing::warn;

use crate::ticks::TickTable;

/// A discrete scale that maps each category to an integer code and an evenly
/// spaced position in [0, 1].
///
/// Categories are ordered by an explicit order when one is given, otherwise in
/// natural order of their values.
#[derive(Debug, Clone, Default)]
pub struct OrdinalScale {
    mapping: IndexMap<Scalar, usize>,
}

impl OrdinalScale {
    /// Build the category domain from the distinct values of a column.
    ///
    /// Every entry of `order` becomes a category, even when no row carries it.
    /// Entries are matched against values by label. Values missing from `order`
    /// are appended after the listed categories in natural order.
    pub fn from_values(values: &[Scalar], order: Option<&[String]>) -> Self {
        let mut distinct = values.to_vec();
        distinct.sort();
        distinct.dedup();

        let mut domain: Vec<Scalar> = Vec::with_capacity(distinct.len());
        if let Some(order) = order {
            for label in order {
                let category = distinct
                    .iter()
                    .find(|v| v.label() == *label)
                    .cloned()
                    .unwrap_or_else(|| Scalar::parse_cell(label));
                if !domain.contains(&category) {
                    domain.push(category);
                }
            }
            let unlisted = distinct
                .into_iter()
                .filter(|v| !domain.contains(v))
                .collect::<Vec<_>>();
            if !unlisted.is_empty() {
                warn!(
                    "{} categories missing from the explicit order were appended: {:?}",
                    unlisted.len(),
                    unlisted.iter().map(Scalar::label).collect::<Vec<_>>()
                );
                domain.extend(unlisted);
            }
        } else {
            domain = distinct;
        }

        Self::new(domain)
    }

    /// Creates a scale whose codes follow the order of `domain`
    pub fn new(domain: Vec<Scalar>) -> Self {
        let mapping = domain
            .into_iter()
            .enumerate()
            .map(|(code, v)| (v, code))
            .collect::<IndexMap<_, _>>();
        Self { mapping }
    }

    /// Categories in code order
    pub fn domain(&self) -> Vec<&Scalar> {
        self.mapping.keys().collect()
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }

    pub fn code(&self, value: &Scalar) -> Option<usize> {
        self.mapping.get(value).copied()
    }

    /// `code / (k - 1)`, or 0.5 for a single category
    pub fn position_of_code(&self, code: usize) -> f32 {
        if self.mapping.len() <= 1 {
            0.5
        } else {
            code as f32 / (self.mapping.len() - 1) as f32
        }
    }

    /// Positions for every value. Values outside the domain map to NaN.
    pub fn scale(&self, values: &[Scalar]) -> Vec<f32> {
        values
            .iter()
            .map(|v| {
                self.code(v)
                    .map(|code| self.position_of_code(code))
                    .unwrap_or(f32::NAN)
            })
            .collect()
    }

    pub fn ticks(&self) -> TickTable {
        TickTable::evenly_spaced(self.mapping.keys().map(Scalar::label))
    }

    /// Largest jitter that keeps every point closer to its own category than to a neighbor
    pub fn max_jitter(&self) -> f32 {
        match self.mapping.len() {
            0 | 1 => f32::INFINITY,
            k => 0.99 * 0.5 / (k - 1) as f32,
        }
    }

    /// Add symmetric uniform noise in `[-amplitude, amplitude]` to positions, with
    /// the amplitude limited by [`OrdinalScale::max_jitter`]
    pub fn jitter<R: Rng + ?Sized>(&self, positions: &mut [f32], amplitude: f32, rng: &mut R) {
        let amplitude = amplitude.min(self.max_jitter());
        if amplitude <= 0.0 || !amplitude.is_finite() {
            return;
        }
        let noise = Uniform::new_inclusive(-amplitude, amplitude);
        for position in positions.iter_mut() {
            *position += noise.sample(rng);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn labels(values: &[&str]) -> Vec<Scalar> {
        values.iter().map(|v| Scalar::from(*v)).collect()
    }

    #[test]
    fn test_natural_order_codes() {
        let values = labels(&["A", "A", "B", "C"]);
        let scale = OrdinalScale::from_values(&values, None);
        assert_eq!(scale.len(), 3);
        assert_eq!(scale.scale(&values), vec![0.0, 0.0, 0.5, 1.0]);
        assert_eq!(scale.ticks().labels(), vec!["A", "B", "C"]);
        assert_eq!(scale.ticks().positions(), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_numeric_categories_sort_numerically() {
        let values: Vec<Scalar> = vec![10.0.into(), 2.0.into(), 1.0.into(), 2.0.into()];
        let scale = OrdinalScale::from_values(&values, None);
        assert_eq!(scale.ticks().labels(), vec!["1", "2", "10"]);
    }

    #[test]
    fn test_explicit_order() {
        let values = labels(&["mfg", "svc", "fin", "tech"]);
        let order = ["fin", "tech", "mfg", "svc"].map(String::from);
        let scale = OrdinalScale::from_values(&values, Some(order.as_slice()));
        assert_eq!(scale.ticks().labels(), vec!["fin", "tech", "mfg", "svc"]);
        assert_eq!(scale.code(&Scalar::from("mfg")), Some(2));
    }

    #[test]
    fn test_explicit_order_keeps_absent_and_appends_unlisted() {
        let values = labels(&["b", "z", "a"]);
        let order = ["b", "never", "a"].map(String::from);
        let scale = OrdinalScale::from_values(&values, Some(order.as_slice()));
        assert_eq!(scale.ticks().labels(), vec!["b", "never", "a", "z"]);
    }

    #[test]
    fn test_explicit_order_matches_numeric_labels() {
        let values: Vec<Scalar> = vec![3.0.into(), 1.0.into(), 2.0.into()];
        let order = ["3", "2", "1"].map(String::from);
        let scale = OrdinalScale::from_values(&values, Some(order.as_slice()));
        assert_eq!(scale.code(&Scalar::Number(3.0)), Some(0));
        assert_eq!(scale.code(&Scalar::Number(1.0)), Some(2));
    }

    #[test]
    fn test_single_category() {
        let values = labels(&["only", "only"]);
        let scale = OrdinalScale::from_values(&values, None);
        assert_eq!(scale.scale(&values), vec![0.5, 0.5]);
        assert_eq!(scale.ticks().positions(), vec![0.5]);
    }

    #[test]
    fn test_jitter_bounds() {
        let values = labels(&["a", "b", "c", "d", "e"]);
        let scale = OrdinalScale::from_values(&values, None);
        let base = scale.scale(&values);
        let mut rng = StdRng::seed_from_u64(7);

        let repeated: Vec<f32> = base.iter().cycle().take(500).copied().collect();
        let mut jittered = repeated.clone();
        scale.jitter(&mut jittered, 0.01, &mut rng);

        for (b, j) in repeated.iter().zip(&jittered) {
            assert!((j - b).abs() <= 0.01 + 1e-6);
        }
        assert!(repeated.iter().zip(&jittered).any(|(b, j)| b != j));
    }

    #[test]
    fn test_jitter_never_crosses_midpoint() {
        // 101 categories are 0.01 apart, closer than the requested amplitude
        let values: Vec<Scalar> = (0..101).map(|i| Scalar::from(format!("c{i:03}"))).collect();
        let scale = OrdinalScale::from_values(&values, None);
        let base = scale.scale(&values);
        let mut jittered = base.clone();
        scale.jitter(&mut jittered, 0.01, &mut StdRng::seed_from_u64(1));
        let half_gap = 0.5 / 100.0;
        for (b, j) in base.iter().zip(&jittered) {
            assert!((j - b).abs() < half_gap);
        }
    }
}
