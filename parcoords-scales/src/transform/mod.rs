pub mod continuous;
pub mod stats;

use std::str::FromStr;

use parcoords_common::value::Scalar;
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, VariantNames};
use tracing::debug;

use crate::classify::ColumnKind;
use crate::error::ParcoordsScaleError;
use crate::ordinal::OrdinalScale;
use crate::quantile::QuantileScale;
use crate::ticks::{Tick, TickTable};

/// Per-axis value transform applied before normalization
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TransformMode {
    #[default]
    None,
    Log,
    Winsorize,
    Robust,
    Quantile,
}

impl TransformMode {
    /// Parse a transform name. An empty string means no transform.
    pub fn parse(mode: &str) -> Result<Self, ParcoordsScaleError> {
        let trimmed = mode.trim();
        if trimmed.is_empty() {
            return Ok(TransformMode::None);
        }
        TransformMode::from_str(trimmed).map_err(|_| ParcoordsScaleError::UnsupportedTransform {
            mode: mode.to_string(),
            expected: TransformMode::VARIANTS.join(", "),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TransformOptions {
    /// Fractions clipped from the low and high tails by `winsorize`
    pub winsor_limits: (f32, f32),
    /// `log` only applies when `max / max(min, epsilon)` exceeds this ratio
    pub log_threshold: f32,
    /// Requested bucket count for `quantile`
    pub quantiles: usize,
    /// Number of intervals between continuous ticks
    pub tick_count: usize,
    /// Jitter amplitude for categorical positions, when scatter is enabled
    pub jitter: Option<f32>,
    /// Whether `quantile` is honored for this column
    pub allow_quantile: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            winsor_limits: (0.01, 0.01),
            log_threshold: 100.0,
            quantiles: 10,
            tick_count: 10,
            jitter: None,
            allow_quantile: true,
        }
    }
}

/// Normalized plot positions and tick table for one column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedAxis {
    pub kind: ColumnKind,
    /// Transform that was actually applied, after gating and kind checks
    pub applied: TransformMode,
    pub positions: Vec<f32>,
    pub ticks: TickTable,
}

/// Normalize a classified column into positions in [0, 1] plus its tick table.
///
/// Categorical columns ignore numeric transform modes.
pub fn normalize_column<R: Rng + ?Sized>(
    values: &[Scalar],
    kind: ColumnKind,
    mode: TransformMode,
    options: &TransformOptions,
    category_order: Option<&[String]>,
    rng: &mut R,
) -> Result<NormalizedAxis, ParcoordsScaleError> {
    match kind {
        ColumnKind::Categorical => Ok(normalize_categorical(
            values,
            category_order,
            options.jitter,
            rng,
        )),
        ColumnKind::Continuous => {
            let numbers = values
                .iter()
                .map(|v| {
                    v.as_f32()
                        .ok_or_else(|| ParcoordsScaleError::NonNumericValue(v.label()))
                })
                .collect::<Result<Vec<_>, _>>()?;
            if mode == TransformMode::Quantile && options.allow_quantile {
                normalize_quantile(&numbers, options.quantiles)
            } else {
                let mode = if mode == TransformMode::Quantile {
                    TransformMode::None
                } else {
                    mode
                };
                Ok(continuous::normalize_continuous(&numbers, mode, options))
            }
        }
    }
}

/// Integer codes per category mapped to evenly spaced positions, with optional jitter
/// on the plotted positions only
pub fn normalize_categorical<R: Rng + ?Sized>(
    values: &[Scalar],
    category_order: Option<&[String]>,
    jitter: Option<f32>,
    rng: &mut R,
) -> NormalizedAxis {
    let scale = OrdinalScale::from_values(values, category_order);
    let mut positions = scale.scale(values);
    if let Some(amplitude) = jitter {
        scale.jitter(&mut positions, amplitude, rng);
    }
    debug!("categorical axis with {} categories", scale.len());
    NormalizedAxis {
        kind: ColumnKind::Categorical,
        applied: TransformMode::None,
        positions,
        ticks: scale.ticks(),
    }
}

/// Equal-frequency buckets labeled `Q1..Qk`, with `k` the number of occupied buckets
pub fn normalize_quantile(
    values: &[f32],
    quantiles: usize,
) -> Result<NormalizedAxis, ParcoordsScaleError> {
    let scale = QuantileScale::try_new(values, quantiles)?;
    let buckets = scale.scale(values);

    // Compact to occupied buckets so tick count matches distinct buckets
    let mut occupied = buckets.clone();
    occupied.sort_unstable();
    occupied.dedup();
    let ordinal = OrdinalScale::new(
        (0..occupied.len())
            .map(|i| Scalar::Text(format!("Q{}", i + 1)))
            .collect(),
    );

    let positions = buckets
        .iter()
        .map(|b| {
            let rank = occupied.binary_search(b).unwrap_or_else(|i| i);
            ordinal.position_of_code(rank)
        })
        .collect();

    debug!(
        "quantile axis with {} of {} requested buckets",
        occupied.len(),
        quantiles
    );
    Ok(NormalizedAxis {
        kind: ColumnKind::Continuous,
        applied: TransformMode::Quantile,
        positions,
        ticks: ordinal.ticks(),
    })
}

pub(crate) fn numeric_tick(label: String, position: f32, value: f32) -> Tick {
    Tick {
        label,
        position,
        value: Some(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rstest::rstest;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn numbers(values: impl IntoIterator<Item = f32>) -> Vec<Scalar> {
        values.into_iter().map(Scalar::Number).collect()
    }

    #[rstest]
    #[case("log", TransformMode::Log)]
    #[case("LOG", TransformMode::Log)]
    #[case(" winsorize ", TransformMode::Winsorize)]
    #[case("robust", TransformMode::Robust)]
    #[case("quantile", TransformMode::Quantile)]
    #[case("none", TransformMode::None)]
    #[case("", TransformMode::None)]
    fn test_parse_transform(#[case] text: &str, #[case] expected: TransformMode) {
        assert_eq!(TransformMode::parse(text), Ok(expected));
    }

    #[test]
    fn test_parse_unsupported_transform() {
        let err = TransformMode::parse("sqrt").unwrap_err();
        assert!(matches!(
            err,
            ParcoordsScaleError::UnsupportedTransform { ref mode, .. } if mode == "sqrt"
        ));
        assert!(err.to_string().contains("winsorize"));
    }

    #[test]
    fn test_categorical_ignores_transform() -> Result<(), ParcoordsScaleError> {
        let values: Vec<Scalar> = ["A", "A", "B", "C"].map(Scalar::from).to_vec();
        let axis = normalize_column(
            &values,
            ColumnKind::Categorical,
            TransformMode::Log,
            &TransformOptions::default(),
            None,
            &mut rng(),
        )?;
        assert_eq!(axis.positions, vec![0.0, 0.0, 0.5, 1.0]);
        assert_eq!(axis.applied, TransformMode::None);
        assert_eq!(axis.ticks.labels(), vec!["A", "B", "C"]);
        Ok(())
    }

    #[test]
    fn test_categorical_jitter_leaves_ticks() -> Result<(), ParcoordsScaleError> {
        let values: Vec<Scalar> = ["x", "y"]
            .iter()
            .cycle()
            .take(40)
            .map(|v| Scalar::from(*v))
            .collect();
        let options = TransformOptions {
            jitter: Some(0.01),
            ..Default::default()
        };
        let axis = normalize_column(
            &values,
            ColumnKind::Categorical,
            TransformMode::None,
            &options,
            None,
            &mut rng(),
        )?;
        assert_eq!(axis.ticks.positions(), vec![0.0, 1.0]);
        assert!(axis.positions.iter().any(|p| *p != 0.0 && *p != 1.0));
        Ok(())
    }

    #[test]
    fn test_quantile_mode() -> Result<(), ParcoordsScaleError> {
        let values = numbers((1..=100).map(|v| v as f32));
        let axis = normalize_column(
            &values,
            ColumnKind::Continuous,
            TransformMode::Quantile,
            &TransformOptions::default(),
            None,
            &mut rng(),
        )?;
        assert_eq!(axis.applied, TransformMode::Quantile);
        assert_eq!(axis.ticks.len(), 10);
        assert_eq!(axis.ticks.labels()[0], "Q1");
        assert_eq!(axis.ticks.labels()[9], "Q10");
        assert_eq!(axis.positions[0], 0.0);
        assert_eq!(axis.positions[99], 1.0);
        assert_approx_eq!(f32, axis.positions[50], 5.0 / 9.0);
        assert!(axis.positions.windows(2).all(|w| w[0] <= w[1]));
        Ok(())
    }

    #[test]
    fn test_quantile_ticks_match_distinct_buckets() -> Result<(), ParcoordsScaleError> {
        // Heavy ties collapse several bucket edges
        let mut raw: Vec<f32> = vec![5.0; 60];
        raw.extend((0..40).map(|v| 100.0 + v as f32));
        let axis = normalize_quantile(&raw, 10)?;
        let mut distinct = axis.positions.clone();
        distinct.sort_by(f32::total_cmp);
        distinct.dedup();
        assert_eq!(axis.ticks.len(), distinct.len());
        assert_eq!(axis.ticks.positions(), distinct);
        Ok(())
    }

    #[test]
    fn test_quantile_single_bucket() -> Result<(), ParcoordsScaleError> {
        let raw: Vec<f32> = (0..30).map(|v| v as f32).collect();
        let axis = normalize_quantile(&raw, 1)?;
        assert_eq!(axis.ticks.labels(), vec!["Q1"]);
        assert_eq!(axis.ticks.positions(), vec![0.5]);
        assert!(axis.positions.iter().all(|p| *p == 0.5));
        Ok(())
    }

    #[test]
    fn test_quantile_disabled_falls_back_to_min_max() -> Result<(), ParcoordsScaleError> {
        let values = numbers((0..=50).map(|v| v as f32));
        let options = TransformOptions {
            allow_quantile: false,
            ..Default::default()
        };
        let axis = normalize_column(
            &values,
            ColumnKind::Continuous,
            TransformMode::Quantile,
            &options,
            None,
            &mut rng(),
        )?;
        assert_eq!(axis.applied, TransformMode::None);
        assert_eq!(axis.ticks.len(), 11);
        Ok(())
    }

    #[test]
    fn test_continuous_rejects_text() {
        let values = vec![Scalar::Number(1.0), Scalar::from("oops")];
        let result = normalize_column(
            &values,
            ColumnKind::Continuous,
            TransformMode::None,
            &TransformOptions::default(),
            None,
            &mut rng(),
        );
        assert_eq!(
            result,
            Err(ParcoordsScaleError::NonNumericValue("oops".to_string()))
        );
    }
}
