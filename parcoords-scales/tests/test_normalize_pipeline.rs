use parcoords_common::value::Scalar;
use parcoords_scales::classify::{classify_column, ColumnKind, DEFAULT_CARDINALITY_THRESHOLD};
use parcoords_scales::color::palettes::NamedPalette;
use parcoords_scales::color::resolver::{resolve_rank_colors, ColorKey};
use parcoords_scales::error::ParcoordsScaleError;
use parcoords_scales::transform::{normalize_column, TransformMode, TransformOptions};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rstest::rstest;

fn normalize(
    values: &[Scalar],
    mode: TransformMode,
) -> Result<parcoords_scales::transform::NormalizedAxis, ParcoordsScaleError> {
    let kind = classify_column(values, DEFAULT_CARDINALITY_THRESHOLD);
    normalize_column(
        values,
        kind,
        mode,
        &TransformOptions::default(),
        None,
        &mut StdRng::seed_from_u64(0),
    )
}

#[rstest]
#[case(TransformMode::None)]
#[case(TransformMode::Log)]
#[case(TransformMode::Winsorize)]
#[case(TransformMode::Robust)]
#[case(TransformMode::Quantile)]
fn test_positions_in_unit_interval(#[case] mode: TransformMode) -> Result<(), ParcoordsScaleError> {
    let values: Vec<Scalar> = (0..300)
        .map(|i| Scalar::Number(((i * 7919) % 1013) as f32 * 3.5 + 0.25))
        .collect();
    let axis = normalize(&values, mode)?;
    assert_eq!(axis.kind, ColumnKind::Continuous);
    assert_eq!(axis.positions.len(), values.len());
    assert!(axis
        .positions
        .iter()
        .all(|p| p.is_finite() && (0.0..=1.0).contains(p)));
    assert!(axis
        .ticks
        .positions()
        .iter()
        .all(|p| (0.0..=1.0).contains(p)));
    Ok(())
}

#[test]
fn test_low_cardinality_numbers_are_categorical() -> Result<(), ParcoordsScaleError> {
    let values: Vec<Scalar> = [1.0, 2.0, 3.0, 2.0, 1.0].map(Scalar::Number).to_vec();
    let axis = normalize(&values, TransformMode::Log)?;
    assert_eq!(axis.kind, ColumnKind::Categorical);
    assert_eq!(axis.applied, TransformMode::None);
    assert_eq!(axis.ticks.labels(), vec!["1", "2", "3"]);
    assert_eq!(axis.positions, vec![0.0, 0.5, 1.0, 0.5, 0.0]);
    Ok(())
}

#[test]
fn test_rank_colors_follow_positions() -> Result<(), ParcoordsScaleError> {
    let values: Vec<Scalar> = (0..50).map(|i| Scalar::Number(i as f32)).collect();
    let axis = normalize(&values, TransformMode::None)?;
    let assignment =
        resolve_rank_colors("score", &axis.positions, &axis.ticks, NamedPalette::Viridis);
    assert_eq!(assignment.colors.len(), 50);
    assert_eq!(assignment.colors[0], NamedPalette::Viridis.sample(0.0));
    assert_eq!(assignment.colors[49], NamedPalette::Viridis.sample(1.0));
    assert!(matches!(assignment.key, ColorKey::Gradient { ref column, .. } if column == "score"));
    Ok(())
}
