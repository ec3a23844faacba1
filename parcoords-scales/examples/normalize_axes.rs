use parcoords_common::value::Scalar;
use parcoords_scales::classify::{classify_column, DEFAULT_CARDINALITY_THRESHOLD};
use parcoords_scales::transform::{normalize_column, TransformMode, TransformOptions};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Axis Normalization Example ===\n");

    // Heavy tailed sample spanning four orders of magnitude
    let values: Vec<Scalar> = (0..40)
        .map(|i| Scalar::Number(1.25f32.powi(i)))
        .collect();
    let kind = classify_column(&values, DEFAULT_CARDINALITY_THRESHOLD);
    println!("Column kind: {kind:?}\n");

    let mut rng = StdRng::seed_from_u64(42);
    for mode in [
        TransformMode::None,
        TransformMode::Log,
        TransformMode::Winsorize,
        TransformMode::Robust,
        TransformMode::Quantile,
    ] {
        let axis = normalize_column(
            &values,
            kind,
            mode,
            &TransformOptions::default(),
            None,
            &mut rng,
        )?;
        println!("{mode} (applied {}):", axis.applied);
        println!(
            "  positions: {:?}",
            axis.positions
                .iter()
                .step_by(8)
                .map(|p| format!("{p:.3}"))
                .collect::<Vec<_>>()
        );
        println!("  ticks: {:?}\n", axis.ticks.labels());
    }

    Ok(())
}
