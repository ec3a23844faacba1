use tracing::{debug, warn};

use super::stats::{median_sorted, quantile_sorted, sorted_finite, winsor_bounds};
use super::{numeric_tick, NormalizedAxis, TransformMode, TransformOptions};
use crate::classify::ColumnKind;
use crate::formatter::DefaultFormatter;
use crate::numeric::linear::{extent, LinearNumericScale};
use crate::numeric::ContinuousNumericScale;
use crate::ticks::TickTable;

/// Guards the log gate ratio against zero and negative minimums
pub const LOG_EPSILON: f32 = 1e-9;

/// Apply the pre-scaling transform for `mode`, then min-max scale onto [0, 1].
///
/// `quantile` is handled separately and is treated as `none` here.
pub fn normalize_continuous(
    values: &[f32],
    mode: TransformMode,
    options: &TransformOptions,
) -> NormalizedAxis {
    let (transformed, applied) = pre_transform(values, mode, options);

    let scale = LinearNumericScale::from_extent(&transformed);
    let positions = scale.scale(&transformed);
    let ticks = continuous_ticks(&scale, options.tick_count);

    NormalizedAxis {
        kind: ColumnKind::Continuous,
        applied,
        positions,
        ticks,
    }
}

fn pre_transform(
    values: &[f32],
    mode: TransformMode,
    options: &TransformOptions,
) -> (Vec<f32>, TransformMode) {
    let Some((min, max)) = extent(values) else {
        return (values.to_vec(), TransformMode::None);
    };

    match mode {
        TransformMode::Log => {
            let ratio = max / min.max(LOG_EPSILON);
            if ratio > options.log_threshold {
                debug!("log transform applied, max/min ratio {ratio}");
                let transformed = values.iter().map(|v| (v - min).ln_1p()).collect();
                (transformed, TransformMode::Log)
            } else {
                debug!(
                    "log transform skipped, max/min ratio {ratio} does not exceed {}",
                    options.log_threshold
                );
                (values.to_vec(), TransformMode::None)
            }
        }
        TransformMode::Winsorize => {
            let sorted = sorted_finite(values);
            let (lower, upper) = options.winsor_limits;
            match winsor_bounds(&sorted, lower, upper) {
                Some((lo, hi)) => {
                    let clipped = values.iter().map(|v| v.clamp(lo, hi)).collect();
                    (clipped, TransformMode::Winsorize)
                }
                None => (values.to_vec(), TransformMode::None),
            }
        }
        TransformMode::Robust => {
            let sorted = sorted_finite(values);
            let median = median_sorted(&sorted);
            let iqr = quantile_sorted(&sorted, 0.75) - quantile_sorted(&sorted, 0.25);
            if iqr > 0.0 {
                let scaled = values.iter().map(|v| (v - median) / iqr).collect();
                (scaled, TransformMode::Robust)
            } else {
                debug!("robust scaling skipped, interquartile range is zero");
                (values.to_vec(), TransformMode::None)
            }
        }
        TransformMode::None | TransformMode::Quantile => (values.to_vec(), TransformMode::None),
    }
}

/// `tick_count` intervals evenly spaced in position, labeled with the transformed
/// values rounded to two decimals
fn continuous_ticks(scale: &LinearNumericScale, tick_count: usize) -> TickTable {
    let formatter = DefaultFormatter::default();

    if scale.is_degenerate() {
        let (value, _) = scale.domain();
        warn!("continuous axis has a degenerate range at {value}, positions collapse to 0.5");
        return TickTable::new(vec![numeric_tick(
            formatter.format_value(value),
            0.5,
            value,
        )]);
    }

    let count = tick_count.max(1);
    let tick_values = scale.ticks(count);
    TickTable::new(
        tick_values
            .iter()
            .enumerate()
            .map(|(j, t)| {
                numeric_tick(formatter.format_value(*t), j as f32 / count as f32, *t)
            })
            .collect(),
    )
}
