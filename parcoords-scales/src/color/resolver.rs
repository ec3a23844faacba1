use indexmap::IndexMap;
use parcoords_common::types::{GradientStop, Rgba, NEUTRAL_GRAY};
use parcoords_common::value::Scalar;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::palettes::NamedPalette;
use crate::ordinal::OrdinalScale;
use crate::ticks::TickTable;

/// Number of gradient stops reported for a rank colorbar
pub const COLORBAR_STOPS: usize = 11;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryColor {
    pub label: String,
    pub color: Rgba,
}

/// What a legend or colorbar needs to explain the line colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColorKey {
    /// Every line shares the neutral color
    None,
    /// Continuous palette keyed to the ranking column's ticks
    Gradient {
        column: String,
        stops: Vec<GradientStop>,
        ticks: TickTable,
    },
    /// One entry per category, in category order
    Categories {
        column: String,
        entries: Vec<CategoryColor>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorAssignment {
    /// One color per table row
    pub colors: Vec<Rgba>,
    pub key: ColorKey,
}

/// Color every row by the palette at its normalized rank position
pub fn resolve_rank_colors(
    column: &str,
    positions: &[f32],
    ticks: &TickTable,
    palette: NamedPalette,
) -> ColorAssignment {
    debug!("rank coloring by '{column}' with palette {palette}");
    ColorAssignment {
        colors: palette.sample_many(positions),
        key: ColorKey::Gradient {
            column: column.to_string(),
            stops: palette.gradient_stops(COLORBAR_STOPS),
            ticks: ticks.clone(),
        },
    }
}

/// Color every row by its category.
///
/// With an explicit mapping, categories are looked up by label and unmapped
/// ones fall back to neutral gray. Without one, colors are sampled evenly from
/// the palette across the ordered categories.
pub fn resolve_category_colors(
    column: &str,
    values: &[Scalar],
    order: Option<&[String]>,
    mapping: Option<&IndexMap<String, Rgba>>,
    palette: NamedPalette,
) -> ColorAssignment {
    let scale = OrdinalScale::from_values(values, order);
    let categories = scale.domain();

    let category_colors: Vec<Rgba> = match mapping {
        Some(mapping) => categories
            .iter()
            .map(|category| {
                let label = category.label();
                mapping.get(&label).copied().unwrap_or_else(|| {
                    warn!("category '{label}' of '{column}' has no color, using gray");
                    NEUTRAL_GRAY
                })
            })
            .collect(),
        None => palette.categorical_colors(categories.len()),
    };

    let colors = values
        .iter()
        .map(|v| {
            scale
                .code(v)
                .and_then(|code| category_colors.get(code).copied())
                .unwrap_or(NEUTRAL_GRAY)
        })
        .collect();

    let entries = categories
        .iter()
        .zip(&category_colors)
        .map(|(category, color)| CategoryColor {
            label: category.label(),
            color: *color,
        })
        .collect();

    debug!(
        "category coloring by '{column}' with {} categories",
        category_colors.len()
    );
    ColorAssignment {
        colors,
        key: ColorKey::Categories {
            column: column.to_string(),
            entries,
        },
    }
}

/// Neutral gray for every row, with no legend
pub fn resolve_uniform(num_rows: usize) -> ColorAssignment {
    ColorAssignment {
        colors: vec![NEUTRAL_GRAY; num_rows],
        key: ColorKey::None,
    }
}
