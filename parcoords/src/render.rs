use parcoords_common::table::Table;
use parcoords_common::types::Rgba;
use parcoords_geometry::connector::{
    build_connectors, ConnectorConfig, ConnectorSet, ConnectorStyle,
};
use parcoords_guides::layout::{plan_layout, LayoutConfig, LayoutPlan};
use parcoords_guides::legend::{make_legend, Legend};
use parcoords_scales::classify::{classify_column, ColumnKind};
use parcoords_scales::color::resolver::{
    resolve_category_colors, resolve_rank_colors, resolve_uniform, ColorAssignment, ColorKey,
};
use parcoords_scales::ticks::TickTable;
use parcoords_scales::transform::{normalize_column, TransformMode, TransformOptions};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{ColorBy, PlotConfig, ValidatedConfig};
use crate::error::ParcoordsError;

/// One row of the value matrix
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisOutput {
    pub column: String,
    pub kind: ColumnKind,
    pub requested: TransformMode,
    pub applied: TransformMode,
    pub ticks: TickTable,
    /// False for a ranking column appended only to drive colors
    pub plotted: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub alpha: f32,
    pub width: f32,
}

/// Everything a drawing layer needs to paint the chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderOutput {
    pub axes: Vec<AxisOutput>,
    /// Normalized positions, one row per entry of `axes`, one column per table row
    pub value_matrix: Vec<Vec<f32>>,
    /// One color per table row
    pub colors: Vec<Rgba>,
    pub color_key: ColorKey,
    pub legend: Option<Legend>,
    pub connectors: Vec<ConnectorSet>,
    pub layout: LayoutPlan,
    pub line_style: LineStyle,
}

impl RenderOutput {
    /// Value matrix row for a column
    pub fn positions(&self, column: &str) -> Option<&[f32]> {
        self.axes
            .iter()
            .position(|a| a.column == column)
            .map(|i| self.value_matrix[i].as_slice())
    }

    pub fn axis(&self, column: &str) -> Option<&AxisOutput> {
        self.axes.iter().find(|a| a.column == column)
    }
}

/// Run the full pipeline, seeding jitter from `config.seed` or from entropy
pub fn render(table: &Table, config: &PlotConfig) -> Result<RenderOutput, ParcoordsError> {
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    render_with_rng(table, config, &mut rng)
}

/// Run the full pipeline drawing jitter from `rng`
#[tracing::instrument(skip_all, fields(rows = table.num_rows(), axes = config.cols.len()))]
pub fn render_with_rng<R: Rng + ?Sized>(
    table: &Table,
    config: &PlotConfig,
    rng: &mut R,
) -> Result<RenderOutput, ParcoordsError> {
    let validated = config.validate()?;
    check_columns(table, config)?;

    let rank_attr = match config.color_by {
        ColorBy::Rank => config.rank_attr.as_deref(),
        ColorBy::Category => None,
    };
    let mut all_cols: Vec<&str> = config.cols.iter().map(String::as_str).collect();
    if let Some(rank) = rank_attr {
        if !all_cols.contains(&rank) {
            all_cols.push(rank);
        }
    }

    let base_options = config.transform_options();
    let mut axes = Vec::with_capacity(all_cols.len());
    let mut value_matrix = Vec::with_capacity(all_cols.len());
    for (i, column) in all_cols.iter().enumerate() {
        let (axis, positions) = normalize_axis(
            table,
            column,
            i < config.cols.len(),
            Some(*column) == rank_attr,
            config,
            &validated,
            &base_options,
            rng,
        )?;
        axes.push(axis);
        value_matrix.push(positions);
    }

    let assignment = resolve_colors(table, config, &validated, &axes, &value_matrix)?;

    let extend = config.extend();
    let twin_span = (config.twin_axis && config.cols.len() > 1).then_some(config.twin_span);
    let style = if config.curved {
        ConnectorStyle::Curved {
            density: config.curve_density,
        }
    } else {
        ConnectorStyle::Straight
    };
    let plotted: Vec<&[f32]> = value_matrix[..config.cols.len()]
        .iter()
        .map(|row| row.as_slice())
        .collect();
    let connectors = build_connectors(
        &plotted,
        &ConnectorConfig::default()
            .with_style(style)
            .with_twin_span(twin_span),
    );

    let plotted_ticks: Vec<TickTable> = axes[..config.cols.len()]
        .iter()
        .map(|a| a.ticks.clone())
        .collect();
    let layout = plan_layout(
        &config.cols,
        &plotted_ticks,
        &LayoutConfig::default()
            .with_extend(extend)
            .with_twin_span(twin_span)
            .with_colorbar(config.color_by == ColorBy::Rank)
            .with_title(config.title.clone())
            .with_axis_labels(config.axis_labels.clone()),
    )?;
    let legend = make_legend(&assignment.key, extend)?;

    Ok(RenderOutput {
        axes,
        value_matrix,
        colors: assignment.colors,
        color_key: assignment.key,
        legend,
        connectors,
        layout,
        line_style: LineStyle {
            alpha: config.alpha,
            width: config.line_width,
        },
    })
}

/// Axis columns must exist in the table; named color attributes must too
fn check_columns(table: &Table, config: &PlotConfig) -> Result<(), ParcoordsError> {
    for column in &config.cols {
        table.try_column(column)?;
    }
    let attribute = match config.color_by {
        ColorBy::Rank => config.rank_attr.as_ref().map(|c| ("rank_attr", c)),
        ColorBy::Category => config.color_attr.as_ref().map(|c| ("color_attr", c)),
    };
    if let Some((field, column)) = attribute {
        if !table.contains_column(column) {
            return Err(ParcoordsError::invalid_config(
                field,
                format!("column '{column}' not found in table"),
            ));
        }
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn normalize_axis<R: Rng + ?Sized>(
    table: &Table,
    column: &str,
    plotted: bool,
    is_rank: bool,
    config: &PlotConfig,
    validated: &ValidatedConfig,
    base_options: &TransformOptions,
    rng: &mut R,
) -> Result<(AxisOutput, Vec<f32>), ParcoordsError> {
    let values = table.try_column(column)?;
    let kind = classify_column(values, config.cardinality_threshold);
    let requested = validated.transform_for(column);
    let options = TransformOptions {
        allow_quantile: !is_rank,
        ..base_options.clone()
    };
    let order = config.category_orders.get(column).map(|o| o.as_slice());

    let normalized = normalize_column(values, kind, requested, &options, order, rng)?;
    debug!(
        "axis '{column}': {kind:?}, requested {requested}, applied {}",
        normalized.applied
    );

    Ok((
        AxisOutput {
            column: column.to_string(),
            kind,
            requested,
            applied: normalized.applied,
            ticks: normalized.ticks,
            plotted,
        },
        normalized.positions,
    ))
}

fn resolve_colors(
    table: &Table,
    config: &PlotConfig,
    validated: &ValidatedConfig,
    axes: &[AxisOutput],
    value_matrix: &[Vec<f32>],
) -> Result<ColorAssignment, ParcoordsError> {
    match (config.color_by, &config.rank_attr, &config.color_attr) {
        (ColorBy::Rank, Some(rank), _) => {
            let index = axes
                .iter()
                .position(|a| &a.column == rank)
                .ok_or_else(|| {
                    ParcoordsError::invalid_config(
                        "rank_attr",
                        format!("column '{rank}' was not normalized"),
                    )
                })?;
            Ok(resolve_rank_colors(
                rank,
                &value_matrix[index],
                &axes[index].ticks,
                validated.palette,
            ))
        }
        (ColorBy::Category, _, Some(attribute)) => {
            let values = table.try_column(attribute)?;
            let order = config.category_orders.get(attribute).map(|o| o.as_slice());
            Ok(resolve_category_colors(
                attribute,
                values,
                order,
                validated.color_map.as_ref(),
                validated.palette,
            ))
        }
        _ => Ok(resolve_uniform(table.num_rows())),
    }
}
