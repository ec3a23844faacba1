use parcoords_scales::ticks::TickTable;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::axis::opts::{AxisConfig, YAxisGuide};
use crate::error::ParcoordsGuidesError;

/// Figure width per sub-plot, in inches
pub const SUBPLOT_WIDTH: f32 = 3.0;
/// Extra figure width reserved for a colorbar, in inches
pub const COLORBAR_WIDTH: f32 = 1.5;
pub const FIGURE_HEIGHT: f32 = 5.0;
/// Y padding beyond [0, 1] for straight connectors
pub const STRAIGHT_EXTEND: f32 = 0.05;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Padding added below 0 and above 1 on every y-axis
    pub extend: f32,
    /// When set, the last two axes share the final sub-plot, which spans
    /// this much of the x-axis
    pub twin_span: Option<f32>,
    /// Reserve room for a colorbar, even when no ranking column ends up drawing one
    pub colorbar: bool,
    pub title: Option<String>,
    /// Display labels overriding column names by position
    pub axis_labels: Option<Vec<String>>,
}

impl LayoutConfig {
    pub fn with_extend(mut self, extend: f32) -> Self {
        self.extend = extend;
        self
    }

    pub fn with_twin_span(mut self, twin_span: Option<f32>) -> Self {
        self.twin_span = twin_span;
        self
    }

    pub fn with_colorbar(mut self, colorbar: bool) -> Self {
        self.colorbar = colorbar;
        self
    }

    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    pub fn with_axis_labels(mut self, axis_labels: Option<Vec<String>>) -> Self {
        self.axis_labels = axis_labels;
        self
    }

    fn axis_label(&self, index: usize, column: &str) -> String {
        self.axis_labels
            .as_ref()
            .and_then(|labels| labels.get(index))
            .cloned()
            .unwrap_or_else(|| column.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subplot {
    pub index: usize,
    pub x_range: (f32, f32),
    pub y_range: (f32, f32),
    /// Positions of the axis name labels along x
    pub x_ticks: Vec<f32>,
    pub x_labels: Vec<String>,
    pub primary: YAxisGuide,
    pub secondary: Option<YAxisGuide>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutPlan {
    pub subplots: Vec<Subplot>,
    /// Suggested figure width and height, in inches
    pub figure_size: [f32; 2],
    /// Horizontal spacing between sub-plots
    pub spacing: f32,
    pub title: Option<String>,
}

impl LayoutPlan {
    pub fn subplot_count(&self) -> usize {
        self.subplots.len()
    }

    /// Whether the last sub-plot carries a secondary axis
    pub fn is_twin(&self) -> bool {
        self.subplots
            .last()
            .map(|s| s.secondary.is_some())
            .unwrap_or(false)
    }
}

/// Plan sub-plots for the plotted axes.
///
/// Sub-plot `i` covers `x` in `[i, i + 1]` so neighbors touch. With a twin
/// span and at least two axes, the last two axes merge into one sub-plot
/// covering `[i, i + span]` with the last axis on the secondary y-axis.
pub fn plan_layout(
    columns: &[String],
    ticks: &[TickTable],
    config: &LayoutConfig,
) -> Result<LayoutPlan, ParcoordsGuidesError> {
    if columns.is_empty() {
        return Err(ParcoordsGuidesError::NoAxes);
    }
    if columns.len() != ticks.len() {
        return Err(ParcoordsGuidesError::TickTableCount {
            axes: columns.len(),
            tick_tables: ticks.len(),
        });
    }

    let twin_span = config.twin_span.filter(|_| columns.len() > 1);
    let n_subplots = if twin_span.is_some() {
        columns.len() - 1
    } else {
        columns.len()
    };
    let y_range = (-config.extend, 1.0 + config.extend);

    let subplots = (0..n_subplots)
        .map(|i| {
            let x0 = i as f32;
            let primary = YAxisGuide {
                column: columns[i].clone(),
                config: AxisConfig::primary(),
                ticks: ticks[i].clone(),
            };
            let label = config.axis_label(i, &columns[i]);

            match twin_span {
                Some(span) if i + 1 == n_subplots => {
                    let last = columns.len() - 1;
                    Subplot {
                        index: i,
                        x_range: (x0, x0 + span),
                        y_range,
                        x_ticks: vec![x0, x0 + span],
                        x_labels: vec![label, last_axis_label(config, columns)],
                        primary,
                        secondary: Some(YAxisGuide {
                            column: columns[last].clone(),
                            config: AxisConfig::secondary(),
                            ticks: ticks[last].clone(),
                        }),
                    }
                }
                _ => Subplot {
                    index: i,
                    x_range: (x0, x0 + 1.0),
                    y_range,
                    x_ticks: vec![x0],
                    x_labels: vec![label],
                    primary,
                    secondary: None,
                },
            }
        })
        .collect::<Vec<_>>();

    let mut width = SUBPLOT_WIDTH * n_subplots as f32;
    if config.colorbar {
        width += COLORBAR_WIDTH;
    }

    debug!("layout with {n_subplots} sub-plots, twin axis {}", twin_span.is_some());
    Ok(LayoutPlan {
        subplots,
        figure_size: [width, FIGURE_HEIGHT],
        spacing: 0.0,
        title: config.title.clone(),
    })
}

/// The secondary axis label is only overridden when labels cover every axis
fn last_axis_label(config: &LayoutConfig, columns: &[String]) -> String {
    let last = columns.len() - 1;
    match &config.axis_labels {
        Some(labels) if labels.len() >= columns.len() => labels[last].clone(),
        _ => columns[last].clone(),
    }
}
