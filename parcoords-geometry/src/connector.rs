use itertools::Itertools;
use lyon_path::math::point;
use lyon_path::Path;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::hermite::HermiteCurve;

pub const DEFAULT_CURVE_DENSITY: usize = 30;
pub const DEFAULT_TWIN_SPAN: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConnectorStyle {
    Straight,
    Curved { density: usize },
}

impl Default for ConnectorStyle {
    fn default() -> Self {
        ConnectorStyle::Curved {
            density: DEFAULT_CURVE_DENSITY,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectorConfig {
    pub style: ConnectorStyle,
    /// When set, the last connector is drawn over this shortened x-span
    /// on the secondary axis of the final sub-plot
    pub twin_span: Option<f32>,
}

impl ConnectorConfig {
    pub fn with_style(mut self, style: ConnectorStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_twin_span(mut self, twin_span: Option<f32>) -> Self {
        self.twin_span = twin_span;
        self
    }
}

/// Lines for every row between one pair of adjacent axes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectorSet {
    /// Index of the left axis; the right axis is `pair + 1`
    pub pair: usize,
    pub x_start: f32,
    pub x_end: f32,
    /// Drawn against the secondary y-axis of the merged last sub-plot
    pub secondary: bool,
    pub style: ConnectorStyle,
    /// One coordinate sequence per table row
    pub lines: Vec<Vec<[f32; 2]>>,
}

impl ConnectorSet {
    /// Vector path for one row's connector: a line segment, or one cubic
    /// Bezier for curved connectors
    pub fn to_path(&self, row: usize) -> Option<Path> {
        let line = self.lines.get(row)?;
        let (first, last) = (line.first()?, line.last()?);
        match self.style {
            ConnectorStyle::Curved { .. } => Some(HermiteCurve::new(*first, *last).to_path()),
            ConnectorStyle::Straight => {
                let mut builder = Path::builder();
                builder.begin(point(first[0], first[1]));
                builder.line_to(point(last[0], last[1]));
                builder.end(false);
                Some(builder.build())
            }
        }
    }

    pub fn to_paths(&self) -> Vec<Path> {
        (0..self.lines.len())
            .filter_map(|row| self.to_path(row))
            .collect()
    }
}

/// Build connectors between each adjacent pair of plotted axes.
///
/// `axes` holds the normalized positions of each plotted axis, all of equal
/// length. Axis `i` sits at `x = i`.
pub fn build_connectors(axes: &[&[f32]], config: &ConnectorConfig) -> Vec<ConnectorSet> {
    let pair_count = axes.len().saturating_sub(1);
    let twin_span = config.twin_span.filter(|_| axes.len() > 1);

    let sets = axes
        .iter()
        .tuple_windows()
        .enumerate()
        .map(|(pair, (left, right))| {
            let x_start = pair as f32;
            let secondary = twin_span.is_some() && pair + 1 == pair_count;
            let x_end = match twin_span {
                Some(span) if secondary => x_start + span,
                _ => x_start + 1.0,
            };
            let lines = left
                .iter()
                .zip(right.iter())
                .map(|(y0, y1)| connector_line([x_start, *y0], [x_end, *y1], config.style))
                .collect();
            ConnectorSet {
                pair,
                x_start,
                x_end,
                secondary,
                style: config.style,
                lines,
            }
        })
        .collect::<Vec<_>>();

    debug!(
        "built {} connector sets over {} rows",
        sets.len(),
        axes.first().map(|a| a.len()).unwrap_or(0)
    );
    sets
}

fn connector_line(start: [f32; 2], end: [f32; 2], style: ConnectorStyle) -> Vec<[f32; 2]> {
    match style {
        ConnectorStyle::Straight => vec![start, end],
        ConnectorStyle::Curved { density } => HermiteCurve::new(start, end).sample(density),
    }
}
