use parcoords_common::types::GradientStop;
use parcoords_scales::ticks::TickTable;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorbarConfig {
    /// Length of the overflow triangles or rectangles, as a fraction of the bar
    pub extend: f32,
    /// Draw overflow ends as rectangles rather than triangles
    pub extend_rect: bool,
    /// Gap between the plot area and the bar, as a fraction of the figure
    pub pad: f32,
}

impl Default for ColorbarConfig {
    fn default() -> Self {
        Self {
            extend: 0.05,
            extend_rect: true,
            pad: 0.01,
        }
    }
}

impl ColorbarConfig {
    pub fn with_extend(mut self, extend: f32) -> Self {
        self.extend = extend;
        self
    }
}

/// Vertical colorbar keyed to the ranking column, with overflow on both ends
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Colorbar {
    pub title: String,
    pub stops: Vec<GradientStop>,
    pub ticks: TickTable,
    pub extend_fraction: f32,
    pub extend_rect: bool,
    pub pad: f32,
}

pub fn make_colorbar(
    title: &str,
    stops: &[GradientStop],
    ticks: &TickTable,
    config: &ColorbarConfig,
) -> Colorbar {
    Colorbar {
        title: title.to_string(),
        stops: stops.to_vec(),
        ticks: ticks.clone(),
        extend_fraction: config.extend,
        extend_rect: config.extend_rect,
        pad: config.pad,
    }
}
