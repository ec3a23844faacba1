use parcoords_scales::ticks::TickTable;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisOrientation {
    /// Y-axis on the left edge of a sub-plot
    Left,
    /// Secondary y-axis on the right edge of the merged last sub-plot
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TickDirection {
    In,
    Out,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisConfig {
    pub orientation: AxisOrientation,
    pub tick_direction: TickDirection,
    /// Padding between tick marks and labels, negative to draw labels inside the plot
    pub label_padding: f32,
}

impl AxisConfig {
    pub fn primary() -> Self {
        Self {
            orientation: AxisOrientation::Left,
            tick_direction: TickDirection::Out,
            label_padding: 4.0,
        }
    }

    /// Right-hand axis with inward ticks and labels pulled inside the plot
    pub fn secondary() -> Self {
        Self {
            orientation: AxisOrientation::Right,
            tick_direction: TickDirection::In,
            label_padding: -8.0,
        }
    }
}

/// A y-axis of one sub-plot: its column, display config and ticks
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YAxisGuide {
    pub column: String,
    pub config: AxisConfig,
    pub ticks: TickTable,
}
