pub mod colorbar;
pub mod line;

use parcoords_scales::color::resolver::ColorKey;
use serde::{Deserialize, Serialize};

use crate::error::ParcoordsGuidesError;
use colorbar::{make_colorbar, Colorbar, ColorbarConfig};
use line::{make_line_legend, LineLegend, LineLegendConfig};

/// Legend or colorbar explaining the line colors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Legend {
    Colorbar(Colorbar),
    Lines(LineLegend),
}

/// Build the guide for a color key, `None` when every line shares one color.
///
/// `extend` is the y-axis padding, reused as the colorbar overflow fraction.
pub fn make_legend(key: &ColorKey, extend: f32) -> Result<Option<Legend>, ParcoordsGuidesError> {
    match key {
        ColorKey::None => Ok(None),
        ColorKey::Gradient {
            column,
            stops,
            ticks,
        } => {
            let config = ColorbarConfig::default().with_extend(extend);
            Ok(Some(Legend::Colorbar(make_colorbar(
                column, stops, ticks, &config,
            ))))
        }
        ColorKey::Categories { entries, .. } => {
            let config = LineLegendConfig {
                text: entries.iter().map(|e| e.label.clone()).collect(),
                stroke: entries.iter().map(|e| e.color).collect(),
                ..Default::default()
            };
            Ok(Some(Legend::Lines(make_line_legend(&config)?)))
        }
    }
}
