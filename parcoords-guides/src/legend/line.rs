use itertools::izip;
use parcoords_common::types::Rgba;
use serde::{Deserialize, Serialize};

use crate::error::ParcoordsGuidesError;

/// Line legends
#[derive(Debug, Clone, PartialEq)]
pub struct LineLegendConfig {
    pub title: Option<String>,
    pub text: Vec<String>,
    pub stroke: Vec<Rgba>,
    pub stroke_width: f32,

    /// Legend anchor relative to the figure, placed to the right of the plots
    pub anchor: [f32; 2],

    /// Fraction of the figure width left to the plots when the legend is shown
    pub plot_right: f32,
}

impl Default for LineLegendConfig {
    fn default() -> Self {
        Self {
            title: None,
            text: Vec::new(),
            stroke: Vec::new(),
            stroke_width: 2.0,
            anchor: [1.15, 0.5],
            plot_right: 0.85,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineLegendEntry {
    pub label: String,
    pub stroke: Rgba,
    pub stroke_width: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineLegend {
    pub title: Option<String>,
    pub entries: Vec<LineLegendEntry>,
    pub anchor: [f32; 2],
    pub plot_right: f32,
}

pub fn make_line_legend(config: &LineLegendConfig) -> Result<LineLegend, ParcoordsGuidesError> {
    if config.text.len() != config.stroke.len() {
        return Err(ParcoordsGuidesError::InvalidLegendLength {
            labels: config.text.len(),
            colors: config.stroke.len(),
        });
    }

    let entries = izip!(&config.text, &config.stroke)
        .map(|(label, stroke)| LineLegendEntry {
            label: label.clone(),
            stroke: *stroke,
            stroke_width: config.stroke_width,
        })
        .collect();

    Ok(LineLegend {
        title: config.title.clone(),
        entries,
        anchor: config.anchor,
        plot_right: config.plot_right,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatched_lengths() {
        let config = LineLegendConfig {
            text: vec!["a".to_string(), "b".to_string()],
            stroke: vec![[0.0, 0.0, 0.0, 1.0]],
            ..Default::default()
        };
        assert_eq!(
            make_line_legend(&config),
            Err(ParcoordsGuidesError::InvalidLegendLength {
                labels: 2,
                colors: 1
            })
        );
    }

    #[test]
    fn test_entries_use_config_width() -> Result<(), ParcoordsGuidesError> {
        let config = LineLegendConfig {
            text: vec!["a".to_string()],
            stroke: vec![[0.0, 0.0, 1.0, 1.0]],
            ..Default::default()
        };
        let legend = make_line_legend(&config)?;
        assert_eq!(legend.entries[0].stroke_width, 2.0);
        assert_eq!(legend.anchor, [1.15, 0.5]);
        Ok(())
    }
}
