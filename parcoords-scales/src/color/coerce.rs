use css_color_parser::Color;
use indexmap::IndexMap;
use parcoords_common::types::Rgba;

use crate::error::ParcoordsScaleError;

/// Parse a CSS color string (`#rrggbb`, `#rgb`, named colors, `rgb()`/`rgba()`)
pub fn parse_css_color(value: &str) -> Result<Rgba, ParcoordsScaleError> {
    let color = value
        .trim()
        .parse::<Color>()
        .map_err(|_| ParcoordsScaleError::InvalidColor(value.to_string()))?;
    Ok([
        color.r as f32 / 255.0,
        color.g as f32 / 255.0,
        color.b as f32 / 255.0,
        color.a,
    ])
}

/// Parse every color of a label to color mapping, keeping the mapping's order.
///
/// A bad color is reported together with the category label it belongs to.
pub fn parse_color_mapping(
    mapping: &IndexMap<String, String>,
) -> Result<IndexMap<String, Rgba>, ParcoordsScaleError> {
    mapping
        .iter()
        .map(|(label, color)| {
            parse_css_color(color)
                .map(|rgba| (label.clone(), rgba))
                .map_err(|_| ParcoordsScaleError::InvalidCategoryColor {
                    label: label.clone(),
                    color: color.clone(),
                })
        })
        .collect()
}

/// Parse a hex literal such as `0x1f77b4` into an opaque color
pub(crate) fn rgb_hex(value: u32) -> Rgba {
    [
        ((value >> 16) & 0xff) as f32 / 255.0,
        ((value >> 8) & 0xff) as f32 / 255.0,
        (value & 0xff) as f32 / 255.0,
        1.0,
    ]
}
