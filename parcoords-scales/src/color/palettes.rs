use parcoords_common::types::{GradientStop, Rgba};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumString, VariantNames};

use super::coerce::rgb_hex;
use super::interpolate::{ColorInterpolator, SrgbaColorInterpolator};
use crate::error::ParcoordsScaleError;
use crate::ticks::evenly_spaced_positions;

// ColorBrewer Spectral, 11 classes
const SPECTRAL: &[u32] = &[
    0x9e0142, 0xd53e4f, 0xf46d43, 0xfdae61, 0xfee08b, 0xffffbf, 0xe6f598, 0xabdda4, 0x66c2a5,
    0x3288bd, 0x5e4fa2,
];

const VIRIDIS: &[u32] = &[0x440154, 0x3b528b, 0x21918c, 0x5ec962, 0xfde725];

// ColorBrewer RdYlBu, 11 classes
const RDYLBU: &[u32] = &[
    0xa50026, 0xd73027, 0xf46d43, 0xfdae61, 0xfee090, 0xffffbf, 0xe0f3f8, 0xabd9e9, 0x74add1,
    0x4575b4, 0x313695,
];

const CATEGORY10: &[u32] = &[
    0x1f77b4, // Blue
    0xff7f0e, // Orange
    0x2ca02c, // Green
    0xd62728, // Red
    0x9467bd, // Purple
    0x8c564b, // Brown
    0xe377c2, // Pink
    0x7f7f7f, // Gray
    0xbcbd22, // Olive
    0x17becf, // Cyan
];

const GREYS: &[u32] = &[
    0xffffff, 0xf0f0f0, 0xd9d9d9, 0xbdbdbd, 0x969696, 0x737373, 0x525252, 0x252525, 0x000000,
];

/// Named color palettes usable for rank gradients and category colors
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    Display,
    VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum NamedPalette {
    #[default]
    Spectral,
    Viridis,
    Rdylbu,
    Category10,
    Greys,
}

impl NamedPalette {
    pub fn parse(name: &str) -> Result<Self, ParcoordsScaleError> {
        NamedPalette::from_str(name.trim()).map_err(|_| ParcoordsScaleError::UnknownPalette {
            name: name.to_string(),
            expected: NamedPalette::VARIANTS.join(", "),
        })
    }

    pub fn anchors(&self) -> Vec<Rgba> {
        let hex = match self {
            NamedPalette::Spectral => SPECTRAL,
            NamedPalette::Viridis => VIRIDIS,
            NamedPalette::Rdylbu => RDYLBU,
            NamedPalette::Category10 => CATEGORY10,
            NamedPalette::Greys => GREYS,
        };
        hex.iter().map(|v| rgb_hex(*v)).collect()
    }

    /// Qualitative palettes are sampled by nearest listed color rather than by interpolation
    pub fn is_qualitative(&self) -> bool {
        matches!(self, NamedPalette::Category10)
    }

    pub fn sample(&self, t: f32) -> Rgba {
        self.sample_many(&[t])[0]
    }

    /// Colors for positions in [0, 1]. Positions outside are clamped.
    pub fn sample_many(&self, values: &[f32]) -> Vec<Rgba> {
        let anchors = self.anchors();
        if self.is_qualitative() {
            let n = anchors.len();
            values
                .iter()
                .map(|v| {
                    let v = if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 };
                    anchors[((v * n as f32) as usize).min(n - 1)]
                })
                .collect()
        } else {
            SrgbaColorInterpolator.interpolate(&anchors, values)
        }
    }

    /// One color per category, sampled at `i / (k - 1)`, or at 0.5 for a single category
    pub fn categorical_colors(&self, k: usize) -> Vec<Rgba> {
        self.sample_many(&evenly_spaced_positions(k))
    }

    /// Evenly spaced gradient stops from 0 to 1
    pub fn gradient_stops(&self, count: usize) -> Vec<GradientStop> {
        let offsets = evenly_spaced_positions(count.max(2));
        let colors = self.sample_many(&offsets);
        offsets
            .into_iter()
            .zip(colors)
            .map(|(offset, color)| GradientStop { offset, color })
            .collect()
    }
}
