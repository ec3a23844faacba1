use serde::{Deserialize, Serialize};

/// sRGB color with alpha, each component in [0, 1]
pub type Rgba = [f32; 4];

/// Neutral color used when no other color applies (CSS `gray`)
pub const NEUTRAL_GRAY: Rgba = [128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0, 1.0];

pub fn rgba_to_hex(color: &Rgba) -> String {
    let [r, g, b, _] = color.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    format!("#{r:02x}{g:02x}{b:02x}")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Rgba,
}
