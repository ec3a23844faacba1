use palette::{IntoColor, Mix, Srgba};
use parcoords_common::types::Rgba;
use std::fmt::Debug;

pub trait ColorInterpolator: Debug + Send + Sync + 'static {
    /// Interpolate over evenly spaced colors based on normalized values
    fn interpolate(&self, colors: &[Rgba], values: &[f32]) -> Vec<Rgba>;
}

#[derive(Clone, Debug, Default)]
pub struct SrgbaColorInterpolator;

impl ColorInterpolator for SrgbaColorInterpolator {
    fn interpolate(&self, colors: &[Rgba], values: &[f32]) -> Vec<Rgba> {
        let srgba_colors: Vec<Srgba> = colors.iter().map(to_srgba).collect();
        interpolate_color(&srgba_colors, values)
    }
}

/// A trait for color spaces that can be mixed by an interpolator
pub trait ColorSpace:
    Mix<Scalar = f32> + Copy + IntoColor<Srgba> + Debug + Send + Sync + 'static
{
}

impl<T: Mix<Scalar = f32> + Copy + IntoColor<Srgba> + Debug + Send + Sync + 'static> ColorSpace
    for T
{
}

fn to_srgba(c: &Rgba) -> Srgba {
    Srgba::from_components((c[0], c[1], c[2], c[3]))
}

/// Generic helper function to interpolate colors using palette's `Mix` trait.
///
/// Values are clamped to [0, 1]. Non-finite values take the first color.
fn interpolate_color<C: ColorSpace>(colors: &[C], values: &[f32]) -> Vec<Rgba> {
    if colors.is_empty() {
        return Vec::new();
    }
    let scale_factor = (colors.len() - 1) as f32;
    values
        .iter()
        .map(|v| {
            let v = if v.is_finite() { *v } else { 0.0 };
            let continuous_index = (v * scale_factor).clamp(0.0, scale_factor);
            let lower_index = continuous_index.floor() as usize;
            let upper_index = continuous_index.ceil() as usize;

            let srgba_color: Srgba = if lower_index == upper_index {
                colors[lower_index].into_color()
            } else {
                let t = continuous_index - lower_index as f32;
                colors[lower_index].mix(colors[upper_index], t).into_color()
            };
            let (r, g, b, a) = srgba_color.into_components();
            [r, g, b, a]
        })
        .collect()
}
