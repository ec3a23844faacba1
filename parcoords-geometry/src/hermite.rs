//! Two-point cubic with zero slope at both ends.
//!
//! A cubic spline through exactly two points with clamped (zero) end
//! derivatives is the Hermite cubic
//!
//! ```text
//! y(t) = y0 + (y1 - y0) * (3t^2 - 2t^3),   t = (x - x0) / (x1 - x0)
//! ```
//!
//! which is also the cubic Bezier with control points one third of the span
//! in from each end, level with the endpoint they belong to.

use lyon_path::math::point;
use lyon_path::Path;
use serde::{Deserialize, Serialize};

/// Smoothstep weight `3t^2 - 2t^3`
pub fn hermite_weight(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HermiteCurve {
    pub start: [f32; 2],
    pub end: [f32; 2],
}

impl HermiteCurve {
    pub fn new(start: [f32; 2], end: [f32; 2]) -> Self {
        Self { start, end }
    }

    fn span(&self) -> f32 {
        self.end[0] - self.start[0]
    }

    /// Point at curve parameter `t` in [0, 1]. Both ends are reproduced exactly.
    pub fn point_at(&self, t: f32) -> [f32; 2] {
        let [x0, y0] = self.start;
        let [x1, y1] = self.end;
        let x = x0 * (1.0 - t) + x1 * t;
        if y0 == y1 {
            return [x, y0];
        }
        let s = hermite_weight(t);
        [x, y0 * (1.0 - s) + y1 * s]
    }

    /// dy/dx at curve parameter `t`
    pub fn slope_at(&self, t: f32) -> f32 {
        let span = self.span();
        if span == 0.0 {
            return 0.0;
        }
        (self.end[1] - self.start[1]) * 6.0 * t * (1.0 - t) / span
    }

    /// `density` points evenly spaced in x, endpoints included
    pub fn sample(&self, density: usize) -> Vec<[f32; 2]> {
        let density = density.max(2);
        let last = (density - 1) as f32;
        (0..density)
            .map(|j| self.point_at(j as f32 / last))
            .collect()
    }

    /// Single cubic Bezier segment tracing the same curve
    pub fn to_path(&self) -> Path {
        let [x0, y0] = self.start;
        let [x1, y1] = self.end;
        let third = self.span() / 3.0;

        let mut builder = Path::builder();
        builder.begin(point(x0, y0));
        builder.cubic_bezier_to(point(x0 + third, y0), point(x1 - third, y1), point(x1, y1));
        builder.end(false);
        builder.build()
    }
}
