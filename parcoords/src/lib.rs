pub mod config;
pub mod error;
pub mod render;

pub use config::{ColorBy, PlotConfig};
pub use error::ParcoordsError;
pub use render::{render, render_with_rng, RenderOutput};

pub use parcoords_common as common;
pub use parcoords_geometry as geometry;
pub use parcoords_guides as guides;
pub use parcoords_scales as scales;
