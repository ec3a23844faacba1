pub mod coerce;
pub mod interpolate;
pub mod palettes;
pub mod resolver;
