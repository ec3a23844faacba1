pub mod classify;
pub mod color;
pub mod error;
pub mod formatter;
pub mod numeric;
pub mod ordinal;
pub mod quantile;
pub mod ticks;
pub mod transform;
