use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParcoordsGuidesError {
    #[error("A layout requires at least one axis")]
    NoAxes,

    #[error("Expected one tick table per axis ({axes} axes), found {tick_tables}")]
    TickTableCount { axes: usize, tick_tables: usize },

    #[error("Invalid mix of legend encoding lengths: {labels} labels, {colors} colors")]
    InvalidLegendLength { labels: usize, colors: usize },
}
