pub mod linear;

/// A continuous numeric mapping from a domain interval to a range interval
pub trait ContinuousNumericScale {
    fn domain(&self) -> (f32, f32);

    /// Whether the domain collapses to a single value
    fn is_degenerate(&self) -> bool {
        let (start, end) = self.domain();
        start == end || !start.is_finite() || !end.is_finite()
    }

    fn scale(&self, values: &[f32]) -> Vec<f32>;

    /// Domain values evenly spaced over `count` intervals, endpoints included
    fn ticks(&self, count: usize) -> Vec<f32>;
}
