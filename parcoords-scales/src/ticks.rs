use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub label: String,
    /// Normalized position in [0, 1]
    pub position: f32,
    /// Data-space value for ticks on continuous axes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f32>,
}

/// Ordered (label, position) pairs used to render an axis or colorbar
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TickTable {
    ticks: Vec<Tick>,
}

impl TickTable {
    pub fn new(ticks: Vec<Tick>) -> Self {
        Self { ticks }
    }

    /// Evenly spaced labeled ticks from 0 to 1, or a single tick at 0.5
    pub fn evenly_spaced(labels: impl IntoIterator<Item = String>) -> Self {
        let labels = labels.into_iter().collect::<Vec<_>>();
        let positions = evenly_spaced_positions(labels.len());
        Self {
            ticks: labels
                .into_iter()
                .zip(positions)
                .map(|(label, position)| Tick {
                    label,
                    position,
                    value: None,
                })
                .collect(),
        }
    }

    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    pub fn positions(&self) -> Vec<f32> {
        self.ticks.iter().map(|t| t.position).collect()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.ticks.iter().map(|t| t.label.as_str()).collect()
    }
}

/// Positions `i / (n - 1)` for `i` in `0..n`, or `[0.5]` when `n == 1`
pub fn evenly_spaced_positions(n: usize) -> Vec<f32> {
    match n {
        0 => vec![],
        1 => vec![0.5],
        _ => {
            let denom = (n - 1) as f32;
            (0..n).map(|i| i as f32 / denom).collect()
        }
    }
}
