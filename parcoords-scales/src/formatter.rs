use std::fmt::Debug;

pub trait NumberFormatter: Debug + Send + Sync + 'static {
    fn format(&self, values: &[f32]) -> Vec<String>;
}

/// Rounds to a fixed number of decimals and drops trailing zeros
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultFormatter {
    pub decimals: usize,
}

impl Default for DefaultFormatter {
    fn default() -> Self {
        Self { decimals: 2 }
    }
}

impl DefaultFormatter {
    pub fn format_value(&self, value: f32) -> String {
        if !value.is_finite() {
            return value.to_string();
        }
        let factor = 10f64.powi(self.decimals as i32);
        let rounded = (value as f64 * factor).round() / factor;
        let mut text = format!("{:.*}", self.decimals, rounded);
        if text.contains('.') {
            let trimmed = text.trim_end_matches('0').trim_end_matches('.').len();
            text.truncate(trimmed);
        }
        if text == "-0" {
            text = "0".to_string();
        }
        text
    }
}

impl NumberFormatter for DefaultFormatter {
    fn format(&self, values: &[f32]) -> Vec<String> {
        values.iter().map(|v| self.format_value(*v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_decimals() {
        let formatter = DefaultFormatter::default();
        assert_eq!(
            formatter.format(&[0.0, 1.0, 12.345_6, 9.9, -0.001, 1234.5]),
            vec!["0", "1", "12.35", "9.9", "0", "1234.5"]
        );
    }

    #[test]
    fn test_zero_decimals() {
        let formatter = DefaultFormatter { decimals: 0 };
        assert_eq!(formatter.format(&[2.6, 10.0]), vec!["3", "10"]);
    }
}
