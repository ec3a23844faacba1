use indexmap::IndexMap;
use parcoords_common::types::Rgba;
use parcoords_geometry::connector::{DEFAULT_CURVE_DENSITY, DEFAULT_TWIN_SPAN};
use parcoords_scales::classify::DEFAULT_CARDINALITY_THRESHOLD;
use parcoords_scales::color::coerce::parse_color_mapping;
use parcoords_scales::color::palettes::NamedPalette;
use parcoords_scales::error::ParcoordsScaleError;
use parcoords_scales::transform::{TransformMode, TransformOptions};
use serde::{Deserialize, Serialize};

use crate::error::ParcoordsError;

/// Largest allowed categorical jitter amplitude, in normalized axis units
pub const MAX_JITTER: f32 = 0.01;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorBy {
    /// Continuous palette driven by the ranking column
    #[default]
    Rank,
    /// One color per category of the color attribute
    Category,
}

/// Everything that controls one render.
///
/// Deserializes from JSON with every field optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    /// Axis columns, in plotting order
    pub cols: Vec<String>,
    pub color_by: ColorBy,
    pub rank_attr: Option<String>,
    pub color_attr: Option<String>,
    /// Explicit category label to CSS color mapping for category coloring
    pub color_map: Option<IndexMap<String, String>>,
    pub palette: String,
    /// Default transform for every column, `None` meaning no transform
    pub transform: Option<String>,
    /// Per-column transforms, taking precedence over `transform`
    pub transform_map: IndexMap<String, Option<String>>,
    /// Explicit category order per column, bottom to top
    pub category_orders: IndexMap<String, Vec<String>>,
    pub winsor_limits: (f32, f32),
    pub log_threshold: f32,
    pub quantiles: usize,
    pub cardinality_threshold: usize,
    /// Jitter categorical positions for readability
    pub spread: bool,
    pub jitter: f32,
    /// RNG seed making jitter reproducible
    pub seed: Option<u64>,
    pub curved: bool,
    /// Y padding beyond [0, 1] when curved
    pub curve_extend: f32,
    pub curve_density: usize,
    pub alpha: f32,
    pub line_width: f32,
    /// Merge the last two axes into one sub-plot with a secondary y-axis
    pub twin_axis: bool,
    pub twin_span: f32,
    pub title: Option<String>,
    pub axis_labels: Option<Vec<String>>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            cols: Vec::new(),
            color_by: ColorBy::Rank,
            rank_attr: None,
            color_attr: None,
            color_map: None,
            palette: NamedPalette::default().to_string(),
            transform: None,
            transform_map: IndexMap::new(),
            category_orders: IndexMap::new(),
            winsor_limits: (0.01, 0.01),
            log_threshold: 100.0,
            quantiles: 10,
            cardinality_threshold: DEFAULT_CARDINALITY_THRESHOLD,
            spread: false,
            jitter: MAX_JITTER,
            seed: None,
            curved: true,
            curve_extend: 0.05,
            curve_density: DEFAULT_CURVE_DENSITY,
            alpha: 0.5,
            line_width: 0.1,
            twin_axis: false,
            twin_span: DEFAULT_TWIN_SPAN,
            title: None,
            axis_labels: None,
        }
    }
}

impl PlotConfig {
    pub fn new<S: Into<String>>(cols: impl IntoIterator<Item = S>) -> Self {
        Self {
            cols: cols.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ParcoordsError> {
        serde_json::from_str(json).map_err(|e| ParcoordsError::invalid_config("config", e))
    }

    pub fn with_rank(mut self, rank_attr: impl Into<String>) -> Self {
        self.color_by = ColorBy::Rank;
        self.rank_attr = Some(rank_attr.into());
        self
    }

    pub fn with_category(mut self, color_attr: impl Into<String>) -> Self {
        self.color_by = ColorBy::Category;
        self.color_attr = Some(color_attr.into());
        self
    }

    pub fn with_color_map<K: Into<String>, V: Into<String>>(
        mut self,
        color_map: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        self.color_map = Some(
            color_map
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    pub fn with_palette(mut self, palette: impl Into<String>) -> Self {
        self.palette = palette.into();
        self
    }

    pub fn with_transform(mut self, transform: impl Into<String>) -> Self {
        self.transform = Some(transform.into());
        self
    }

    pub fn with_column_transform(
        mut self,
        column: impl Into<String>,
        transform: Option<&str>,
    ) -> Self {
        self.transform_map
            .insert(column.into(), transform.map(String::from));
        self
    }

    pub fn with_category_order<S: Into<String>>(
        mut self,
        column: impl Into<String>,
        order: impl IntoIterator<Item = S>,
    ) -> Self {
        self.category_orders
            .insert(column.into(), order.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_winsor_limits(mut self, lower: f32, upper: f32) -> Self {
        self.winsor_limits = (lower, upper);
        self
    }

    pub fn with_log_threshold(mut self, log_threshold: f32) -> Self {
        self.log_threshold = log_threshold;
        self
    }

    pub fn with_quantiles(mut self, quantiles: usize) -> Self {
        self.quantiles = quantiles;
        self
    }

    pub fn with_cardinality_threshold(mut self, threshold: usize) -> Self {
        self.cardinality_threshold = threshold;
        self
    }

    pub fn with_spread(mut self, spread: bool) -> Self {
        self.spread = spread;
        self
    }

    pub fn with_jitter(mut self, jitter: f32) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_curved(mut self, curved: bool) -> Self {
        self.curved = curved;
        self
    }

    pub fn with_curve_extend(mut self, curve_extend: f32) -> Self {
        self.curve_extend = curve_extend;
        self
    }

    pub fn with_curve_density(mut self, curve_density: usize) -> Self {
        self.curve_density = curve_density;
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_twin_axis(mut self, twin_axis: bool) -> Self {
        self.twin_axis = twin_axis;
        self
    }

    pub fn with_twin_span(mut self, twin_span: f32) -> Self {
        self.twin_span = twin_span;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_axis_labels<S: Into<String>>(
        mut self,
        labels: impl IntoIterator<Item = S>,
    ) -> Self {
        self.axis_labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Check numeric parameters and parse every string-valued setting
    pub fn validate(&self) -> Result<ValidatedConfig, ParcoordsError> {
        if self.cols.is_empty() {
            return Err(ParcoordsError::invalid_config(
                "cols",
                "at least one axis column is required",
            ));
        }
        let (lower, upper) = self.winsor_limits;
        if !(0.0..0.5).contains(&lower) || !(0.0..0.5).contains(&upper) {
            return Err(ParcoordsError::invalid_config(
                "winsor_limits",
                format!("fractions must lie in [0, 0.5), got ({lower}, {upper})"),
            ));
        }
        if self.log_threshold.is_nan() || self.log_threshold <= 0.0 {
            return Err(ParcoordsError::invalid_config(
                "log_threshold",
                format!("must be positive, got {}", self.log_threshold),
            ));
        }
        if self.quantiles < 1 {
            return Err(ParcoordsError::invalid_config("quantiles", "must be at least 1"));
        }
        if self.cardinality_threshold < 1 {
            return Err(ParcoordsError::invalid_config(
                "cardinality_threshold",
                "must be at least 1",
            ));
        }
        if self.curve_extend.is_nan() || self.curve_extend < 0.0 {
            return Err(ParcoordsError::invalid_config(
                "curve_extend",
                format!("must not be negative, got {}", self.curve_extend),
            ));
        }
        if self.curve_density < 2 {
            return Err(ParcoordsError::invalid_config(
                "curve_density",
                format!("must be at least 2, got {}", self.curve_density),
            ));
        }
        if self.twin_span.is_nan() || self.twin_span <= 0.0 || self.twin_span > 1.0 {
            return Err(ParcoordsError::invalid_config(
                "twin_span",
                format!("must lie in (0, 1], got {}", self.twin_span),
            ));
        }
        if !(0.0..=MAX_JITTER).contains(&self.jitter) {
            return Err(ParcoordsError::invalid_config(
                "jitter",
                format!("must lie in [0, {MAX_JITTER}], got {}", self.jitter),
            ));
        }
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(ParcoordsError::invalid_config(
                "alpha",
                format!("must lie in [0, 1], got {}", self.alpha),
            ));
        }
        if self.color_by == ColorBy::Category && self.color_attr.is_none() {
            return Err(ParcoordsError::invalid_config(
                "color_attr",
                "category coloring requires a color attribute",
            ));
        }

        let default_transform = parse_transform(self.transform.as_deref())
            .map_err(|e| ParcoordsError::invalid_config("transform", e))?;
        let transforms = self
            .transform_map
            .iter()
            .map(|(column, mode)| {
                parse_transform(mode.as_deref())
                    .map(|mode| (column.clone(), mode))
                    .map_err(|e| {
                        ParcoordsError::invalid_config(format!("transform_map[{column}]"), e)
                    })
            })
            .collect::<Result<IndexMap<_, _>, _>>()?;

        let palette = NamedPalette::parse(&self.palette)
            .map_err(|e| ParcoordsError::invalid_config("palette", e))?;

        let color_map = self
            .color_map
            .as_ref()
            .map(|mapping| {
                parse_color_mapping(mapping).map_err(|e| match &e {
                    ParcoordsScaleError::InvalidCategoryColor { label, .. } => {
                        ParcoordsError::invalid_config(format!("color_map[{label}]"), &e)
                    }
                    _ => ParcoordsError::invalid_config("color_map", &e),
                })
            })
            .transpose()?;

        Ok(ValidatedConfig {
            default_transform,
            transforms,
            palette,
            color_map,
        })
    }

    /// Transform options shared by every column
    pub(crate) fn transform_options(&self) -> TransformOptions {
        TransformOptions {
            winsor_limits: self.winsor_limits,
            log_threshold: self.log_threshold,
            quantiles: self.quantiles,
            jitter: self.spread.then_some(self.jitter),
            ..Default::default()
        }
    }

    /// Y padding beyond [0, 1], wider when curves are drawn
    pub fn extend(&self) -> f32 {
        if self.curved {
            self.curve_extend
        } else {
            parcoords_guides::layout::STRAIGHT_EXTEND
        }
    }
}

fn parse_transform(mode: Option<&str>) -> Result<TransformMode, ParcoordsScaleError> {
    match mode {
        None => Ok(TransformMode::None),
        Some(mode) => TransformMode::parse(mode),
    }
}

/// Parsed forms of the string-valued settings of a [`PlotConfig`]
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedConfig {
    pub default_transform: TransformMode,
    pub transforms: IndexMap<String, TransformMode>,
    pub palette: NamedPalette,
    pub color_map: Option<IndexMap<String, Rgba>>,
}

impl ValidatedConfig {
    /// Per-column transform with fallback to the default
    pub fn transform_for(&self, column: &str) -> TransformMode {
        self.transforms
            .get(column)
            .copied()
            .unwrap_or(self.default_transform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn field_of(result: Result<ValidatedConfig, ParcoordsError>) -> Option<String> {
        match result {
            Err(ParcoordsError::InvalidConfiguration { field, .. }) => Some(field),
            _ => None,
        }
    }

    #[test]
    fn test_defaults() {
        let config = PlotConfig::default();
        assert_eq!(config.palette, "spectral");
        assert_eq!(config.winsor_limits, (0.01, 0.01));
        assert_eq!(config.curve_density, 30);
        assert_eq!(config.twin_span, 0.3);
        assert!(config.curved);
        assert_eq!(config.extend(), 0.05);
        assert_eq!(config.clone().with_curved(false).extend(), 0.05);
        assert_eq!(config.with_curve_extend(0.2).extend(), 0.2);
    }

    #[rstest]
    #[case(PlotConfig::default(), "cols")]
    #[case(PlotConfig::new(["a"]).with_winsor_limits(0.5, 0.01), "winsor_limits")]
    #[case(PlotConfig::new(["a"]).with_log_threshold(0.0), "log_threshold")]
    #[case(PlotConfig::new(["a"]).with_quantiles(0), "quantiles")]
    #[case(PlotConfig::new(["a"]).with_cardinality_threshold(0), "cardinality_threshold")]
    #[case(PlotConfig::new(["a"]).with_curve_extend(-0.1), "curve_extend")]
    #[case(PlotConfig::new(["a"]).with_curve_density(1), "curve_density")]
    #[case(PlotConfig::new(["a"]).with_twin_span(0.0), "twin_span")]
    #[case(PlotConfig::new(["a"]).with_jitter(0.02), "jitter")]
    #[case(PlotConfig::new(["a"]).with_alpha(1.5), "alpha")]
    #[case(PlotConfig::new(["a"]).with_transform("sqrt"), "transform")]
    #[case(PlotConfig::new(["a"]).with_column_transform("a", Some("cube")), "transform_map[a]")]
    #[case(PlotConfig::new(["a"]).with_palette("jet"), "palette")]
    #[case(
        PlotConfig::new(["a"]).with_category("g").with_color_map([("x", "nope")]),
        "color_map[x]"
    )]
    fn test_invalid_fields(#[case] config: PlotConfig, #[case] field: &str) {
        assert_eq!(field_of(config.validate()), Some(field.to_string()));
    }

    #[test]
    fn test_bad_category_color_names_label_and_color() {
        let config = PlotConfig::new(["a"])
            .with_category("g")
            .with_color_map([("fin", "#66B2FF"), ("tech", "not-a-color")]);
        match config.validate() {
            Err(ParcoordsError::InvalidConfiguration { field, reason }) => {
                assert_eq!(field, "color_map[tech]");
                assert!(reason.contains("not-a-color"));
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_category_requires_attribute() {
        let mut config = PlotConfig::new(["a"]);
        config.color_by = ColorBy::Category;
        assert_eq!(field_of(config.validate()), Some("color_attr".to_string()));
    }

    #[test]
    fn test_transform_lookup() -> Result<(), ParcoordsError> {
        let validated = PlotConfig::new(["a", "b", "c"])
            .with_transform("robust")
            .with_column_transform("a", Some("LOG"))
            .with_column_transform("b", None)
            .validate()?;
        assert_eq!(validated.transform_for("a"), TransformMode::Log);
        assert_eq!(validated.transform_for("b"), TransformMode::None);
        assert_eq!(validated.transform_for("c"), TransformMode::Robust);
        Ok(())
    }

    #[test]
    fn test_from_json() -> Result<(), ParcoordsError> {
        let config = PlotConfig::from_json(
            r##"{
                "cols": ["revenue", "size"],
                "color_by": "category",
                "color_attr": "industry",
                "color_map": {"fin": "#66B2FF"},
                "transform_map": {"revenue": "log", "size": null},
                "twin_axis": true
            }"##,
        )?;
        assert_eq!(config.cols, vec!["revenue", "size"]);
        assert_eq!(config.color_by, ColorBy::Category);
        assert!(config.twin_axis);
        assert_eq!(config.quantiles, 10);

        let validated = config.validate()?;
        assert_eq!(validated.transform_for("revenue"), TransformMode::Log);
        assert_eq!(validated.transform_for("size"), TransformMode::None);
        assert!(validated.color_map.is_some());
        Ok(())
    }

    #[test]
    fn test_malformed_json() {
        let result = PlotConfig::from_json("{\"cols\": 3}");
        assert!(matches!(
            result,
            Err(ParcoordsError::InvalidConfiguration { ref field, .. }) if field == "config"
        ));
    }
}
