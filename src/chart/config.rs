//! Chart configuration
//!
//! A [`ChartConfiguration`] is the fully resolved description of one chart:
//! what kind it is, its aligned labels and values, and how it should look.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::style::{ChartStyles, Rgba};
use crate::series::Series;

/// Presentation intent of a chart slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartIntent {
    /// Continuous line over time-ordered data
    Trend,
    /// Discrete bars across categories
    Comparison,
}

impl fmt::Display for ChartIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartIntent::Trend => write!(f, "trend"),
            ChartIntent::Comparison => write!(f, "comparison"),
        }
    }
}

impl FromStr for ChartIntent {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trend" => Ok(ChartIntent::Trend),
            "comparison" => Ok(ChartIntent::Comparison),
            other => Err(format!("Unknown chart intent: {}", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    Line,
    Bar,
}

/// Direction the category axis runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Categories along x, magnitudes along y
    Vertical,
    /// Categories along y, magnitudes along x
    Horizontal,
}

impl Orientation {
    /// Axis id carrying the categories
    pub fn category_axis(self) -> &'static str {
        match self {
            Orientation::Vertical => "x",
            Orientation::Horizontal => "y",
        }
    }

    /// Axis id carrying the magnitudes
    pub fn value_axis(self) -> &'static str {
        match self {
            Orientation::Vertical => "y",
            Orientation::Horizontal => "x",
        }
    }
}

/// How colors are spread over the data points
#[derive(Debug, Clone, PartialEq)]
pub enum ColorAssignment {
    /// One color for the whole series
    PerSeries(Rgba),
    /// One color per point, same length as the series
    PerPoint(Vec<Rgba>),
}

/// Resolved presentation parameters
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub geometry: Geometry,
    pub orientation: Orientation,
    pub dataset_label: String,
    pub colors: ColorAssignment,
    pub border_color: Option<Rgba>,
    pub border_width: Option<u32>,
    pub fill: bool,
    pub tension: f64,
    pub begin_at_zero: bool,
    pub show_legend: bool,
    pub responsive: bool,
}

impl ChartStyle {
    /// Line with a filled area, smoothed, y axis from zero, no legend
    pub fn trend(styles: &ChartStyles) -> Self {
        let trend = &styles.trend;
        Self {
            geometry: Geometry::Line,
            orientation: Orientation::Vertical,
            dataset_label: trend.dataset_label.clone(),
            colors: ColorAssignment::PerSeries(trend.fill_color),
            border_color: Some(trend.border_color),
            border_width: None,
            fill: true,
            tension: trend.tension,
            begin_at_zero: true,
            show_legend: false,
            responsive: true,
        }
    }

    /// Horizontal bars, one palette color each, x axis from zero, no legend
    pub fn comparison(styles: &ChartStyles, points: usize) -> Self {
        let comparison = &styles.comparison;
        Self {
            geometry: Geometry::Bar,
            orientation: Orientation::Horizontal,
            dataset_label: comparison.dataset_label.clone(),
            colors: ColorAssignment::PerPoint(comparison.palette.assign(points)),
            border_color: None,
            border_width: Some(comparison.border_width),
            fill: false,
            tension: 0.0,
            begin_at_zero: true,
            show_legend: false,
            responsive: true,
        }
    }
}

/// Everything the rendering surface needs for one chart
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfiguration {
    pub kind: ChartIntent,
    labels: Vec<String>,
    series: Vec<f64>,
    pub style: ChartStyle,
}

impl ChartConfiguration {
    /// Build the configuration for `series` under the given intent
    pub fn build(kind: ChartIntent, series: Series, styles: &ChartStyles) -> Self {
        let style = match kind {
            ChartIntent::Trend => ChartStyle::trend(styles),
            ChartIntent::Comparison => ChartStyle::comparison(styles, series.len()),
        };
        let (labels, series) = series.into_parts();

        Self {
            kind,
            labels,
            series,
            style,
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn series(&self) -> &[f64] {
        &self.series
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::{extract_series, FieldSelector};

    fn series(pairs: &[(&str, f64)]) -> Series {
        pairs.iter().map(|(l, v)| (l.to_string(), *v)).collect()
    }

    #[test]
    fn test_intent_parse_and_display() {
        assert_eq!("trend".parse::<ChartIntent>().unwrap(), ChartIntent::Trend);
        assert_eq!("Comparison".parse::<ChartIntent>().unwrap(), ChartIntent::Comparison);
        assert!("pie".parse::<ChartIntent>().is_err());
        assert_eq!(ChartIntent::Comparison.to_string(), "comparison");
    }

    #[test]
    fn test_trend_configuration() {
        let payload = r#"[{"mes":"Jan","monto":1000},{"mes":"Feb","monto":1500}]"#;
        let series = extract_series(payload, &FieldSelector::revenue()).unwrap();
        let config = ChartConfiguration::build(ChartIntent::Trend, series, &ChartStyles::default());

        assert_eq!(config.kind, ChartIntent::Trend);
        assert_eq!(config.labels(), ["Jan", "Feb"]);
        assert_eq!(config.series(), [1000.0, 1500.0]);

        let style = &config.style;
        assert_eq!(style.geometry, Geometry::Line);
        assert!(style.fill);
        assert!(style.tension > 0.0);
        assert!(style.begin_at_zero);
        assert!(!style.show_legend);
        assert_eq!(style.orientation.value_axis(), "y");
        assert!(matches!(style.colors, ColorAssignment::PerSeries(_)));
    }

    #[test]
    fn test_comparison_configuration() {
        let config = ChartConfiguration::build(
            ChartIntent::Comparison,
            series(&[("A", 5.0), ("B", 3.0)]),
            &ChartStyles::default(),
        );

        assert_eq!(config.labels(), ["A", "B"]);
        assert_eq!(config.series(), [5.0, 3.0]);

        let style = &config.style;
        assert_eq!(style.geometry, Geometry::Bar);
        assert_eq!(style.orientation, Orientation::Horizontal);
        assert_eq!(style.orientation.category_axis(), "y");
        assert_eq!(style.orientation.value_axis(), "x");
        assert!(style.begin_at_zero);
        assert!(!style.show_legend);

        match &style.colors {
            ColorAssignment::PerPoint(colors) => {
                assert_eq!(colors.len(), 2);
                assert_ne!(colors[0], colors[1]);
            }
            other => panic!("Expected PerPoint colors, got {:?}", other),
        }
    }

    #[test]
    fn test_comparison_colors_cycle_past_palette() {
        let config = ChartConfiguration::build(
            ChartIntent::Comparison,
            series(&[("A", 1.0), ("B", 2.0), ("C", 3.0), ("D", 4.0)]),
            &ChartStyles::default(),
        );

        match &config.style.colors {
            ColorAssignment::PerPoint(colors) => {
                assert_eq!(colors.len(), config.len());
                assert_eq!(colors[3], colors[0]);
            }
            other => panic!("Expected PerPoint colors, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_series_builds_empty_configuration() {
        let config =
            ChartConfiguration::build(ChartIntent::Comparison, Series::new(), &ChartStyles::default());
        assert!(config.is_empty());
        assert_eq!(config.style.colors, ColorAssignment::PerPoint(Vec::new()));
    }
}
