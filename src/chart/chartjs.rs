//! Chart.js wire shape
//!
//! Serializable mirror of the `{ type, data: { labels, datasets }, options }`
//! object the Chart.js constructor accepts.

use serde::Serialize;
use std::collections::BTreeMap;

use super::config::{ChartConfiguration, ColorAssignment, Geometry, Orientation};
use super::style::Rgba;

#[derive(Debug, Clone, Serialize)]
pub struct ChartJsConfig {
    #[serde(rename = "type")]
    pub chart_type: &'static str,
    pub data: ChartJsData,
    pub options: ChartJsOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChartJsData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartJsDataset>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartJsDataset {
    pub label: String,
    pub data: Vec<f64>,
    pub background_color: ColorValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Rgba>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tension: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
}

/// Either one color or one per data point
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ColorValue {
    Single(Rgba),
    Many(Vec<Rgba>),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartJsOptions {
    pub responsive: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_axis: Option<&'static str>,
    pub scales: BTreeMap<&'static str, AxisOptions>,
    pub plugins: PluginOptions,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisOptions {
    pub begin_at_zero: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PluginOptions {
    pub legend: LegendOptions,
}

#[derive(Debug, Clone, Serialize)]
pub struct LegendOptions {
    pub display: bool,
}

impl From<&ChartConfiguration> for ChartJsConfig {
    fn from(config: &ChartConfiguration) -> Self {
        let style = &config.style;

        let chart_type = match style.geometry {
            Geometry::Line => "line",
            Geometry::Bar => "bar",
        };

        let background_color = match &style.colors {
            ColorAssignment::PerSeries(color) => ColorValue::Single(*color),
            ColorAssignment::PerPoint(colors) => ColorValue::Many(colors.clone()),
        };

        let line = style.geometry == Geometry::Line;
        let dataset = ChartJsDataset {
            label: style.dataset_label.clone(),
            data: config.series().to_vec(),
            background_color,
            border_color: style.border_color,
            border_width: style.border_width,
            tension: line.then_some(style.tension),
            fill: line.then_some(style.fill),
        };

        let mut scales = BTreeMap::new();
        scales.insert(
            style.orientation.value_axis(),
            AxisOptions {
                begin_at_zero: style.begin_at_zero,
            },
        );

        Self {
            chart_type,
            data: ChartJsData {
                labels: config.labels().to_vec(),
                datasets: vec![dataset],
            },
            options: ChartJsOptions {
                responsive: style.responsive,
                index_axis: match style.orientation {
                    Orientation::Vertical => None,
                    Orientation::Horizontal => Some(style.orientation.category_axis()),
                },
                scales,
                plugins: PluginOptions {
                    legend: LegendOptions {
                        display: style.show_legend,
                    },
                },
            },
        }
    }
}

impl ChartConfiguration {
    /// Convert into the shape handed to Chart.js
    pub fn to_chart_js(&self) -> ChartJsConfig {
        ChartJsConfig::from(self)
    }
}
