//! Chart styling
//!
//! Colors, palettes and the per-intent style parameters.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A CSS `rgba(r, g, b, a)` color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Error parsing a color string
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Invalid color '{0}': expected rgba(r, g, b, a)")]
pub struct ParseColorError(String);

impl FromStr for Rgba {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseColorError(s.to_string());

        let inner = s
            .trim()
            .strip_prefix("rgba(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(invalid)?;

        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(invalid());
        }

        let channel = |p: &str| p.parse::<u8>().map_err(|_| invalid());
        let alpha = parts[3].parse::<f32>().map_err(|_| invalid())?;
        if !(0.0..=1.0).contains(&alpha) {
            return Err(invalid());
        }

        Ok(Rgba::new(
            channel(parts[0])?,
            channel(parts[1])?,
            channel(parts[2])?,
            alpha,
        ))
    }
}

impl Serialize for Rgba {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Fixed, repeating list of colors
///
/// Never empty; deserializing an empty list fails.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Palette(Vec<Rgba>);

impl Palette {
    /// Build a palette; `None` if `colors` is empty
    pub fn new(colors: Vec<Rgba>) -> Option<Self> {
        if colors.is_empty() {
            None
        } else {
            Some(Self(colors))
        }
    }

    /// Color for position `index`, cycling when past the end
    pub fn color_at(&self, index: usize) -> Rgba {
        self.0[index % self.0.len()]
    }

    /// One color per position for `count` positions, in order
    pub fn assign(&self, count: usize) -> Vec<Rgba> {
        (0..count).map(|i| self.color_at(i)).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn colors(&self) -> &[Rgba] {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Palette {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let colors = Vec::<Rgba>::deserialize(deserializer)?;
        Palette::new(colors).ok_or_else(|| serde::de::Error::custom("palette must not be empty"))
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self(vec![
            Rgba::new(255, 99, 132, 0.7),
            Rgba::new(75, 192, 192, 0.7),
            Rgba::new(255, 206, 86, 0.7),
        ])
    }
}

/// Style of the revenue trend line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendStyle {
    #[serde(default = "default_trend_label")]
    pub dataset_label: String,

    #[serde(default = "default_trend_border")]
    pub border_color: Rgba,

    #[serde(default = "default_trend_fill")]
    pub fill_color: Rgba,

    /// Bezier smoothing; 0 draws straight segments
    #[serde(default = "default_tension")]
    pub tension: f64,
}

fn default_trend_label() -> String {
    "Ingresos (USD)".to_string()
}

fn default_trend_border() -> Rgba {
    Rgba::new(54, 162, 235, 1.0)
}

fn default_trend_fill() -> Rgba {
    Rgba::new(54, 162, 235, 0.2)
}

fn default_tension() -> f64 {
    0.3
}

impl Default for TrendStyle {
    fn default() -> Self {
        Self {
            dataset_label: default_trend_label(),
            border_color: default_trend_border(),
            fill_color: default_trend_fill(),
            tension: default_tension(),
        }
    }
}

/// Style of the provider comparison bars
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonStyle {
    #[serde(default = "default_comparison_label")]
    pub dataset_label: String,

    #[serde(default)]
    pub palette: Palette,

    #[serde(default = "default_border_width")]
    pub border_width: u32,
}

fn default_comparison_label() -> String {
    "Citas Atendidas".to_string()
}

fn default_border_width() -> u32 {
    1
}

impl Default for ComparisonStyle {
    fn default() -> Self {
        Self {
            dataset_label: default_comparison_label(),
            palette: Palette::default(),
            border_width: default_border_width(),
        }
    }
}

/// Styles for every chart intent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartStyles {
    #[serde(default)]
    pub trend: TrendStyle,

    #[serde(default)]
    pub comparison: ComparisonStyle,
}
