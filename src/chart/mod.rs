//! Chart Binding
//!
//! Maps an extracted [`Series`](crate::series::Series) plus a presentation
//! intent onto a chart configuration, and hands it to a rendering surface.
//!
//! - **Trend**: filled, smoothed line; y axis starts at zero.
//! - **Comparison**: horizontal bars, one palette color per bar; x axis
//!   starts at zero.
//!
//! Neither intent shows a legend.

mod binder;
mod chartjs;
mod config;
mod style;

pub use binder::{AbsentReason, ChartBinder, ChartSlot, DataSource, RenderSurface, SlotState};
pub use chartjs::{
    AxisOptions, ChartJsConfig, ChartJsData, ChartJsDataset, ChartJsOptions, ColorValue,
    LegendOptions, PluginOptions,
};
pub use config::{
    ChartConfiguration, ChartIntent, ChartStyle, ColorAssignment, Geometry, Orientation,
};
pub use style::{ChartStyles, ComparisonStyle, Palette, ParseColorError, Rgba, TrendStyle};
