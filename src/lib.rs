//! # Hospital Dashboard
//!
//! Client-side binding logic for the hospital administration dashboard:
//! click acknowledgments on every control, and two charts built from data
//! the server embeds in the page.
//!
//! ## Modules
//!
//! - [`series`]: Extracts aligned labels/values from embedded JSON
//! - [`chart`]: Builds chart configurations and binds them to a surface
//! - [`notifier`]: Click acknowledgment for interactive controls
//! - [`page`]: One-shot page initialization over a [`Page`] handle
//! - [`config`]: TOML configuration with defaults for the stock page
//!
//! The library never touches a browser directly. A hosting shell implements
//! [`Page`], [`RenderSurface`] and [`Notifier`] and calls
//! [`Dashboard::initialize`] once the document is ready.
//!
//! ## Quick Start
//!
//! ```rust
//! use hospital_dashboard::*;
//!
//! let series = extract_series(
//!     r#"[{"doctor":"A","citas_atendidas":5},{"doctor":"B","citas_atendidas":3}]"#,
//!     &FieldSelector::performance(),
//! )?;
//! let config = ChartConfiguration::build(
//!     ChartIntent::Comparison,
//!     series,
//!     &ChartStyles::default(),
//! );
//!
//! let chart_js = serde_json::to_value(config.to_chart_js())?;
//! assert_eq!(chart_js["type"], "bar");
//! assert_eq!(chart_js["options"]["indexAxis"], "y");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod chart;
pub mod config;
pub mod error;
pub mod notifier;
pub mod page;
pub mod series;

// Re-export top-level types for convenience
pub use chart::{
    AbsentReason, ChartBinder, ChartConfiguration, ChartIntent, ChartJsConfig, ChartSlot,
    ChartStyles, DataSource, Palette, RenderSurface, Rgba, SlotState,
};

pub use config::{
    generate_default_config, ConfigError, DashboardConfig, LoggingConfig, NotifierConfig,
    SlotConfig,
};

pub use error::{DashboardError, DashboardResult};

pub use notifier::{acknowledgment, attach_notifier, Control, Notifier, DEFAULT_TEMPLATE};

pub use page::{Dashboard, InitReport, Page};

pub use series::{
    extract_records, extract_series, ChartRecord, FieldSelector, PerformancePoint, RevenuePoint,
    Series,
};
