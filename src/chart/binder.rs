//! Chart Binder
//!
//! Decides per slot whether a chart is rendered, builds its configuration and
//! hands it to the rendering surface exactly once.

use serde::{Deserialize, Serialize};

use super::config::{ChartConfiguration, ChartIntent};
use super::style::ChartStyles;
use crate::error::DashboardResult;
use crate::series::{extract_series, FieldSelector};

/// Embedded structured-data payload backing one chart
pub trait DataSource {
    /// Raw text content of the payload element
    fn payload(&self) -> String;
}

/// External charting capability
///
/// `render` takes the mount point by value: a mount is consumed by the one
/// chart rendered into it.
pub trait RenderSurface {
    type Mount;

    fn render(&mut self, mount: Self::Mount, config: &ChartConfiguration) -> DashboardResult<()>;
}

/// Why a slot was not rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsentReason {
    MissingMount,
    MissingData,
}

/// Terminal state of a chart slot
#[derive(Debug, Clone, PartialEq)]
pub enum SlotState {
    Absent(AbsentReason),
    Rendered(ChartConfiguration),
}

impl SlotState {
    pub fn is_rendered(&self) -> bool {
        matches!(self, SlotState::Rendered(_))
    }
}

/// What a slot renders and how its records are read
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlot {
    pub name: String,
    pub intent: ChartIntent,
    pub fields: FieldSelector,
}

impl ChartSlot {
    pub fn new(name: impl Into<String>, intent: ChartIntent, fields: FieldSelector) -> Self {
        Self {
            name: name.into(),
            intent,
            fields,
        }
    }
}

/// Binds extracted series to a rendering surface
pub struct ChartBinder<'a> {
    styles: &'a ChartStyles,
}

impl<'a> ChartBinder<'a> {
    pub fn new(styles: &'a ChartStyles) -> Self {
        Self { styles }
    }

    /// Render `slot` if both its mount point and data source are present
    ///
    /// Extraction failures return before the surface is touched.
    pub fn bind<S, D>(
        &self,
        slot: &ChartSlot,
        mount: Option<S::Mount>,
        source: Option<D>,
        surface: &mut S,
    ) -> DashboardResult<SlotState>
    where
        S: RenderSurface,
        D: DataSource,
    {
        match (mount, source) {
            (None, _) => {
                tracing::debug!(slot = %slot.name, "Mount point absent, skipping chart");
                Ok(SlotState::Absent(AbsentReason::MissingMount))
            }
            (Some(_), None) => {
                tracing::debug!(slot = %slot.name, "Data source absent, skipping chart");
                Ok(SlotState::Absent(AbsentReason::MissingData))
            }
            (Some(mount), Some(source)) => {
                let series = extract_series(&source.payload(), &slot.fields)?;
                let config = ChartConfiguration::build(slot.intent, series, self.styles);

                surface.render(mount, &config)?;

                tracing::info!(
                    slot = %slot.name,
                    intent = %slot.intent,
                    points = config.len(),
                    "Chart rendered"
                );
                Ok(SlotState::Rendered(config))
            }
        }
    }
}
