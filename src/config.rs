//! Configuration System
//!
//! Dashboard configuration is a TOML document. Every field has a default
//! that reproduces the stock administration page, so an empty document is a
//! valid configuration.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::chart::{ChartIntent, ChartSlot, ChartStyles};
use crate::notifier::DEFAULT_TEMPLATE;
use crate::series::FieldSelector;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub notifier: NotifierConfig,

    #[serde(default = "default_slots")]
    pub slots: Vec<SlotConfig>,

    #[serde(default)]
    pub styles: ChartStyles,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Click acknowledgment configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotifierConfig {
    /// CSS selector matching clickable controls
    #[serde(default = "default_selector")]
    pub selector: String,

    /// Message template; `{label}` is replaced by the control's text
    #[serde(default = "default_template")]
    pub template: String,
}

fn default_selector() -> String {
    "button".to_string()
}

fn default_template() -> String {
    DEFAULT_TEMPLATE.to_string()
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            selector: default_selector(),
            template: default_template(),
        }
    }
}

/// One chart slot on the page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotConfig {
    pub name: String,

    /// Id of the element the chart is mounted into
    pub mount_id: String,

    /// Id of the element holding the JSON payload
    pub data_id: String,

    pub intent: ChartIntent,

    pub label_field: String,

    pub value_field: String,
}

impl SlotConfig {
    /// Slot description used by the binder
    pub fn chart_slot(&self) -> ChartSlot {
        ChartSlot::new(
            self.name.clone(),
            self.intent,
            FieldSelector::new(self.label_field.clone(), self.value_field.clone()),
        )
    }
}

fn default_slots() -> Vec<SlotConfig> {
    let revenue = FieldSelector::revenue();
    let performance = FieldSelector::performance();

    vec![
        SlotConfig {
            name: "ingresos".to_string(),
            mount_id: "ingresosChart".to_string(),
            data_id: "datos-ingresos-json".to_string(),
            intent: ChartIntent::Trend,
            label_field: revenue.label,
            value_field: revenue.value,
        },
        SlotConfig {
            name: "desempeno".to_string(),
            mount_id: "desempenoChart".to_string(),
            data_id: "datos-desempeno-json".to_string(),
            intent: ChartIntent::Comparison,
            label_field: performance.label,
            value_field: performance.value,
        },
    ]
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// trace, debug, info, warn or error
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    /// Parsed level; `validate` rejects names that do not parse
    pub fn level(&self) -> tracing::Level {
        self.level.parse().unwrap_or(tracing::Level::INFO)
    }
}

impl DashboardConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: DashboardConfig = toml::from_str(content).map_err(|e| ConfigError::Parse {
            error: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Check invariants serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.notifier.selector.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "notifier.selector must not be empty".to_string(),
            ));
        }

        if self.logging.level.parse::<tracing::Level>().is_err() {
            return Err(ConfigError::Invalid(format!(
                "unknown logging.level '{}'",
                self.logging.level
            )));
        }

        let mut names = HashSet::new();
        for slot in &self.slots {
            if !names.insert(slot.name.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate slot name '{}'",
                    slot.name
                )));
            }

            let required = [
                ("mount_id", &slot.mount_id),
                ("data_id", &slot.data_id),
                ("label_field", &slot.label_field),
                ("value_field", &slot.value_field),
            ];
            for (key, value) in required {
                if value.trim().is_empty() {
                    return Err(ConfigError::Invalid(format!(
                        "slot '{}': {} must not be empty",
                        slot.name, key
                    )));
                }
            }
        }

        Ok(())
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            notifier: NotifierConfig::default(),
            slots: default_slots(),
            styles: ChartStyles::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {error}")]
    Parse { error: String },

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Hospital Dashboard Configuration
#
# Embed in the page as:
#   <script id="dashboard-config" type="application/toml">...</script>

[notifier]
# CSS selector of the controls that acknowledge clicks
selector = "button"

# Acknowledgment text; {label} is replaced by the control's text
template = 'Has hecho clic en "{label}"'

# Chart slots; a slot whose mount or data element is missing is skipped
[[slots]]
name = "ingresos"
mount_id = "ingresosChart"
data_id = "datos-ingresos-json"
intent = "trend"
label_field = "mes"
value_field = "monto"

[[slots]]
name = "desempeno"
mount_id = "desempenoChart"
data_id = "datos-desempeno-json"
intent = "comparison"
label_field = "doctor"
value_field = "citas_atendidas"

[styles.trend]
dataset_label = "Ingresos (USD)"
border_color = "rgba(54, 162, 235, 1)"
fill_color = "rgba(54, 162, 235, 0.2)"
tension = 0.3

[styles.comparison]
dataset_label = "Citas Atendidas"
# Colors are assigned per bar, cycling when there are more bars than colors
palette = [
    "rgba(255, 99, 132, 0.7)",
    "rgba(75, 192, 192, 0.7)",
    "rgba(255, 206, 86, 0.7)",
]
border_width = 1

[logging]
# Log level: trace, debug, info, warn, error
level = "info"
"#
    .to_string()
}
