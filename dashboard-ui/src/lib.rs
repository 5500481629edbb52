//! Hospital Dashboard browser shell
//!
//! Adapts the live document to the `hospital-dashboard` traits:
//!
//! - [`DomPage`]: controls, canvases and embedded JSON by element id
//! - [`AlertNotifier`]: `window.alert` acknowledgments
//! - [`ChartJsSurface`]: the global Chart.js constructor
//!
//! # Page contract
//!
//! ```html
//! <script src="chart.js"></script>
//! <canvas id="ingresosChart"></canvas>
//! <script id="datos-ingresos-json" type="application/json">[...]</script>
//! <script type="module">import init from "./hospital_dashboard_ui.js"; init();</script>
//! ```
//!
//! An optional `<script id="dashboard-config" type="application/toml">`
//! overrides the defaults.

use std::rc::Rc;

use hospital_dashboard::{Dashboard, DashboardConfig, DashboardError, DashboardResult, InitReport};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, DocumentReadyState};

mod dom;
mod logging;
mod surface;

pub use dom::{AlertNotifier, DomControl, DomPage, ScriptData};
pub use surface::ChartJsSurface;

/// Id of the optional embedded TOML configuration
pub const CONFIG_ELEMENT_ID: &str = "dashboard-config";

/// Module entry point: run [`start`] once the document is ready
#[wasm_bindgen(start)]
pub fn boot() -> Result<(), JsValue> {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;

    if document.ready_state() != DocumentReadyState::Loading {
        return start(&document).map(|_| ());
    }

    let target = document.clone();
    let on_ready = Closure::wrap(
        Box::new(move || start(&target).map(|_| ())) as Box<dyn FnMut() -> Result<(), JsValue>>
    );
    document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref())?;
    on_ready.forget();

    Ok(())
}

/// Bind the dashboard to `document`
///
/// Errors are returned as JS `Error` objects so they surface through the
/// host's unhandled-error reporting.
pub fn start(document: &Document) -> Result<InitReport, JsValue> {
    let config = load_config(document).map_err(to_js_error)?;
    logging::init(&config.logging);

    let window = document
        .default_view()
        .ok_or_else(|| JsValue::from_str("Document has no window"))?;

    let page = DomPage::new(document.clone());
    let mut surface = ChartJsSurface::default();
    let notifier = Rc::new(AlertNotifier::new(window));

    Dashboard::new(config)
        .initialize(&page, &mut surface, notifier)
        .map_err(to_js_error)
}

/// Read the embedded configuration, or the defaults if there is none
pub fn load_config(document: &Document) -> DashboardResult<DashboardConfig> {
    match document.get_element_by_id(CONFIG_ELEMENT_ID) {
        Some(element) => {
            let text = element.text_content().unwrap_or_default();
            Ok(DashboardConfig::from_toml_str(&text)?)
        }
        None => Ok(DashboardConfig::default()),
    }
}

fn to_js_error(err: DashboardError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

/// Best-effort message of a thrown JS value
pub(crate) fn describe(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
