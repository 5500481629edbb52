//! DOM adapters
//!
//! Implements the page-facing traits over `web_sys` handles.

use hospital_dashboard::{Control, DashboardError, DashboardResult, DataSource, Notifier, Page};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, Window};

use crate::describe;

/// The live document
pub struct DomPage {
    document: Document,
}

impl DomPage {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl Page for DomPage {
    type Control = DomControl;
    type Mount = Element;
    type Source = ScriptData;

    fn controls(&self, selector: &str) -> DashboardResult<Vec<DomControl>> {
        let nodes = self
            .document
            .query_selector_all(selector)
            .map_err(|e| DashboardError::Binding(describe(&e)))?;

        Ok((0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|element| DomControl { element })
            .collect())
    }

    fn mount_point(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn data_source(&self, id: &str) -> Option<ScriptData> {
        self.document
            .get_element_by_id(id)
            .map(|element| ScriptData { element })
    }
}

/// A clickable element
#[derive(Clone)]
pub struct DomControl {
    element: Element,
}

impl Control for DomControl {
    fn label(&self) -> String {
        self.element.text_content().unwrap_or_default()
    }

    fn on_activate(&self, mut handler: Box<dyn FnMut()>) -> DashboardResult<()> {
        let on_click = Closure::wrap(Box::new(move |_: Event| {
            handler();
        }) as Box<dyn FnMut(Event)>);

        self.element
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .map_err(|e| DashboardError::Binding(describe(&e)))?;
        on_click.forget();

        Ok(())
    }
}

/// Element whose text content is a JSON payload
pub struct ScriptData {
    element: Element,
}

impl DataSource for ScriptData {
    fn payload(&self) -> String {
        self.element.text_content().unwrap_or_default()
    }
}

/// Acknowledges through `window.alert`
pub struct AlertNotifier {
    window: Window,
}

impl AlertNotifier {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Notifier for AlertNotifier {
    fn notify(&self, message: &str) {
        if let Err(e) = self.window.alert_with_message(message) {
            tracing::warn!(error = %describe(&e), "alert() failed");
        }
    }
}
