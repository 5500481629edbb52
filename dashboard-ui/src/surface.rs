//! Chart.js rendering surface
//!
//! Calls the global `Chart` constructor loaded by the page.

use hospital_dashboard::{ChartConfiguration, DashboardError, DashboardResult, RenderSurface};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Element, HtmlCanvasElement};

use crate::describe;

#[wasm_bindgen]
extern "C" {
    /// A Chart.js chart instance
    #[wasm_bindgen(js_name = Chart)]
    pub type ChartJs;

    #[wasm_bindgen(constructor, js_class = "Chart", catch)]
    fn new(context: &CanvasRenderingContext2d, config: &JsValue) -> Result<ChartJs, JsValue>;
}

/// Renders into canvases through Chart.js
///
/// Keeps the created instances alive for the lifetime of the surface.
#[derive(Default)]
pub struct ChartJsSurface {
    charts: Vec<ChartJs>,
}

impl RenderSurface for ChartJsSurface {
    type Mount = Element;

    fn render(&mut self, mount: Element, config: &ChartConfiguration) -> DashboardResult<()> {
        let canvas = mount.dyn_into::<HtmlCanvasElement>().map_err(|element| {
            DashboardError::Render(format!("#{} is not a canvas", element.id()))
        })?;

        let context = canvas
            .get_context("2d")
            .map_err(|e| DashboardError::Render(describe(&e)))?
            .ok_or_else(|| DashboardError::Render("2d context unavailable".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| DashboardError::Render("unexpected context type".to_string()))?;

        let json = serde_json::to_string(&config.to_chart_js())
            .map_err(|e| DashboardError::Render(e.to_string()))?;
        let options =
            js_sys::JSON::parse(&json).map_err(|e| DashboardError::Render(describe(&e)))?;

        let chart =
            ChartJs::new(&context, &options).map_err(|e| DashboardError::Render(describe(&e)))?;
        self.charts.push(chart);

        Ok(())
    }
}
