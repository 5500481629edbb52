//! Page initialization
//!
//! [`Dashboard::initialize`] is the single entry point a hosting shell calls
//! once the page is ready. It binds the click notifier, then each configured
//! chart slot, in order and on the calling thread.

use std::rc::Rc;

use crate::chart::{ChartBinder, DataSource, RenderSurface, SlotState};
use crate::config::DashboardConfig;
use crate::error::DashboardResult;
use crate::notifier::{attach_notifier, Control, Notifier};

/// Handle to the hosting document
pub trait Page {
    type Control: Control + Clone + 'static;
    type Mount;
    type Source: DataSource;

    /// Controls matching `selector`, in document order
    fn controls(&self, selector: &str) -> DashboardResult<Vec<Self::Control>>;

    fn mount_point(&self, id: &str) -> Option<Self::Mount>;

    fn data_source(&self, id: &str) -> Option<Self::Source>;
}

/// Outcome of one page initialization
#[derive(Debug, Clone, PartialEq)]
pub struct InitReport {
    pub controls_bound: usize,
    /// Terminal state per configured slot, in configuration order
    pub slots: Vec<(String, SlotState)>,
}

impl InitReport {
    /// State of the slot called `name`
    pub fn slot(&self, name: &str) -> Option<&SlotState> {
        self.slots
            .iter()
            .find(|(slot, _)| slot == name)
            .map(|(_, state)| state)
    }

    pub fn rendered_count(&self) -> usize {
        self.slots.iter().filter(|(_, s)| s.is_rendered()).count()
    }
}

/// Dashboard behavior for one page
pub struct Dashboard {
    config: DashboardConfig,
}

impl Dashboard {
    pub fn new(config: DashboardConfig) -> Self {
        Self { config }
    }

    /// Bind the notifier and every chart slot on `page`
    ///
    /// The first malformed payload or rendering failure aborts the pass;
    /// slots after it are left untouched.
    pub fn initialize<P, S, N>(
        &self,
        page: &P,
        surface: &mut S,
        notifier: Rc<N>,
    ) -> DashboardResult<InitReport>
    where
        P: Page,
        S: RenderSurface<Mount = P::Mount>,
        N: Notifier + ?Sized + 'static,
    {
        let controls = page.controls(&self.config.notifier.selector)?;
        let controls_bound = attach_notifier(controls, notifier, &self.config.notifier.template)?;

        let binder = ChartBinder::new(&self.config.styles);
        let mut slots = Vec::with_capacity(self.config.slots.len());

        for slot in &self.config.slots {
            let state = binder.bind(
                &slot.chart_slot(),
                page.mount_point(&slot.mount_id),
                page.data_source(&slot.data_id),
                surface,
            )?;
            slots.push((slot.name.clone(), state));
        }

        let report = InitReport {
            controls_bound,
            slots,
        };

        tracing::info!(
            controls = report.controls_bound,
            charts = report.rendered_count(),
            "Dashboard initialized"
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{AbsentReason, ChartConfiguration, Geometry, Orientation};
    use crate::error::DashboardError;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Clone)]
    struct FakeButton {
        text: String,
        handlers: Rc<RefCell<Vec<Box<dyn FnMut()>>>>,
    }

    impl FakeButton {
        fn click(&self) {
            for handler in self.handlers.borrow_mut().iter_mut() {
                handler();
            }
        }
    }

    impl Control for FakeButton {
        fn label(&self) -> String {
            self.text.clone()
        }

        fn on_activate(&self, handler: Box<dyn FnMut()>) -> DashboardResult<()> {
            self.handlers.borrow_mut().push(handler);
            Ok(())
        }
    }

    struct Payload(String);

    impl DataSource for Payload {
        fn payload(&self) -> String {
            self.0.clone()
        }
    }

    #[derive(Default)]
    struct FakePage {
        buttons: Vec<FakeButton>,
        mounts: Vec<&'static str>,
        data: HashMap<&'static str, &'static str>,
    }

    impl FakePage {
        fn button(mut self, text: &str) -> Self {
            self.buttons.push(FakeButton {
                text: text.to_string(),
                handlers: Rc::new(RefCell::new(Vec::new())),
            });
            self
        }

        fn mount(mut self, id: &'static str) -> Self {
            self.mounts.push(id);
            self
        }

        fn data(mut self, id: &'static str, payload: &'static str) -> Self {
            self.data.insert(id, payload);
            self
        }
    }

    impl Page for FakePage {
        type Control = FakeButton;
        type Mount = String;
        type Source = Payload;

        fn controls(&self, selector: &str) -> DashboardResult<Vec<FakeButton>> {
            assert_eq!(selector, "button");
            Ok(self.buttons.clone())
        }

        fn mount_point(&self, id: &str) -> Option<String> {
            self.mounts.iter().find(|m| **m == id).map(|m| m.to_string())
        }

        fn data_source(&self, id: &str) -> Option<Payload> {
            self.data.get(id).map(|p| Payload(p.to_string()))
        }
    }

    #[derive(Default)]
    struct RecordingSurface {
        calls: Vec<(String, ChartConfiguration)>,
    }

    impl RenderSurface for RecordingSurface {
        type Mount = String;

        fn render(&mut self, mount: String, config: &ChartConfiguration) -> DashboardResult<()> {
            self.calls.push((mount, config.clone()));
            Ok(())
        }
    }

    #[derive(Default)]
    struct Alerts(RefCell<Vec<String>>);

    impl Notifier for Alerts {
        fn notify(&self, message: &str) {
            self.0.borrow_mut().push(message.to_string());
        }
    }

    const REVENUE: &str = r#"[{"mes":"Jan","monto":1000},{"mes":"Feb","monto":1500}]"#;
    const PERFORMANCE: &str =
        r#"[{"doctor":"A","citas_atendidas":5},{"doctor":"B","citas_atendidas":3}]"#;

    fn full_page() -> FakePage {
        FakePage::default()
            .button("Exportar")
            .mount("ingresosChart")
            .data("datos-ingresos-json", REVENUE)
            .mount("desempenoChart")
            .data("datos-desempeno-json", PERFORMANCE)
    }

    #[test]
    fn test_full_page_renders_both_charts() {
        let page = full_page();
        let mut surface = RecordingSurface::default();
        let alerts = Rc::new(Alerts::default());

        let report = Dashboard::new(DashboardConfig::default())
            .initialize(&page, &mut surface, Rc::clone(&alerts))
            .unwrap();

        assert_eq!(report.controls_bound, 1);
        assert_eq!(report.rendered_count(), 2);
        assert_eq!(surface.calls.len(), 2);

        let (mount, trend) = &surface.calls[0];
        assert_eq!(mount, "ingresosChart");
        assert_eq!(trend.labels(), ["Jan", "Feb"]);
        assert_eq!(trend.series(), [1000.0, 1500.0]);
        assert_eq!(trend.style.geometry, Geometry::Line);

        let (mount, bars) = &surface.calls[1];
        assert_eq!(mount, "desempenoChart");
        assert_eq!(bars.labels(), ["A", "B"]);
        assert_eq!(bars.series(), [5.0, 3.0]);
        assert_eq!(bars.style.orientation, Orientation::Horizontal);

        page.buttons[0].click();
        assert_eq!(*alerts.0.borrow(), vec!["Has hecho clic en \"Exportar\"".to_string()]);
    }

    #[test]
    fn test_absent_slots_are_skipped() {
        let page = FakePage::default()
            .mount("ingresosChart")
            .data("datos-desempeno-json", PERFORMANCE);
        let mut surface = RecordingSurface::default();

        let report = Dashboard::new(DashboardConfig::default())
            .initialize(&page, &mut surface, Rc::new(Alerts::default()))
            .unwrap();

        assert_eq!(report.controls_bound, 0);
        assert!(surface.calls.is_empty());
        assert_eq!(
            report.slot("ingresos"),
            Some(&SlotState::Absent(AbsentReason::MissingData))
        );
        assert_eq!(
            report.slot("desempeno"),
            Some(&SlotState::Absent(AbsentReason::MissingMount))
        );
    }

    #[test]
    fn test_malformed_payload_aborts_remaining_slots() {
        let page = FakePage::default()
            .button("Guardar")
            .mount("ingresosChart")
            .data("datos-ingresos-json", r#"[{"mes":"Jan"}]"#)
            .mount("desempenoChart")
            .data("datos-desempeno-json", PERFORMANCE);
        let mut surface = RecordingSurface::default();
        let alerts = Rc::new(Alerts::default());

        let result = Dashboard::new(DashboardConfig::default()).initialize(
            &page,
            &mut surface,
            Rc::clone(&alerts),
        );

        assert!(matches!(result, Err(DashboardError::MissingField { .. })));
        assert!(surface.calls.is_empty());

        // Click feedback was bound before the failing slot
        page.buttons[0].click();
        assert_eq!(alerts.0.borrow().len(), 1);
    }

    #[test]
    fn test_custom_slot_configuration() {
        let config = DashboardConfig::from_toml_str(
            r#"
            [[slots]]
            name = "ocupacion"
            mount_id = "ingresosChart"
            data_id = "datos-ingresos-json"
            intent = "comparison"
            label_field = "mes"
            value_field = "monto"
            "#,
        )
        .unwrap();
        let page = full_page();
        let mut surface = RecordingSurface::default();

        let report = Dashboard::new(config)
            .initialize(&page, &mut surface, Rc::new(Alerts::default()))
            .unwrap();

        assert_eq!(report.slots.len(), 1);
        assert_eq!(surface.calls[0].1.style.geometry, Geometry::Bar);
    }
}
