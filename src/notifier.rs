//! Interaction Notifier
//!
//! Attaches a uniform acknowledgment to every clickable control on the page.

use std::rc::Rc;

use crate::error::DashboardResult;

/// Placeholder replaced by the control's label
pub const LABEL_PLACEHOLDER: &str = "{label}";

/// Default acknowledgment text
pub const DEFAULT_TEMPLATE: &str = "Has hecho clic en \"{label}\"";

/// A clickable control
pub trait Control {
    /// Visible label text, verbatim
    fn label(&self) -> String;

    /// Run `handler` every time the control is activated
    fn on_activate(&self, handler: Box<dyn FnMut()>) -> DashboardResult<()>;
}

/// Blocking, dismissible user notification
pub trait Notifier {
    fn notify(&self, message: &str);
}

/// Render the acknowledgment for `label`
///
/// Empty labels are allowed and leave an empty segment.
pub fn acknowledgment(template: &str, label: &str) -> String {
    template.replace(LABEL_PLACEHOLDER, label)
}

/// Attach the acknowledgment handler to each control
///
/// The label is read when the control is activated, not when the handler is
/// attached. Returns the number of controls bound.
pub fn attach_notifier<C, N>(
    controls: impl IntoIterator<Item = C>,
    notifier: Rc<N>,
    template: &str,
) -> DashboardResult<usize>
where
    C: Control + Clone + 'static,
    N: Notifier + ?Sized + 'static,
{
    let mut bound = 0;

    for control in controls {
        let target = control.clone();
        let notifier = Rc::clone(&notifier);
        let template = template.to_string();

        control.on_activate(Box::new(move || {
            notifier.notify(&acknowledgment(&template, &target.label()));
        }))?;
        bound += 1;
    }

    if bound == 0 {
        tracing::debug!("No clickable controls found");
    } else {
        tracing::debug!(controls = bound, "Click notifier attached");
    }

    Ok(bound)
}
