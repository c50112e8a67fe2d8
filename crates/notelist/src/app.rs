//! Explicit composition of model, view and controller.

use std::sync::Arc;

use notelist_core::logging::targets;
use notelist_core::FaultPolicy;

use crate::config::NotesConfig;
use crate::controller::ListController;
use crate::markup::RenderMode;
use crate::model::ListModel;
use crate::view::{ListView, ViewBindings};

/// A composed note list.
///
/// Owns the three components; dropping it tears the wiring down.
pub struct NotesApp {
    model: Arc<ListModel>,
    view: Arc<ListView>,
    controller: Arc<ListController>,
}

impl NotesApp {
    /// The model holding the items.
    pub fn model(&self) -> &Arc<ListModel> {
        &self.model
    }

    /// The view rendering the model.
    pub fn view(&self) -> &Arc<ListView> {
        &self.view
    }

    /// The controller applying input policy.
    pub fn controller(&self) -> &Arc<ListController> {
        &self.controller
    }

    /// Detach the controller from the view and the view from the model.
    ///
    /// The model and its items stay usable; a new view can be composed over
    /// it afterwards.
    pub fn shutdown(self) -> Arc<ListModel> {
        self.controller.detach();
        self.view.detach();
        tracing::debug!(target: targets::APP, "note list shut down");
        self.model
    }
}

/// Build a model from `config`, wire a view to `bindings` and a controller
/// between them, and render once.
///
/// The hosting application calls this when its UI is ready; nothing is
/// initialised implicitly.
pub fn compose(bindings: ViewBindings, config: NotesConfig) -> NotesApp {
    let model = Arc::new(ListModel::new(config.initial_items));
    compose_with_model(model, bindings, config.render_mode, config.fault_policy)
}

/// Like [`compose`], but reuse an existing model.
pub fn compose_with_model(
    model: Arc<ListModel>,
    bindings: ViewBindings,
    render_mode: RenderMode,
    fault_policy: FaultPolicy,
) -> NotesApp {
    model.set_fault_policy(fault_policy);

    let view = ListView::new(model.clone(), bindings, render_mode);
    view.set_fault_policy(fault_policy);

    let controller = ListController::new(model.clone(), view.clone());
    view.show();

    tracing::debug!(
        target: targets::APP,
        items = model.len(),
        ?render_mode,
        ?fault_policy,
        "note list composed"
    );

    NotesApp {
        model,
        view,
        controller,
    }
}
