//! The controller: input policy between view and model.
//!
//! [`ListController`] listens to the view's three channels and translates them
//! into model calls. It is the only place that decides what input counts:
//!
//! - an add request is honoured only when the input text is non-empty
//!   (whitespace counts as content; nothing is trimmed),
//! - a key press submits only when the key is exactly [`ENTER_KEY`].
//!
//! Rejected input is a silent no-op.

use std::sync::{Arc, Weak};

use notelist_core::logging::targets;
use notelist_core::Subscription;
use parking_lot::Mutex;

use crate::error::Result;
use crate::model::ListModel;
use crate::view::ListView;

/// Key identifier that submits the text input.
pub const ENTER_KEY: &str = "Enter";

/// Mediates between a [`ListView`] and a [`ListModel`].
pub struct ListController {
    model: Arc<ListModel>,
    view: Arc<ListView>,
    view_subscriptions: Mutex<Vec<Subscription>>,
}

impl ListController {
    /// Create a controller and subscribe it to the view's channels.
    pub fn new(model: Arc<ListModel>, view: Arc<ListView>) -> Arc<Self> {
        Arc::new_cyclic(|weak: &Weak<ListController>| {
            let controller = weak.clone();
            let on_add = view.add_button_clicked().attach(move |_, _| {
                if let Some(controller) = controller.upgrade() {
                    controller.report("add", controller.add_item().map(drop));
                }
            });

            let controller = weak.clone();
            let on_clear = view.clear_button_clicked().attach(move |_, _| {
                if let Some(controller) = controller.upgrade() {
                    controller.report("clear", controller.clear_list());
                }
            });

            let controller = weak.clone();
            let on_key = view.input_submitted().attach(move |_, pressed| {
                if let Some(controller) = controller.upgrade() {
                    controller.report("submit", controller.handle_key(&pressed.key).map(drop));
                }
            });

            Self {
                model,
                view,
                view_subscriptions: Mutex::new(vec![on_add, on_clear, on_key]),
            }
        })
    }

    /// Add the view's current input text to the model if it is non-empty.
    ///
    /// Returns whether an item was added.
    pub fn add_item(&self) -> Result<bool> {
        let text = self.view.input_text();
        if text.is_empty() {
            return Ok(false);
        }
        self.model.add_item(text)?;
        Ok(true)
    }

    /// Empty the model.
    pub fn clear_list(&self) -> Result<()> {
        self.model.clear_list()
    }

    /// Submit the input when `key` is [`ENTER_KEY`]; ignore anything else.
    ///
    /// Returns whether an item was added.
    pub fn handle_key(&self, key: &str) -> Result<bool> {
        if key != ENTER_KEY {
            return Ok(false);
        }
        self.add_item()
    }

    fn report(&self, action: &'static str, result: Result<()>) {
        if let Err(err) = result {
            tracing::warn!(
                target: targets::CONTROLLER,
                action,
                %err,
                "model notification reported faults"
            );
        }
    }

    /// Stop listening to the view. Returns the number of subscriptions removed.
    pub fn detach(&self) -> usize {
        let subscriptions = std::mem::take(&mut *self.view_subscriptions.lock());
        let removed = subscriptions
            .into_iter()
            .map(Subscription::unsubscribe)
            .filter(|&removed| removed)
            .count();
        if removed > 0 {
            tracing::debug!(target: targets::CONTROLLER, removed, "controller detached from view");
        }
        removed
    }
}

impl Drop for ListController {
    fn drop(&mut self) {
        self.detach();
    }
}

static_assertions::assert_impl_all!(ListController: Send, Sync);
