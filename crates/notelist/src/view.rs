//! The list view: renders model snapshots and republishes host input.
//!
//! [`ListView`] subscribes to both model notifications and answers each with
//! a full rebuild. It never keeps item state of its own. It also turns the
//! host's click and key-press callbacks into three model-agnostic channels:
//!
//! - [`add_button_clicked`](ListView::add_button_clicked)
//! - [`clear_button_clicked`](ListView::clear_button_clicked)
//! - [`input_submitted`](ListView::input_submitted), carrying [`KeyPressed`]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Weak};

use notelist_core::logging::targets;
use notelist_core::{EventChannel, FaultPolicy, Sender, Subscription};
use parking_lot::Mutex;

use crate::host::{Clickable, RenderTarget, TextInput};
use crate::markup::{render_entry, RenderMode};
use crate::model::{ItemAdded, ListModel};

/// Host handles for the four UI roles, fixed at construction.
#[derive(Clone)]
pub struct ViewBindings {
    /// Where entries are rendered.
    pub list: Arc<dyn RenderTarget>,
    /// Control that requests adding the current input.
    pub add_button: Arc<dyn Clickable>,
    /// Field holding the text of the next item.
    pub text_input: Arc<dyn TextInput>,
    /// Control that requests clearing the list.
    pub clear_button: Arc<dyn Clickable>,
}

/// Payload of the "input submitted" notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPressed {
    /// Key identifier as reported by the host, e.g. `"Enter"`.
    pub key: String,
}

/// Renders a [`ListModel`] into host controls.
pub struct ListView {
    model: Arc<ListModel>,
    bindings: ViewBindings,
    render_mode: RenderMode,
    sender: Sender,
    add_button_clicked: EventChannel<()>,
    clear_button_clicked: EventChannel<()>,
    input_submitted: EventChannel<KeyPressed>,
    model_subscriptions: Mutex<Vec<Subscription>>,
    rendered: AtomicUsize,
}

impl ListView {
    /// Create a view over `model`, wired to the host `bindings`.
    ///
    /// Subscribes to the model and installs the host handlers, but renders
    /// nothing until [`show`](Self::show) is called.
    pub fn new(
        model: Arc<ListModel>,
        bindings: ViewBindings,
        render_mode: RenderMode,
    ) -> Arc<Self> {
        Arc::new_cyclic(|weak: &Weak<ListView>| {
            let model_subscriptions = vec![
                model.item_added().attach(rebuild_on_change::<ItemAdded>(weak.clone())),
                model.list_purged().attach(rebuild_on_change::<()>(weak.clone())),
            ];

            let view = weak.clone();
            bindings.add_button.on_click(Box::new(move || {
                if let Some(view) = view.upgrade() {
                    view.publish("add button", &view.add_button_clicked, &());
                }
            }));

            let view = weak.clone();
            bindings.clear_button.on_click(Box::new(move || {
                if let Some(view) = view.upgrade() {
                    view.publish("clear button", &view.clear_button_clicked, &());
                }
            }));

            let view = weak.clone();
            bindings.text_input.on_key_press(Box::new(move |key| {
                if let Some(view) = view.upgrade() {
                    let payload = KeyPressed {
                        key: key.to_string(),
                    };
                    view.publish("text input", &view.input_submitted, &payload);
                }
            }));

            let sender = Sender::new("ListView");
            Self {
                model,
                bindings,
                render_mode,
                sender,
                add_button_clicked: EventChannel::new(sender),
                clear_button_clicked: EventChannel::new(sender),
                input_submitted: EventChannel::new(sender),
                model_subscriptions: Mutex::new(model_subscriptions),
                rendered: AtomicUsize::new(0),
            }
        })
    }

    fn publish<Args: 'static>(
        &self,
        source: &'static str,
        channel: &EventChannel<Args>,
        payload: &Args,
    ) {
        tracing::trace!(target: targets::VIEW, source, "host signal received");
        if let Err(err) = channel.notify(payload) {
            tracing::warn!(
                target: targets::VIEW,
                source,
                %err,
                "view notification reported faults"
            );
        }
    }

    /// Render the current model state for the first time.
    pub fn show(&self) {
        self.rebuild_list();
    }

    /// Clear the render target and the text input, then append one entry
    /// per item of a fresh model snapshot.
    pub fn rebuild_list(&self) {
        let list = &self.bindings.list;
        list.clear_contents();
        self.bindings.text_input.set_value("");

        let items = self.model.items();
        for item in &items {
            list.append_markup(&render_entry(item, self.render_mode));
        }
        self.rendered.store(items.len(), Ordering::SeqCst);
        tracing::trace!(target: targets::VIEW, entries = items.len(), "list rebuilt");
    }

    /// Number of entries appended by the most recent rebuild.
    pub fn rendered_count(&self) -> usize {
        self.rendered.load(Ordering::SeqCst)
    }

    /// The text currently in the input field.
    pub fn input_text(&self) -> String {
        self.bindings.text_input.value()
    }

    /// How item text is inserted into entries.
    pub fn render_mode(&self) -> RenderMode {
        self.render_mode
    }

    /// The sender identity attached to this view's notifications.
    pub fn sender(&self) -> Sender {
        self.sender
    }

    /// Emitted when the host reports a click on the add control.
    pub fn add_button_clicked(&self) -> &EventChannel<()> {
        &self.add_button_clicked
    }

    /// Emitted when the host reports a click on the clear control.
    pub fn clear_button_clicked(&self) -> &EventChannel<()> {
        &self.clear_button_clicked
    }

    /// Emitted for every key press in the text input.
    pub fn input_submitted(&self) -> &EventChannel<KeyPressed> {
        &self.input_submitted
    }

    /// Apply a fault policy to the view's three channels.
    pub fn set_fault_policy(&self, policy: FaultPolicy) {
        self.add_button_clicked.set_fault_policy(policy);
        self.clear_button_clicked.set_fault_policy(policy);
        self.input_submitted.set_fault_policy(policy);
    }

    /// Stop reacting to model changes.
    ///
    /// Host handlers stay installed but only hold a weak reference, so they
    /// go inert once the view is dropped. Returns the number of model
    /// subscriptions removed.
    pub fn detach(&self) -> usize {
        let subscriptions = std::mem::take(&mut *self.model_subscriptions.lock());
        let removed = subscriptions
            .into_iter()
            .map(Subscription::unsubscribe)
            .filter(|&removed| removed)
            .count();
        if removed > 0 {
            tracing::debug!(target: targets::VIEW, removed, "view detached from model");
        }
        removed
    }

    /// Whether the view is still subscribed to the model.
    pub fn is_attached(&self) -> bool {
        self.model_subscriptions
            .lock()
            .iter()
            .any(Subscription::is_attached)
    }
}

impl Drop for ListView {
    fn drop(&mut self) {
        self.detach();
    }
}

fn rebuild_on_change<Args: 'static>(
    view: Weak<ListView>,
) -> impl Fn(&Sender, &Args) + Send + Sync + 'static {
    move |_, _| {
        if let Some(view) = view.upgrade() {
            view.rebuild_list();
        }
    }
}

static_assertions::assert_impl_all!(ListView: Send, Sync);
