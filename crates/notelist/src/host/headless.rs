//! In-memory host controls that record what happens to them.
//!
//! These drive a composed list without any real UI. Interactions such as
//! [`HeadlessButton::click`] run the full chain synchronously, so assertions
//! can follow immediately.
//!
//! # Example
//!
//! ```
//! use notelist::host::headless::HeadlessHost;
//! use notelist::{compose, NotesConfig};
//!
//! let host = HeadlessHost::new();
//! let app = compose(host.bindings(), NotesConfig::default());
//!
//! host.text_input.type_text("milk");
//! host.text_input.press_key("Enter");
//!
//! assert_eq!(app.model().items(), vec!["milk".to_string()]);
//! assert_eq!(host.list.entries(), vec!["<li>milk</li>".to_string()]);
//! ```

use std::sync::Arc;

use parking_lot::Mutex;

use super::{ClickHandler, Clickable, KeyHandler, RenderTarget, TextInput};
use crate::view::ViewBindings;

/// One operation received by a [`HeadlessRenderTarget`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOp {
    /// `clear_contents` was called.
    Clear,
    /// `append_markup` was called with this fragment.
    Append(String),
}

/// A render target that keeps a log of every operation.
#[derive(Debug, Default)]
pub struct HeadlessRenderTarget {
    ops: Mutex<Vec<RenderOp>>,
}

impl HeadlessRenderTarget {
    /// Creates a render target with an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every operation received so far, in order.
    pub fn ops(&self) -> Vec<RenderOp> {
        self.ops.lock().clone()
    }

    /// Number of `clear_contents` calls.
    pub fn clear_count(&self) -> usize {
        self.ops
            .lock()
            .iter()
            .filter(|op| matches!(op, RenderOp::Clear))
            .count()
    }

    /// Number of `append_markup` calls.
    pub fn append_count(&self) -> usize {
        self.ops
            .lock()
            .iter()
            .filter(|op| matches!(op, RenderOp::Append(_)))
            .count()
    }

    /// Fragments appended since the most recent clear, i.e. what is
    /// currently displayed.
    pub fn entries(&self) -> Vec<String> {
        let ops = self.ops.lock();
        let start = ops
            .iter()
            .rposition(|op| matches!(op, RenderOp::Clear))
            .map_or(0, |pos| pos + 1);
        ops[start..]
            .iter()
            .filter_map(|op| match op {
                RenderOp::Append(fragment) => Some(fragment.clone()),
                RenderOp::Clear => None,
            })
            .collect()
    }

    /// Drain the operation log.
    pub fn take_ops(&self) -> Vec<RenderOp> {
        std::mem::take(&mut *self.ops.lock())
    }
}

impl RenderTarget for HeadlessRenderTarget {
    fn clear_contents(&self) {
        self.ops.lock().push(RenderOp::Clear);
    }

    fn append_markup(&self, fragment: &str) {
        self.ops.lock().push(RenderOp::Append(fragment.to_string()));
    }
}

/// A button that is clicked programmatically.
#[derive(Default)]
pub struct HeadlessButton {
    handler: Mutex<Option<Arc<dyn Fn() + Send + Sync>>>,
}

impl HeadlessButton {
    /// Creates a button with no click handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver a click. Returns `false` if no handler is installed.
    pub fn click(&self) -> bool {
        // Clone out so the handler runs without the lock held.
        let handler = self.handler.lock().clone();
        match handler {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    /// Whether a click handler has been installed.
    pub fn has_handler(&self) -> bool {
        self.handler.lock().is_some()
    }
}

impl Clickable for HeadlessButton {
    fn on_click(&self, handler: ClickHandler) {
        *self.handler.lock() = Some(Arc::from(handler));
    }
}

/// A text field whose content and key presses are scripted.
#[derive(Default)]
pub struct HeadlessTextInput {
    value: Mutex<String>,
    handler: Mutex<Option<Arc<dyn Fn(&str) + Send + Sync>>>,
}

impl HeadlessTextInput {
    /// Creates an empty text field with no key handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the field's text, as if the user typed it. Fires no handler.
    pub fn type_text(&self, text: &str) {
        *self.value.lock() = text.to_string();
    }

    /// Deliver a key press. Returns `false` if no handler is installed.
    pub fn press_key(&self, key: &str) -> bool {
        let handler = self.handler.lock().clone();
        match handler {
            Some(handler) => {
                handler(key);
                true
            }
            None => false,
        }
    }
}

impl TextInput for HeadlessTextInput {
    fn value(&self) -> String {
        self.value.lock().clone()
    }

    fn set_value(&self, value: &str) {
        *self.value.lock() = value.to_string();
    }

    fn on_key_press(&self, handler: KeyHandler) {
        *self.handler.lock() = Some(Arc::from(handler));
    }
}

/// The four headless controls a view needs, kept together.
#[derive(Clone, Default)]
pub struct HeadlessHost {
    /// Receives the rendered entries.
    pub list: Arc<HeadlessRenderTarget>,
    /// The add control.
    pub add_button: Arc<HeadlessButton>,
    /// The item text field.
    pub text_input: Arc<HeadlessTextInput>,
    /// The clear control.
    pub clear_button: Arc<HeadlessButton>,
}

impl HeadlessHost {
    /// Creates a fresh set of controls.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bindings that point the view at these controls.
    pub fn bindings(&self) -> ViewBindings {
        ViewBindings {
            list: self.list.clone(),
            add_button: self.add_button.clone(),
            text_input: self.text_input.clone(),
            clear_button: self.clear_button.clone(),
        }
    }
}
