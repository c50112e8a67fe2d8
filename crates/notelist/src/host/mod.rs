//! Capabilities the host UI environment supplies.
//!
//! Notelist does not draw anything itself. A host hands the view four
//! handles, one per role:
//!
//! | Role | Trait |
//! |---|---|
//! | render target | [`RenderTarget`] |
//! | add control | [`Clickable`] |
//! | clear control | [`Clickable`] |
//! | text input | [`TextInput`] |
//!
//! Hosts invoke installed handlers synchronously from their own event
//! dispatch; the whole model/view/controller chain completes before the
//! handler returns.
//!
//! The [`headless`] module provides recording implementations for tests and
//! demos.

pub mod headless;

/// Handler invoked when a control is clicked.
pub type ClickHandler = Box<dyn Fn() + Send + Sync>;

/// Handler invoked with the key identifier (e.g. `"Enter"`) of a key press.
pub type KeyHandler = Box<dyn Fn(&str) + Send + Sync>;

/// Where rendered list entries go.
pub trait RenderTarget: Send + Sync {
    /// Remove everything currently rendered.
    fn clear_contents(&self);

    /// Append one markup fragment after the existing contents.
    fn append_markup(&self, fragment: &str);
}

/// A control that delivers click notifications.
pub trait Clickable: Send + Sync {
    /// Install the click handler, replacing any previous one.
    fn on_click(&self, handler: ClickHandler);
}

/// A single-line text field.
pub trait TextInput: Send + Sync {
    /// The current text.
    fn value(&self) -> String;

    /// Replace the current text. Must not fire the key-press handler.
    fn set_value(&self, value: &str);

    /// Install the key-press handler, replacing any previous one.
    fn on_key_press(&self, handler: KeyHandler);
}
