//! Notelist: a minimal list manager with a Model/View/Controller split.
//!
//! The three components never call each other's internals. They are
//! connected through [`notelist_core::EventChannel`]s:
//!
//! ```text
//! host click / key press
//!        │
//!        ▼
//! ┌─────────────┐  add_button_clicked   ┌────────────────┐
//! │  ListView   │  clear_button_clicked │ ListController │
//! │             │──────────────────────>│  (validation)  │
//! │             │  input_submitted      └────────────────┘
//! │             │                               │ add_item / clear_list
//! │             │  item_added           ┌───────▼────────┐
//! │  rebuild    │<──────────────────────│   ListModel    │
//! │             │  list_purged          │  (owns items)  │
//! └─────────────┘                       └────────────────┘
//! ```
//!
//! Each interaction runs as one synchronous call chain that completes before
//! the host's handler returns.
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
//! host.text_input.type_text("eggs");
//! host.add_button.click();
//! host.add_button.click(); // input was cleared by the rebuild: ignored
//!
//! assert_eq!(app.model().items(), vec!["eggs"]);
//!
//! host.clear_button.click();
//! assert!(app.model().is_empty());
//! ```

mod app;
pub mod config;
pub mod controller;
mod error;
pub mod host;
pub mod markup;
pub mod model;
pub mod prelude;
pub mod view;

pub use app::{compose, compose_with_model, NotesApp};
pub use config::NotesConfig;
pub use controller::{ListController, ENTER_KEY};
pub use error::{NotesError, Result};
pub use markup::RenderMode;
pub use model::{ItemAdded, ListModel};
pub use view::{KeyPressed, ListView, ViewBindings};

pub use notelist_core;
