//! Commonly used types, for glob import.
//!
//! ```
//! use notelist::prelude::*;
//! ```

pub use crate::host::{Clickable, RenderTarget, TextInput};
pub use crate::{
    compose, ItemAdded, KeyPressed, ListController, ListModel, ListView, NotesApp, NotesConfig,
    NotesError, RenderMode, ViewBindings,
};
pub use notelist_core::{EventChannel, FaultPolicy, Sender, Subscription};
