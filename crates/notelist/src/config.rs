//! Configuration for a composed note list.
//!
//! Every field has a default, so an empty document is a valid configuration:
//!
//! ```toml
//! render_mode = "escaped"      # or "raw_markup"
//! fault_policy = "isolate"     # or "propagate"
//! initial_items = ["eggs", "bread"]
//! ```

use std::path::Path;

use notelist_core::FaultPolicy;
use serde::{Deserialize, Serialize};

use crate::error::{NotesError, Result};
use crate::markup::RenderMode;

/// Settings consumed by [`compose`](crate::compose).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NotesConfig {
    /// How item text reaches the render target.
    pub render_mode: RenderMode,
    /// How every channel treats panicking listeners.
    pub fault_policy: FaultPolicy,
    /// Items present before the first render.
    pub initial_items: Vec<String>,
}

impl NotesConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| NotesError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Set the render mode using builder pattern.
    pub fn with_render_mode(mut self, render_mode: RenderMode) -> Self {
        self.render_mode = render_mode;
        self
    }

    /// Set the fault policy using builder pattern.
    pub fn with_fault_policy(mut self, fault_policy: FaultPolicy) -> Self {
        self.fault_policy = fault_policy;
        self
    }

    /// Set the initial items using builder pattern.
    pub fn with_initial_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.initial_items = items.into_iter().map(Into::into).collect();
        self
    }
}
