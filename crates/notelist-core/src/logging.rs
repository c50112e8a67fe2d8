//! Logging facilities for Notelist.
//!
//! Notelist uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber::EnvFilter;
//!
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter(EnvFilter::new("notelist=debug,notelist_core=trace"))
//!         .init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Every event is emitted under one of the [`targets`], so a directive such
//! as `notelist_core::signal=trace` narrows output to a single subsystem.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "notelist_core";
    /// Event channel delivery.
    pub const SIGNAL: &str = "notelist_core::signal";
    /// Item model mutations and notifications.
    pub const MODEL: &str = "notelist::model";
    /// View rendering and host signal republishing.
    pub const VIEW: &str = "notelist::view";
    /// Controller validation and dispatch.
    pub const CONTROLLER: &str = "notelist::controller";
    /// Application composition and configuration.
    pub const APP: &str = "notelist::app";
}
