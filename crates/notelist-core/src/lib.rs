//! Core systems for Notelist.
//!
//! This crate provides the observer mechanism that the Notelist model, view
//! and controller use to talk to each other without knowing each other's
//! types:
//!
//! - **Event Channels**: Ordered, synchronous listener registries
//! - **Subscriptions**: Handles that detach a single listener
//! - **Fault Policy**: Isolation or propagation of panicking listeners
//! - **Logging**: `tracing` targets for every subsystem
//!
//! # Example
//!
//! ```
//! use notelist_core::{EventChannel, Sender};
//! use std::sync::Arc;
//! use parking_lot::Mutex;
//!
//! let item_added = EventChannel::<String>::new(Sender::new("ListModel"));
//! let log = Arc::new(Mutex::new(Vec::new()));
//!
//! let log_clone = log.clone();
//! let subscription = item_added.attach(move |sender, item| {
//!     log_clone.lock().push(format!("{}: {item}", sender.role()));
//! });
//!
//! item_added.notify(&"milk".to_string()).unwrap();
//! subscription.unsubscribe();
//! item_added.notify(&"eggs".to_string()).unwrap();
//!
//! assert_eq!(*log.lock(), vec!["ListModel: milk".to_string()]);
//! ```

mod error;
pub mod logging;
pub mod signal;

pub use error::{ListenerFault, Result, SignalError};
pub use signal::{EventChannel, FaultPolicy, ListenerId, Sender, Subscription, SubscriptionGuard};
