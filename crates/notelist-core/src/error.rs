//! Error types for Notelist core.

use std::fmt;

use crate::signal::ListenerId;

/// A single listener that panicked while a channel was delivering a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListenerFault {
    /// Registration handle of the faulting listener.
    pub listener: ListenerId,
    /// Zero-based position of the listener in delivery order for that call.
    pub position: usize,
    /// The panic message, or a placeholder for non-string payloads.
    pub message: String,
}

impl fmt::Display for ListenerFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener #{} panicked: {}", self.position, self.message)
    }
}

/// Signal-specific errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignalError {
    /// One or more listeners panicked during `notify`. Every other listener
    /// was still invoked.
    ListenerFaults(Vec<ListenerFault>),
}

impl SignalError {
    /// The faults recorded during delivery.
    pub fn faults(&self) -> &[ListenerFault] {
        match self {
            Self::ListenerFaults(faults) => faults,
        }
    }
}

impl fmt::Display for SignalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ListenerFaults(faults) => {
                write!(f, "{} listener(s) failed during delivery", faults.len())?;
                if let Some(first) = faults.first() {
                    write!(f, " (first: {first})")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for SignalError {}

/// A specialized Result type for event channel operations.
pub type Result<T> = std::result::Result<T, SignalError>;
