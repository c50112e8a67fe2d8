//! Synchronous event channels for Notelist.
//!
//! An [`EventChannel<Args>`] decouples a notifying party from any number of
//! interested parties. Listeners are closures that receive the channel's
//! [`Sender`] and a borrowed payload. They are invoked synchronously, in
//! registration order, exactly once per [`EventChannel::notify`] call.
//!
//! # Key Types
//!
//! - [`EventChannel<Args>`] - The broadcaster
//! - [`Sender`] - Opaque identity of the party that owns a channel
//! - [`Subscription`] - Handle returned by [`EventChannel::attach`]
//! - [`SubscriptionGuard`] - RAII handle that detaches when dropped
//! - [`FaultPolicy`] - What happens when a listener panics
//!
//! # Example
//!
//! ```
//! use notelist_core::{EventChannel, Sender};
//!
//! let changed = EventChannel::<String>::new(Sender::new("Editor"));
//!
//! let subscription = changed.attach(|sender, text| {
//!     println!("{sender} changed text to {text}");
//! });
//!
//! changed.notify(&"Hello".to_string()).unwrap();
//!
//! // Detach when done
//! assert!(subscription.unsubscribe());
//! assert_eq!(changed.listener_count(), 0);
//! ```

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use slotmap::{new_key_type, SlotMap};

use crate::error::{ListenerFault, Result, SignalError};
use crate::logging::targets;

new_key_type! {
    /// A unique identifier for one listener registration.
    ///
    /// The ID stays valid until the registration is removed through its
    /// [`Subscription`] or [`EventChannel::detach_all`].
    pub struct ListenerId;
}

/// Opaque identity of the component that owns an event channel.
///
/// Listeners receive the sender with every notification. It carries no
/// reference back to the owner; it only tells notifications apart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Sender {
    id: u64,
    role: &'static str,
}

impl Sender {
    /// Create a sender with a process-unique id and a static role label.
    pub fn new(role: &'static str) -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            role,
        }
    }

    /// The process-unique id.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The role label given at construction, e.g. `"ListModel"`.
    pub fn role(&self) -> &'static str {
        self.role
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.role, self.id)
    }
}

/// How [`EventChannel::notify`] reacts to a panicking listener.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultPolicy {
    /// Catch the panic, log it, and keep delivering to the remaining
    /// listeners. The faults are returned as [`SignalError::ListenerFaults`].
    #[default]
    Isolate,

    /// Let the first panic unwind out of `notify`. Remaining listeners are
    /// not invoked for that call.
    Propagate,
}

type Listener<Args> = Arc<dyn Fn(&Sender, &Args) + Send + Sync>;

/// Listener storage. `order` holds registration order; slotmap iteration
/// order is not stable across removals.
struct Registry<Args> {
    listeners: SlotMap<ListenerId, Listener<Args>>,
    order: Vec<ListenerId>,
}

impl<Args> Registry<Args> {
    fn new() -> Self {
        Self {
            listeners: SlotMap::with_key(),
            order: Vec::new(),
        }
    }

    fn insert(&mut self, listener: Listener<Args>) -> ListenerId {
        let id = self.listeners.insert(listener);
        self.order.push(id);
        id
    }

    fn remove(&mut self, id: ListenerId) -> bool {
        if self.listeners.remove(id).is_some() {
            self.order.retain(|&existing| existing != id);
            true
        } else {
            false
        }
    }

    fn snapshot(&self) -> Vec<(ListenerId, Listener<Args>)> {
        self.order
            .iter()
            .filter_map(|&id| self.listeners.get(id).map(|l| (id, l.clone())))
            .collect()
    }
}

/// Type-erased detach access, so [`Subscription`] does not carry `Args`.
trait Detach: Send + Sync {
    fn detach(&self, id: ListenerId) -> bool;
    fn contains(&self, id: ListenerId) -> bool;
}

impl<Args: 'static> Detach for Mutex<Registry<Args>> {
    fn detach(&self, id: ListenerId) -> bool {
        self.lock().remove(id)
    }

    fn contains(&self, id: ListenerId) -> bool {
        self.lock().listeners.contains_key(id)
    }
}

/// A synchronous broadcaster with an ordered list of listeners.
///
/// # Type Parameter
///
/// - `Args`: The payload passed to listeners. Use `()` for notifications
///   without a payload.
///
/// # Reentrancy
///
/// The listener list is snapshotted before delivery starts. Listeners may
/// notify other channels, attach new listeners, or unsubscribe during
/// delivery. Registration changes take effect from the next `notify`.
pub struct EventChannel<Args> {
    sender: Sender,
    registry: Arc<Mutex<Registry<Args>>>,
    blocked: AtomicBool,
    propagate_faults: AtomicBool,
}

impl<Args: 'static> EventChannel<Args> {
    /// Create a channel owned by `sender`, with no listeners.
    pub fn new(sender: Sender) -> Self {
        Self {
            sender,
            registry: Arc::new(Mutex::new(Registry::new())),
            blocked: AtomicBool::new(false),
            propagate_faults: AtomicBool::new(false),
        }
    }

    /// The sender passed to every listener.
    pub fn sender(&self) -> Sender {
        self.sender
    }

    /// Append a listener to the registration order.
    ///
    /// The same closure logic attached twice is two registrations and is
    /// invoked twice per `notify`. Dropping the returned [`Subscription`]
    /// leaves the listener attached.
    pub fn attach<F>(&self, listener: F) -> Subscription
    where
        F: Fn(&Sender, &Args) + Send + Sync + 'static,
    {
        let id = self.registry.lock().insert(Arc::new(listener));
        let registry: Arc<dyn Detach> = self.registry.clone();
        Subscription {
            id,
            registry: Arc::downgrade(&registry),
        }
    }

    /// Attach a listener that is detached when the returned guard drops.
    ///
    /// # Example
    ///
    /// ```
    /// use notelist_core::{EventChannel, Sender};
    /// use std::sync::atomic::{AtomicI32, Ordering};
    /// use std::sync::Arc;
    ///
    /// let channel = EventChannel::<i32>::new(Sender::new("Counter"));
    /// let total = Arc::new(AtomicI32::new(0));
    /// {
    ///     let total = total.clone();
    ///     let _guard = channel.attach_scoped(move |_, &n| {
    ///         total.fetch_add(n, Ordering::SeqCst);
    ///     });
    ///     channel.notify(&42).unwrap();
    /// }
    /// channel.notify(&43).unwrap(); // no listeners left
    /// assert_eq!(total.load(Ordering::SeqCst), 42);
    /// ```
    pub fn attach_scoped<F>(&self, listener: F) -> SubscriptionGuard
    where
        F: Fn(&Sender, &Args) + Send + Sync + 'static,
    {
        self.attach(listener).scoped()
    }

    /// Remove every listener.
    pub fn detach_all(&self) {
        let mut registry = self.registry.lock();
        registry.listeners.clear();
        registry.order.clear();
    }

    /// Number of attached listeners.
    pub fn listener_count(&self) -> usize {
        self.registry.lock().order.len()
    }

    /// Block delivery temporarily. A blocked channel's `notify` is a no-op.
    pub fn set_blocked(&self, blocked: bool) {
        self.blocked.store(blocked, Ordering::SeqCst);
    }

    /// Check whether delivery is currently blocked.
    pub fn is_blocked(&self) -> bool {
        self.blocked.load(Ordering::SeqCst)
    }

    /// Choose how panicking listeners are handled.
    pub fn set_fault_policy(&self, policy: FaultPolicy) {
        self.propagate_faults
            .store(policy == FaultPolicy::Propagate, Ordering::SeqCst);
    }

    /// The current fault policy.
    pub fn fault_policy(&self) -> FaultPolicy {
        if self.propagate_faults.load(Ordering::SeqCst) {
            FaultPolicy::Propagate
        } else {
            FaultPolicy::Isolate
        }
    }

    /// Invoke every listener in registration order with `(sender, args)`.
    ///
    /// Returns once all listeners have run. Under [`FaultPolicy::Isolate`] a
    /// panicking listener is recorded and delivery continues; the recorded
    /// faults are returned as an error afterwards. Under
    /// [`FaultPolicy::Propagate`] the panic unwinds into the caller.
    #[tracing::instrument(
        skip_all,
        target = "notelist_core::signal",
        level = "trace",
        fields(sender = %self.sender)
    )]
    pub fn notify(&self, args: &Args) -> Result<()> {
        if self.is_blocked() {
            tracing::trace!(target: targets::SIGNAL, "channel blocked, skipping notify");
            return Ok(());
        }

        let listeners = self.registry.lock().snapshot();
        let policy = self.fault_policy();
        tracing::trace!(target: targets::SIGNAL, listener_count = listeners.len(), "notifying listeners");

        let mut faults = Vec::new();
        for (position, (id, listener)) in listeners.into_iter().enumerate() {
            match policy {
                FaultPolicy::Propagate => listener(&self.sender, args),
                FaultPolicy::Isolate => {
                    let outcome =
                        panic::catch_unwind(AssertUnwindSafe(|| listener(&self.sender, args)));
                    if let Err(payload) = outcome {
                        let message = panic_message(payload.as_ref());
                        tracing::error!(
                            target: targets::SIGNAL,
                            sender = %self.sender,
                            position,
                            %message,
                            "listener panicked during notify"
                        );
                        faults.push(ListenerFault {
                            listener: id,
                            position,
                            message,
                        });
                    }
                }
            }
        }

        if faults.is_empty() {
            Ok(())
        } else {
            Err(SignalError::ListenerFaults(faults))
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

/// Handle to one listener registration.
///
/// Returned by [`EventChannel::attach`]. It keeps no strong reference to the
/// channel, so it never extends the channel's lifetime.
pub struct Subscription {
    id: ListenerId,
    registry: Weak<dyn Detach>,
}

impl Subscription {
    /// The registration's id.
    pub fn id(&self) -> ListenerId {
        self.id
    }

    /// Whether the listener is still attached to a live channel.
    pub fn is_attached(&self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.contains(self.id))
    }

    /// Detach the listener.
    ///
    /// Returns `true` if it was attached, `false` if it had already been
    /// removed or the channel no longer exists.
    pub fn unsubscribe(self) -> bool {
        self.registry
            .upgrade()
            .is_some_and(|registry| registry.detach(self.id))
    }

    /// Convert into a guard that detaches on drop.
    pub fn scoped(self) -> SubscriptionGuard {
        SubscriptionGuard { inner: Some(self) }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

/// A subscription that automatically detaches when dropped.
///
/// Created via [`EventChannel::attach_scoped`] or [`Subscription::scoped`].
#[derive(Debug)]
pub struct SubscriptionGuard {
    inner: Option<Subscription>,
}

impl SubscriptionGuard {
    /// Disarm the guard and hand back the plain subscription.
    pub fn release(mut self) -> Subscription {
        self.inner
            .take()
            .unwrap_or_else(|| unreachable!("guard holds its subscription until dropped"))
    }
}

impl Drop for SubscriptionGuard {
    fn drop(&mut self) {
        if let Some(subscription) = self.inner.take() {
            subscription.unsubscribe();
        }
    }
}

static_assertions::assert_impl_all!(EventChannel<String>: Send, Sync);
static_assertions::assert_impl_all!(Subscription: Send, Sync);
