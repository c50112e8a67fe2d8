//! The item model: sole owner of the note list.
//!
//! [`ListModel`] holds an ordered sequence of strings and emits exactly two
//! kinds of change notification:
//!
//! - [`item_added`](ListModel::item_added) carrying [`ItemAdded`]
//! - [`list_purged`](ListModel::list_purged) with no payload
//!
//! The model applies no validation. Empty strings, whitespace and duplicates
//! are all stored as given; input policy belongs to the controller.
//!
//! # Example
//!
//! ```
//! use notelist::model::ListModel;
//!
//! let model = ListModel::new(vec!["eggs".to_string()]);
//! model.item_added().attach(|_, added| println!("added {}", added.item));
//!
//! model.add_item("bread").unwrap();
//! assert_eq!(model.items(), vec!["eggs", "bread"]);
//!
//! model.clear_list().unwrap();
//! assert!(model.is_empty());
//! ```

use notelist_core::logging::targets;
use notelist_core::{EventChannel, FaultPolicy, Sender};
use parking_lot::RwLock;

use crate::error::Result;

/// Payload of the "item added" notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemAdded {
    /// The item that was appended.
    pub item: String,
}

/// An ordered list of text items with change notification.
pub struct ListModel {
    items: RwLock<Vec<String>>,
    sender: Sender,
    item_added: EventChannel<ItemAdded>,
    list_purged: EventChannel<()>,
}

impl ListModel {
    /// Create a model that takes ownership of `items` as its initial state.
    pub fn new(items: Vec<String>) -> Self {
        let sender = Sender::new("ListModel");
        Self {
            items: RwLock::new(items),
            sender,
            item_added: EventChannel::new(sender),
            list_purged: EventChannel::new(sender),
        }
    }

    /// The sender identity attached to this model's notifications.
    pub fn sender(&self) -> Sender {
        self.sender
    }

    /// A snapshot of the current items, in insertion order.
    ///
    /// The returned vector is independent of the model.
    pub fn items(&self) -> Vec<String> {
        self.items.read().clone()
    }

    /// Returns the number of items in the model.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Returns `true` if the model is empty.
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Append `item` to the end of the list, then notify `item_added`.
    ///
    /// The item is stored even if a listener later faults; the fault is
    /// reported through the returned error.
    pub fn add_item(&self, item: impl Into<String>) -> Result<()> {
        let item = item.into();
        let len = {
            let mut items = self.items.write();
            items.push(item.clone());
            items.len()
        };
        tracing::debug!(target: targets::MODEL, len, "item added");

        self.item_added.notify(&ItemAdded { item })?;
        Ok(())
    }

    /// Remove every item, then notify `list_purged`.
    pub fn clear_list(&self) -> Result<()> {
        let removed = {
            let mut items = self.items.write();
            let removed = items.len();
            items.clear();
            removed
        };
        tracing::debug!(target: targets::MODEL, removed, "list purged");

        self.list_purged.notify(&())?;
        Ok(())
    }

    /// Emitted after an item is appended.
    pub fn item_added(&self) -> &EventChannel<ItemAdded> {
        &self.item_added
    }

    /// Emitted after the list is emptied.
    pub fn list_purged(&self) -> &EventChannel<()> {
        &self.list_purged
    }

    /// Apply a fault policy to both change channels.
    pub fn set_fault_policy(&self, policy: FaultPolicy) {
        self.item_added.set_fault_policy(policy);
        self.list_purged.set_fault_policy(policy);
    }
}

impl Default for ListModel {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

static_assertions::assert_impl_all!(ListModel: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotesError;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[test]
    fn test_items_keep_insertion_order() {
        let model = ListModel::default();
        for item in ["c", "a", "b", "a"] {
            model.add_item(item).unwrap();
        }

        assert_eq!(model.items(), vec!["c", "a", "b", "a"]);
        assert_eq!(model.len(), 4);
    }

    #[test]
    fn test_initial_items() {
        let model = ListModel::new(vec!["first".into(), "second".into()]);
        assert_eq!(model.items(), vec!["first", "second"]);
    }

    #[test]
    fn test_snapshot_is_isolated() {
        let model = ListModel::new(vec!["milk".into()]);

        let mut snapshot = model.items();
        snapshot.push("intruder".into());
        snapshot[0].push_str(" (edited)");
        snapshot.clear();

        assert_eq!(model.items(), vec!["milk"]);
    }

    #[test]
    fn test_clear_empties_any_contents() {
        let model = ListModel::new(vec!["a".into(), "b".into(), "c".into()]);
        model.clear_list().unwrap();
        assert!(model.items().is_empty());
        assert!(model.is_empty());

        // Clearing an empty list is fine too.
        model.clear_list().unwrap();
        assert!(model.items().is_empty());
    }

    #[test]
    fn test_no_validation_in_model() {
        let model = ListModel::default();
        model.add_item("").unwrap();
        model.add_item("   ").unwrap();
        assert_eq!(model.items(), vec!["", "   "]);
    }

    #[test]
    fn test_item_added_payload_and_sender() {
        let model = ListModel::default();
        let received = Arc::new(Mutex::new(Vec::new()));

        let received_clone = received.clone();
        model.item_added().attach(move |sender, added| {
            received_clone.lock().push((*sender, added.clone()));
        });

        model.add_item("hello").unwrap();

        let received = received.lock();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].0, model.sender());
        assert_eq!(received[0].1, ItemAdded { item: "hello".into() });
    }

    #[test]
    fn test_listeners_see_new_state() {
        let model = Arc::new(ListModel::default());
        let seen = Arc::new(Mutex::new(Vec::new()));

        let model_clone = model.clone();
        let seen_clone = seen.clone();
        model.item_added().attach(move |_, _| {
            seen_clone.lock().push(model_clone.len());
        });
        let model_clone = model.clone();
        let seen_clone = seen.clone();
        model.list_purged().attach(move |_, _| {
            seen_clone.lock().push(model_clone.len());
        });

        model.add_item("a").unwrap();
        model.add_item("b").unwrap();
        model.clear_list().unwrap();

        assert_eq!(*seen.lock(), vec![1, 2, 0]);
    }

    #[test]
    fn test_listener_fault_is_reported_after_mutation() {
        let model = ListModel::default();
        model.item_added().attach(|_, _| panic!("view fell over"));

        let err = model.add_item("kept").unwrap_err();
        assert!(matches!(err, NotesError::Delivery(_)));
        assert_eq!(model.items(), vec!["kept"]);
    }
}
