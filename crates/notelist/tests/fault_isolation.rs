//! Behaviour when a listener panics in the middle of a chain.

use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use notelist::host::RenderTarget;
use notelist::host::headless::HeadlessHost;
use notelist::notelist_core::FaultPolicy;
use notelist::{compose, NotesConfig, NotesError, ViewBindings};

/// Accepts clears but panics on every append.
#[derive(Default)]
struct BrokenList {
    clears: AtomicUsize,
}

impl RenderTarget for BrokenList {
    fn clear_contents(&self) {
        self.clears.fetch_add(1, Ordering::SeqCst);
    }

    fn append_markup(&self, _fragment: &str) {
        panic!("render target gone");
    }
}

#[test]
fn faulty_model_listener_does_not_block_rebuild() {
    let host = HeadlessHost::new();
    let app = compose(host.bindings(), NotesConfig::default());

    let after = Arc::new(AtomicUsize::new(0));
    app.model().item_added().attach(|_, _| panic!("audit log unavailable"));
    let after_clone = after.clone();
    app.model().item_added().attach(move |_, _| {
        after_clone.fetch_add(1, Ordering::SeqCst);
    });

    host.text_input.type_text("eggs");
    host.add_button.click();

    // The view rebuilt and the listener after the faulty one still ran.
    assert_eq!(host.list.entries(), vec!["<li>eggs</li>"]);
    assert_eq!(after.load(Ordering::SeqCst), 1);
}

#[test]
fn direct_model_call_reports_the_fault() {
    let host = HeadlessHost::new();
    let app = compose(host.bindings(), NotesConfig::default());
    app.model().list_purged().attach(|_, _| panic!("nope"));

    let err = app.model().clear_list().unwrap_err();
    match err {
        NotesError::Delivery(signal) => {
            let faults = signal.faults();
            assert_eq!(faults.len(), 1);
            // The view's rebuild listener is first, the faulty one second.
            assert_eq!(faults[0].position, 1);
            assert_eq!(faults[0].message, "nope");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn propagate_policy_unwinds_to_the_host() {
    let host = HeadlessHost::new();
    let config = NotesConfig::default().with_fault_policy(FaultPolicy::Propagate);
    let app = compose(host.bindings(), config);

    let after = Arc::new(AtomicUsize::new(0));
    app.model().item_added().attach(|_, _| panic!("halt"));
    let after_clone = after.clone();
    app.model().item_added().attach(move |_, _| {
        after_clone.fetch_add(1, Ordering::SeqCst);
    });

    host.text_input.type_text("eggs");
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| host.add_button.click()));

    assert!(outcome.is_err());
    assert_eq!(after.load(Ordering::SeqCst), 0);
    // The mutation happened before delivery started.
    assert_eq!(app.model().items(), vec!["eggs"]);
}

#[test]
fn panicking_render_target_is_isolated() {
    let host = HeadlessHost::new();
    let list = Arc::new(BrokenList::default());
    let bindings = ViewBindings {
        list: list.clone(),
        ..host.bindings()
    };
    let app = compose(bindings, NotesConfig::default());

    let after = Arc::new(AtomicUsize::new(0));
    let after_clone = after.clone();
    app.model().item_added().attach(move |_, _| {
        after_clone.fetch_add(1, Ordering::SeqCst);
    });

    host.text_input.type_text("eggs");
    assert!(host.add_button.click());

    assert_eq!(app.model().items(), vec!["eggs"]);
    assert_eq!(after.load(Ordering::SeqCst), 1);
    // One clear from show(), one from the failed rebuild.
    assert_eq!(list.clears.load(Ordering::SeqCst), 2);

    // An empty rebuild appends nothing, so clearing still works.
    host.clear_button.click();
    assert!(app.model().is_empty());
    assert_eq!(app.view().rendered_count(), 0);
}
