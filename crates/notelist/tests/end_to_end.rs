//! Full interaction chains driven through the headless host.

use std::sync::Arc;

use notelist::host::TextInput;
use notelist::host::headless::{HeadlessHost, RenderOp};
use notelist::{compose, ItemAdded, NotesConfig, RenderMode};
use parking_lot::Mutex;

fn setup() -> (HeadlessHost, notelist::NotesApp) {
    let host = HeadlessHost::new();
    let app = compose(host.bindings(), NotesConfig::default());
    (host, app)
}

fn add_via_button(host: &HeadlessHost, text: &str) {
    host.text_input.type_text(text);
    host.add_button.click();
}

#[test]
fn shopping_session() {
    let (host, app) = setup();
    // show() performed the first rebuild: one clear, nothing appended.
    assert_eq!(host.list.take_ops(), vec![RenderOp::Clear]);

    add_via_button(&host, "eggs");
    add_via_button(&host, "");
    add_via_button(&host, "bread");

    assert_eq!(app.model().items(), vec!["eggs", "bread"]);
    assert_eq!(
        host.list.take_ops(),
        vec![
            RenderOp::Clear,
            RenderOp::Append("<li>eggs</li>".into()),
            RenderOp::Clear,
            RenderOp::Append("<li>eggs</li>".into()),
            RenderOp::Append("<li>bread</li>".into()),
        ]
    );
    assert_eq!(app.view().rendered_count(), 2);

    host.clear_button.click();
    assert!(app.model().items().is_empty());
    assert_eq!(host.list.take_ops(), vec![RenderOp::Clear]);
    assert_eq!(app.view().rendered_count(), 0);
}

#[test]
fn enter_submits_and_other_keys_do_not() {
    let (host, app) = setup();
    host.text_input.type_text("milk");

    host.text_input.press_key("Tab");
    assert!(app.model().is_empty());

    host.text_input.press_key("Enter");
    assert_eq!(app.model().items().last().map(String::as_str), Some("milk"));
    assert_eq!(host.text_input.value(), "");
    assert_eq!(app.view().input_text(), "");
}

#[test]
fn enter_submits_whitespace_verbatim() {
    let (host, app) = setup();
    host.text_input.type_text("   ");
    host.text_input.press_key("Enter");

    assert_eq!(app.model().items(), vec!["   "]);
    assert_eq!(host.list.entries(), vec!["<li>   </li>"]);
    assert_eq!(host.text_input.value(), "");
}

#[test]
fn listener_may_add_items_while_notified() {
    let (host, app) = setup();
    let model = Arc::downgrade(app.model());
    app.model().item_added().attach(move |_, added| {
        if added.item == "eggs" {
            if let Some(model) = model.upgrade() {
                model.add_item("bacon").unwrap();
            }
        }
    });

    add_via_button(&host, "eggs");

    assert_eq!(app.model().items(), vec!["eggs", "bacon"]);
    assert_eq!(host.list.entries(), vec!["<li>eggs</li>", "<li>bacon</li>"]);
    assert_eq!(app.view().rendered_count(), 2);
}

#[test]
fn add_path_fires_item_added_exactly_once() {
    let (host, app) = setup();
    let added = Arc::new(Mutex::new(Vec::new()));

    let added_clone = added.clone();
    app.model()
        .item_added()
        .attach(move |_, payload| added_clone.lock().push(payload.clone()));

    add_via_button(&host, "");
    assert!(added.lock().is_empty());
    assert!(app.model().is_empty());

    add_via_button(&host, "hello");
    assert_eq!(
        *added.lock(),
        vec![ItemAdded {
            item: "hello".into()
        }]
    );
}

#[test]
fn snapshots_do_not_leak_into_model() {
    let (host, app) = setup();
    add_via_button(&host, "eggs");

    let mut snapshot = app.model().items();
    snapshot.push("sneaky".into());

    assert_eq!(app.model().items(), vec!["eggs"]);
    assert_eq!(host.list.entries(), vec!["<li>eggs</li>"]);
}

#[test]
fn raw_markup_mode_passes_text_through() {
    let host = HeadlessHost::new();
    let config = NotesConfig::default().with_render_mode(RenderMode::RawMarkup);
    let _app = compose(host.bindings(), config);

    add_via_button(&host, "<em>soon</em>");
    assert_eq!(host.list.entries(), vec!["<li><em>soon</em></li>"]);
}

#[test]
fn composition_from_toml() {
    let config = NotesConfig::from_toml_str(
        r#"
        initial_items = ["a & b"]
        "#,
    )
    .unwrap();
    let host = HeadlessHost::new();
    let app = compose(host.bindings(), config);

    assert_eq!(app.model().items(), vec!["a & b"]);
    assert_eq!(host.list.entries(), vec!["<li>a &amp; b</li>"]);
}
