//! Drive a note list without a real UI and watch the event chain in the logs.
//!
//! Run with: RUST_LOG=trace cargo run -p notelist --example headless_session

use notelist::host::headless::HeadlessHost;
use notelist::{compose, NotesConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("notelist=debug")),
        )
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => NotesConfig::from_file(path)?,
        None => NotesConfig::default(),
    };

    let host = HeadlessHost::new();
    let app = compose(host.bindings(), config);

    for text in ["eggs", "", "bread"] {
        host.text_input.type_text(text);
        host.add_button.click();
    }
    host.text_input.type_text("milk");
    host.text_input.press_key("Enter");

    println!("items: {:?}", app.model().items());
    for entry in host.list.entries() {
        println!("  {entry}");
    }

    host.clear_button.click();
    println!("after clear: {:?}", app.model().items());

    Ok(())
}
