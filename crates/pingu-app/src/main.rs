use pingu_app::{init_logging, App};

fn main() {
    console_error_panic_hook::set_once();
    init_logging();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting PINGU dashboard");

    leptos::mount::mount_to_body(App);
}
