//! Trunk entry point: set up logging and mount the app.

#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(carelink::app::App);
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    // The UI only runs in the browser; build with Trunk for wasm32.
}
