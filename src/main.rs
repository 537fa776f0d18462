use canopy_client::app::App;

#[cfg(feature = "browser")]
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::prelude::mount_to_body(App);
}

#[cfg(not(feature = "browser"))]
fn main() {
    // The binary only does anything as a wasm build; see the `browser`
    // feature in Cargo.toml.
    let _ = App;
}
