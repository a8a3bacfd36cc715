//! Browser entry point: logging, panic reporting, and mount.

#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("mounting timeleft widget");
    leptos::mount::mount_to_body(timeleft::app::App);
}

/// Off-browser builds have no surface to mount; tests exercise the library.
#[cfg(not(feature = "csr"))]
fn main() {}
