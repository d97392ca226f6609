mod api;
mod components;
pub mod config;
mod error;
mod pages;
pub mod router;
mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

/// Browser entry point. Mounting does not wait for the runtime config
/// fetch; the API client resolves the base URL lazily on first request.
#[cfg(target_arch = "wasm32")]
pub fn mount() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Starting MediaLens frontend");

    leptos::spawn_local(async {
        config::init().await;
        log::info!("Runtime config initialized");
    });

    router::mount_app();
}
