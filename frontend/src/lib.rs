pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod repository;
pub mod router;
pub mod state;
#[cfg(test)]
pub(crate) mod test_support;
pub mod utils;

/// Installs the console logger and panic hook, resolves the runtime config,
/// then mounts the app.
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&format!("Logger already installed: {err}").into());
    }
    log::info!("Starting field monitoring frontend: initializing runtime config");

    leptos::spawn_local(async move {
        let cfg = config::init().await;
        log::info!(
            "Runtime config initialized ({} mode)",
            if cfg.is_mock_mode() { "mock" } else { "remote" }
        );
        router::mount_app();
    });
}
