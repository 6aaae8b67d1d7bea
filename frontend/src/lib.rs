mod pages;
pub mod config;
pub mod router;
pub mod state;

#[cfg(test)]
mod test_support;

fn init_logging() {
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"logger already initialized".into());
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    init_logging();
    log::info!("Starting Blitz frontend");
    router::mount_app();
}
