//! HR Management Global Script Entry Point

use hr_confirm_guard::dom;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    if console_logger::init(LevelFilter::Info).is_err() {
        web_sys::console::warn_1(&"[GUARD] logger already installed".into());
    }
    log::info!("HR Management System global script loaded.");
    if let Err(err) = dom::expose_log_buffer(dom::LOG_HOOK_NAME) {
        log::warn!("[GUARD] {}", err);
    }

    let installed = dom::document().and_then(|document| {
        let config = dom::load_config(&document);
        dom::install_on_ready(document, config)
    });
    if let Err(err) = installed {
        log::error!("[GUARD] install failed: {}", err);
    }
}
