//! Console Logging
//!
//! Installs the browser-console backend for the `log` facade.

use log::Level;

/// Debug builds log at Debug, release builds at Info
pub fn init() {
    let level = if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    };
    // a second init (e.g. hot reload) keeps the first logger
    let _ = console_log::init_with_level(level);
}
