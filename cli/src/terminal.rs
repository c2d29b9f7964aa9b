pub mod colors;
pub mod format;
pub mod logging;
pub mod print;

use cgpa_common::config::Config;

/// Applies the color settings before anything is printed.
pub fn init(cfg: &Config) {
    if cfg.no_color {
        colored::control::set_override(false);
    }
}
