//! CLI subcommand handlers.

pub mod contacts;
pub mod login;
pub mod send;
pub mod status;

use wabulk_core::config::Config;
use wabulk_core::shellexpand;

/// Resolve the contacts CSV path: explicit flag wins, else the configured one.
pub fn contacts_path(cfg: &Config, explicit: Option<&str>) -> String {
    shellexpand(explicit.unwrap_or(&cfg.contacts.path))
}
