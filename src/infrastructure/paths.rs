//! Path utilities for the Zellij plugin sandbox.
//!
//! The host filesystem is visible under `/host`, which usually maps to the
//! directory Zellij was started from (typically the user's home).

use std::path::PathBuf;

/// Directory holding the portal's log files.
///
/// ```
/// use staff_portal::infrastructure::get_data_dir;
///
/// assert_eq!(
///     get_data_dir().to_str(),
///     Some("/host/.local/share/zellij/staff-portal")
/// );
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("staff-portal")
}

/// Maps `~`-prefixed paths into the sandbox.
///
/// ```
/// use staff_portal::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/portal.toml"), "/etc/portal.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") {
        path.replacen('~', "/host", 1)
    } else if path == "~" {
        "/host".to_string()
    } else {
        path.to_string()
    }
}
