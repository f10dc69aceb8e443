//! Logging middleware
//!
//! Request logging helpers. Passwords never reach these functions.

use log::info;

/// Longest site key written to the log, in characters
const MAX_LOGGED_KEY_CHARS: usize = 64;

/// Caller-supplied site key, cut down to a size fit for a log line.
pub fn loggable_key(site_key: &str) -> String {
    match site_key.char_indices().nth(MAX_LOGGED_KEY_CHARS) {
        Some((end, _)) => format!("{}...", &site_key[..end]),
        None => site_key.to_string(),
    }
}

/// Log an incoming verification request
pub fn log_request(site_key: &str) {
    info!("Verification requested for site {:?}", loggable_key(site_key));
}

/// Log a successful verification
pub fn log_granted(site_key: &str) {
    info!("Verification granted for site {:?}", loggable_key(site_key));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_key_unchanged() {
        assert_eq!(loggable_key("neteaseMusic"), "neteaseMusic");
        assert_eq!(loggable_key(""), "");
    }

    #[test]
    fn test_long_key_truncated() {
        let huge = "k".repeat(4 * 1024 * 1024);
        let logged = loggable_key(&huge);
        assert_eq!(logged, format!("{}...", "k".repeat(MAX_LOGGED_KEY_CHARS)));
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        let key = "网".repeat(MAX_LOGGED_KEY_CHARS + 1);
        assert_eq!(loggable_key(&key), format!("{}...", "网".repeat(MAX_LOGGED_KEY_CHARS)));
    }
}
