//! Local-time stamps for comment substitution, log lines and file headers.

use chrono::Local;

/// Stamp written in place of the `@@@` marker inside comment lines.
pub(crate) const COMMENT_STAMP: &str = "%Y-%m-%d %H:%M:%S %Z";

/// Stamp prefixed to every log line, seconds with microsecond fraction.
pub(crate) const LOG_STAMP: &str = "%H:%M:%S,%6f";

/// Stamp appended to generated file headers.
pub(crate) const FILE_STAMP: &str = "%Y-%m-%d %H:%M:%S%.6f %Z";

/// Formats the current local time with the given chrono format string.
pub(crate) fn now(format: &str) -> String {
    Local::now().format(format).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_stamp_shape() {
        let stamp = now(COMMENT_STAMP);
        // YYYY-MM-DD HH:MM:SS plus a zone suffix
        assert!(stamp.len() >= 19);
        assert_eq!(&stamp[4..5], "-");
        assert_eq!(&stamp[13..14], ":");
    }

    #[test]
    fn test_log_stamp_has_fraction() {
        let stamp = now(LOG_STAMP);
        assert!(stamp.contains(','));
        let fraction = stamp.rsplit(',').next().unwrap();
        assert_eq!(fraction.len(), 6);
    }
}
