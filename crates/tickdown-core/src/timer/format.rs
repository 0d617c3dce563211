//! Clock formatting for the timer display and the widget badge.

/// `MM:SS` with zero-padded minutes, used by the main timer display.
pub fn format_clock(total_seconds: u64) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// `M:SS` with unpadded minutes, used by the compact widget badge.
pub fn format_badge(total_seconds: u64) -> String {
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_pads_both_fields() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(125), "02:05");
        assert_eq!(format_clock(600), "10:00");
    }

    #[test]
    fn badge_pads_seconds_only() {
        assert_eq!(format_badge(0), "0:00");
        assert_eq!(format_badge(65), "1:05");
        assert_eq!(format_badge(3599), "59:59");
    }
}
