//! Status text drawn around the field.

/// Formats whole seconds as zero-padded `MM:SS`.
///
/// Minutes are not wrapped, so an hour reads `60:00`.
///
/// # Examples
/// ```
/// use turkey_field::hud::format_mm_ss;
/// assert_eq!(format_mm_ss(0), "00:00");
/// assert_eq!(format_mm_ss(75), "01:15");
/// ```
#[must_use]
pub fn format_mm_ss(total_seconds: u32) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Text of the play timer.
#[must_use]
pub fn timer_text(play_seconds: u32) -> String {
    format!("Time: {}", format_mm_ss(play_seconds))
}

/// Text of the catch counter.
#[must_use]
pub fn progress_text(caught: u32, quota: u32) -> String {
    format!("You caught {caught} of {quota} turkeys")
}
