/// Prefix shared by every reminder cache key.
pub const REMINDER_KEY_PREFIX: &str = "reminders:";

/// Returns the cache key for a single reminder.
///
/// # Examples
///
/// ```
/// use reminders_core::cache::reminder_key;
///
/// assert_eq!(reminder_key("abc-123"), "reminders:abc-123");
/// ```
pub fn reminder_key(reminder_id: &str) -> String {
    format!("{REMINDER_KEY_PREFIX}{reminder_id}")
}
