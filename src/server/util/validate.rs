//! Small field checks shared by several services.

pub const RESERVATION_NOTES_MAX_CHARS: usize = 2048;
pub const BILL_PLATE_NOTES_MAX_CHARS: usize = 1024;
pub const REVIEW_TITLE_MAX_CHARS: usize = 100;

/// Loose email shape check: a non-empty local part and a dotted domain.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

/// Length check in characters rather than bytes.
pub fn exceeds_chars(text: &str, max: usize) -> bool {
    text.chars().count() > max
}

/// Trims and maps blank strings to `None`.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
