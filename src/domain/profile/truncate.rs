//! Description truncation for reply listings.

/// How many characters of the parent question's description survive.
pub const QUESTION_PREVIEW_CHARS: usize = 20;

const ELLIPSIS: &str = "...";

/// Returns the first [`QUESTION_PREVIEW_CHARS`] characters of a description
/// with an ellipsis appended.
///
/// Counted in characters, not bytes, so multi-byte text never splits inside
/// a code point. The ellipsis is appended unconditionally, matching the
/// upstream display behavior even when the description is already short.
pub fn preview_description(description: &str) -> String {
    let mut preview: String = description.chars().take(QUESTION_PREVIEW_CHARS).collect();
    preview.push_str(ELLIPSIS);
    preview
}
