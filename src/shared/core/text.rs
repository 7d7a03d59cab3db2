use regex::Regex;
use std::sync::LazyLock;

pub const MAX_CONTEXT_CHARS: usize = 10_000;
pub const MAX_DESCRIPTION_CHARS: usize = 5_000;
pub const MAX_ADMIN_NOTES_CHARS: usize = 2_000;

static MARKUP_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"</?[A-Za-z][^<>]*>").expect("markup tag pattern is valid")
});

/// Strips markup tags, trims surrounding whitespace and truncates to
/// `max_chars` characters.
pub fn sanitize(text: &str, max_chars: usize) -> String {
    let truncated: String = text.chars().take(max_chars).collect();
    MARKUP_TAG.replace_all(&truncated, "").trim().to_string()
}

/// Like [`sanitize`], but maps blank results to `None`.
pub fn sanitize_optional(text: Option<&str>, max_chars: usize) -> Option<String> {
    text.map(|t| sanitize(t, max_chars)).filter(|t| !t.is_empty())
}
