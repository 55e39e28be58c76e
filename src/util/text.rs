use std::borrow::Cow;

/// Remove control characters (C0, DEL, C1) from user-supplied text.
///
/// Returns `Cow::Borrowed` when nothing needs stripping.
///
/// # Examples
///
/// ```
/// use headlines::util::strip_control_chars;
///
/// assert_eq!(strip_control_chars("plain"), "plain");
/// assert_eq!(strip_control_chars("a\u{1b}[31mb\u{7f}"), "a[31mb");
/// ```
pub fn strip_control_chars(s: &str) -> Cow<'_, str> {
    if !s.chars().any(char::is_control) {
        return Cow::Borrowed(s);
    }
    Cow::Owned(s.chars().filter(|c| !c.is_control()).collect())
}

/// Strip control characters and surrounding whitespace.
pub fn clean_text(s: &str) -> String {
    strip_control_chars(s).trim().to_owned()
}

/// Clean each tag, dropping blanks and repeats while keeping first-seen order.
pub fn clean_tags<I, S>(tags: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<String> = Vec::new();
    for tag in tags {
        let cleaned = clean_text(tag.as_ref());
        if !cleaned.is_empty() && !out.contains(&cleaned) {
            out.push(cleaned);
        }
    }
    out
}
