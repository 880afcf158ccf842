//! Boolean ordered-subsequence test.

/// Check if every character of `pattern` appears in `candidate` in order.
///
/// Characters of `candidate` not consumed by the match are skipped, so the
/// match does not need to be contiguous. Comparison is ASCII
/// case-insensitive. An empty pattern matches vacuously.
///
/// # Arguments
/// * `pattern` - Query characters to find
/// * `candidate` - Text to search in
///
/// # Returns
/// true if all pattern characters are found in order
///
/// # Example
/// ```
/// use quickfind_matcher::is_subsequence_match;
///
/// assert!(is_subsequence_match("hwo", "hello world"));
/// assert!(!is_subsequence_match("owh", "hello world"));
/// ```
pub fn is_subsequence_match(pattern: &str, candidate: &str) -> bool {
    let mut pattern_chars = pattern.chars().peekable();

    for c in candidate.chars() {
        match pattern_chars.peek() {
            Some(p) if p.eq_ignore_ascii_case(&c) => {
                pattern_chars.next();
            }
            Some(_) => {}
            None => break,
        }
    }

    pattern_chars.peek().is_none()
}
