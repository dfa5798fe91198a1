//! Delimiter splitting for deck lines

/// Split `line` on `delimiter`.
///
/// Empty tokens between delimiters are dropped, but whatever follows the
/// last delimiter is always kept, even when it is empty. A line without the
/// delimiter comes back as a single token.
pub fn split_by_delimiter(line: &str, delimiter: char) -> Vec<&str> {
    let mut parts: Vec<&str> = line.split(delimiter).collect();
    // `split` always yields at least one item; the last one is the remainder
    let remainder = parts.pop().unwrap_or("");
    parts.retain(|token| !token.is_empty());
    parts.push(remainder);
    parts
}
