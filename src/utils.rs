/// 1-based line and column of a byte offset. Columns count characters,
/// not bytes. Offsets past the end clamp to the end of input.
pub fn line_column(input: &str, offset: usize) -> (usize, usize) {
    let mut at = offset.min(input.len());
    while !input.is_char_boundary(at) {
        at -= 1;
    }

    let consumed = &input[..at];
    let line = consumed.matches('\n').count() + 1;
    let line_start = consumed.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = consumed[line_start..].chars().count() + 1;
    (line, column)
}

/// Shorten a literal for use inside an error message.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars).collect();
        format!("{}...", head)
    }
}
