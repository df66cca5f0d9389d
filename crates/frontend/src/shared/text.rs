/// Splits free text on blank lines into trimmed, non-empty paragraphs.
///
/// `\r\n` line endings are normalized first; a line containing only
/// whitespace counts as blank.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in normalized.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line.trim());
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join("\n"));
    }
    paragraphs
}

/// First sentence of `text`, cut at `max_chars` with an ellipsis.
pub fn first_sentence(text: &str, max_chars: usize) -> String {
    let text = text.trim();
    let sentence = match text.find(". ") {
        Some(end) => &text[..=end],
        None => text,
    };
    if sentence.chars().count() <= max_chars {
        return sentence.to_string();
    }
    let cut: String = sentence.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}
