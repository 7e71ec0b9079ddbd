use super::*;

/// Splits a command line into words. Single or double quotes group a value
/// that contains spaces; the other quote kind is literal inside them.
pub(super) fn split_words(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut word: Option<String> = None;
    let mut quote: Option<char> = None;

    for ch in line.chars() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => word.get_or_insert_with(String::new).push(ch),
            None if ch == '"' || ch == '\'' => {
                quote = Some(ch);
                word.get_or_insert_with(String::new);
            }
            None if ch.is_whitespace() => words.extend(word.take()),
            None => word.get_or_insert_with(String::new).push(ch),
        }
    }

    if let Some(q) = quote {
        anyhow::bail!("missing closing {}", q);
    }
    words.extend(word);
    Ok(words)
}
