use std::convert::Infallible;

/// Greedy word wrap against a pixel budget.
///
/// Words are split on whitespace and joined with single spaces. A word wider than `max_width`
/// on its own is emitted alone on its line, never split. Empty input yields no lines.
pub fn wrap(text: &str, max_width: f32, mut measure: impl FnMut(&str) -> f32) -> Vec<String> {
    match try_wrap(text, max_width, |s| Ok::<_, Infallible>(measure(s))) {
        Ok(lines) => lines,
        Err(never) => match never {},
    }
}

/// [`wrap`] with a fallible measurement function.
pub fn try_wrap<E>(
    text: &str,
    max_width: f32,
    mut measure: impl FnMut(&str) -> Result<f32, E>,
) -> Result<Vec<String>, E> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let trial_len = current.len();
        current.push(' ');
        current.push_str(word);
        if measure(&current)? <= max_width {
            continue;
        }
        current.truncate(trial_len);
        lines.push(std::mem::replace(&mut current, word.to_owned()));
    }
    if !current.is_empty() {
        lines.push(current);
    }
    Ok(lines)
}

#[cfg(test)]
#[path = "../../tests/unit/text/wrap.rs"]
mod tests;
