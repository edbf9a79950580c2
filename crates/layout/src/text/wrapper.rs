use crate::fonts::StandardFont;

/// One line produced by the wrapper, with its measured width.
#[derive(Debug, Clone, PartialEq)]
pub struct LineLayout {
    pub text: String,
    pub width: f32,
}

/// Greedy word wrap.
///
/// Words are appended to the current line while the measured width stays
/// within `max_width`; the word that would overflow starts the next line.
/// A word wider than `max_width` on its own is placed alone on a line rather
/// than split. Explicit newlines always end a line, and runs of whitespace
/// collapse to a single space.
pub fn break_lines(text: &str, font: StandardFont, font_size: f32, max_width: f32) -> Vec<LineLayout> {
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0.0;

        for word in paragraph.split_whitespace() {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current} {word}")
            };
            let candidate_width = font.width_of_text_at_size(&candidate, font_size);

            if candidate_width > max_width && !current.is_empty() {
                lines.push(LineLayout {
                    text: std::mem::take(&mut current),
                    width: current_width,
                });
                current_width = font.width_of_text_at_size(word, font_size);
                current.push_str(word);
            } else {
                current = candidate;
                current_width = candidate_width;
            }
        }

        if !current.is_empty() {
            lines.push(LineLayout {
                text: current,
                width: current_width,
            });
        }
    }
    lines
}
