use super::metrics::measure_text_width;
use stagerider_style::TextStyle;

const ELLIPSIS: char = '\u{2026}';

/// Greedy word wrap. Explicit newlines always break; words wider than
/// `max_width` are split between characters. Always returns at least one line.
pub fn wrap_text(text: &str, style: &TextStyle, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        wrap_paragraph(paragraph.trim_end_matches('\r'), style, max_width, &mut lines);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn wrap_paragraph(paragraph: &str, style: &TextStyle, max_width: f32, lines: &mut Vec<String>) {
    let mut current = String::new();
    let space_width = measure_text_width(" ", style);
    let mut current_width = 0.0;

    for word in paragraph.split_whitespace() {
        let word_width = measure_text_width(word, style);
        if !current.is_empty() && current_width + space_width + word_width <= max_width {
            current.push(' ');
            current.push_str(word);
            current_width += space_width + word_width;
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if word_width <= max_width {
            current.push_str(word);
            current_width = word_width;
        } else {
            let mut pieces = break_word(word, style, max_width);
            let last = pieces.pop().unwrap_or_default();
            lines.extend(pieces);
            current_width = measure_text_width(&last, style);
            current = last;
        }
    }
    lines.push(current);
}

fn break_word(word: &str, style: &TextStyle, max_width: f32) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    for c in word.chars() {
        piece.push(c);
        if measure_text_width(&piece, style) > max_width && piece.chars().count() > 1 {
            piece.pop();
            pieces.push(std::mem::take(&mut piece));
            piece.push(c);
        }
    }
    pieces.push(piece);
    pieces
}

/// Limits `lines` to `max_lines`, ending the last kept line with an ellipsis
/// that fits inside `max_width`.
pub fn truncate_lines(mut lines: Vec<String>, max_lines: usize, style: &TextStyle, max_width: f32) -> Vec<String> {
    if max_lines == 0 || lines.len() <= max_lines {
        return lines;
    }
    lines.truncate(max_lines);
    if let Some(last) = lines.last_mut() {
        let mut shortened = last.trim_end().to_string();
        loop {
            let candidate = format!("{}{}", shortened, ELLIPSIS);
            if shortened.is_empty() || measure_text_width(&candidate, style) <= max_width {
                *last = candidate;
                break;
            }
            shortened.pop();
        }
    }
    lines
}
