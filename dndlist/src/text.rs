use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Word-wrap `s` to lines no wider than `max_width` columns. Words wider than
/// the limit are broken at character boundaries. Explicit newlines are kept.
/// A `max_width` of zero disables wrapping.
pub fn wrap(s: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return s.split('\n').map(str::to_string).collect();
    }

    let mut lines = Vec::new();
    for input_line in s.split('\n') {
        let mut line = String::new();
        let mut width = 0;

        for word in input_line.split_whitespace() {
            let word_width = display_width(word);
            let gap = usize::from(!line.is_empty());

            if width + gap + word_width <= max_width {
                if gap == 1 {
                    line.push(' ');
                }
                line.push_str(word);
                width += gap + word_width;
                continue;
            }

            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                width = 0;
            }

            if word_width <= max_width {
                line.push_str(word);
                width = word_width;
                continue;
            }

            // Oversized word: hard-break, keep the tail open for the next word.
            for ch in word.chars() {
                let w = char_width(ch);
                if width + w > max_width && !line.is_empty() {
                    lines.push(std::mem::take(&mut line));
                    width = 0;
                }
                line.push(ch);
                width += w;
            }
        }

        lines.push(line);
    }
    lines
}

/// Left padding that centers `text_width` columns within `available` columns.
pub fn center_offset(text_width: usize, available: usize) -> usize {
    available.saturating_sub(text_width) / 2
}
