//! Plain-text helpers for laying out copy before it becomes lines

/// Greedy word wrap. Words longer than `width` are split. Explicit line
/// breaks are kept, and an empty input still yields one (empty) line.
pub fn wrap(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        let mut current = String::new();
        let mut current_len = 0;

        for word in paragraph.split_whitespace() {
            let mut word: Vec<char> = word.chars().collect();

            // Hard-split anything that can never fit on a line
            while word.len() > width {
                if current_len > 0 {
                    lines.push(std::mem::take(&mut current));
                    current_len = 0;
                }
                let rest = word.split_off(width);
                lines.push(word.into_iter().collect());
                word = rest;
            }

            let needed = if current_len == 0 {
                word.len()
            } else {
                current_len + 1 + word.len()
            };
            if needed > width {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            if current_len > 0 {
                current.push(' ');
                current_len += 1;
            }
            current_len += word.len();
            current.extend(word);
        }

        lines.push(current);
    }

    lines
}

/// Cut user input into rows of at most `width` characters, keeping every
/// space as typed. Line breaks start a new row.
pub fn chunk(text: &str, width: u16) -> Vec<String> {
    let width = width.max(1) as usize;
    let mut rows = Vec::new();

    for line in text.split('\n') {
        let chars: Vec<char> = line.chars().collect();
        if chars.is_empty() {
            rows.push(String::new());
            continue;
        }
        rows.extend(chars.chunks(width).map(|row| row.iter().collect::<String>()));
    }

    rows
}

/// Left padding that centers `len` columns inside `width`
pub fn center_pad(len: usize, width: u16) -> String {
    " ".repeat((width as usize).saturating_sub(len) / 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wraps_on_word_boundaries() {
        assert_eq!(
            wrap("the quick brown fox jumps", 10),
            vec!["the quick", "brown fox", "jumps"]
        );
    }

    #[test]
    fn test_keeps_explicit_breaks() {
        assert_eq!(wrap("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn test_empty_text_is_one_empty_line() {
        assert_eq!(wrap("", 10), vec![""]);
    }

    #[test]
    fn test_splits_long_words() {
        assert_eq!(wrap("abcdefghij xy", 4), vec!["abcd", "efgh", "ij", "xy"]);
    }

    #[test]
    fn test_no_line_exceeds_width() {
        let text = "Centered in New York and Miami, and integrated into the global education network";
        for line in wrap(text, 17) {
            assert!(line.chars().count() <= 17, "{line:?}");
        }
    }

    #[test]
    fn test_chunk_keeps_spaces_as_typed() {
        assert_eq!(chunk("  Jane  Doe", 20), vec!["  Jane  Doe"]);
        assert_eq!(chunk("ab  cd ef", 4), vec!["ab  ", "cd e", "f"]);
    }

    #[test]
    fn test_chunk_breaks_and_empty_lines() {
        assert_eq!(chunk("", 10), vec![""]);
        assert_eq!(chunk("hi\n\n there", 10), vec!["hi", "", " there"]);
        assert_eq!(chunk("line\n", 10), vec!["line", ""]);
    }

    #[test]
    fn test_center_pad() {
        assert_eq!(center_pad(4, 10), "   ");
        assert_eq!(center_pad(20, 10), "");
    }
}
