//! Display-width aware word wrapping
//!
//! Chat bubbles and long descriptions mix Latin text with Indic scripts and
//! emoji, so widths are measured in terminal cells rather than chars.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrap `text` into lines no wider than `width` cells
///
/// Words longer than a full line are split at the cell boundary. Empty
/// input yields a single empty line so blank paragraphs keep their height.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if word_width > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            // The last piece stays open so the next word can join it
            let mut pieces = split_at_width(word, width);
            if let Some(last) = pieces.pop() {
                lines.extend(pieces);
                current_width = last.width();
                current = last;
            }
            continue;
        }

        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };

        if needed > width {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_width = word_width;
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_width = needed;
        }
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Wrap every line of a multi-line text, keeping blank lines
pub fn wrap_paragraphs<'a>(lines: impl Iterator<Item = &'a str>, width: usize) -> Vec<String> {
    lines.flat_map(|line| wrap(line, width)).collect()
}

fn split_at_width(word: &str, width: usize) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_width = 0;

    for c in word.chars() {
        let w = c.width().unwrap_or(0);
        if piece_width + w > width && !piece.is_empty() {
            pieces.push(std::mem::take(&mut piece));
            piece_width = 0;
        }
        piece.push(c);
        piece_width += w;
    }
    if !piece.is_empty() {
        pieces.push(piece);
    }
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_breaks_on_spaces() {
        assert_eq!(
            wrap("the quick brown fox", 10),
            vec!["the quick", "brown fox"]
        );
    }

    #[test]
    fn test_wrap_empty_keeps_one_line() {
        assert_eq!(wrap("", 10), vec![String::new()]);
    }

    #[test]
    fn test_wrap_hard_splits_long_words() {
        assert_eq!(
            wrap("https://services.ecourts.gov.in", 12),
            vec!["https://serv", "ices.ecourts", ".gov.in"]
        );
    }

    #[test]
    fn test_wrap_continues_after_split_piece() {
        assert_eq!(wrap("abcdefg hi", 5), vec!["abcde", "fg hi"]);
    }

    #[test]
    fn test_wrap_measures_wide_glyphs() {
        // Each ideograph is two cells wide
        let lines = wrap("法律 援助", 4);
        assert_eq!(lines, vec!["法律", "援助"]);
    }

    #[test]
    fn test_wrap_keeps_every_piece_of_wide_word() {
        // Three cells fit one ideograph per line
        let lines = wrap("法律援助", 3);
        assert_eq!(lines, vec!["法", "律", "援", "助"]);
        assert!(lines.iter().all(|line| line.width() <= 3));
    }

    #[test]
    fn test_wrap_split_word_followed_by_text() {
        let lines = wrap("abcdefghijk lm", 5);
        assert_eq!(lines, vec!["abcde", "fghij", "k lm"]);
    }

    #[test]
    fn test_wrap_paragraphs_keeps_blank_lines() {
        let text = "Welcome!\n\nHow may I help?";
        let lines = wrap_paragraphs(text.split('\n'), 40);
        assert_eq!(lines, vec!["Welcome!", "", "How may I help?"]);
    }
}
