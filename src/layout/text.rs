use crate::font::Font;
use crate::page::Page;
use crate::units::Pt;
use std::str::SplitWhitespace;

/// The character appended by [truncate_to_width] when text is shortened
pub const ELLIPSIS: char = '…';

/// The seam between layout and font metrics: anything that can measure the
/// rendered width of a string at a given size. Implemented by [Font]; tests
/// substitute fixed-width measurers so no font asset is needed.
pub trait Measure {
    /// The rendered width of `text` at the given size. Characters the
    /// measurer does not know contribute nothing.
    fn text_width(&self, text: &str, size: Pt) -> Pt;
}

impl Measure for Font {
    fn text_width(&self, text: &str, size: Pt) -> Pt {
        text.chars().map(|ch| self.advance(ch, size)).sum()
    }
}

/// Calculate the width of a given string of text given the font and font size
pub fn width_of_text(text: &str, font: &Font, size: Pt) -> Pt {
    font.text_width(text, size)
}

/// Calculates the vertical offset from a text coordinate to the font's
/// baseline.
///
/// In PDF, text coordinates specify the baseline position. This returns the
/// negative ascent, which can be added to a y-coordinate to position text
/// from a top reference point.
pub fn baseline_offset(font: &Font, size: Pt) -> Pt {
    -font.ascent(size)
}

/// Calculates the coordinates where text can start on a page to sit just
/// within the top-left margin, taking the ascending height of the font into
/// account.
pub fn baseline_start(page: &Page, font: &Font, size: Pt) -> (Pt, Pt) {
    let x = page.content_box.x1;
    let y = page.content_box.y2 + baseline_offset(font, size);
    (x, y)
}

/// Greedily wrap `text` into lines no wider than `max_width`.
///
/// Words (whitespace-tokenized) are accumulated onto the current line while
/// the measured width of the candidate line stays under the limit; the word
/// that would overflow starts the next line. A single word wider than the
/// limit is placed alone on its line and is never split. Joining the produced
/// lines with single spaces reproduces the whitespace-normalized input.
///
/// The returned iterator is lazy and finite; clone it (or call this again)
/// to restart from the beginning. Empty input yields no lines.
pub fn wrap_words<'a, M: Measure>(
    text: &'a str,
    measure: &'a M,
    size: Pt,
    max_width: Pt,
) -> WrappedLines<'a, M> {
    WrappedLines {
        words: text.split_whitespace(),
        carried: None,
        measure,
        size,
        max_width,
    }
}

/// Iterator over greedily wrapped lines; see [wrap_words]
#[derive(Clone)]
pub struct WrappedLines<'a, M: Measure> {
    words: SplitWhitespace<'a>,
    /// the word that overflowed the previous line, opening the next one
    carried: Option<&'a str>,
    measure: &'a M,
    size: Pt,
    max_width: Pt,
}

impl<M: Measure> Iterator for WrappedLines<'_, M> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let mut line = match self.carried.take() {
            Some(word) => word.to_string(),
            None => self.words.next()?.to_string(),
        };

        for word in self.words.by_ref() {
            let candidate = format!("{line} {word}");
            if self.measure.text_width(&candidate, self.size).0 < self.max_width.0 {
                line = candidate;
            } else {
                self.carried = Some(word);
                break;
            }
        }

        Some(line)
    }
}

/// Shorten `text` so that it fits within `max_width`, trimming trailing
/// characters and appending a single ellipsis.
///
/// Text that already fits is returned unchanged, which also makes the
/// operation idempotent. Trimming stops early (accepting overflow) once
/// fewer than four characters remain, so output never becomes unreadably
/// short. The result is either the original text or ends in exactly one
/// ellipsis; it is never longer than the input plus the ellipsis.
pub fn truncate_to_width<M: Measure>(
    text: &str,
    measure: &M,
    size: Pt,
    max_width: Pt,
) -> String {
    if measure.text_width(text, size).0 <= max_width.0 {
        return text.to_string();
    }

    let mut kept: String = text.to_string();
    loop {
        if kept.chars().count() <= 3 {
            break;
        }
        let mut candidate = kept.clone();
        candidate.push(ELLIPSIS);
        if measure.text_width(&candidate, size).0 <= max_width.0 {
            break;
        }
        kept.pop();
    }
    kept.push(ELLIPSIS);
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    /// every character is `per_char` points wide, regardless of size
    #[derive(Clone)]
    struct FixedWidth {
        per_char: f32,
    }

    impl Measure for FixedWidth {
        fn text_width(&self, text: &str, _size: Pt) -> Pt {
            Pt(text.chars().count() as f32 * self.per_char)
        }
    }

    const M: FixedWidth = FixedWidth { per_char: 1.0 };

    fn wrap(text: &str, max_chars: f32) -> Vec<String> {
        wrap_words(text, &M, Pt(10.0), Pt(max_chars)).collect()
    }

    #[test]
    fn rejoining_lines_reproduces_the_input() {
        let text = "The Sicilian Defense is one of the most popular openings";
        let lines = wrap(text, 16.0);
        assert!(lines.len() > 1);
        assert_eq!(lines.join(" "), text);
    }

    #[test]
    fn rejoining_normalizes_whitespace() {
        let lines = wrap("  spaced \t out\n words  ", 100.0);
        assert_eq!(lines, vec!["spaced out words".to_string()]);
    }

    #[test]
    fn no_line_exceeds_the_width() {
        let text = "control the centre develop quickly castle early";
        for line in wrap(text, 12.0) {
            assert!(
                M.text_width(&line, Pt(10.0)).0 < 12.0,
                "line too wide: {line:?}"
            );
        }
    }

    #[test]
    fn an_overlong_word_sits_alone_and_unsplit() {
        let lines = wrap("a extraordinarily b", 10.0);
        assert_eq!(lines, vec!["a", "extraordinarily", "b"]);
    }

    #[test]
    fn empty_input_yields_no_lines() {
        assert!(wrap("", 10.0).is_empty());
        assert!(wrap("   ", 10.0).is_empty());
    }

    #[test]
    fn wrapping_is_restartable() {
        let mut lines = wrap_words("one two three four", &M, Pt(10.0), Pt(8.0));
        let restart = lines.clone();
        let first = lines.next().unwrap();
        assert_eq!(restart.collect::<Vec<_>>().first(), Some(&first));
    }

    #[test]
    fn fitting_text_is_returned_unchanged() {
        let text = "short";
        assert_eq!(truncate_to_width(text, &M, Pt(10.0), Pt(10.0)), text);
    }

    #[test]
    fn truncation_appends_exactly_one_ellipsis() {
        let out = truncate_to_width("a very long champions list", &M, Pt(10.0), Pt(10.0));
        assert!(out.ends_with(ELLIPSIS));
        assert_eq!(out.matches(ELLIPSIS).count(), 1);
    }

    #[test]
    fn fifty_chars_at_a_ten_char_budget() {
        let text: String = std::iter::repeat('x').take(50).collect();
        let out = truncate_to_width(&text, &M, Pt(10.0), Pt(10.0));
        assert!(out.chars().count() <= 11);
        assert!(out.ends_with(ELLIPSIS));
    }

    #[test]
    fn truncation_never_lengthens_and_is_idempotent() {
        let text = "The Queen's Gambit Declined";
        let once = truncate_to_width(text, &M, Pt(10.0), Pt(15.0));
        assert!(once.chars().count() <= text.chars().count() + 1);
        let twice = truncate_to_width(&once, &M, Pt(10.0), Pt(15.0));
        assert_eq!(once, twice);
    }

    #[test]
    fn trimming_stops_at_three_characters() {
        let out = truncate_to_width("abcdefgh", &M, Pt(10.0), Pt(1.0));
        assert_eq!(out, format!("abc{ELLIPSIS}"));
    }
}
