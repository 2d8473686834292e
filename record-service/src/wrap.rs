//! Column-aware line wrapping for record text.
//!
//! The record mixes Chinese and ASCII; wrapping by character count makes
//! CJK-heavy lines twice as wide as ASCII ones, so widths here are display
//! columns with wide characters counting as two.

/// Display width of one character: 2 for CJK and fullwidth forms, 1
/// otherwise.
pub fn char_width(c: char) -> usize {
    let wide = matches!(c as u32,
        0x1100..=0x115F        // Hangul Jamo
        | 0x2E80..=0xA4CF      // CJK radicals .. Yi
        | 0xAC00..=0xD7A3      // Hangul syllables
        | 0xF900..=0xFAFF      // CJK compatibility ideographs
        | 0xFE30..=0xFE4F      // CJK compatibility forms
        | 0xFF00..=0xFF60      // fullwidth forms
        | 0xFFE0..=0xFFE6
        | 0x2_0000..=0x2_FFFD
        | 0x3_0000..=0x3_FFFD);
    if wide {
        2
    } else {
        1
    }
}

/// Display width of a whole string.
pub fn display_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

/// Wrap `text` to at most `width` display columns per line.
///
/// Existing line breaks are kept. Lines break at any character boundary,
/// which is the right behavior for Chinese prose; a character wider than
/// the remaining budget starts a new line.
pub fn wrap_text(text: &str, width: usize) -> String {
    let width = width.max(2);
    let mut out = String::with_capacity(text.len());

    for (i, line) in text.lines().enumerate() {
        if i > 0 {
            out.push('\n');
        }

        let mut used = 0;
        for c in line.chars() {
            let w = char_width(c);
            if used + w > width && used > 0 {
                out.push('\n');
                used = 0;
            }
            out.push(c);
            used += w;
        }
    }

    out
}
