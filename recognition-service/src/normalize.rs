//! Transcript cleanup between the board and the consultation layer.

/// Punctuation accepted as a sentence ending.
const TERMINALS: [char; 6] = ['。', '？', '！', '.', '?', '!'];

/// Normalize a speech transcript.
///
/// The board pads hesitant speech with a trailing ellipsis; downstream
/// prompt handling expects every question to end in exactly one terminal
/// punctuation mark. Rules, in order: trim surrounding whitespace, reduce
/// a trailing ellipsis to a single stop, append `。` when no terminal
/// punctuation is present.
pub fn normalize_transcript(raw: &str) -> String {
    let mut text = raw.trim().to_string();

    if let Some(stripped) = text.strip_suffix("。。。") {
        text = format!("{stripped}。");
    } else if let Some(stripped) = text.strip_suffix("...") {
        text = format!("{stripped}.");
    }

    if !text.is_empty() && !text.ends_with(&TERMINALS[..]) {
        text.push('。');
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_terminal_stop() {
        assert_eq!(normalize_transcript("发热，头痛"), "发热，头痛。");
    }

    #[test]
    fn keeps_existing_terminal_punctuation() {
        assert_eq!(normalize_transcript("最近睡眠不好怎么办？"), "最近睡眠不好怎么办？");
        assert_eq!(normalize_transcript("I have a headache."), "I have a headache.");
    }

    #[test]
    fn reduces_trailing_ellipsis() {
        assert_eq!(normalize_transcript("嗓子疼。。。"), "嗓子疼。");
        assert_eq!(normalize_transcript("sore throat..."), "sore throat.");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert_eq!(normalize_transcript("  头晕乏力  "), "头晕乏力。");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize_transcript("   "), "");
    }
}
