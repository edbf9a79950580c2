use permit_layout::fonts::win_ansi_code;

/// Encodes `s` for a simple font using WinAnsiEncoding.
///
/// Returns the encoded bytes and the number of characters that had no WinAnsi
/// code and were replaced by `?`.
pub fn to_win_ansi(s: &str) -> (Vec<u8>, usize) {
    let mut unknown = 0;
    let bytes = s
        .chars()
        .map(|c| match win_ansi_code(c) {
            Some(b) => b,
            None => {
                unknown += 1;
                b'?'
            }
        })
        .collect();
    (bytes, unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin1_passes_through() {
        let (bytes, unknown) = to_win_ansi("Permissão nº 5");
        assert_eq!(bytes, b"Permiss\xE3o n\xBA 5");
        assert_eq!(unknown, 0);
    }

    #[test]
    fn typographic_punctuation_is_mapped() {
        let (bytes, _) = to_win_ansi("\u{201C}ok\u{201D} \u{2013} 10€");
        assert_eq!(bytes, b"\x93ok\x94 \x96 10\x80");
    }

    #[test]
    fn unknown_characters_become_question_marks() {
        let (bytes, unknown) = to_win_ansi("a✓b漢");
        assert_eq!(bytes, b"a?b?");
        assert_eq!(unknown, 2);
    }

    #[test]
    fn control_characters_are_replaced() {
        let (bytes, unknown) = to_win_ansi("a\tb");
        assert_eq!(bytes, b"a?b");
        assert_eq!(unknown, 1);
    }
}
