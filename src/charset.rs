//! GSM 03.38 default-alphabet membership and length accounting.
//!
//! Classification is driven by two disjoint character sets: the basic
//! alphabet (one septet per character) and the extension table (an escape
//! septet plus a septet, so two characters of budget each). A single
//! character outside both sets forces the whole message into UCS-2.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// Basic-alphabet characters that are not ASCII alphanumerics.
///
/// `A`-`Z`, `a`-`z`, and `0`-`9` are members too and are range-checked
/// instead of listed. U+001B is the escape septet itself.
const BASIC_TABLE: &[char] = &[
    '@', '£', '$', '¥', 'è', 'é', 'ù', 'ì', 'ò', 'Ç', '\n', 'Ø', 'ø', '\r',
    'Å', 'å', 'Δ', '_', 'Φ', 'Γ', 'Λ', 'Ω', 'Π', 'Ψ', 'Σ', 'Θ', 'Ξ',
    '\u{1B}', 'Æ', 'æ', 'ß', 'É', ' ', '!', '"', '#', '¤', '%', '&', '\'',
    '(', ')', '*', '+', ',', '-', '.', '/', ':', ';', '<', '=', '>', '?',
    '¡', 'Ä', 'Ö', 'Ñ', 'Ü', '§', '¿', 'ä', 'ö', 'ñ', 'ü', 'à',
];

/// Extension-table characters. Each one encodes as an escape pair and counts
/// as two characters of segment budget.
const EXTENDED_TABLE: &[char] = &['^', '{', '}', '\\', '[', '~', ']', '|', '€'];

static BASIC_SET: Lazy<HashSet<char>> = Lazy::new(|| BASIC_TABLE.iter().copied().collect());

static EXTENDED_SET: Lazy<HashSet<char>> = Lazy::new(|| EXTENDED_TABLE.iter().copied().collect());

fn is_basic(c: char) -> bool {
    c.is_ascii_alphanumeric() || BASIC_SET.contains(&c)
}

fn is_extended(c: char) -> bool {
    EXTENDED_SET.contains(&c)
}

/// Returns `true` iff every character of `text` is representable in GSM-7.
///
/// The empty string is trivially representable.
pub fn is_gsm7(text: &str) -> bool {
    text.chars().all(|c| is_basic(c) || is_extended(c))
}

/// GSM-7 length of `text`: one per basic character, two per extension
/// character.
///
/// Characters outside both sets count as one. Callers are expected to gate
/// on [`is_gsm7`] first; such characters cannot actually be encoded.
pub fn gsm7_len(text: &str) -> usize {
    text.chars().map(|c| if is_extended(c) { 2 } else { 1 }).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_is_gsm7() {
        assert!(is_gsm7(""));
        assert_eq!(gsm7_len(""), 0);
    }

    #[test]
    fn plain_ascii_text_is_gsm7() {
        assert!(is_gsm7("Your code is 429871. It expires in 10 minutes."));
        assert!(is_gsm7("ABCXYZ abcxyz 0123456789"));
    }

    #[test]
    fn accented_and_greek_members_are_gsm7() {
        assert!(is_gsm7("àèéùìò ÇØøÅå ÄÖÑÜ äöñü Ææß É"));
        assert!(is_gsm7("ΔΦΓΛΩΠΨΣΘΞ"));
        assert!(is_gsm7("@£$¥ ¡¿ §¤ \r\n"));
        assert!(is_gsm7("\u{1B}"));
    }

    #[test]
    fn extension_characters_are_gsm7_but_cost_two() {
        for c in ['^', '{', '}', '\\', '[', '~', ']', '|', '€'] {
            let s = c.to_string();
            assert!(is_gsm7(&s), "expected {c:?} to be GSM-7");
            assert_eq!(gsm7_len(&s), 2, "expected {c:?} to weigh 2");
        }
        assert_eq!(gsm7_len("{code}"), 8);
    }

    #[test]
    fn characters_outside_both_sets_break_compatibility() {
        assert!(!is_gsm7("日本語"));
        assert!(!is_gsm7("hello 🦀"));
        assert!(!is_gsm7("naïve"));
        assert!(!is_gsm7("résumé—draft"));
    }

    #[test]
    fn length_mixes_basic_and_extended_weights() {
        assert_eq!(gsm7_len("Hello"), 5);
        assert_eq!(gsm7_len("10€"), 4);
        assert_eq!(gsm7_len("a[b]"), 6);
    }
}
