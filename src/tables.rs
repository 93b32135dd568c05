//! Static lookup tables used by the normalization stages.
//!
//! Every table maps a single source code point. No target of the character
//! variant table is itself a source, so a single pass never needs to re-fold.

/// Arabic-script variants folded to their preferred Persian form.
///
/// `None` removes the character. ZWNJ (U+200C) and plain Heh (U+0647) map to
/// themselves and are therefore left out.
pub const CHAR_VARIANTS: &[(char, Option<char>)] = &[
    ('\u{0643}', Some('\u{06A9}')), // Arabic Kaf -> Keheh
    ('\u{064A}', Some('\u{06CC}')), // Arabic Yeh -> Farsi Yeh
    ('\u{0649}', Some('\u{06CC}')), // Alef Maksura -> Farsi Yeh
    ('\u{0621}', Some('\u{0626}')), // Hamza -> Yeh with Hamza above
    ('\u{0629}', Some('\u{0647}')), // Teh Marbuta -> Heh
    ('\u{0623}', Some('\u{0627}')), // Alef with Hamza above -> Alef
    ('\u{0625}', Some('\u{0627}')), // Alef with Hamza below -> Alef
    ('\u{200D}', None),             // ZWJ
    ('\u{0624}', Some('\u{0648}')), // Waw with Hamza above -> Waw
];

/// Extended Arabic-Indic digits, in order 0-9.
pub const PERSIAN_DIGITS: [char; 10] = [
    '\u{06F0}', '\u{06F1}', '\u{06F2}', '\u{06F3}', '\u{06F4}', '\u{06F5}', '\u{06F6}', '\u{06F7}',
    '\u{06F8}', '\u{06F9}',
];

/// Arabic-Indic digits, in order 0-9.
pub const ARABIC_INDIC_DIGITS: [char; 10] = [
    '\u{0660}', '\u{0661}', '\u{0662}', '\u{0663}', '\u{0664}', '\u{0665}', '\u{0666}', '\u{0667}',
    '\u{0668}', '\u{0669}',
];

pub const ASCII_DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Arabic punctuation folded to ASCII.
///
/// Both the decimal and the thousands separator become a comma, so "1٫5" and
/// "1٬5" normalize to the same text.
pub const PUNCTUATION: &[(char, char)] = &[
    ('\u{061F}', '?'), // Arabic question mark
    ('\u{061B}', ';'), // Arabic semicolon
    ('\u{060C}', ','), // Arabic comma
    ('\u{066A}', '%'), // Arabic percent sign
    ('\u{066B}', ','), // Arabic decimal separator
    ('\u{066C}', ','), // Arabic thousands separator
];

pub fn char_variant(c: char) -> Option<Option<char>> {
    CHAR_VARIANTS
        .iter()
        .find(|(from, _)| *from == c)
        .map(|(_, to)| *to)
}

pub fn digit_value(c: char, digits: &[char; 10]) -> Option<usize> {
    digits.iter().position(|d| *d == c)
}

pub fn punctuation(c: char) -> Option<char> {
    PUNCTUATION
        .iter()
        .find(|(from, _)| *from == c)
        .map(|(_, to)| *to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn variant_targets_are_never_sources() {
        let sources: HashSet<char> = CHAR_VARIANTS.iter().map(|(from, _)| *from).collect();
        for (_, to) in CHAR_VARIANTS {
            if let Some(to) = to {
                assert!(!sources.contains(to), "{:?} is both target and source", to);
            }
        }
    }

    #[test]
    fn one_entry_per_source() {
        let sources: HashSet<char> = CHAR_VARIANTS.iter().map(|(from, _)| *from).collect();
        assert_eq!(sources.len(), CHAR_VARIANTS.len());

        let puncts: HashSet<char> = PUNCTUATION.iter().map(|(from, _)| *from).collect();
        assert_eq!(puncts.len(), PUNCTUATION.len());
    }

    #[test]
    fn zwnj_is_not_folded() {
        assert_eq!(char_variant('\u{200C}'), None);
        assert_eq!(char_variant('\u{200D}'), Some(None));
    }

    #[test]
    fn digit_tables_are_in_order() {
        for (i, c) in PERSIAN_DIGITS.iter().enumerate() {
            assert_eq!(*c as u32, 0x06F0 + i as u32);
        }
        for (i, c) in ARABIC_INDIC_DIGITS.iter().enumerate() {
            assert_eq!(*c as u32, 0x0660 + i as u32);
        }
        assert_eq!(digit_value('\u{06F7}', &PERSIAN_DIGITS), Some(7));
        assert_eq!(digit_value('7', &PERSIAN_DIGITS), None);
    }
}
