//! # Field Sanitation
//!
//! String cleaning shared by the free-text lines of the record.
//!
//! ```text
//! "  Ivan\r\n\tHorvat   d.o.o. "
//!        │  CR/LF/tab → space, whitespace runs → one space, trim
//!        ▼
//! "Ivan Horvat d.o.o."
//!        │  truncate to N code points (never N bytes)
//!        ▼
//! "Ivan Horvat d."                (N = 14)
//! ```
//!
//! Diacritics (č, ć, đ, š, ž) are kept: the barcode payload is UTF-8.

/// Whitespace as the slip format understands it: ASCII space and the
/// ASCII control whitespace (tab, LF, VT, FF, CR).
#[inline]
fn is_field_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Collapses whitespace, trims, and truncates to `max_chars` code points.
///
/// Trailing whitespace exposed by the cut is trimmed too, so the result is
/// stable: `clean_and_truncate(clean_and_truncate(s, n), n) == clean_and_truncate(s, n)`.
/// A cut that lands right after a space therefore yields one character less
/// than the WooCommerce plugin, which keeps that space.
///
/// ## Example
/// ```rust
/// use hub3_core::sanitize::clean_and_truncate;
///
/// assert_eq!(clean_and_truncate(" Ilica\r\n 1 ", 27), "Ilica 1");
/// assert_eq!(clean_and_truncate("Čakovečka", 3), "Čak");
/// ```
pub fn clean_and_truncate(value: &str, max_chars: usize) -> String {
    let mut cleaned = String::with_capacity(value.len());
    for word in value.split(is_field_whitespace).filter(|w| !w.is_empty()) {
        if !cleaned.is_empty() {
            cleaned.push(' ');
        }
        cleaned.push_str(word);
    }

    truncate_chars(&cleaned, max_chars)
        .trim_end_matches(is_field_whitespace)
        .to_string()
}

/// Returns the longest prefix of `value` with at most `max_chars` code points.
///
/// ## Example
/// ```rust
/// use hub3_core::sanitize::truncate_chars;
///
/// assert_eq!(truncate_chars("žžžž", 2), "žž");
/// assert_eq!(truncate_chars("ab", 5), "ab");
/// ```
pub fn truncate_chars(value: &str, max_chars: usize) -> &str {
    match value.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &value[..byte_idx],
        None => value,
    }
}

/// Uppercases an IBAN and removes every whitespace character.
///
/// ## Example
/// ```rust
/// use hub3_core::sanitize::clean_iban;
///
/// assert_eq!(clean_iban("hr12 1001 0051 8630 0016 0"), "HR1210010051863000160");
/// ```
pub fn clean_iban(iban: &str) -> String {
    iban.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Keeps only ASCII digits and hyphens: the character set allowed in a
/// reference number.
pub fn digits_and_hyphens(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '-')
        .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_characters_become_single_spaces() {
        assert_eq!(clean_and_truncate("a\r\nb", 30), "a b");
        assert_eq!(clean_and_truncate("a\t\t\tb", 30), "a b");
        assert_eq!(clean_and_truncate("a \r\n \t b", 30), "a b");
        assert_eq!(clean_and_truncate("\n\n lead and trail \t", 30), "lead and trail");
        assert_eq!(clean_and_truncate("", 30), "");
        assert_eq!(clean_and_truncate(" \r\n\t ", 30), "");
    }

    #[test]
    fn test_diacritics_preserved() {
        assert_eq!(
            clean_and_truncate("Plaćanje narudžbe Đurđevac", 35),
            "Plaćanje narudžbe Đurđevac"
        );
    }

    #[test]
    fn test_truncation_counts_code_points_not_bytes() {
        // 29 ASCII letters, then 'ž' at position 30, then two more letters:
        // 32 code points, 33 bytes.
        let input = format!("{}žab", "a".repeat(29));
        assert_eq!(input.chars().count(), 32);

        let out = clean_and_truncate(&input, 30);
        assert_eq!(out.chars().count(), 30);
        assert!(out.ends_with('ž'));
        assert_eq!(out.len(), 31);
    }

    #[test]
    fn test_truncation_drops_exposed_trailing_space() {
        assert_eq!(clean_and_truncate("abc def", 4), "abc");
        assert_eq!(clean_and_truncate("abc def", 5), "abc d");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "  Ivan \r\n Horvat  ",
            "Trg bana Josipa Jelačića 15, stan 7",
            "abc def",
            "\t\t",
            "ŠŠŠŠŠŠŠŠŠŠŠŠŠŠŠŠŠŠŠŠŠŠŠŠŠŠŠŠŠŠŠŠŠŠ",
        ];
        for sample in samples {
            for max in [0, 1, 4, 25, 30, 35] {
                let once = clean_and_truncate(sample, max);
                assert_eq!(clean_and_truncate(&once, max), once, "{sample:?} / {max}");
            }
        }
    }

    #[test]
    fn test_clean_iban() {
        assert_eq!(clean_iban("HR12 1001 0051 8630 0016 0"), "HR1210010051863000160");
        assert_eq!(clean_iban(" hr1210010051863000160\n"), "HR1210010051863000160");
        assert_eq!(clean_iban(""), "");
    }

    #[test]
    fn test_digits_and_hyphens() {
        assert_eq!(digits_and_hyphens("INV45"), "45");
        assert_eq!(digits_and_hyphens("2026/01-31 x"), "202601-31");
        assert_eq!(digits_and_hyphens("ABC"), "");
        // Non-ASCII digits are not reference characters
        assert_eq!(digits_and_hyphens("١٢3"), "3");
    }
}
