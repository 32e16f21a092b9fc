//! Character reference decoding for the tokenizer.
//!
//! Handles `&#NNN;`, `&#xHH;` and the named references known to
//! [`super::named_character_references`]. Anything unrecognized is kept as a
//! literal `&` and the input is left where it was.

use super::core::HTMLTokenizer;
use super::named_character_references::{is_legacy_entity, lookup_entity};

impl HTMLTokenizer {
    /// Decode the character reference following an already consumed `&`.
    ///
    /// Returns the replacement text and advances past the reference, or
    /// returns `"&"` without advancing when no reference is recognized.
    pub(super) fn consume_character_reference(&mut self) -> String {
        let rest = &self.input[self.current_pos..];

        if let Some(numeric) = rest.strip_prefix('#') {
            let (prefix_len, radix) = if numeric.starts_with(['x', 'X']) {
                (1, 16)
            } else {
                (0, 10)
            };
            let body = &numeric[prefix_len..];
            let digits_len = body
                .find(|c: char| !c.is_digit(radix))
                .unwrap_or(body.len());
            if digits_len == 0 {
                return "&".to_string();
            }
            let has_semicolon = body[digits_len..].starts_with(';');
            // Out-of-range and NUL code points become U+FFFD.
            let decoded = u32::from_str_radix(&body[..digits_len], radix)
                .ok()
                .and_then(char::from_u32)
                .filter(|&c| c != '\0')
                .unwrap_or('\u{FFFD}');
            self.current_pos += 1 + prefix_len + digits_len + usize::from(has_semicolon);
            return decoded.to_string();
        }

        let name_len = rest
            .find(|c: char| !c.is_ascii_alphanumeric())
            .unwrap_or(rest.len());
        let name = &rest[..name_len];
        let has_semicolon = rest[name_len..].starts_with(';');
        if let Some(decoded) = lookup_entity(name)
            && (has_semicolon || is_legacy_entity(name))
        {
            self.current_pos += name_len + usize::from(has_semicolon);
            return decoded.to_string();
        }
        "&".to_string()
    }
}
