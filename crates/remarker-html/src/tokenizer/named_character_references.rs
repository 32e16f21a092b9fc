//! Named character reference lookup table.
//!
//! The reference documents only use the XML core entities, the HTML 4
//! Latin-1 set and a handful of typographic ones, so that is all we carry.
//! Anything else is left in the text literally.

use std::collections::HashMap;
use std::sync::LazyLock;

/// HTMLlat1: names for U+00A0 through U+00FF, in code point order.
const LATIN1: [&str; 96] = [
    "nbsp", "iexcl", "cent", "pound", "curren", "yen", "brvbar", "sect", "uml", "copy", "ordf",
    "laquo", "not", "shy", "reg", "macr", "deg", "plusmn", "sup2", "sup3", "acute", "micro",
    "para", "middot", "cedil", "sup1", "ordm", "raquo", "frac14", "frac12", "frac34", "iquest",
    "Agrave", "Aacute", "Acirc", "Atilde", "Auml", "Aring", "AElig", "Ccedil", "Egrave", "Eacute",
    "Ecirc", "Euml", "Igrave", "Iacute", "Icirc", "Iuml", "ETH", "Ntilde", "Ograve", "Oacute",
    "Ocirc", "Otilde", "Ouml", "times", "Oslash", "Ugrave", "Uacute", "Ucirc", "Uuml", "Yacute",
    "THORN", "szlig", "agrave", "aacute", "acirc", "atilde", "auml", "aring", "aelig", "ccedil",
    "egrave", "eacute", "ecirc", "euml", "igrave", "iacute", "icirc", "iuml", "eth", "ntilde",
    "ograve", "oacute", "ocirc", "otilde", "ouml", "divide", "oslash", "ugrave", "uacute", "ucirc",
    "uuml", "yacute", "thorn", "yuml",
];

/// Entities outside Latin-1 that show up in the W3C pages.
const OTHERS: [(&str, char); 15] = [
    ("amp", '&'),
    ("lt", '<'),
    ("gt", '>'),
    ("quot", '"'),
    ("apos", '\''),
    ("ndash", '\u{2013}'),
    ("mdash", '\u{2014}'),
    ("lsquo", '\u{2018}'),
    ("rsquo", '\u{2019}'),
    ("ldquo", '\u{201C}'),
    ("rdquo", '\u{201D}'),
    ("bull", '\u{2022}'),
    ("hellip", '\u{2026}'),
    ("euro", '\u{20AC}'),
    ("trade", '\u{2122}'),
];

/// Names that are still recognized without a trailing semicolon.
const LEGACY: [&str; 4] = ["amp", "lt", "gt", "quot"];

static NAMED_ENTITIES: LazyLock<HashMap<&'static str, char>> = LazyLock::new(|| {
    LATIN1
        .iter()
        .zip(0xA0_u32..)
        .filter_map(|(&name, code)| char::from_u32(code).map(|c| (name, c)))
        .chain(OTHERS)
        .collect()
});

/// Look up a named character reference.
///
/// The `name` should include neither the leading '&' nor the trailing ';'.
///
/// # Example
/// ```ignore
/// lookup_entity("amp")   // Some('&')
/// lookup_entity("eacute") // Some('é')
/// lookup_entity("xyz")   // None
/// ```
#[must_use]
pub fn lookup_entity(name: &str) -> Option<char> {
    NAMED_ENTITIES.get(name).copied()
}

/// True if `name` may be written without its terminating semicolon.
#[must_use]
pub fn is_legacy_entity(name: &str) -> bool {
    LEGACY.iter().any(|&legacy| legacy == name)
}
