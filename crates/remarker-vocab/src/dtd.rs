//! The three HTML 4.01 document type definitions.

use serde::Serialize;
use strum_macros::{Display, EnumIter};

/// Which HTML 4.01 DTD a construct belongs to, ordered by permissiveness.
///
/// Strict is the default: the reference tables leave the DTD column blank
/// for anything that is allowed everywhere.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display, EnumIter, Serialize,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Dtd {
    /// HTML 4.01 Strict.
    #[default]
    Strict,
    /// HTML 4.01 Transitional ("loose").
    Loose,
    /// HTML 4.01 Frameset.
    Frameset,
}

impl Dtd {
    /// Classify the one-letter code of a DTD column.
    ///
    /// Total: `"L"` is Loose, `"F"` is Frameset, everything else (blank,
    /// `"S"`, or anything unexpected) is Strict.
    #[must_use]
    pub fn classify(code: &str) -> Self {
        match code {
            "L" => Self::Loose,
            "F" => Self::Frameset,
            _ => Self::Strict,
        }
    }

    /// The code the reference tables use for this DTD (blank for Strict).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Strict => "",
            Self::Loose => "L",
            Self::Frameset => "F",
        }
    }
}
