//! Tree construction for the reference documents.

/// Stack-of-open-elements tree builder.
pub mod core;

pub use self::core::{HTMLParser, print_tree};
