use std::fmt;

/// An attribute on a start tag token.
///
/// Names are lowercased by the tokenizer; values have their character
/// references decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    /// Lowercased attribute name.
    pub name: String,
    /// Decoded attribute value (empty for bare attributes like `nowrap`).
    pub value: String,
}

impl Attribute {
    /// Create a new attribute with the given name and value.
    #[must_use]
    pub const fn new(name: String, value: String) -> Self {
        Self { name, value }
    }
}

/// Tokens handed from the tokenizer to the tree builder.
///
/// Unlike a WHATWG tokenizer, consecutive characters are coalesced into a
/// single [`Token::Text`], and DOCTYPEs and other `<!...>` / `<?...>`
/// constructs are kept as opaque [`Token::Declaration`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `<!DOCTYPE ...>`, `<?xml ...?>` and any other non-comment declaration.
    Declaration {
        /// Everything between `<!`/`<?` and the closing `>`.
        data: String,
    },

    /// A start tag, e.g. `<td title="Name">`.
    StartTag {
        /// Lowercased tag name.
        name: String,
        /// True for `<br/>`-style tags.
        self_closing: bool,
        /// Attributes in source order; later duplicates are dropped.
        attributes: Vec<Attribute>,
    },

    /// An end tag, e.g. `</td>`. Attributes on end tags are discarded.
    EndTag {
        /// Lowercased tag name.
        name: String,
    },

    /// `<!-- ... -->`
    Comment {
        /// Text between the comment delimiters.
        data: String,
    },

    /// A run of decoded character data.
    Text {
        /// The decoded text.
        data: String,
    },

    /// End-of-file token signals the end of input.
    EndOfFile,
}

impl Token {
    /// Create a new start tag token with an empty name.
    #[must_use]
    pub const fn new_start_tag() -> Self {
        Self::StartTag {
            name: String::new(),
            self_closing: false,
            attributes: Vec::new(),
        }
    }

    /// Create a new end tag token with an empty name.
    #[must_use]
    pub const fn new_end_tag() -> Self {
        Self::EndTag {
            name: String::new(),
        }
    }

    /// Append a character to the tag name of a start or end tag.
    pub fn append_to_tag_name(&mut self, c: char) {
        if let Self::StartTag { name, .. } | Self::EndTag { name } = self {
            name.push(c.to_ascii_lowercase());
        }
    }

    /// Start a new attribute on a start tag.
    pub fn start_new_attribute(&mut self) {
        if let Self::StartTag { attributes, .. } = self {
            attributes.push(Attribute::new(String::new(), String::new()));
        }
    }

    /// Append a character to the name of the attribute being built.
    pub fn append_to_current_attribute_name(&mut self, c: char) {
        if let Self::StartTag { attributes, .. } = self
            && let Some(attribute) = attributes.last_mut()
        {
            attribute.name.push(c.to_ascii_lowercase());
        }
    }

    /// Append text to the value of the attribute being built.
    pub fn append_to_current_attribute_value(&mut self, s: &str) {
        if let Self::StartTag { attributes, .. } = self
            && let Some(attribute) = attributes.last_mut()
        {
            attribute.value.push_str(s);
        }
    }

    /// Mark a start tag as self-closing.
    pub const fn set_self_closing(&mut self) {
        if let Self::StartTag { self_closing, .. } = self {
            *self_closing = true;
        }
    }

    /// Drop repeated attribute names, keeping the first occurrence.
    pub fn remove_duplicate_attributes(&mut self) {
        if let Self::StartTag { attributes, .. } = self {
            let mut seen = std::collections::HashSet::new();
            attributes.retain(|attribute| seen.insert(attribute.name.clone()));
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Declaration { data } => write!(f, "Declaration({data})"),
            Self::StartTag {
                name,
                self_closing,
                attributes,
            } => {
                write!(f, "StartTag(<{name}")?;
                for attribute in attributes {
                    write!(f, " {}=\"{}\"", attribute.name, attribute.value)?;
                }
                if *self_closing {
                    write!(f, " /")?;
                }
                write!(f, ">)")
            }
            Self::EndTag { name } => write!(f, "EndTag(</{name}>)"),
            Self::Comment { data } => write!(f, "Comment(<!--{data}-->)"),
            Self::Text { data } => write!(f, "Text({data:?})"),
            Self::EndOfFile => write!(f, "EndOfFile"),
        }
    }
}
