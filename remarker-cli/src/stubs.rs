//! Builder method stubs for the templating API.
//!
//! One static method per element, named after the upper-case element name
//! and producing the lower-case tag:
//!
//! ```text
//!     public static Element ABBR(Object... contents)
//!     {
//!         return element("abbr", contents);
//!     }
//! ```

use remarker_vocab::ElementDefinition;

/// Render the builder method for one element.
#[must_use]
pub fn render_one(element: &ElementDefinition) -> String {
    format!(
        "    public static Element {upper}(Object... contents)\n    {{\n        return element(\"{lower}\", contents);\n    }}\n",
        upper = element.uppercase,
        lower = element.lowercase,
    )
}

/// Render the builder methods for `elements`, in iteration order, separated
/// by blank lines.
#[must_use]
pub fn render<'a>(elements: impl IntoIterator<Item = &'a ElementDefinition>) -> String {
    let mut out = String::new();
    for (index, element) in elements.into_iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(&render_one(element));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use remarker_vocab::Dtd;

    #[test]
    fn test_render_one() {
        let abbr = ElementDefinition::new("ABBR", false, Dtd::Strict);
        assert_eq!(
            render_one(&abbr),
            "    public static Element ABBR(Object... contents)\n    {\n        return element(\"abbr\", contents);\n    }\n"
        );
    }

    #[test]
    fn test_render_separates_methods() {
        let elements = [
            ElementDefinition::new("BR", true, Dtd::Strict),
            ElementDefinition::new("applet", false, Dtd::Loose),
        ];
        let out = render(&elements);
        assert_eq!(out.matches("public static Element").count(), 2);
        assert!(out.contains("}\n\n    public static Element APPLET("));
        assert!(out.contains("element(\"br\", contents)"));
        assert!(out.ends_with("    }\n"));
    }

    #[test]
    fn test_render_nothing() {
        assert_eq!(render(std::iter::empty::<&ElementDefinition>()), "");
    }
}
