//! Raw s-expression input.

use serde::{Deserialize, Serialize};

/// One s-expression value as produced by the parser.
///
/// Lists carry their type tag as the first element: `["int", 1]`. Symbols
/// arrive as strings, Ruby `nil` (an absent call receiver) as JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Sexp {
    Nil,
    // Integers beyond `i64` fall through to `Float`.
    Int(i64),
    Float(f64),
    Str(String),
    List(Vec<Sexp>),
}

impl Sexp {
    /// Build a tagged list: `Sexp::node("int", [Sexp::Int(1)])`.
    pub fn node(tag: &str, children: impl IntoIterator<Item = Sexp>) -> Self {
        let mut items = vec![Sexp::Str(tag.to_string())];
        items.extend(children);
        Sexp::List(items)
    }

    pub fn str(text: impl Into<String>) -> Self {
        Sexp::Str(text.into())
    }

    /// Parse a tree from its JSON form.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Type tag of a tagged list.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        match self {
            Sexp::List(items) => match items.first() {
                Some(Sexp::Str(tag)) => Some(tag),
                _ => None,
            },
            _ => None,
        }
    }

    /// Children of a tagged list (everything after the tag).
    #[must_use]
    pub fn children(&self) -> &[Sexp] {
        match self {
            Sexp::List(items) if self.tag().is_some() => &items[1..],
            _ => &[],
        }
    }

    /// Short description for error messages: the tag, or the value's shape.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Sexp::Nil => "nil".to_string(),
            Sexp::Int(_) => "integer".to_string(),
            Sexp::Float(_) => "float".to_string(),
            Sexp::Str(_) => "string".to_string(),
            Sexp::List(_) => self.tag().unwrap_or("untagged list").to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_shapes() {
        let sexp = Sexp::from_json(r#"["dstr", "a", ["evstr", ["int", 1]], null, 2.5]"#).unwrap();
        assert_eq!(sexp.tag(), Some("dstr"));
        assert_eq!(
            sexp.children(),
            &[
                Sexp::str("a"),
                Sexp::node("evstr", [Sexp::node("int", [Sexp::Int(1)])]),
                Sexp::Nil,
                Sexp::Float(2.5),
            ]
        );
    }

    #[test]
    fn test_untagged_list_has_no_children() {
        let sexp = Sexp::List(vec![Sexp::Int(1), Sexp::Int(2)]);
        assert_eq!(sexp.tag(), None);
        assert!(sexp.children().is_empty());
        assert_eq!(sexp.describe(), "untagged list");
    }

    #[test]
    fn test_describe() {
        assert_eq!(Sexp::node("lvar", [Sexp::str("x")]).describe(), "lvar");
        assert_eq!(Sexp::Int(3).describe(), "integer");
        assert_eq!(Sexp::Nil.describe(), "nil");
    }
}
