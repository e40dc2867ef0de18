//! Lowering from raw s-expressions to typed nodes.
//!
//! Interpolation parts are classified here, once: a bare string or `[:str, s]`
//! becomes `Part::Literal`, `[:evstr, expr]` becomes `Part::Nested(expr)`.
//! Anything else is a malformed part, except inside `dregx`, where any node
//! is accepted as a nested expression.

use crate::node::{Node, Part, RangeKind};
use crate::sexp::Sexp;
use rbjs_common::{CompileError, Result};

impl Node {
    /// Lower a parser s-expression into a typed node.
    pub fn from_sexp(sexp: &Sexp) -> Result<Node> {
        let Some(tag) = sexp.tag() else {
            return Err(CompileError::malformed(
                sexp.describe(),
                "expected a tagged node",
            ));
        };
        let children = sexp.children();

        let node = match tag {
            "true" => keyword(tag, children, Node::True)?,
            "false" => keyword(tag, children, Node::False)?,
            "self" => keyword(tag, children, Node::SelfRef)?,
            "nil" => keyword(tag, children, Node::Nil)?,
            "int" => match single(tag, children)? {
                Sexp::Int(value) => Node::Int(*value),
                // Integers past `i64` arrive as floats; JS numbers hold them the same way.
                Sexp::Float(value) if value.is_finite() && value.fract() == 0.0 => {
                    Node::Float(*value)
                }
                other => return Err(expected(tag, "an integer", other)),
            },
            "float" => match single(tag, children)? {
                Sexp::Float(value) => Node::Float(*value),
                #[allow(clippy::cast_precision_loss)]
                Sexp::Int(value) => Node::Float(*value as f64),
                other => return Err(expected(tag, "a number", other)),
            },
            "str" => Node::Str(text(tag, single(tag, children)?)?),
            "sym" => Node::Sym(text(tag, single(tag, children)?)?),
            "xstr" => Node::XStr(text(tag, single(tag, children)?)?),
            "lvar" => Node::LocalVar(text(tag, single(tag, children)?)?),
            "regexp" => match children {
                [pattern] => Node::regexp(text(tag, pattern)?, ""),
                [pattern, flags] => Node::regexp(text(tag, pattern)?, text(tag, flags)?),
                _ => return Err(arity(tag, "1 or 2", children.len())),
            },
            "dstr" => Node::DStr(lower_parts("dstr", children, false)?),
            "dsym" => Node::DSym(lower_parts("dsym", children, false)?),
            "dxstr" => Node::DXStr(lower_parts("dxstr", children, false)?),
            "dregx" => Node::DRegx(lower_parts("dregx", children, true)?),
            "dot2" => lower_range(tag, RangeKind::Exclusive, children)?,
            "dot3" => lower_range(tag, RangeKind::Inclusive, children)?,
            "call" => lower_call(children)?,
            "evstr" | "arglist" => {
                return Err(CompileError::malformed(
                    tag,
                    "only valid inside an enclosing node",
                ));
            }
            _ => {
                return Err(CompileError::UnknownNodeKind {
                    tag: tag.to_string(),
                });
            }
        };
        Ok(node)
    }
}

fn lower_parts(kind: &'static str, items: &[Sexp], any_node_nests: bool) -> Result<Vec<Part>> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| lower_part(kind, index, item, any_node_nests))
        .collect()
}

fn lower_part(kind: &'static str, index: usize, item: &Sexp, any_node_nests: bool) -> Result<Part> {
    match (item, item.tag()) {
        (Sexp::Str(fragment), _) => Ok(Part::Literal(fragment.clone())),
        (_, Some("str")) => Ok(Part::Literal(text("str", single("str", item.children())?)?)),
        (_, Some("evstr")) => match item.children() {
            // `#{}` interpolates nothing.
            [] => Ok(Part::Literal(String::new())),
            [expr] => Ok(Part::Nested(Node::from_sexp(expr)?)),
            children => Err(arity("evstr", "0 or 1", children.len())),
        },
        (_, Some(_)) if any_node_nests => Ok(Part::Nested(Node::from_sexp(item)?)),
        _ => {
            tracing::debug!(kind, index, found = %item.describe(), "rejecting interpolation part");
            Err(CompileError::MalformedInterpolationPart {
                kind,
                index,
                found: item.describe(),
            })
        }
    }
}

fn lower_range(tag: &str, kind: RangeKind, children: &[Sexp]) -> Result<Node> {
    let [start, finish] = children else {
        return Err(arity(tag, "2", children.len()));
    };
    Ok(Node::range(
        kind,
        Node::from_sexp(start)?,
        Node::from_sexp(finish)?,
    ))
}

/// `[:call, receiver-or-nil, method, [:arglist, args...]]`; the arglist may be omitted.
fn lower_call(children: &[Sexp]) -> Result<Node> {
    let (receiver, method, arglist) = match children {
        [receiver, method] => (receiver, method, None),
        [receiver, method, arglist] => (receiver, method, Some(arglist)),
        _ => return Err(arity("call", "2 or 3", children.len())),
    };

    let receiver = match receiver {
        Sexp::Nil => None,
        other => Some(Node::from_sexp(other)?),
    };
    let method = text("call", method)?;
    let args = match arglist {
        None => Vec::new(),
        Some(list) if list.tag() == Some("arglist") => list
            .children()
            .iter()
            .map(Node::from_sexp)
            .collect::<Result<_>>()?,
        Some(other) => return Err(expected("call", "an arglist", other)),
    };

    Ok(Node::call(receiver, method, args))
}

// =============================================================================
// Shape helpers
// =============================================================================

fn keyword(tag: &str, children: &[Sexp], node: Node) -> Result<Node> {
    if children.is_empty() {
        Ok(node)
    } else {
        Err(arity(tag, "0", children.len()))
    }
}

fn single<'s>(tag: &str, children: &'s [Sexp]) -> Result<&'s Sexp> {
    match children {
        [only] => Ok(only),
        _ => Err(arity(tag, "1", children.len())),
    }
}

fn text(tag: &str, sexp: &Sexp) -> Result<String> {
    match sexp {
        Sexp::Str(value) => Ok(value.clone()),
        other => Err(expected(tag, "a string", other)),
    }
}

fn arity(tag: &str, wanted: &str, got: usize) -> CompileError {
    CompileError::malformed(tag, format!("expected {wanted} children, found {got}"))
}

fn expected(tag: &str, wanted: &str, got: &Sexp) -> CompileError {
    CompileError::malformed(tag, format!("expected {wanted}, found {}", got.describe()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_rejects_children() {
        let err = Node::from_sexp(&Sexp::node("nil", [Sexp::Int(1)])).unwrap_err();
        assert!(matches!(err, CompileError::MalformedNode { ref kind, .. } if kind == "nil"));
    }

    #[test]
    fn test_str_part_becomes_literal() {
        let part = lower_part("dstr", 0, &Sexp::node("str", [Sexp::str("x")]), false).unwrap();
        assert_eq!(part, Part::literal("x"));
    }

    #[test]
    fn test_empty_evstr_becomes_empty_literal() {
        let part = lower_part("dstr", 0, &Sexp::node("evstr", []), false).unwrap();
        assert_eq!(part, Part::literal(""));
    }

    #[test]
    fn test_bare_node_part_only_nests_when_allowed() {
        let lvar = Sexp::node("lvar", [Sexp::str("x")]);
        assert_eq!(
            lower_part("dregx", 1, &lvar, true).unwrap(),
            Part::Nested(Node::lvar("x"))
        );
        assert_eq!(
            lower_part("dstr", 1, &lvar, false).unwrap_err(),
            CompileError::MalformedInterpolationPart {
                kind: "dstr",
                index: 1,
                found: "lvar".to_string(),
            }
        );
    }
}
