//! Typed syntax tree.

use std::fmt;

/// A syntax tree node.
///
/// Literal, interpolation and range kinds are compiled by the emitter's
/// literal core. `LocalVar` and `Call` are the only other shapes: the core
/// builds `to_s` calls itself and interpolations routinely embed variables.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    // =========================================================================
    // Keyword values
    // =========================================================================
    True,
    False,
    SelfRef,
    Nil,

    // =========================================================================
    // Literals
    // =========================================================================
    Int(i64),
    Float(f64),
    Str(String),
    Sym(String),
    Regexp { pattern: String, flags: String },
    /// Backtick code: JavaScript source inserted verbatim.
    XStr(String),

    // =========================================================================
    // Interpolations
    // =========================================================================
    DStr(Vec<Part>),
    DSym(Vec<Part>),
    DXStr(Vec<Part>),
    DRegx(Vec<Part>),

    // =========================================================================
    // Ranges
    // =========================================================================
    Range {
        kind: RangeKind,
        start: Box<Node>,
        finish: Box<Node>,
    },

    // =========================================================================
    // Host shapes
    // =========================================================================
    LocalVar(String),
    Call {
        receiver: Option<Box<Node>>,
        method: String,
        args: Vec<Node>,
    },
}

/// One element of an interpolated node, in source order.
#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    /// Fixed text.
    Literal(String),
    /// An embedded expression, `#{...}`.
    Nested(Node),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeKind {
    Exclusive,
    Inclusive,
}

/// Node kind without payload, named by its s-expression tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    True,
    False,
    SelfRef,
    Nil,
    Int,
    Float,
    Str,
    Sym,
    Regexp,
    XStr,
    DStr,
    DSym,
    DXStr,
    DRegx,
    ExclusiveRange,
    InclusiveRange,
    LocalVar,
    Call,
}

impl NodeKind {
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            NodeKind::True => "true",
            NodeKind::False => "false",
            NodeKind::SelfRef => "self",
            NodeKind::Nil => "nil",
            NodeKind::Int => "int",
            NodeKind::Float => "float",
            NodeKind::Str => "str",
            NodeKind::Sym => "sym",
            NodeKind::Regexp => "regexp",
            NodeKind::XStr => "xstr",
            NodeKind::DStr => "dstr",
            NodeKind::DSym => "dsym",
            NodeKind::DXStr => "dxstr",
            NodeKind::DRegx => "dregx",
            NodeKind::ExclusiveRange => "dot2",
            NodeKind::InclusiveRange => "dot3",
            NodeKind::LocalVar => "lvar",
            NodeKind::Call => "call",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl Node {
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::True => NodeKind::True,
            Node::False => NodeKind::False,
            Node::SelfRef => NodeKind::SelfRef,
            Node::Nil => NodeKind::Nil,
            Node::Int(_) => NodeKind::Int,
            Node::Float(_) => NodeKind::Float,
            Node::Str(_) => NodeKind::Str,
            Node::Sym(_) => NodeKind::Sym,
            Node::Regexp { .. } => NodeKind::Regexp,
            Node::XStr(_) => NodeKind::XStr,
            Node::DStr(_) => NodeKind::DStr,
            Node::DSym(_) => NodeKind::DSym,
            Node::DXStr(_) => NodeKind::DXStr,
            Node::DRegx(_) => NodeKind::DRegx,
            Node::Range {
                kind: RangeKind::Exclusive,
                ..
            } => NodeKind::ExclusiveRange,
            Node::Range {
                kind: RangeKind::Inclusive,
                ..
            } => NodeKind::InclusiveRange,
            Node::LocalVar(_) => NodeKind::LocalVar,
            Node::Call { .. } => NodeKind::Call,
        }
    }

    // =========================================================================
    // Convenience constructors
    // =========================================================================

    pub fn str(text: impl Into<String>) -> Self {
        Node::Str(text.into())
    }

    pub fn sym(name: impl Into<String>) -> Self {
        Node::Sym(name.into())
    }

    pub fn lvar(name: impl Into<String>) -> Self {
        Node::LocalVar(name.into())
    }

    pub fn xstr(code: impl Into<String>) -> Self {
        Node::XStr(code.into())
    }

    pub fn regexp(pattern: impl Into<String>, flags: impl Into<String>) -> Self {
        Node::Regexp {
            pattern: pattern.into(),
            flags: flags.into(),
        }
    }

    pub fn range(kind: RangeKind, start: Node, finish: Node) -> Self {
        Node::Range {
            kind,
            start: Box::new(start),
            finish: Box::new(finish),
        }
    }

    pub fn call(receiver: Option<Node>, method: impl Into<String>, args: Vec<Node>) -> Self {
        Node::Call {
            receiver: receiver.map(Box::new),
            method: method.into(),
            args,
        }
    }
}

impl Part {
    pub fn literal(text: impl Into<String>) -> Self {
        Part::Literal(text.into())
    }
}
