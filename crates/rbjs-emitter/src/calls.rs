//! Minimal compilers for the two non-literal shapes literals depend on:
//! local variable reads and method calls.
//!
//! Ruby methods live on JavaScript objects under a `$` prefix, so
//! `x.to_s` becomes `x.$to_s()` and an operator method such as `x + y`
//! becomes `x['$+'](y)`.

use crate::context::CompileContext;
use crate::escape;
use crate::fragments::Fragments;
use crate::host::CompileHost;
use rbjs_ast::Node;
use rbjs_common::Result;

/// Ruby locals that collide with JavaScript reserved words get a `$` suffix.
const RESERVED_WORDS: &[&str] = &[
    "arguments", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "enum", "eval", "export", "extends", "false", "finally",
    "for", "function", "if", "implements", "import", "in", "instanceof", "interface", "let", "new",
    "null", "package", "private", "protected", "public", "return", "static", "super", "switch",
    "this", "throw", "true", "try", "typeof", "var", "void", "while", "with", "yield",
];

pub(crate) fn compile_local_var(name: &str) -> Fragments {
    if RESERVED_WORDS.contains(&name) {
        Fragments::text(format!("{name}$"))
    } else {
        Fragments::text(name.to_string())
    }
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// `receiver.$method(args)`; an absent receiver means `self`.
pub(crate) fn compile_call(
    receiver: Option<&Node>,
    method: &str,
    args: &[Node],
    host: &mut dyn CompileHost,
) -> Result<Fragments> {
    let mut out = match receiver {
        Some(receiver) => host.recurse(receiver, CompileContext::receiver())?,
        None => Fragments::text("self"),
    };

    if is_identifier(method) {
        out.push(format!(".${method}"));
    } else {
        out.push("[");
        out.push(escape::quote_string(&format!("${method}"), host.options().ascii_only));
        out.push("]");
    }

    out.push("(");
    for (index, arg) in args.iter().enumerate() {
        if index > 0 {
            out.push(", ");
        }
        out.append(host.recurse(arg, CompileContext::expression())?);
    }
    out.push(")");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_var_reserved_word() {
        assert_eq!(compile_local_var("x").to_string(), "x");
        assert_eq!(compile_local_var("class").to_string(), "class$");
    }

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("to_s"));
        assert!(is_identifier("_private"));
        assert!(!is_identifier("+"));
        assert!(!is_identifier("empty?"));
        assert!(!is_identifier("[]="));
        assert!(!is_identifier(""));
    }
}
