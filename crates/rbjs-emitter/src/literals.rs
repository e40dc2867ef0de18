//! Compilers for keyword values and plain literals.

use crate::context::CompileContext;
use crate::escape;
use crate::fragments::Fragments;
use crate::host::CompileHost;
use rbjs_ast::NodeKind;
use rbjs_common::{CompileWarning, CompilerOptions};

// =============================================================================
// Keyword values
// =============================================================================

/// `true`, `false`, `self`, `nil`: the node's own tag is the JavaScript token.
pub(crate) fn compile_value(kind: NodeKind) -> Fragments {
    Fragments::text(kind.tag())
}

// =============================================================================
// Numbers
// =============================================================================

// `1.foo` does not parse as a member access on `1`, so numeric receivers are
// always parenthesized.

pub(crate) fn compile_int(value: i64, ctx: CompileContext) -> Fragments {
    numeric(escape::format_int(value), ctx)
}

pub(crate) fn compile_float(value: f64, ctx: CompileContext) -> Fragments {
    numeric(escape::format_float(value), ctx)
}

fn numeric(text: String, ctx: CompileContext) -> Fragments {
    let mut out = Fragments::text(text);
    if ctx.is_receiver() {
        out.wrap("(", ")");
    }
    out
}

// =============================================================================
// Strings, symbols, regexps
// =============================================================================

pub(crate) fn compile_string(text: &str, options: &CompilerOptions) -> Fragments {
    Fragments::text(escape::quote_string(text, options.ascii_only))
}

/// Symbols are plain strings at runtime. Unlike numbers they stay unwrapped
/// in receiver position: a string literal is already a complete primary.
pub(crate) fn compile_symbol(name: &str, options: &CompilerOptions) -> Fragments {
    Fragments::text(escape::quote_string(name, options.ascii_only))
}

pub(crate) fn compile_regexp(pattern: &str, flags: &str, host: &mut dyn CompileHost) -> Fragments {
    for flag in escape::unsupported_regexp_flags(flags) {
        host.warn(CompileWarning::UnsupportedRegexpFlag { flag });
    }
    Fragments::text(escape::format_regexp(pattern, flags))
}

// =============================================================================
// Raw JavaScript
// =============================================================================

/// A statement terminator is needed in statement position unless the code
/// already contains a `;` somewhere. Multi-statement code must terminate
/// each statement itself.
pub(crate) fn needs_terminator(code: &str, ctx: CompileContext) -> bool {
    ctx.is_statement() && !code.contains(';')
}

pub(crate) fn compile_xstring(code: &str, ctx: CompileContext) -> Fragments {
    let mut out = Fragments::text(code.to_string());
    if needs_terminator(code, ctx) {
        out.push(";");
    }
    if ctx.is_receiver() {
        out.wrap("(", ")");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_needs_terminator() {
        assert!(needs_terminator("x = 1", CompileContext::statement()));
        assert!(!needs_terminator("x = 1", CompileContext::expression()));
        assert!(!needs_terminator("x = 1;", CompileContext::statement()));
        // Presence anywhere is enough.
        assert!(!needs_terminator("a(); b()", CompileContext::statement()));
    }

    #[test]
    fn test_value_tokens() {
        assert_eq!(compile_value(NodeKind::SelfRef).to_string(), "self");
        assert_eq!(compile_value(NodeKind::Nil).to_string(), "nil");
    }

    #[test]
    fn test_xstring_in_statement_and_receiver_position() {
        let ctx = CompileContext::statement().with_receiver(true);
        assert_eq!(compile_xstring("a", ctx).to_string(), "(a;)");
    }
}
