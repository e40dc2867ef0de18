//! Compilers for interpolated strings, symbols, raw code and regexps.
//!
//! All four walk the parts in source order and emit them in that order;
//! nested expressions may have side effects, so parts are never merged or
//! reordered. Nested expressions are compiled in plain expression position.

use crate::context::CompileContext;
use crate::escape;
use crate::fragments::Fragments;
use crate::host::CompileHost;
use crate::literals::needs_terminator;
use rbjs_ast::{Node, Part};
use rbjs_common::Result;

const CONCAT: &str = " + ";
const EMPTY_STRING: &str = "\"\"";

fn quote(text: &str, host: &dyn CompileHost) -> String {
    escape::quote_string(text, host.options().ascii_only)
}

/// `"" + ` when the first operand is not a string literal, so that `+`
/// concatenates instead of adding two numbers.
fn push_string_seed(out: &mut Fragments, parts: &[Part]) {
    match parts.first() {
        None => out.push(EMPTY_STRING),
        Some(Part::Nested(_)) => {
            out.push(EMPTY_STRING);
            out.push(CONCAT);
        }
        Some(Part::Literal(_)) => {}
    }
}

/// `"a" + (x) + "b"`, parenthesized as a whole in receiver position.
pub(crate) fn compile_dstr(
    parts: &[Part],
    ctx: CompileContext,
    host: &mut dyn CompileHost,
) -> Result<Fragments> {
    let mut out = Fragments::new();
    push_string_seed(&mut out, parts);

    for (index, part) in parts.iter().enumerate() {
        if index > 0 {
            out.push(CONCAT);
        }
        match part {
            Part::Literal(text) => out.push(quote(text, host)),
            Part::Nested(expr) => {
                out.push("(");
                out.append(host.recurse(expr, CompileContext::expression())?);
                out.push(")");
            }
        }
    }

    if ctx.is_receiver() {
        out.wrap("(", ")");
    }
    Ok(out)
}

/// `("a" + x.$to_s())`, always parenthesized so the result is one value.
pub(crate) fn compile_dsym(parts: &[Part], host: &mut dyn CompileHost) -> Result<Fragments> {
    let mut out = Fragments::new();
    if parts.is_empty() {
        out.push(EMPTY_STRING);
    }

    for (index, part) in parts.iter().enumerate() {
        if index > 0 {
            out.push(CONCAT);
        }
        match part {
            Part::Literal(text) => out.push(quote(text, host)),
            Part::Nested(expr) => {
                let to_s = Node::call(Some(expr.clone()), "to_s", Vec::new());
                out.append(host.recurse(&to_s, CompileContext::expression())?);
            }
        }
    }

    out.wrap("(", ")");
    Ok(out)
}

/// Raw code with embedded expressions spliced in unquoted.
///
/// In statement position one terminator is appended if any literal fragment
/// lacks a `;`.
pub(crate) fn compile_dxstr(
    parts: &[Part],
    ctx: CompileContext,
    host: &mut dyn CompileHost,
) -> Result<Fragments> {
    let mut out = Fragments::new();
    let mut needs_semicolon = false;

    for part in parts {
        match part {
            Part::Literal(code) => {
                out.push(code.clone());
                needs_semicolon |= needs_terminator(code, ctx);
            }
            Part::Nested(expr) => {
                out.append(host.recurse(expr, CompileContext::expression())?);
            }
        }
    }

    if needs_semicolon {
        out.push(";");
    }
    if ctx.is_receiver() {
        out.wrap("(", ")");
    }
    Ok(out)
}

/// `(new RegExp("^" + (x)))`.
pub(crate) fn compile_dregx(parts: &[Part], host: &mut dyn CompileHost) -> Result<Fragments> {
    let mut out = Fragments::new();
    push_string_seed(&mut out, parts);

    for (index, part) in parts.iter().enumerate() {
        if index > 0 {
            out.push(CONCAT);
        }
        match part {
            Part::Literal(text) => out.push(quote(text, host)),
            Part::Nested(expr) => {
                out.push("(");
                out.append(host.recurse(expr, CompileContext::expression())?);
                out.push(")");
            }
        }
    }

    out.wrap("(new RegExp(", "))");
    Ok(out)
}
