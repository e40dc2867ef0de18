//! The seam between node compilers and the framework walking the tree.

use crate::context::CompileContext;
use crate::fragments::Fragments;
use crate::helpers::Helper;
use crate::{calls, interpolation, literals, ranges};
use rbjs_ast::Node;
use rbjs_common::{CompileWarning, CompilerOptions, Result};

/// What a node compiler may ask of the framework driving it.
///
/// Implementations own the per-unit helper set and decide how children are
/// routed; a node compiler never compiles a child directly.
pub trait CompileHost {
    fn options(&self) -> &CompilerOptions;

    /// Compile a child node. Must route back through [`compile_node`] (or an
    /// equivalent selector) and must terminate.
    fn recurse(&mut self, node: &Node, ctx: CompileContext) -> Result<Fragments>;

    /// Record that generated code references `helper`. Idempotent.
    fn request_helper(&mut self, helper: Helper);

    /// Report a problem that did not stop compilation.
    fn warn(&mut self, warning: CompileWarning);
}

/// Select the compiler for `node` and run it.
pub fn compile_node(
    node: &Node,
    ctx: CompileContext,
    host: &mut dyn CompileHost,
) -> Result<Fragments> {
    match node {
        Node::True | Node::False | Node::SelfRef | Node::Nil => {
            Ok(literals::compile_value(node.kind()))
        }
        Node::Int(value) => Ok(literals::compile_int(*value, ctx)),
        Node::Float(value) => Ok(literals::compile_float(*value, ctx)),
        Node::Str(text) => Ok(literals::compile_string(text, host.options())),
        Node::Sym(name) => Ok(literals::compile_symbol(name, host.options())),
        Node::Regexp { pattern, flags } => Ok(literals::compile_regexp(pattern, flags, host)),
        Node::XStr(code) => Ok(literals::compile_xstring(code, ctx)),
        Node::DStr(parts) => interpolation::compile_dstr(parts, ctx, host),
        Node::DSym(parts) => interpolation::compile_dsym(parts, host),
        Node::DXStr(parts) => interpolation::compile_dxstr(parts, ctx, host),
        Node::DRegx(parts) => interpolation::compile_dregx(parts, host),
        Node::Range {
            kind,
            start,
            finish,
        } => ranges::compile_range(*kind, start, finish, host),
        Node::LocalVar(name) => Ok(calls::compile_local_var(name)),
        Node::Call {
            receiver,
            method,
            args,
        } => calls::compile_call(receiver.as_deref(), method, args, host),
    }
}
