//! Compilation unit: the reference [`CompileHost`].
//!
//! A unit owns everything that lives for one compilation: the options, the
//! helper registry, collected warnings and the current nesting depth. Units
//! share no state, so independent units may compile on different threads.

use crate::context::CompileContext;
use crate::fragments::Fragments;
use crate::helpers::{Helper, HelperRegistry};
use crate::host::{CompileHost, compile_node};
use rbjs_ast::{Node, Sexp};
use rbjs_common::limits::MAX_COMPILE_DEPTH;
use rbjs_common::{CompileError, CompileWarning, CompilerOptions, Result};

#[derive(Debug, Default)]
pub struct CompilationUnit {
    options: CompilerOptions,
    helpers: HelperRegistry,
    warnings: Vec<CompileWarning>,
    depth: u32,
}

impl CompilationUnit {
    #[must_use]
    pub fn new(options: CompilerOptions) -> Self {
        Self {
            options,
            helpers: HelperRegistry::new(),
            warnings: Vec::new(),
            depth: 0,
        }
    }

    /// Compile `node` used as a complete statement.
    #[tracing::instrument(level = "trace", skip(self, node), fields(kind = %node.kind()))]
    pub fn compile_statement(&mut self, node: &Node) -> Result<Fragments> {
        self.recurse(node, CompileContext::statement())
    }

    /// Compile `node` in plain expression position.
    #[tracing::instrument(level = "trace", skip(self, node), fields(kind = %node.kind()))]
    pub fn compile_expression(&mut self, node: &Node) -> Result<Fragments> {
        self.recurse(node, CompileContext::expression())
    }

    /// Lower a parser s-expression and compile it as a statement.
    pub fn compile_sexp(&mut self, sexp: &Sexp) -> Result<Fragments> {
        let node = Node::from_sexp(sexp)?;
        self.compile_statement(&node)
    }

    #[must_use]
    pub fn helpers(&self) -> &HelperRegistry {
        &self.helpers
    }

    /// Warnings reported so far, in the order they were raised.
    #[must_use]
    pub fn warnings(&self) -> &[CompileWarning] {
        &self.warnings
    }

    /// Alias declarations for every helper requested so far.
    #[must_use]
    pub fn preamble(&self) -> String {
        self.helpers.preamble(&self.options)
    }

    /// Complete output: the preamble followed by each statement on its own line.
    ///
    /// Every statement is terminated with `;` unless it already ends with one.
    /// Statements that open with `(` would otherwise continue the previous
    /// line as a call. Empty statements are skipped.
    #[must_use]
    pub fn finish(self, statements: &[Fragments]) -> String {
        let mut out = self.preamble();
        for statement in statements {
            let text = statement.to_string();
            let text = text.trim_end();
            if text.is_empty() {
                continue;
            }
            out.push_str(text);
            if !text.ends_with(';') {
                out.push(';');
            }
            out.push('\n');
        }
        tracing::trace!(statements = statements.len(), bytes = out.len(), "finished unit");
        out
    }
}

impl CompileHost for CompilationUnit {
    fn options(&self) -> &CompilerOptions {
        &self.options
    }

    fn recurse(&mut self, node: &Node, ctx: CompileContext) -> Result<Fragments> {
        if self.depth >= MAX_COMPILE_DEPTH {
            return Err(CompileError::NestingTooDeep {
                limit: MAX_COMPILE_DEPTH,
            });
        }
        self.depth += 1;
        let result = compile_node(node, ctx, self);
        self.depth -= 1;
        result
    }

    fn request_helper(&mut self, helper: Helper) {
        self.helpers.request(helper);
    }

    fn warn(&mut self, warning: CompileWarning) {
        tracing::warn!(code = warning.code(), "{warning}");
        self.warnings.push(warning);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send<T: Send>() {}

    #[test]
    fn test_unit_is_send() {
        assert_send::<CompilationUnit>();
    }

    #[test]
    fn test_depth_is_restored_after_error() {
        let mut unit = CompilationUnit::default();
        let mut node = Node::Int(1);
        for _ in 0..MAX_COMPILE_DEPTH {
            node = Node::DStr(vec![rbjs_ast::Part::Nested(node)]);
        }
        assert_eq!(
            unit.compile_expression(&node).unwrap_err(),
            CompileError::NestingTooDeep {
                limit: MAX_COMPILE_DEPTH
            }
        );
        assert_eq!(unit.depth, 0);
        assert_eq!(unit.compile_expression(&Node::Int(7)).unwrap().to_string(), "7");
    }
}
