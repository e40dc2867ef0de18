//! Literal node compilation: Ruby syntax trees to JavaScript source text.
//!
//! # Architecture
//!
//! A [`CompileHost`] drives the walk. It owns the per-unit
//! [`HelperRegistry`] and routes every child through [`compile_node`], the
//! exhaustive per-node selector. Node compilers are free functions of
//! `(node, context, host)` that return [`Fragments`]; they never keep state of
//! their own. [`CompilationUnit`] is the reference host.
//!
//! ```
//! use rbjs_ast::{Node, RangeKind};
//! use rbjs_emitter::CompilationUnit;
//!
//! let mut unit = CompilationUnit::default();
//! let range = Node::range(RangeKind::Inclusive, Node::Int(1), Node::Int(5));
//! let body = unit.compile_expression(&range).unwrap();
//! assert_eq!(body.to_string(), "$range(1, 5, true)");
//! assert_eq!(unit.preamble(), "var $range = Opal.range;\n");
//! ```

pub mod context;
pub use context::CompileContext;

pub mod fragments;
pub use fragments::Fragments;

pub mod escape;

pub mod helpers;
pub use helpers::{Helper, HelperRegistry};

pub mod host;
pub use host::{CompileHost, compile_node};

mod calls;
mod interpolation;
mod literals;
mod ranges;

pub mod unit;
pub use unit::CompilationUnit;
