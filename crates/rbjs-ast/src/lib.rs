//! Syntax tree model for the rbjs compiler.
//!
//! An external Ruby parser hands trees over as s-expressions ([`Sexp`]), the
//! shape `[:dstr, "a", [:evstr, [:lvar, :x]]]` serialised as JSON arrays.
//! [`Node::from_sexp`] lowers them once into the typed [`Node`] tree the
//! emitter matches on, resolving every interpolation part into a [`Part`].

pub mod sexp;
pub use sexp::Sexp;

pub mod node;
pub use node::{Node, NodeKind, Part, RangeKind};

mod lower;
