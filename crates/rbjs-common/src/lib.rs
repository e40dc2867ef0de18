//! Common types and utilities for the rbjs compiler.
//!
//! This crate provides foundational types used across all rbjs crates:
//! - Compile errors, warnings and diagnostics (`CompileError`, `CompileWarning`, `Diagnostic`)
//! - Compiler options (`CompilerOptions`)
//! - Compiler limits and thresholds
//! - Tracing configuration

// Errors and diagnostics
pub mod diagnostics;
pub use diagnostics::{CompileError, CompileWarning, Diagnostic, DiagnosticCategory, Result};

// Options shared by every compilation unit
pub mod options;
pub use options::CompilerOptions;

// Centralized limits and thresholds
pub mod limits;

// Subscriber setup for `RBJS_LOG`
pub mod tracing_config;
