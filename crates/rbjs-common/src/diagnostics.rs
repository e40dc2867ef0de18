//! Compile errors, warnings and their diagnostic form.
//!
//! Every error raised while lowering or compiling a tree is a [`CompileError`].
//! None of them are recoverable: the surrounding driver aborts the compilation
//! unit and reports the error, usually after converting it into a
//! [`Diagnostic`]. A [`CompileWarning`] leaves the output intact and is
//! collected by the compilation unit.

use serde::Serialize;
use thiserror::Error;

/// Result alias used throughout the compiler.
pub type Result<T, E = CompileError> = std::result::Result<T, E>;

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileError {
    /// An interpolation part is neither a literal fragment nor an `evstr`.
    #[error("malformed {kind} part at index {index}: unexpected `{found}`")]
    MalformedInterpolationPart {
        kind: &'static str,
        index: usize,
        found: String,
    },

    /// A known node tag with the wrong shape.
    #[error("malformed `{kind}` node: {reason}")]
    MalformedNode { kind: String, reason: String },

    #[error("unknown node kind `{tag}`")]
    UnknownNodeKind { tag: String },

    #[error("expression nesting exceeds the limit of {limit}")]
    NestingTooDeep { limit: u32 },
}

impl CompileError {
    pub fn malformed(kind: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedNode {
            kind: kind.into(),
            reason: reason.into(),
        }
    }

    /// Stable numeric code, used when reporting as a [`Diagnostic`].
    #[must_use]
    pub const fn code(&self) -> u32 {
        match self {
            Self::MalformedInterpolationPart { .. } => diagnostic_codes::MALFORMED_INTERPOLATION_PART,
            Self::MalformedNode { .. } => diagnostic_codes::MALFORMED_NODE,
            Self::UnknownNodeKind { .. } => diagnostic_codes::UNKNOWN_NODE_KIND,
            Self::NestingTooDeep { .. } => diagnostic_codes::NESTING_TOO_DEEP,
        }
    }
}

// =============================================================================
// Warnings
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileWarning {
    /// A regexp flag with no JavaScript counterpart was left out of the literal.
    #[error("regexp flag `{flag}` has no JavaScript equivalent and was dropped")]
    UnsupportedRegexpFlag { flag: char },
}

impl CompileWarning {
    #[must_use]
    pub const fn code(&self) -> u32 {
        match self {
            Self::UnsupportedRegexpFlag { .. } => diagnostic_codes::UNSUPPORTED_REGEXP_FLAG,
        }
    }
}

pub mod diagnostic_codes {
    pub const MALFORMED_INTERPOLATION_PART: u32 = 9001;
    pub const MALFORMED_NODE: u32 = 9002;
    pub const UNKNOWN_NODE_KIND: u32 = 9003;
    pub const NESTING_TOO_DEEP: u32 = 9004;
    pub const UNSUPPORTED_REGEXP_FLAG: u32 = 9101;
}

// =============================================================================
// Diagnostic Types
// =============================================================================

/// Diagnostic category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum DiagnosticCategory {
    Warning = 0,
    Error = 1,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub file: String,
    pub message_text: String,
    pub category: DiagnosticCategory,
    pub code: u32,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    #[must_use]
    pub fn error(file: impl Into<String>, message: impl Into<String>, code: u32) -> Self {
        Self {
            file: file.into(),
            message_text: message.into(),
            category: DiagnosticCategory::Error,
            code,
        }
    }

    #[must_use]
    pub fn warning(file: impl Into<String>, message: impl Into<String>, code: u32) -> Self {
        Self {
            file: file.into(),
            message_text: message.into(),
            category: DiagnosticCategory::Warning,
            code,
        }
    }

    /// Report a compile error raised while compiling `file`.
    #[must_use]
    pub fn from_compile_error(file: impl Into<String>, error: &CompileError) -> Self {
        Self::error(file, error.to_string(), error.code())
    }

    #[must_use]
    pub fn from_compile_warning(file: impl Into<String>, warning: &CompileWarning) -> Self {
        Self::warning(file, warning.to_string(), warning.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_part_message_names_kind_and_index() {
        let err = CompileError::MalformedInterpolationPart {
            kind: "dstr",
            index: 2,
            found: "lvar".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "malformed dstr part at index 2: unexpected `lvar`"
        );
    }

    #[test]
    fn test_diagnostic_from_compile_error() {
        let err = CompileError::UnknownNodeKind {
            tag: "while".to_string(),
        };
        let diag = Diagnostic::from_compile_error("app.rb", &err);
        assert_eq!(diag.file, "app.rb");
        assert_eq!(diag.category, DiagnosticCategory::Error);
        assert_eq!(diag.code, diagnostic_codes::UNKNOWN_NODE_KIND);
        assert_eq!(diag.message_text, "unknown node kind `while`");
    }

    #[test]
    fn test_warning_diagnostic() {
        let warning = CompileWarning::UnsupportedRegexpFlag { flag: 'x' };
        let diag = Diagnostic::from_compile_warning("app.rb", &warning);
        assert_eq!(diag.category, DiagnosticCategory::Warning);
        assert_eq!(diag.code, diagnostic_codes::UNSUPPORTED_REGEXP_FLAG);
        assert_eq!(
            diag.message_text,
            "regexp flag `x` has no JavaScript equivalent and was dropped"
        );
    }
}
