//! Centralized limits and thresholds for the compiler.

// =============================================================================
// Recursion Depth Limits
// =============================================================================

/// Maximum nesting depth of a single compile walk.
///
/// Every recursive compile of a child node (an interpolated expression, a
/// range bound, a call receiver) adds a level. Past this depth the host
/// reports `CompileError::NestingTooDeep` instead of overflowing the stack.
///
/// # Ruby example
///
/// ```ruby
/// # Deeply nested interpolation:
/// "#{"#{"#{"#{ x }"}"}"}"
///
/// # Ranges of ranges of calls:
/// (a.b.c.d..(e.f..g).h)
/// ```
pub const MAX_COMPILE_DEPTH: u32 = 256;

// =============================================================================
// Capacity Hints
// =============================================================================

/// Inline fragment capacity before a fragment list spills to the heap.
///
/// Most literal nodes emit one to three fragments; a wrapped receiver adds two.
pub const INLINE_FRAGMENTS: usize = 8;
