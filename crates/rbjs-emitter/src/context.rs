//! Position flags threaded through every compile call.

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ContextFlags: u8 {
        /// The expression is the target of a following member access or call.
        const RECEIVER = 1 << 0;
        /// The expression is used as a complete statement.
        const STATEMENT = 1 << 1;
    }
}

/// Where the node being compiled sits in its parent.
///
/// Passed by value. Compilers hand modified copies to recursive calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CompileContext {
    flags: ContextFlags,
}

impl CompileContext {
    /// Plain expression position: neither receiver nor statement.
    #[must_use]
    pub const fn expression() -> Self {
        Self {
            flags: ContextFlags::empty(),
        }
    }

    #[must_use]
    pub const fn statement() -> Self {
        Self {
            flags: ContextFlags::STATEMENT,
        }
    }

    #[must_use]
    pub const fn receiver() -> Self {
        Self {
            flags: ContextFlags::RECEIVER,
        }
    }

    #[must_use]
    pub const fn flags(self) -> ContextFlags {
        self.flags
    }

    #[must_use]
    pub const fn is_receiver(self) -> bool {
        self.flags.contains(ContextFlags::RECEIVER)
    }

    #[must_use]
    pub const fn is_statement(self) -> bool {
        self.flags.contains(ContextFlags::STATEMENT)
    }

    #[must_use]
    pub fn with_receiver(self, on: bool) -> Self {
        let mut flags = self.flags;
        flags.set(ContextFlags::RECEIVER, on);
        Self { flags }
    }

    #[must_use]
    pub fn with_statement(self, on: bool) -> Self {
        let mut flags = self.flags;
        flags.set(ContextFlags::STATEMENT, on);
        Self { flags }
    }
}
