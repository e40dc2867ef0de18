//! Runtime helpers requested by generated code.
//!
//! A node that needs runtime support (a range constructor, ...) requests the
//! helper by name. The registry keeps each name once, in first-request order,
//! and the unit turns it into a preamble of local aliases:
//!
//! ```text
//! var $range = Opal.range;
//! ```

use indexmap::IndexSet;
use rbjs_common::CompilerOptions;
use rustc_hash::FxBuildHasher;
use std::fmt;

/// Name of a runtime helper, as exported by the runtime object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Helper(&'static str);

impl Helper {
    /// `Opal.range(start, finish, flag)`.
    pub const RANGE: Helper = Helper("range");

    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Helper(name)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Helper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Helpers requested while compiling one unit.
#[derive(Debug, Clone, Default)]
pub struct HelperRegistry {
    requested: IndexSet<Helper, FxBuildHasher>,
}

impl HelperRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that generated code references `helper`.
    ///
    /// Returns `true` the first time a helper is requested; repeated requests
    /// change nothing.
    pub fn request(&mut self, helper: Helper) -> bool {
        let added = self.requested.insert(helper);
        if added {
            tracing::trace!(helper = helper.name(), "helper requested");
        }
        added
    }

    #[must_use]
    pub fn contains(&self, helper: Helper) -> bool {
        self.requested.contains(&helper)
    }

    /// Requested helpers in first-request order.
    pub fn iter(&self) -> impl Iterator<Item = Helper> + '_ {
        self.requested.iter().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.requested.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.requested.is_empty()
    }

    /// One alias declaration per requested helper; empty when none were requested.
    #[must_use]
    pub fn preamble(&self, options: &CompilerOptions) -> String {
        let mut out = String::new();
        for helper in self.iter() {
            out.push_str("var ");
            out.push_str(&options.helper_alias(helper.name()));
            out.push_str(" = ");
            out.push_str(&options.runtime_name);
            out.push('.');
            out.push_str(helper.name());
            out.push_str(";\n");
        }
        tracing::debug!(helpers = self.len(), "assembled helper preamble");
        out
    }
}
