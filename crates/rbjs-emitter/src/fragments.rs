//! Emitted source text.

use rbjs_common::limits::INLINE_FRAGMENTS;
use smallvec::SmallVec;
use std::borrow::Cow;
use std::fmt;

/// An ordered sequence of JavaScript text fragments.
///
/// Concatenating the fragments in order yields the emitted source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragments {
    parts: SmallVec<[Cow<'static, str>; INLINE_FRAGMENTS]>,
}

impl Fragments {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A fragment list holding one piece of text.
    pub fn text(text: impl Into<Cow<'static, str>>) -> Self {
        let mut fragments = Self::new();
        fragments.push(text);
        fragments
    }

    pub fn push(&mut self, text: impl Into<Cow<'static, str>>) {
        let text = text.into();
        if !text.is_empty() {
            self.parts.push(text);
        }
    }

    /// Move every fragment of `other` onto the end of `self`.
    pub fn append(&mut self, other: Fragments) {
        self.parts.extend(other.parts);
    }

    /// Surround everything emitted so far with `open` and `close`.
    pub fn wrap(&mut self, open: &'static str, close: &'static str) {
        self.parts.insert(0, Cow::Borrowed(open));
        self.parts.push(Cow::Borrowed(close));
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().map(|part| part.as_ref())
    }
}

impl fmt::Display for Fragments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for part in &self.parts {
            f.write_str(part)?;
        }
        Ok(())
    }
}
