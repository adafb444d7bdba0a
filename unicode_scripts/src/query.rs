// Copyright 2026 the Unicode Scripts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Input of a single-character query.
///
/// Queries are defined on exactly one Unicode scalar value. Text input with zero or several
/// scalar values is accepted but yields no result. Integer codepoints are validated when the
/// query is created, see [`ScriptQuery::codepoint`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScriptQuery<'a> {
    /// A string expected to hold one scalar value.
    Text(&'a str),
    /// A single scalar value.
    Scalar(char),
}

impl ScriptQuery<'_> {
    /// Creates a query from an integer codepoint.
    ///
    /// Fails for values above `0x10FFFF` and for surrogates, which are not scalar values.
    pub fn codepoint(codepoint: u32) -> Result<Self, InvalidCodepoint> {
        if let Some(ch) = char::from_u32(codepoint) {
            Ok(Self::Scalar(ch))
        } else if codepoint > char::MAX as u32 {
            Err(InvalidCodepoint::OutOfRange(codepoint))
        } else {
            Err(InvalidCodepoint::Surrogate(codepoint))
        }
    }

    /// The scalar value this query is about, if there is exactly one.
    pub fn scalar(self) -> Option<char> {
        match self {
            Self::Scalar(ch) => Some(ch),
            Self::Text(text) => {
                let mut chars = text.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Some(ch),
                    _ => None,
                }
            }
        }
    }
}

impl<'a> From<&'a str> for ScriptQuery<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl From<char> for ScriptQuery<'_> {
    fn from(ch: char) -> Self {
        Self::Scalar(ch)
    }
}

impl TryFrom<u32> for ScriptQuery<'_> {
    type Error = InvalidCodepoint;

    fn try_from(codepoint: u32) -> Result<Self, Self::Error> {
        Self::codepoint(codepoint)
    }
}

/// An integer that is not a Unicode scalar value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidCodepoint {
    /// The value is above `0x10FFFF`.
    OutOfRange(u32),
    /// The value is in the surrogate range `0xD800..=0xDFFF`.
    Surrogate(u32),
}

impl fmt::Display for InvalidCodepoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange(cp) => write!(f, "codepoint {cp:#X} is above U+10FFFF"),
            Self::Surrogate(cp) => write!(f, "codepoint {cp:#X} is a surrogate"),
        }
    }
}

impl core::error::Error for InvalidCodepoint {}
