// Copyright 2026 the Unicode Scripts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! ISO 15924 script codes.

use core::fmt;
use core::str::FromStr;

/// An ISO 15924 script code such as `Latn` or `Cyrl`.
///
/// A code is always one uppercase ASCII letter followed by three lowercase ones, so comparing
/// or ordering codes agrees with comparing or ordering their string forms.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScriptCode([u8; 4]);

impl ScriptCode {
    /// `Zzzz`, for unassigned codepoints.
    pub const UNKNOWN: Self = Self::from_bytes(*b"Zzzz");
    /// `Zyyy`, for characters used with many scripts.
    pub const COMMON: Self = Self::from_bytes(*b"Zyyy");
    /// `Zinh`, for characters taking the script of the preceding base.
    pub const INHERITED: Self = Self::from_bytes(*b"Zinh");
    /// `Hani`.
    pub const HAN: Self = Self::from_bytes(*b"Hani");
    /// `Hira`.
    pub const HIRAGANA: Self = Self::from_bytes(*b"Hira");
    /// `Kana`.
    pub const KATAKANA: Self = Self::from_bytes(*b"Kana");
    /// `Hang`.
    pub const HANGUL: Self = Self::from_bytes(*b"Hang");
    /// `Bopo`.
    pub const BOPOMOFO: Self = Self::from_bytes(*b"Bopo");

    /// `Hanb`: Han with Bopomofo. Not a `Script` property value.
    pub const HAN_WITH_BOPOMOFO: Self = Self::from_bytes(*b"Hanb");
    /// `Jpan`: Han, Hiragana and Katakana. Not a `Script` property value.
    pub const JAPANESE: Self = Self::from_bytes(*b"Jpan");
    /// `Kore`: Hangul and Han. Not a `Script` property value.
    pub const KOREAN: Self = Self::from_bytes(*b"Kore");

    /// The composite writing systems added by UTS #39 augmentation, in sorted order.
    pub const AUGMENTED: [Self; 3] = [Self::HAN_WITH_BOPOMOFO, Self::JAPANESE, Self::KOREAN];

    /// Wraps bytes that are already canonical.
    ///
    /// # Panics
    ///
    /// If `raw` is not one uppercase ASCII letter followed by three lowercase ones. In a
    /// `const` item this is a compile-time error.
    #[must_use]
    pub const fn from_bytes(raw: [u8; 4]) -> Self {
        assert!(
            is_canonical(raw),
            "script codes are one uppercase and three lowercase ASCII letters"
        );
        Self(raw)
    }

    /// Canonicalizes four ASCII letters of any case.
    pub const fn from_ascii(raw: [u8; 4]) -> Result<Self, ParseScriptError> {
        let mut canonical = [0_u8; 4];
        let mut i = 0;
        while i < raw.len() {
            let byte = raw[i];
            if !byte.is_ascii_alphabetic() {
                return Err(ParseScriptError::InvalidBytes);
            }
            canonical[i] = if i == 0 {
                byte.to_ascii_uppercase()
            } else {
                byte.to_ascii_lowercase()
            };
            i += 1;
        }
        Ok(Self(canonical))
    }

    /// Parses a script code, ignoring case.
    pub fn parse(s: &str) -> Result<Self, ParseScriptError> {
        s.parse()
    }

    /// The four canonical bytes.
    #[must_use]
    pub const fn to_bytes(self) -> [u8; 4] {
        self.0
    }

    /// The canonical string form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.0).expect("script codes are ASCII")
    }

    /// Returns `true` for `Zyyy` and `Zinh`, which fit any script.
    #[must_use]
    #[inline]
    pub fn is_common_or_inherited(self) -> bool {
        self == Self::COMMON || self == Self::INHERITED
    }
}

const fn is_canonical(raw: [u8; 4]) -> bool {
    raw[0].is_ascii_uppercase()
        && raw[1].is_ascii_lowercase()
        && raw[2].is_ascii_lowercase()
        && raw[3].is_ascii_lowercase()
}

impl fmt::Debug for ScriptCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScriptCode({self})")
    }
}

impl fmt::Display for ScriptCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ScriptCode {
    type Err = ParseScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = <[u8; 4]>::try_from(s.as_bytes()).map_err(|_| ParseScriptError::InvalidLength)?;
        Self::from_ascii(raw)
    }
}

impl PartialEq<str> for ScriptCode {
    fn eq(&self, other: &str) -> bool {
        self.0[..] == *other.as_bytes()
    }
}

impl PartialEq<&str> for ScriptCode {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

/// Why a string is not a script code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseScriptError {
    /// The input is not four bytes long.
    InvalidLength,
    /// The input has a byte that is not an ASCII letter.
    InvalidBytes,
}

impl fmt::Display for ParseScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InvalidLength => "script codes are four bytes long",
            Self::InvalidBytes => "script codes are made of ASCII letters",
        })
    }
}

impl core::error::Error for ParseScriptError {}
