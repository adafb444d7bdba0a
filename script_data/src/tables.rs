// Copyright 2026 the Unicode Scripts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use smallvec::SmallVec;

use crate::{CodepointIndex, ScriptCode, ScriptId};

/// An ordered list of script ids, usually of length one.
pub type ScriptIds = SmallVec<[ScriptId; 4]>;

/// The immutable script data: names, ISO 15924 codes, `Script_Extensions` overrides and the
/// codepoint index.
///
/// The name and code tables are index-aligned: for every [`ScriptId`] `id`, `names()[id]` and
/// `codes()[id]` describe the same script. Construction through [`ScriptTables::new`] checks
/// every property of the tables that can be checked without the source data.
#[derive(Clone, Debug)]
pub struct ScriptTables {
    names: Box<[&'static str]>,
    codes: Box<[ScriptCode]>,
    /// Sorted by character.
    overrides: Box<[(char, ScriptIds)]>,
    index: CodepointIndex,
}

impl ScriptTables {
    /// Creates validated tables.
    ///
    /// `overrides` lists the characters whose `Script_Extensions` differ from their `Script`;
    /// it may be in any order.
    pub fn new(
        names: Vec<&'static str>,
        codes: Vec<ScriptCode>,
        mut overrides: Vec<(char, ScriptIds)>,
        index: CodepointIndex,
    ) -> Result<Self, TablesError> {
        if names.len() != codes.len() {
            return Err(TablesError::MisalignedTables {
                names: names.len(),
                codes: codes.len(),
            });
        }
        let len = names.len();
        if len > usize::from(u16::MAX) + 1 {
            return Err(TablesError::TooManyScripts(len));
        }

        let mut sorted_codes = codes.clone();
        sorted_codes.sort_unstable();
        if let Some(pair) = sorted_codes.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(TablesError::DuplicateCode(pair[0]));
        }

        let check_id = |id: ScriptId| {
            if id.index() < len {
                Ok(())
            } else {
                Err(TablesError::ScriptIdOutOfRange(id))
            }
        };
        index.script_ids().try_for_each(check_id)?;

        overrides.sort_unstable_by_key(|(ch, _)| *ch);
        if let Some(pair) = overrides.windows(2).find(|pair| pair[0].0 == pair[1].0) {
            return Err(TablesError::DuplicateOverride(pair[0].0));
        }
        for (ch, ids) in &overrides {
            if ids.is_empty() {
                return Err(TablesError::EmptyExtensionList(*ch));
            }
            for (i, id) in ids.iter().enumerate() {
                if ids[..i].contains(id) {
                    return Err(TablesError::DuplicateExtension(*ch, *id));
                }
            }
            ids.iter().copied().try_for_each(check_id)?;
        }

        Ok(Self {
            names: names.into_boxed_slice(),
            codes: codes.into_boxed_slice(),
            overrides: overrides.into_boxed_slice(),
            index,
        })
    }

    /// Number of known scripts.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns `true` if there are no scripts.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Script long-names (e.g. `Latin`), indexed by [`ScriptId`].
    pub fn names(&self) -> &[&'static str] {
        &self.names
    }

    /// ISO 15924 codes (e.g. `Latn`), indexed by [`ScriptId`].
    pub fn codes(&self) -> &[ScriptCode] {
        &self.codes
    }

    /// The long-name of `id`.
    pub fn name(&self, id: ScriptId) -> Option<&'static str> {
        self.names.get(id.index()).copied()
    }

    /// The ISO 15924 code of `id`.
    pub fn code(&self, id: ScriptId) -> Option<ScriptCode> {
        self.codes.get(id.index()).copied()
    }

    /// Looks up the id of an ISO 15924 code.
    pub fn id_of_code(&self, code: ScriptCode) -> Option<ScriptId> {
        let position = self.codes.iter().position(|c| *c == code)?;
        #[allow(
            clippy::cast_possible_truncation,
            reason = "construction limits the tables to u16::MAX + 1 entries"
        )]
        Some(ScriptId::new(position as u16))
    }

    /// The `Script` of `ch`.
    #[inline]
    pub fn script_id(&self, ch: char) -> ScriptId {
        self.index.get(ch as u32)
    }

    /// The explicit `Script_Extensions` of `ch`, if they differ from its `Script`.
    pub fn extension_override(&self, ch: char) -> Option<&[ScriptId]> {
        let ix = self
            .overrides
            .binary_search_by(|(key, _)| key.cmp(&ch))
            .ok()?;
        self.overrides.get(ix).map(|(_, ids)| ids.as_slice())
    }

    /// Every character with explicit `Script_Extensions`, in codepoint order.
    pub fn overrides(&self) -> impl Iterator<Item = (char, &[ScriptId])> + '_ {
        self.overrides.iter().map(|(ch, ids)| (*ch, ids.as_slice()))
    }

    /// The codepoint index.
    pub fn index(&self) -> &CodepointIndex {
        &self.index
    }
}

/// An error returned when script tables are inconsistent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TablesError {
    /// The name and code tables have different lengths.
    MisalignedTables {
        /// Number of long-names.
        names: usize,
        /// Number of ISO 15924 codes.
        codes: usize,
    },
    /// More scripts than a [`ScriptId`] can address.
    TooManyScripts(usize),
    /// The same ISO 15924 code appears twice.
    DuplicateCode(ScriptCode),
    /// An index level offset is zero or doesn't divide the span of the level above.
    InvalidOffsets,
    /// The index or an override refers to a script missing from the tables.
    ScriptIdOutOfRange(ScriptId),
    /// A character has an empty `Script_Extensions` list.
    EmptyExtensionList(char),
    /// A character lists the same script twice in its `Script_Extensions`.
    DuplicateExtension(char, ScriptId),
    /// A character has two `Script_Extensions` entries.
    DuplicateOverride(char),
    /// The source data has no `Unknown` script.
    MissingUnknown,
}

impl fmt::Display for TablesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MisalignedTables { names, codes } => {
                write!(f, "{names} script names but {codes} script codes")
            }
            Self::TooManyScripts(len) => write!(f, "too many scripts: {len}"),
            Self::DuplicateCode(code) => write!(f, "duplicate script code {code}"),
            Self::InvalidOffsets => f.write_str("invalid codepoint index offsets"),
            Self::ScriptIdOutOfRange(id) => {
                write!(f, "script id {} is out of range", id.to_u16())
            }
            Self::EmptyExtensionList(ch) => {
                write!(f, "empty script extensions for U+{:04X}", u32::from(*ch))
            }
            Self::DuplicateExtension(ch, id) => write!(
                f,
                "script id {} repeated in the script extensions of U+{:04X}",
                id.to_u16(),
                u32::from(*ch)
            ),
            Self::DuplicateOverride(ch) => {
                write!(f, "duplicate script extensions for U+{:04X}", u32::from(*ch))
            }
            Self::MissingUnknown => f.write_str("no Unknown script in source data"),
        }
    }
}

impl core::error::Error for TablesError {}
