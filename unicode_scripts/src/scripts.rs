// Copyright 2026 the Unicode Scripts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use script_data::{ScriptCode, ScriptId, ScriptIds, ScriptTables};
use smallvec::smallvec;

use crate::{ScriptCodeSet, ScriptNameSet, ScriptQuery};

/// The name reported for scripts missing from the tables.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Script queries over a set of [`ScriptTables`].
///
/// This is a cheap, copyable handle; all methods are pure functions of their input and the
/// tables.
#[derive(Clone, Copy, Debug)]
pub struct Scripts<'a> {
    tables: &'a ScriptTables,
}

impl<'a> Scripts<'a> {
    /// Creates a handle over `tables`.
    pub fn new(tables: &'a ScriptTables) -> Self {
        Self { tables }
    }

    /// The underlying tables.
    pub fn tables(&self) -> &'a ScriptTables {
        self.tables
    }

    /// The `Script` of `ch`.
    #[inline]
    pub fn script_id(&self, ch: char) -> ScriptId {
        self.tables.script_id(ch)
    }

    /// The `Script_Extensions` of `ch`.
    ///
    /// This is the explicit list when one exists, otherwise just [`script_id`](Self::script_id).
    pub fn extension_ids(&self, ch: char) -> ScriptIds {
        match self.tables.extension_override(ch) {
            Some(ids) => ids.into(),
            None => smallvec![self.script_id(ch)],
        }
    }

    /// ISO 15924 codes of the `Script_Extensions` of `ch`.
    pub fn extension_codes(&self, ch: char) -> ScriptCodeSet {
        self.extension_ids(ch)
            .into_iter()
            .map(|id| self.code_of(id))
            .collect()
    }

    fn name_of(&self, id: ScriptId) -> &'a str {
        self.tables.name(id).unwrap_or(UNKNOWN_NAME)
    }

    fn code_of(&self, id: ScriptId) -> ScriptCode {
        self.tables.code(id).unwrap_or(ScriptCode::UNKNOWN)
    }

    /// The long-name of the script of a single character, e.g. `Latin`.
    ///
    /// Returns `None` unless the query holds exactly one scalar value.
    pub fn script_name<'q>(&self, query: impl Into<ScriptQuery<'q>>) -> Option<&'a str> {
        let ch = query.into().scalar()?;
        Some(self.name_of(self.script_id(ch)))
    }

    /// The ISO 15924 code of the script of a single character, e.g. `Latn`.
    ///
    /// Returns `None` unless the query holds exactly one scalar value.
    pub fn script_code<'q>(&self, query: impl Into<ScriptQuery<'q>>) -> Option<ScriptCode> {
        let ch = query.into().scalar()?;
        Some(self.code_of(self.script_id(ch)))
    }

    /// Long-names of the scripts of every character in `text`.
    pub fn scripts_of(&self, text: &str) -> ScriptNameSet<'a> {
        text.chars()
            .map(|ch| self.name_of(self.script_id(ch)))
            .collect()
    }

    /// ISO 15924 codes of the scripts of every character in `text`.
    pub fn script_codes_of(&self, text: &str) -> ScriptCodeSet {
        text.chars()
            .map(|ch| self.code_of(self.script_id(ch)))
            .collect()
    }

    /// Long-names of the union of the `Script_Extensions` of every character in `text`.
    pub fn script_extensions_of(&self, text: &str) -> ScriptNameSet<'a> {
        text.chars()
            .flat_map(|ch| self.extension_ids(ch))
            .map(|id| self.name_of(id))
            .collect()
    }

    /// ISO 15924 codes of the union of the `Script_Extensions` of every character in `text`.
    pub fn script_extension_codes_of(&self, text: &str) -> ScriptCodeSet {
        text.chars()
            .flat_map(|ch| self.extension_ids(ch))
            .map(|id| self.code_of(id))
            .collect()
    }

    /// Every known script long-name, including `Unknown`.
    pub fn all_scripts(&self) -> ScriptNameSet<'a> {
        let mut names: ScriptNameSet<'a> = self.tables.names().iter().copied().collect();
        names.insert(UNKNOWN_NAME);
        names
    }

    /// Every known ISO 15924 code, including `Zzzz`.
    pub fn all_script_codes(&self) -> ScriptCodeSet {
        let mut codes: ScriptCodeSet = self.tables.codes().iter().copied().collect();
        codes.insert(ScriptCode::UNKNOWN);
        codes
    }

    /// See [`augmented_script_codes_only`].
    pub fn augmented_script_codes_only(&self) -> ScriptCodeSet {
        augmented_script_codes_only()
    }
}

/// The composite codes added by UTS #39 augmentation: `Hanb`, `Jpan` and `Kore`.
pub fn augmented_script_codes_only() -> ScriptCodeSet {
    ScriptCodeSet::from(ScriptCode::AUGMENTED)
}
