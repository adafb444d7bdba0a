// Copyright 2026 the Unicode Scripts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Queries over the process-wide tables built from compiled Unicode data.

use script_data::{ScriptCode, ScriptTables};

use crate::{ScriptCodeSet, ScriptNameSet, ScriptQuery, Scripts};

impl Scripts<'static> {
    /// A handle over [`ScriptTables::global`].
    pub fn global() -> Self {
        Self::new(ScriptTables::global())
    }
}

/// See [`Scripts::script_name`].
pub fn script_name<'q>(query: impl Into<ScriptQuery<'q>>) -> Option<&'static str> {
    Scripts::global().script_name(query)
}

/// See [`Scripts::script_code`].
pub fn script_code<'q>(query: impl Into<ScriptQuery<'q>>) -> Option<ScriptCode> {
    Scripts::global().script_code(query)
}

/// See [`Scripts::scripts_of`].
pub fn scripts_of(text: &str) -> ScriptNameSet<'static> {
    Scripts::global().scripts_of(text)
}

/// See [`Scripts::script_codes_of`].
pub fn script_codes_of(text: &str) -> ScriptCodeSet {
    Scripts::global().script_codes_of(text)
}

/// See [`Scripts::script_extensions_of`].
pub fn script_extensions_of(text: &str) -> ScriptNameSet<'static> {
    Scripts::global().script_extensions_of(text)
}

/// See [`Scripts::script_extension_codes_of`].
pub fn script_extension_codes_of(text: &str) -> ScriptCodeSet {
    Scripts::global().script_extension_codes_of(text)
}

/// See [`Scripts::full_augmented_universe`].
pub fn full_augmented_universe() -> ScriptCodeSet {
    Scripts::global().full_augmented_universe()
}

/// See [`Scripts::augmented_script_codes`].
pub fn augmented_script_codes(ch: char) -> ScriptCodeSet {
    Scripts::global().augmented_script_codes(ch)
}

/// See [`Scripts::augmented_script_codes_of`].
pub fn augmented_script_codes_of(text: &str) -> ScriptCodeSet {
    Scripts::global().augmented_script_codes_of(text)
}

/// See [`Scripts::resolved_script_codes`].
pub fn resolved_script_codes(text: &str) -> ScriptCodeSet {
    Scripts::global().resolved_script_codes(text)
}

/// See [`Scripts::is_mixed_script`].
pub fn is_mixed_script(text: &str) -> bool {
    Scripts::global().is_mixed_script(text)
}

/// See [`Scripts::is_single_script`].
pub fn is_single_script(text: &str) -> bool {
    Scripts::global().is_single_script(text)
}

/// See [`Scripts::all_scripts`].
pub fn all_scripts() -> ScriptNameSet<'static> {
    Scripts::global().all_scripts()
}

/// See [`Scripts::all_script_codes`].
pub fn all_script_codes() -> ScriptCodeSet {
    Scripts::global().all_script_codes()
}
