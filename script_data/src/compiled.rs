// Copyright 2026 the Unicode Scripts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tables built from the Unicode data compiled into `icu_properties`.

use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use icu_properties::props::Script;
use icu_properties::script::ScriptWithExtensions;
use icu_properties::{PropertyNamesLong, PropertyNamesShort};

use crate::{
    CodepointIndex, MAX_CODEPOINT, ScriptCode, ScriptId, ScriptIds, ScriptTables, TablesError,
};

/// Level offsets of the compiled index: planes, then 4096-, 256- and 16-codepoint blocks.
pub const COMPILED_OFFSETS: [u32; 4] = [0x10000, 0x1000, 0x100, 0x10];

impl ScriptTables {
    /// Builds tables from the Unicode data baked into `icu_properties`.
    ///
    /// Known scripts are those labelling at least one codepoint through `Script` or
    /// `Script_Extensions`, plus `Common`, `Inherited` and `Unknown`, in ICU4C value order.
    /// This walks the whole codepoint range, so prefer [`ScriptTables::global`] where
    /// available.
    pub fn from_compiled_data() -> Result<Self, TablesError> {
        let scx = ScriptWithExtensions::new();
        let long_names = PropertyNamesLong::<Script>::new();
        let short_names = PropertyNamesShort::<Script>::new();

        let mut observed = BTreeMap::new();
        for script in [Script::Common, Script::Inherited, Script::Unknown] {
            observed.insert(script.to_icu4c_value(), script);
        }
        for cp in 0..=MAX_CODEPOINT {
            let script = scx.get_script_val32(cp);
            observed.insert(script.to_icu4c_value(), script);
            for script in scx.get_script_extensions_val32(cp).iter() {
                observed.insert(script.to_icu4c_value(), script);
            }
        }

        // Names and codes are pushed together so that dropping a script keeps them aligned.
        let mut names = Vec::with_capacity(observed.len());
        let mut codes = Vec::with_capacity(observed.len());
        let mut ids = BTreeMap::new();
        for (value, script) in observed {
            let code = short_names
                .get(script)
                .and_then(|code| ScriptCode::parse(code).ok());
            let Some((name, code)) = long_names.get(script).zip(code) else {
                log::warn!("dropping script with ICU4C value {value}: missing name or code");
                continue;
            };
            let id = u16::try_from(names.len())
                .map_err(|_| TablesError::TooManyScripts(names.len() + 1))?;
            ids.insert(value, ScriptId::new(id));
            names.push(name);
            codes.push(code);
        }

        let unknown = ids
            .get(&Script::Unknown.to_icu4c_value())
            .copied()
            .ok_or(TablesError::MissingUnknown)?;
        let id_of = |script: Script| {
            ids.get(&script.to_icu4c_value())
                .copied()
                .unwrap_or(unknown)
        };

        let index = CodepointIndex::build(&COMPILED_OFFSETS, unknown, |cp| {
            id_of(scx.get_script_val32(cp))
        })?;

        let mut overrides = Vec::new();
        for ch in (0..=MAX_CODEPOINT).filter_map(char::from_u32) {
            let own = id_of(scx.get_script_val(ch));
            let mut extensions: ScriptIds = scx
                .get_script_extensions_val(ch)
                .iter()
                .map(id_of)
                .collect();
            // Ids follow ICU4C order, so sorting keeps the source order.
            extensions.sort_unstable();
            extensions.dedup();
            if extensions.len() != 1 || extensions[0] != own {
                overrides.push((ch, extensions));
            }
        }

        log::debug!(
            "built script tables: {} scripts, {} extension overrides, {} index nodes",
            names.len(),
            overrides.len(),
            index.node_count()
        );

        Self::new(names, codes, overrides, index)
    }
}

#[cfg(feature = "std")]
impl ScriptTables {
    /// Returns the process-wide tables built from compiled data.
    ///
    /// The tables are built on first use and shared read-only afterwards.
    ///
    /// # Panics
    ///
    /// If the compiled Unicode data is inconsistent, which the test suite rules out.
    pub fn global() -> &'static Self {
        static TABLES: std::sync::OnceLock<ScriptTables> = std::sync::OnceLock::new();
        TABLES.get_or_init(|| {
            Self::from_compiled_data().expect("compiled Unicode data should be consistent")
        })
    }
}
