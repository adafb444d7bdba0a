// Copyright 2026 the Unicode Scripts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unicode script classification and [UTS #39] mixed-script detection.
//!
//! This crate answers which writing system(s) a character or string belongs to, per the
//! Unicode `Script` and `Script_Extensions` properties, and whether a string mixes scripts in
//! a way that is potentially confusable.
//!
//! Every query is available on a [`Scripts`] handle over any [`ScriptTables`], and, with the
//! default features, as a free function over tables built once from compiled Unicode data.
//!
//! ## Features
//!
//! - `std` (enabled by default): Required for the process-wide tables.
//! - `compiled_data` (enabled by default): Builds tables from the data compiled into
//!   `icu_properties` and exposes the free functions.
//!
//! ## Example
//!
//! ```
//! # #[cfg(all(feature = "std", feature = "compiled_data"))] {
//! use unicode_scripts::{is_mixed_script, script_code, script_name, scripts_of};
//!
//! assert_eq!(script_name('A'), Some("Latin"));
//! assert_eq!(script_code("Ж").unwrap().as_str(), "Cyrl");
//! assert_eq!(script_name("ab"), None);
//!
//! // Latin and Cyrillic look-alikes.
//! let spoof = "\u{421}irc\u{43B}e";
//! assert_eq!(scripts_of(spoof).into_iter().collect::<Vec<_>>(), ["Cyrillic", "Latin"]);
//! assert!(is_mixed_script(spoof));
//!
//! // Digits and punctuation are compatible with any script.
//! assert!(!is_mixed_script("Circle 1."));
//! # }
//! ```
//!
//! [UTS #39]: https://www.unicode.org/reports/tr39/
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

extern crate alloc;

#[cfg(all(feature = "std", feature = "compiled_data"))]
mod global;
mod mixed;
mod query;
mod scripts;
mod set;

#[cfg(test)]
mod tests;

pub use script_data::{
    CodepointIndex, MAX_CODEPOINT, ParseScriptError, ScriptCode, ScriptId, ScriptIds,
    ScriptTables, TablesError,
};

#[cfg(all(feature = "std", feature = "compiled_data"))]
pub use global::{
    all_script_codes, all_scripts, augmented_script_codes, augmented_script_codes_of,
    full_augmented_universe, is_mixed_script, is_single_script, resolved_script_codes,
    script_code, script_codes_of, script_extension_codes_of, script_extensions_of, script_name,
    scripts_of,
};
pub use query::{InvalidCodepoint, ScriptQuery};
pub use scripts::{Scripts, UNKNOWN_NAME, augmented_script_codes_only};
pub use set::{ScriptCodeSet, ScriptNameSet};
