// Copyright 2026 the Unicode Scripts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `script_data` packages the Unicode `Script` and `Script_Extensions` data that script
//! classification needs at runtime.
//!
//! [`ScriptTables`] holds the index-aligned script long-names and ISO 15924 codes, the
//! characters with explicit `Script_Extensions`, and a [`CodepointIndex`] that maps any
//! codepoint to its [`ScriptId`] in a constant number of steps.
//!
//! ## Features
//!
//! - `std` (enabled by default): Provides [`ScriptTables::global`], built once per process.
//! - `compiled_data` (enabled by default): Builds tables from the data compiled into
//!   `icu_properties`.
//!
//! Without these features the crate is `no_std` and works with caller-supplied tables.
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

#[cfg(feature = "std")]
extern crate std;

mod code;
#[cfg(feature = "compiled_data")]
mod compiled;
mod index;
mod tables;

pub use code::{ParseScriptError, ScriptCode};
#[cfg(feature = "compiled_data")]
pub use compiled::COMPILED_OFFSETS;
pub use index::{CodepointIndex, MAX_CODEPOINT, ScriptId};
pub use tables::{ScriptIds, ScriptTables, TablesError};
