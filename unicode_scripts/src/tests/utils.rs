// Copyright 2026 the Unicode Scripts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small hand-built set of tables covering the scripts exercised by the tests.

use alloc::vec;
use alloc::vec::Vec;

use crate::{CodepointIndex, ScriptCode, ScriptCodeSet, ScriptId, ScriptTables};

const SCRIPTS: [(&str, &str); 13] = [
    ("Unknown", "Zzzz"),
    ("Common", "Zyyy"),
    ("Inherited", "Zinh"),
    ("Latin", "Latn"),
    ("Cyrillic", "Cyrl"),
    ("Greek", "Grek"),
    ("Han", "Hani"),
    ("Hiragana", "Hira"),
    ("Katakana", "Kana"),
    ("Hangul", "Hang"),
    ("Bopomofo", "Bopo"),
    ("Devanagari", "Deva"),
    ("Bengali", "Beng"),
];

pub(crate) fn code(code: &str) -> ScriptCode {
    ScriptCode::parse(code).unwrap()
}

pub(crate) fn codes(list: &[&str]) -> ScriptCodeSet {
    list.iter().copied().map(code).collect()
}

fn id(code: &str) -> ScriptId {
    let index = SCRIPTS.iter().position(|(_, c)| *c == code).unwrap();
    ScriptId::new(u16::try_from(index).unwrap())
}

fn script_of(cp: u32) -> ScriptId {
    let code = match cp {
        0x41..=0x5A | 0x61..=0x7A => "Latn",
        0x00..=0x7F => "Zyyy",
        0x300..=0x36F => "Zinh",
        0x370..=0x3FF => "Grek",
        0x400..=0x4FF => "Cyrl",
        0x964 | 0x965 => "Zyyy",
        0x900..=0x97F => "Deva",
        0x980..=0x9FF => "Beng",
        0x3001 | 0x30FC => "Zyyy",
        0x3040..=0x309F => "Hira",
        0x30A0..=0x30FF => "Kana",
        0x3100..=0x312F => "Bopo",
        0x4E00..=0x9FFF => "Hani",
        0xAC00..=0xD7A3 => "Hang",
        0x1D5A0..=0x1D5D3 => "Zyyy",
        _ => "Zzzz",
    };
    id(code)
}

/// Tables over [`SCRIPTS`] with a few `Script_Extensions` overrides.
pub(crate) fn fixture_tables() -> ScriptTables {
    let names = SCRIPTS.iter().map(|(name, _)| *name).collect();
    let script_codes = SCRIPTS.iter().map(|(_, c)| code(c)).collect();
    let overrides: Vec<_> = [
        ('\u{0964}', vec!["Deva", "Beng"]),
        ('\u{0965}', vec!["Deva", "Beng"]),
        ('\u{3001}', vec!["Bopo", "Hang", "Hani", "Hira", "Kana"]),
        ('\u{30FC}', vec!["Hira", "Kana"]),
    ]
    .into_iter()
    .map(|(ch, list)| (ch, list.into_iter().map(id).collect()))
    .collect();
    let index = CodepointIndex::build(&[0x10000, 0x400, 0x20], id("Zzzz"), script_of).unwrap();
    ScriptTables::new(names, script_codes, overrides, index).unwrap()
}
