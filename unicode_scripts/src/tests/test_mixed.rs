// Copyright 2026 the Unicode Scripts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use super::utils::{codes, fixture_tables};
use crate::{ScriptCode, Scripts};

#[test]
fn universe_is_known_codes_plus_composites() {
    let tables = fixture_tables();
    let scripts = Scripts::new(&tables);

    let universe = scripts.full_augmented_universe();
    assert_eq!(universe.len(), tables.len() + 3);
    assert_eq!(
        universe,
        scripts
            .all_script_codes()
            .union(&codes(&["Hanb", "Jpan", "Kore"]))
    );
}

#[test]
fn propagation() {
    let tables = fixture_tables();
    let scripts = Scripts::new(&tables);

    assert_eq!(
        scripts.augmented_script_codes('中'),
        codes(&["Hanb", "Hani", "Jpan", "Kore"])
    );
    assert_eq!(scripts.augmented_script_codes('ね'), codes(&["Hira", "Jpan"]));
    assert_eq!(scripts.augmented_script_codes('ガ'), codes(&["Jpan", "Kana"]));
    assert_eq!(scripts.augmented_script_codes('한'), codes(&["Hang", "Kore"]));
    assert_eq!(scripts.augmented_script_codes('ㄅ'), codes(&["Bopo", "Hanb"]));
    assert_eq!(scripts.augmented_script_codes('a'), codes(&["Latn"]));
    assert_eq!(
        scripts.augmented_script_codes('\u{E000}'),
        codes(&["Zzzz"])
    );
}

#[test]
fn propagation_applies_to_extensions() {
    let tables = fixture_tables();
    let scripts = Scripts::new(&tables);

    assert_eq!(
        scripts.augmented_script_codes('ー'),
        codes(&["Hira", "Jpan", "Kana"])
    );
    assert_eq!(
        scripts.augmented_script_codes('\u{3001}'),
        codes(&["Bopo", "Hanb", "Hang", "Hani", "Hira", "Jpan", "Kana", "Kore"])
    );
}

#[test]
fn common_and_inherited_match_everything() {
    let tables = fixture_tables();
    let scripts = Scripts::new(&tables);
    let universe = scripts.full_augmented_universe();

    assert_eq!(scripts.augmented_script_codes('1'), universe);
    assert_eq!(scripts.augmented_script_codes('\u{301}'), universe);
    assert_eq!(scripts.augmented_script_codes_of("1."), universe);
    // A single wildcard swamps any other script in the union.
    assert_eq!(scripts.augmented_script_codes_of("a1"), universe);
}

#[test]
fn augmented_codes_of_text_is_a_union() {
    let tables = fixture_tables();
    let scripts = Scripts::new(&tables);

    assert_eq!(
        scripts.augmented_script_codes_of("ねガ"),
        codes(&["Hira", "Jpan", "Kana"])
    );
    assert!(scripts.augmented_script_codes_of("").is_empty());
}

#[test]
fn resolution() {
    let tables = fixture_tables();
    let scripts = Scripts::new(&tables);

    assert_eq!(scripts.resolved_script_codes("Circle"), codes(&["Latn"]));
    assert_eq!(scripts.resolved_script_codes("Circle 1."), codes(&["Latn"]));
    assert_eq!(scripts.resolved_script_codes("e\u{301}"), codes(&["Latn"]));
    assert_eq!(scripts.resolved_script_codes("ねガ"), codes(&["Jpan"]));
    assert_eq!(scripts.resolved_script_codes("中ね"), codes(&["Jpan"]));
    assert_eq!(scripts.resolved_script_codes("한中"), codes(&["Kore"]));
    assert_eq!(scripts.resolved_script_codes("ㄅ中"), codes(&["Hanb"]));
    assert_eq!(scripts.resolved_script_codes("ーね"), codes(&["Hira", "Jpan"]));
    assert_eq!(
        scripts.resolved_script_codes("\u{965}\u{915}"),
        codes(&["Deva"])
    );
    assert_eq!(
        scripts.resolved_script_codes("\u{E000}"),
        codes(&["Zzzz"])
    );
}

#[test]
fn neutral_characters_do_not_narrow_the_resolution() {
    let tables = fixture_tables();
    let scripts = Scripts::new(&tables);

    assert_eq!(
        scripts.resolved_script_codes("1ね 2ガ\u{301}."),
        codes(&["Jpan"])
    );
    assert_eq!(
        scripts.resolved_script_codes("\u{421}1\u{301} \u{441}"),
        codes(&["Cyrl"])
    );
    assert!(scripts.resolved_script_codes("a 1 \u{421}").is_empty());
    // Text of only `Zyyy` and `Zinh` characters resolves like empty text.
    assert_eq!(
        scripts.resolved_script_codes("1 \u{301}"),
        scripts.resolved_script_codes("")
    );
}

#[test]
fn resolution_of_neutral_text_is_the_universe() {
    let tables = fixture_tables();
    let scripts = Scripts::new(&tables);
    let universe = scripts.full_augmented_universe();

    assert_eq!(scripts.resolved_script_codes(""), universe);
    assert_eq!(scripts.resolved_script_codes("1"), universe);
    assert_eq!(
        scripts.resolved_script_codes("\u{1D5A2}\u{1D5C2}"),
        universe
    );
}

#[test]
fn mixed_script_detection() {
    let tables = fixture_tables();
    let scripts = Scripts::new(&tables);

    let spoof = "\u{421}ir\u{441}l\u{435}";
    assert!(scripts.resolved_script_codes(spoof).is_empty());
    assert!(scripts.is_mixed_script(spoof));
    assert!(!scripts.is_single_script(spoof));

    assert!(scripts.is_mixed_script("a\u{E000}"));
    assert!(scripts.is_mixed_script("αa"));
    assert!(scripts.is_mixed_script("한ね"));

    assert!(scripts.is_single_script("\u{421}\u{456}\u{433}\u{441}\u{4C0}\u{435}"));
    assert!(scripts.is_single_script("中ガ"));
    // Neutral text is consistent with every script, so it counts as single-script.
    assert!(scripts.is_single_script(""));
    assert!(scripts.is_single_script("123"));
}

#[test]
fn mixed_is_the_negation_of_single() {
    let tables = fixture_tables();
    let scripts = Scripts::new(&tables);

    for text in ["", "1", "Circle", "C\u{456}rcle", "ねガ", "한ね", "\u{E000}", "ー"] {
        assert_ne!(scripts.is_mixed_script(text), scripts.is_single_script(text));
        assert_eq!(
            scripts.is_mixed_script(text),
            scripts.resolved_script_codes(text).is_empty()
        );
    }
    assert!(
        scripts
            .resolved_script_codes("ねガ")
            .contains(ScriptCode::JAPANESE)
    );
}
