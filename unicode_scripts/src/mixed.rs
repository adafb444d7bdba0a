// Copyright 2026 the Unicode Scripts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mixed-script detection as defined by [UTS #39 §5.1].
//!
//! [UTS #39 §5.1]: https://www.unicode.org/reports/tr39/#Mixed_Script_Detection

use script_data::ScriptCode;

use crate::{ScriptCodeSet, Scripts};

/// Composite writing systems implied by a script code.
const PROPAGATION: [(ScriptCode, &[ScriptCode]); 5] = [
    (
        ScriptCode::HAN,
        &[
            ScriptCode::HAN_WITH_BOPOMOFO,
            ScriptCode::JAPANESE,
            ScriptCode::KOREAN,
        ],
    ),
    (ScriptCode::HIRAGANA, &[ScriptCode::JAPANESE]),
    (ScriptCode::KATAKANA, &[ScriptCode::JAPANESE]),
    (ScriptCode::HANGUL, &[ScriptCode::KOREAN]),
    (ScriptCode::BOPOMOFO, &[ScriptCode::HAN_WITH_BOPOMOFO]),
];

/// Adds the composite writing systems implied by `codes`.
fn propagate(mut codes: ScriptCodeSet) -> ScriptCodeSet {
    for (script, implied) in PROPAGATION {
        if codes.contains(script) {
            codes.extend(implied.iter().copied());
        }
    }
    codes
}

/// `Zyyy` and `Zinh` fit every script.
fn is_wildcard(codes: &ScriptCodeSet) -> bool {
    codes.iter().any(ScriptCode::is_common_or_inherited)
}

impl Scripts<'_> {
    /// Every known code plus `Hanb`, `Jpan` and `Kore`.
    ///
    /// This is the identity of [`resolved_script_codes`](Self::resolved_script_codes).
    pub fn full_augmented_universe(&self) -> ScriptCodeSet {
        let mut codes = self.all_script_codes();
        codes.extend(ScriptCode::AUGMENTED);
        codes
    }

    /// Applies augmentation to a set of `Script_Extensions` codes.
    ///
    /// Codes implying a composite writing system add it; any `Zyyy` or `Zinh` turns the set
    /// into the full augmented universe.
    fn augment(&self, codes: ScriptCodeSet) -> ScriptCodeSet {
        if is_wildcard(&codes) {
            self.full_augmented_universe()
        } else {
            propagate(codes)
        }
    }

    /// The augmented script set of a single character.
    ///
    /// ```
    /// # #[cfg(all(feature = "std", feature = "compiled_data"))] {
    /// use unicode_scripts::{ScriptCode, Scripts};
    ///
    /// let scripts = Scripts::global();
    /// let han = scripts.augmented_script_codes('中');
    /// for code in ["Hani", "Hanb", "Jpan", "Kore"] {
    ///     assert!(han.contains(ScriptCode::parse(code).unwrap()));
    /// }
    /// # }
    /// ```
    pub fn augmented_script_codes(&self, ch: char) -> ScriptCodeSet {
        self.augment(self.extension_codes(ch))
    }

    /// Augmentation applied to the union of the `Script_Extensions` of every character.
    ///
    /// Empty text yields the empty set.
    pub fn augmented_script_codes_of(&self, text: &str) -> ScriptCodeSet {
        self.augment(self.script_extension_codes_of(text))
    }

    /// The resolved script set of `text`: the intersection of the augmented sets of its
    /// characters.
    ///
    /// Empty text resolves to [`full_augmented_universe`](Self::full_augmented_universe).
    pub fn resolved_script_codes(&self, text: &str) -> ScriptCodeSet {
        let mut resolved = self.full_augmented_universe();
        for ch in text.chars() {
            if resolved.is_empty() {
                break;
            }
            let codes = self.extension_codes(ch);
            // Intersecting with the universe is a no-op.
            if is_wildcard(&codes) {
                continue;
            }
            resolved.retain_common(&propagate(codes));
        }
        resolved
    }

    /// Returns `true` if no single script is consistent with every character of `text`.
    pub fn is_mixed_script(&self, text: &str) -> bool {
        self.resolved_script_codes(text).is_empty()
    }

    /// Returns `true` if at least one script is consistent with every character of `text`.
    ///
    /// This holds for text made only of `Common` or `Inherited` characters too; it does not
    /// mean that exactly one script is present.
    pub fn is_single_script(&self, text: &str) -> bool {
        !self.is_mixed_script(text)
    }
}
