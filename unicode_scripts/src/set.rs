// Copyright 2026 the Unicode Scripts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::collections::BTreeSet;
use alloc::collections::btree_set;
use script_data::ScriptCode;

/// A set of script long-names, iterated in sorted order.
pub type ScriptNameSet<'a> = BTreeSet<&'a str>;

/// A set of ISO 15924 codes, iterated in sorted order.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct ScriptCodeSet(BTreeSet<ScriptCode>);

impl ScriptCodeSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of codes in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the set holds no codes.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if `code` is in the set.
    pub fn contains(&self, code: ScriptCode) -> bool {
        self.0.contains(&code)
    }

    /// Adds `code`, returning `true` if it was not present.
    pub fn insert(&mut self, code: ScriptCode) -> bool {
        self.0.insert(code)
    }

    /// Codes present in both sets.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Self {
        Self(self.0.intersection(&other.0).copied().collect())
    }

    /// Codes present in either set.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self(self.0.union(&other.0).copied().collect())
    }

    /// Keeps only the codes also present in `other`.
    pub fn retain_common(&mut self, other: &Self) {
        self.0.retain(|code| other.0.contains(code));
    }

    /// Iterates over the codes in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = ScriptCode> + '_ {
        self.0.iter().copied()
    }
}

impl core::fmt::Debug for ScriptCodeSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.0.iter().map(ScriptCode::as_str)).finish()
    }
}

impl FromIterator<ScriptCode> for ScriptCodeSet {
    fn from_iter<I: IntoIterator<Item = ScriptCode>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<ScriptCode> for ScriptCodeSet {
    fn extend<I: IntoIterator<Item = ScriptCode>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for ScriptCodeSet {
    type Item = ScriptCode;
    type IntoIter = btree_set::IntoIter<ScriptCode>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ScriptCodeSet {
    type Item = &'a ScriptCode;
    type IntoIter = btree_set::Iter<'a, ScriptCode>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<const N: usize> From<[ScriptCode; N]> for ScriptCodeSet {
    fn from(codes: [ScriptCode; N]) -> Self {
        codes.into_iter().collect()
    }
}
