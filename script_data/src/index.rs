// Copyright 2026 the Unicode Scripts Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The multi-level codepoint → script index.

use alloc::boxed::Box;
use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::TablesError;

/// The largest Unicode codepoint.
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

/// Number of codepoints covered by the root level.
const ROOT_SPAN: u32 = MAX_CODEPOINT + 1;

/// Identifies a script by its position in the name and code tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScriptId(u16);

impl ScriptId {
    /// Creates a `ScriptId` from its table position.
    #[must_use]
    #[inline(always)]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Returns the raw id.
    #[must_use]
    #[inline(always)]
    pub const fn to_u16(self) -> u16 {
        self.0
    }

    /// Returns the position of this script in the name and code tables.
    #[must_use]
    #[inline(always)]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Node {
    /// Every codepoint below this node has the same script.
    Leaf(ScriptId),
    /// Start of a child table in `CodepointIndex::nodes`.
    Table(u32),
}

/// A fixed-depth, variable fan-out lookup structure over `0..=0x10FFFF`.
///
/// Level `k` splits the span of its parent by `offsets[k]`, with the root spanning the full
/// codepoint range. A child whose codepoints all share a script is stored as a leaf and ends
/// the descent early; otherwise the descent continues until the last level, whose tables are
/// indexed directly by the final remainder. Identical child tables are stored once.
#[derive(Clone, Debug)]
pub struct CodepointIndex {
    offsets: Box<[u32]>,
    nodes: Box<[Node]>,
    root: u32,
    unknown: ScriptId,
}

impl CodepointIndex {
    /// Builds an index from a per-codepoint classification.
    ///
    /// `script_of` is called exactly once for every codepoint in `0..=0x10FFFF`. `unknown` is
    /// returned by [`get`](Self::get) for values outside that range.
    ///
    /// Every offset must be non-zero and divide the span of the level above it, the root span
    /// being `0x110000`. This keeps every child position in bounds.
    pub fn build(
        offsets: &[u32],
        unknown: ScriptId,
        script_of: impl FnMut(u32) -> ScriptId,
    ) -> Result<Self, TablesError> {
        validate_offsets(offsets)?;
        let mut builder = Builder {
            offsets,
            nodes: Vec::new(),
            tables: HashMap::new(),
            script_of,
        };
        // The root is always a table, even when the whole range is uniform.
        let children = builder.children(0, ROOT_SPAN, 0);
        let root = builder.intern(children);
        Ok(Self {
            offsets: offsets.into(),
            nodes: builder.nodes.into_boxed_slice(),
            root,
            unknown,
        })
    }

    /// Returns the script id of `codepoint`.
    pub fn get(&self, codepoint: u32) -> ScriptId {
        if codepoint > MAX_CODEPOINT {
            return self.unknown;
        }
        let mut remainder = codepoint;
        let mut table = self.root as usize;
        for &offset in self.offsets.iter() {
            let slot = table + (remainder / offset) as usize;
            remainder %= offset;
            match self.nodes.get(slot) {
                Some(Node::Leaf(id)) => return *id,
                Some(Node::Table(start)) => table = *start as usize,
                None => return self.unknown,
            }
        }
        match self.nodes.get(table + remainder as usize) {
            Some(Node::Leaf(id)) => *id,
            _ => self.unknown,
        }
    }

    /// The divisor of each level, outermost first.
    pub fn offsets(&self) -> &[u32] {
        &self.offsets
    }

    /// The id returned for values above `0x10FFFF`.
    pub fn unknown(&self) -> ScriptId {
        self.unknown
    }

    /// Total number of stored nodes across all tables.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Every script id stored in the index, including duplicates.
    pub fn script_ids(&self) -> impl Iterator<Item = ScriptId> + '_ {
        self.nodes
            .iter()
            .filter_map(|node| match node {
                Node::Leaf(id) => Some(*id),
                Node::Table(_) => None,
            })
            .chain(core::iter::once(self.unknown))
    }
}

fn validate_offsets(offsets: &[u32]) -> Result<(), TablesError> {
    if offsets.is_empty() {
        return Err(TablesError::InvalidOffsets);
    }
    let mut span = ROOT_SPAN;
    for &offset in offsets {
        if offset == 0 || span % offset != 0 {
            return Err(TablesError::InvalidOffsets);
        }
        span = offset;
    }
    Ok(())
}

struct Builder<'a, F> {
    offsets: &'a [u32],
    nodes: Vec<Node>,
    tables: HashMap<Vec<Node>, u32>,
    script_of: F,
}

impl<F: FnMut(u32) -> ScriptId> Builder<'_, F> {
    /// Builds the node covering `span` codepoints from `start`, at `depth` levels below the root.
    fn node(&mut self, start: u32, span: u32, depth: usize) -> Node {
        let children = self.children(start, span, depth);
        match children.split_first() {
            Some((Node::Leaf(first), rest)) if rest.iter().all(|n| *n == Node::Leaf(*first)) => {
                Node::Leaf(*first)
            }
            _ => Node::Table(self.intern(children)),
        }
    }

    fn children(&mut self, start: u32, span: u32, depth: usize) -> Vec<Node> {
        match self.offsets.get(depth) {
            Some(&offset) => (0..span / offset)
                .map(|i| self.node(start + i * offset, offset, depth + 1))
                .collect(),
            None => (start..start + span)
                .map(|cp| Node::Leaf((self.script_of)(cp)))
                .collect(),
        }
    }

    fn intern(&mut self, children: Vec<Node>) -> u32 {
        if let Some(&start) = self.tables.get(&children) {
            return start;
        }
        #[allow(
            clippy::cast_possible_truncation,
            reason = "the index holds at most one node per codepoint plus table headers"
        )]
        let start = self.nodes.len() as u32;
        self.nodes.extend_from_slice(&children);
        self.tables.insert(children, start);
        start
    }
}
