//! Rule-based proteolytic cleavage.
//!
//! A [`CleavageRule`] cuts on the C-terminal side of every residue in its
//! `cut_after` set, unless the next residue is in its `block_if_next` set.
//! The engine is lenient: residues are matched as literal letters, nothing is
//! checked against the amino-acid alphabet, and no input makes it fail.
//!
//! Matching ignores case but fragments are sliced from the input verbatim,
//! so concatenating the output always gives back the input.
//!
//! # Example
//!
//! ```
//! use pepcut_digest::cleave::{cleave, CleavageRule};
//! use pepcut_digest::ResidueSet;
//!
//! let cut = ResidueSet::from("KR");
//! let block = ResidueSet::from("P");
//! let fragments = cleave("KMKAFLRGYV", &cut, Some(&block));
//! assert_eq!(fragments, ["K", "MK", "AFLR", "GYV"]);
//!
//! let rule = CleavageRule::new("KR").blocked_by("P");
//! assert_eq!(rule.cleave("AKPRG"), ["AKPR", "G"]);
//! ```

use crate::residue_set::ResidueSet;

/// A cut-after / block-if-next cleavage rule.
///
/// An absent blocking set and an empty one are the same rule: nothing blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CleavageRule {
    /// Residues after which a cut is made.
    pub cut_after: ResidueSet,
    /// Residues that suppress a cut when they immediately follow the site.
    #[cfg_attr(feature = "serde", serde(default))]
    pub block_if_next: ResidueSet,
}

impl CleavageRule {
    /// A rule cutting after every residue in `cut_after`, with no blocking.
    pub fn new(cut_after: impl Into<ResidueSet>) -> Self {
        Self {
            cut_after: cut_after.into(),
            block_if_next: ResidueSet::new(),
        }
    }

    /// Set the residues that suppress a cut when they follow the site.
    pub fn blocked_by(mut self, block_if_next: impl Into<ResidueSet>) -> Self {
        self.block_if_next = block_if_next.into();
        self
    }

    /// Whether the rule cuts between `residue` and the residue after it.
    ///
    /// `next` is `None` at the C-terminus, where nothing can block.
    pub fn cuts_between(&self, residue: char, next: Option<char>) -> bool {
        self.cut_after.contains(residue) && !next.is_some_and(|n| self.block_if_next.contains(n))
    }

    /// Cleave `seq` under this rule. See [`cleave`].
    pub fn cleave(&self, seq: &str) -> Vec<String> {
        fragment_sequences(digest(seq, self))
    }
}

/// A fragment produced by cleavage, with its location in the source sequence.
///
/// Positions count residues (characters), not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fragment {
    /// Start position in the original sequence (inclusive).
    pub start: usize,
    /// End position in the original sequence (exclusive).
    pub end: usize,
    /// Fragment length in residues.
    pub length: usize,
    /// The fragment's residues, case preserved from the input.
    pub sequence: String,
}

/// Residue positions after which `rule` cuts `seq`.
///
/// Each position is the exclusive end of a cut fragment. A site at the last
/// residue is included; the trailing remainder has no site of its own.
pub fn cleavage_sites(seq: &str, rule: &CleavageRule) -> Vec<usize> {
    let mut sites = Vec::new();
    let mut residues = seq.chars().peekable();
    let mut pos = 0usize;
    while let Some(residue) = residues.next() {
        pos += 1;
        if rule.cuts_between(residue, residues.peek().copied()) {
            sites.push(pos);
        }
    }
    sites
}

/// Digest a sequence, returning positional fragments in N- to C-terminal order.
///
/// The first fragment starts at position 0 and the last ends at the sequence
/// length. An empty sequence yields no fragments.
pub fn digest(seq: &str, rule: &CleavageRule) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    // Fragment start as (residue position, byte offset).
    let mut start = (0usize, 0usize);
    let mut pos = 0usize;

    let mut residues = seq.char_indices().peekable();
    while let Some((offset, residue)) = residues.next() {
        pos += 1;
        let next = residues.peek().map(|&(_, c)| c);
        if rule.cuts_between(residue, next) {
            let end = offset + residue.len_utf8();
            fragments.push(Fragment {
                start: start.0,
                end: pos,
                length: pos - start.0,
                sequence: seq[start.1..end].to_string(),
            });
            start = (pos, end);
        }
    }

    // C-terminal remainder, which need not end in a cut residue.
    if start.1 < seq.len() {
        fragments.push(Fragment {
            start: start.0,
            end: pos,
            length: pos - start.0,
            sequence: seq[start.1..].to_string(),
        });
    }

    tracing::debug!(
        residues = pos,
        fragments = fragments.len(),
        "digest complete"
    );
    fragments
}

/// Split `seq` into ordered fragments, cutting after each `cut_after` residue
/// unless the next residue is in `block_if_next`.
///
/// `None` and an empty `block_if_next` both mean nothing blocks.
pub fn cleave(
    seq: &str,
    cut_after: &ResidueSet,
    block_if_next: Option<&ResidueSet>,
) -> Vec<String> {
    let rule = CleavageRule {
        cut_after: cut_after.clone(),
        block_if_next: block_if_next.cloned().unwrap_or_default(),
    };
    rule.cleave(seq)
}

fn fragment_sequences(fragments: Vec<Fragment>) -> Vec<String> {
    fragments.into_iter().map(|f| f.sequence).collect()
}
