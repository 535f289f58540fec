//! Validation of ordered fragment lists against a cleavage rule.
//!
//! [`validate_ordered_fragments`] is strict where the cleavage engine is
//! lenient. Fragments are trimmed and uppercased, then checked in a fixed
//! order, stopping at the first failure:
//!
//! 1. the list is non-empty
//! 2. no fragment is empty
//! 3. every residue is a canonical amino acid
//! 4. every rule-set member is a canonical amino acid
//! 5. every fragment but the last ends in a `cut_after` residue
//! 6. no fragment but the first starts with a `block_if_next` residue
//!
//! The last fragment is exempt from check 5 because it is the C-terminal
//! remainder of a digest and need not end at a cut site.
//!
//! Failures are returned as a [`ValidationError`] value carrying the
//! fragment index, residue index, and offending residue.

use std::fmt;

use pepcut_core::{PepcutError, Summarizable};
use thiserror::Error;

use crate::alphabet::is_canonical;
use crate::reconstruct::reconstruct_from_ordered;
use crate::residue_set::ResidueSet;

/// Which rule set a residue came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RuleSetOrigin {
    CutAfter,
    BlockIfNext,
}

impl RuleSetOrigin {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CutAfter => "cut_after",
            Self::BlockIfNext => "block_if_next",
        }
    }
}

impl fmt::Display for RuleSetOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error taxonomy for fragment validation and reconstruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyFragmentList,
    EmptyFragment,
    InvalidResidue,
    InvalidCutoff,
    BlockedByNext,
    /// Reserved: reconstruction of an empty list yields an empty sequence.
    EmptyInput,
}

impl ErrorKind {
    /// The snake_case name of the kind, e.g. `"invalid_cutoff"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EmptyFragmentList => "empty_fragment_list",
            Self::EmptyFragment => "empty_fragment",
            Self::InvalidResidue => "invalid_residue",
            Self::InvalidCutoff => "invalid_cutoff",
            Self::BlockedByNext => "blocked_by_next",
            Self::EmptyInput => "empty_input",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The first rule an ordered fragment list violated.
///
/// Fragment indices are 0-based positions in the input list; residue indices
/// are 0-based character positions within the normalized fragment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "error", rename_all = "snake_case"))]
pub enum ValidationError {
    #[error("empty fragment list")]
    EmptyFragmentList,

    #[error("fragment {fragment_index} is empty")]
    EmptyFragment { fragment_index: usize },

    #[error("invalid residue '{residue}' at position {residue_index} of fragment {fragment_index} ({fragment})")]
    InvalidResidue {
        fragment_index: usize,
        residue_index: usize,
        residue: char,
        fragment: String,
    },

    #[error("invalid residue '{residue}' in {origin} rule set")]
    InvalidRuleResidue { origin: RuleSetOrigin, residue: char },

    #[error("fragment {fragment_index} ({fragment}) ends in '{residue}', which is not a cut_after residue")]
    InvalidCutoff {
        fragment_index: usize,
        residue: char,
        fragment: String,
    },

    #[error("fragment {fragment_index} ({fragment}) starts with '{residue}', which blocks the preceding cut")]
    BlockedByNext {
        fragment_index: usize,
        residue: char,
        fragment: String,
    },
}

impl ValidationError {
    /// The taxonomy kind of this failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyFragmentList => ErrorKind::EmptyFragmentList,
            Self::EmptyFragment { .. } => ErrorKind::EmptyFragment,
            Self::InvalidResidue { .. } | Self::InvalidRuleResidue { .. } => {
                ErrorKind::InvalidResidue
            }
            Self::InvalidCutoff { .. } => ErrorKind::InvalidCutoff,
            Self::BlockedByNext { .. } => ErrorKind::BlockedByNext,
        }
    }

    /// Index of the offending fragment, when the failure is tied to one.
    pub fn fragment_index(&self) -> Option<usize> {
        match self {
            Self::EmptyFragment { fragment_index }
            | Self::InvalidResidue { fragment_index, .. }
            | Self::InvalidCutoff { fragment_index, .. }
            | Self::BlockedByNext { fragment_index, .. } => Some(*fragment_index),
            Self::EmptyFragmentList | Self::InvalidRuleResidue { .. } => None,
        }
    }

    /// The offending residue, when there is one.
    pub fn residue(&self) -> Option<char> {
        match self {
            Self::InvalidResidue { residue, .. }
            | Self::InvalidRuleResidue { residue, .. }
            | Self::InvalidCutoff { residue, .. }
            | Self::BlockedByNext { residue, .. } => Some(*residue),
            Self::EmptyFragmentList | Self::EmptyFragment { .. } => None,
        }
    }
}

impl From<ValidationError> for PepcutError {
    fn from(err: ValidationError) -> Self {
        PepcutError::Validation(err.to_string())
    }
}

/// A fragment list that passed validation, in normalized form.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidatedFragments {
    fragments: Vec<String>,
    cut_after: ResidueSet,
    block_if_next: ResidueSet,
    checked_boundaries: usize,
}

impl ValidatedFragments {
    /// The trimmed, uppercased fragments in their original order.
    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    pub fn cut_after(&self) -> &ResidueSet {
        &self.cut_after
    }

    /// The blocking set; empty when none was supplied.
    pub fn block_if_next(&self) -> &ResidueSet {
        &self.block_if_next
    }

    /// Number of inter-fragment boundaries checked (`len - 1`).
    pub fn checked_boundaries(&self) -> usize {
        self.checked_boundaries
    }

    pub fn total_fragments(&self) -> usize {
        self.fragments.len()
    }

    /// The reconstructed (normalized) sequence.
    pub fn sequence(&self) -> String {
        reconstruct_from_ordered(&self.fragments)
    }

    /// Consume the report and return the normalized fragments.
    pub fn into_fragments(self) -> Vec<String> {
        self.fragments
    }
}

impl Summarizable for ValidatedFragments {
    fn summary(&self) -> String {
        format!(
            "{} fragments, {} boundaries checked",
            self.total_fragments(),
            self.checked_boundaries
        )
    }
}

/// Validate an ordered fragment list against `cut_after` and `block_if_next`.
///
/// `None` and an empty `block_if_next` both skip the blocking check.
pub fn validate_ordered_fragments<S: AsRef<str>>(
    fragments: &[S],
    cut_after: &ResidueSet,
    block_if_next: Option<&ResidueSet>,
) -> Result<ValidatedFragments, ValidationError> {
    let block_if_next = block_if_next.cloned().unwrap_or_default();
    check_fragments(fragments, cut_after, &block_if_next)
        .map(|fragments| ValidatedFragments {
            checked_boundaries: fragments.len() - 1,
            fragments,
            cut_after: cut_after.clone(),
            block_if_next,
        })
        .map_err(|err| {
            tracing::debug!(kind = %err.kind(), "fragment validation failed: {err}");
            err
        })
}

fn check_fragments<S: AsRef<str>>(
    fragments: &[S],
    cut_after: &ResidueSet,
    block_if_next: &ResidueSet,
) -> Result<Vec<String>, ValidationError> {
    if fragments.is_empty() {
        return Err(ValidationError::EmptyFragmentList);
    }

    let normalized: Vec<String> = fragments
        .iter()
        .map(|f| f.as_ref().trim().to_ascii_uppercase())
        .collect();

    for (fragment_index, fragment) in normalized.iter().enumerate() {
        if fragment.is_empty() {
            return Err(ValidationError::EmptyFragment { fragment_index });
        }
        if let Some((residue_index, residue)) =
            fragment.chars().enumerate().find(|&(_, c)| !is_canonical(c))
        {
            return Err(ValidationError::InvalidResidue {
                fragment_index,
                residue_index,
                residue,
                fragment: fragment.clone(),
            });
        }
    }

    for (origin, set) in [
        (RuleSetOrigin::CutAfter, cut_after),
        (RuleSetOrigin::BlockIfNext, block_if_next),
    ] {
        if let Some(residue) = set.first_non_canonical() {
            return Err(ValidationError::InvalidRuleResidue { origin, residue });
        }
    }

    // Fragments are non-empty and ASCII from here on.
    let last = normalized.len() - 1;
    for (fragment_index, fragment) in normalized[..last].iter().enumerate() {
        let residue = fragment.chars().last().unwrap_or_default();
        if !cut_after.contains(residue) {
            return Err(ValidationError::InvalidCutoff {
                fragment_index,
                residue,
                fragment: fragment.clone(),
            });
        }
    }

    if !block_if_next.is_empty() {
        for (fragment_index, fragment) in normalized.iter().enumerate().skip(1) {
            let residue = fragment.chars().next().unwrap_or_default();
            if block_if_next.contains(residue) {
                return Err(ValidationError::BlockedByNext {
                    fragment_index,
                    residue,
                    fragment: fragment.clone(),
                });
            }
        }
    }

    Ok(normalized)
}
