//! Case-insensitive residue sets used as cleavage rule vocabulary.
//!
//! A [`ResidueSet`] is a small ordered set of uppercase characters. Members
//! are normalized on insertion and lookups uppercase the query, so callers
//! never have to think about case. Every character is taken literally,
//! whitespace included.
//!
//! The set does not check its members against the amino-acid alphabet: the
//! cleavage engine matches letters literally, and only the fragment validator
//! insists on canonical residues (see [`ResidueSet::first_non_canonical`]).

use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;

use crate::alphabet::is_canonical;

/// An ordered, uppercase-normalized set of residue characters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ResidueSet {
    members: BTreeSet<char>,
}

impl ResidueSet {
    /// Create an empty set. An empty blocking set disables blocking.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a residue, uppercased.
    ///
    /// Returns `true` if the residue was not already present.
    pub fn insert(&mut self, residue: char) -> bool {
        self.members.insert(residue.to_ascii_uppercase())
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, residue: char) -> bool {
        self.members.contains(&residue.to_ascii_uppercase())
    }

    /// Number of distinct residues.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the set has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterate over members in ascending order.
    pub fn iter(&self) -> btree_set::Iter<'_, char> {
        self.members.iter()
    }

    /// The smallest member that is not a canonical amino acid, if any.
    pub fn first_non_canonical(&self) -> Option<char> {
        self.members.iter().copied().find(|&c| !is_canonical(c))
    }
}

impl FromIterator<char> for ResidueSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<char> for ResidueSet {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for residue in iter {
            self.insert(residue);
        }
    }
}

/// Every character of the string is a member, e.g. `"KR"` is `{K, R}`.
impl From<&str> for ResidueSet {
    fn from(residues: &str) -> Self {
        residues.chars().collect()
    }
}

impl<const N: usize> From<[char; N]> for ResidueSet {
    fn from(residues: [char; N]) -> Self {
        residues.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a ResidueSet {
    type Item = &'a char;
    type IntoIter = btree_set::Iter<'a, char>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Formats as the concatenated members, e.g. `KR`.
impl fmt::Display for ResidueSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for residue in &self.members {
            write!(f, "{residue}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ResidueSet {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ResidueSet {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn serializes_as_residue_string() {
        let set = ResidueSet::from("rk");
        assert_eq!(serde_json::to_string(&set).unwrap(), "\"KR\"");
        let back: ResidueSet = serde_json::from_str("\"ywflm\"").unwrap();
        assert_eq!(back, ResidueSet::from("YWFLM"));
    }
}
