//! Named proteases with fixed cleavage rules.
//!
//! Only trypsin and chymotrypsin are provided. Other specificities can be
//! expressed directly as a [`CleavageRule`] or a custom [`Protease`].

use std::fmt;
use std::str::FromStr;

use pepcut_core::{Annotated, PepcutError, Result, Summarizable};

use crate::cleave::{digest, CleavageRule, Fragment};
use crate::validate::{validate_ordered_fragments, ValidatedFragments, ValidationError};

/// A protease: a name paired with the cleavage rule it applies.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Protease {
    /// Protease name (e.g., "trypsin").
    pub name: String,
    /// The rule the protease cuts by.
    pub rule: CleavageRule,
}

impl Protease {
    /// A custom protease.
    pub fn new(name: impl Into<String>, rule: CleavageRule) -> Self {
        Self {
            name: name.into(),
            rule,
        }
    }

    /// Trypsin: cleaves after K or R, unless followed by P.
    pub fn trypsin() -> Self {
        Self::new("trypsin", CleavageRule::new("KR").blocked_by("P"))
    }

    /// Chymotrypsin: cleaves after Y, W, F, L, or M, unless followed by P.
    pub fn chymotrypsin() -> Self {
        Self::new("chymotrypsin", CleavageRule::new("YWFLM").blocked_by("P"))
    }

    /// Look up a built-in protease by name, ignoring case.
    pub fn from_name(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "trypsin" => Ok(Self::trypsin()),
            "chymotrypsin" => Ok(Self::chymotrypsin()),
            _ => Err(PepcutError::UnknownProtease(name.to_string())),
        }
    }

    /// Cleave `seq` into ordered fragment sequences.
    pub fn cleave(&self, seq: &str) -> Vec<String> {
        self.rule.cleave(seq)
    }

    /// Cleave `seq` into positional fragments.
    pub fn digest(&self, seq: &str) -> Vec<Fragment> {
        digest(seq, &self.rule)
    }

    /// Validate an ordered fragment list against this protease's rule.
    pub fn validate<S: AsRef<str>>(
        &self,
        fragments: &[S],
    ) -> std::result::Result<ValidatedFragments, ValidationError> {
        validate_ordered_fragments(
            fragments,
            &self.rule.cut_after,
            Some(&self.rule.block_if_next),
        )
    }
}

impl FromStr for Protease {
    type Err = PepcutError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl Annotated for Protease {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Summarizable for Protease {
    fn summary(&self) -> String {
        if self.rule.block_if_next.is_empty() {
            format!("{}: cleaves after [{}]", self.name, self.rule.cut_after)
        } else {
            format!(
                "{}: cleaves after [{}] unless followed by [{}]",
                self.name, self.rule.cut_after, self.rule.block_if_next
            )
        }
    }
}

impl fmt::Display for Protease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Cleave after K or R, unless followed by P.
pub fn trypsin_cleave(seq: &str) -> Vec<String> {
    Protease::trypsin().cleave(seq)
}

/// Cleave after Y, W, F, L, or M, unless followed by P.
pub fn chymotrypsin_cleave(seq: &str) -> Vec<String> {
    Protease::chymotrypsin().cleave(seq)
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn protease_from_json() {
        let json = r#"{"name":"Arg-C","rule":{"cut_after":"r","block_if_next":"P"}}"#;
        let arg_c: Protease = serde_json::from_str(json).unwrap();
        assert_eq!(arg_c.cleave("AKRGRPA"), ["AKR", "GRPA"]);
    }

    #[test]
    fn block_set_defaults_to_empty() {
        let json = r#"{"name":"Lys-C","rule":{"cut_after":"K"}}"#;
        let lys_c: Protease = serde_json::from_str(json).unwrap();
        assert!(lys_c.rule.block_if_next.is_empty());
    }
}
