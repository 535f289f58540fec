//! Rule-based proteolytic cleavage for the pepcut toolkit.
//!
//! Models enzyme specificity as literal residue-letter rules over
//! amino-acid strings, plus the dual operations on the resulting fragments:
//!
//! - **Cleavage** — [`cleave`], [`CleavageRule`], positional [`digest`]
//! - **Proteases** — [`Protease`], [`trypsin_cleave`], [`chymotrypsin_cleave`]
//! - **Validation** — [`validate_ordered_fragments`] with a structured [`ValidationError`]
//! - **Reconstruction** — [`reconstruct_from_ordered`]
//! - **Alphabet** — [`CANONICAL_RESIDUES`] and the [`ResidueSet`] rule vocabulary
//!
//! # Example
//!
//! ```
//! use pepcut_digest::{reconstruct_from_ordered, trypsin_cleave, Protease};
//!
//! let fragments = trypsin_cleave("KMKAFLRGYV");
//! assert_eq!(fragments, ["K", "MK", "AFLR", "GYV"]);
//!
//! let report = Protease::trypsin().validate(&fragments).unwrap();
//! assert_eq!(report.checked_boundaries(), 3);
//!
//! assert_eq!(reconstruct_from_ordered(&fragments), "KMKAFLRGYV");
//! ```

pub mod alphabet;
pub mod cleave;
pub mod protease;
pub mod reconstruct;
pub mod residue_set;
pub mod validate;

pub use alphabet::{is_canonical, Alphabet, AminoAcidAlphabet, CANONICAL_RESIDUES};
pub use cleave::{cleavage_sites, cleave, digest, CleavageRule, Fragment};
pub use protease::{chymotrypsin_cleave, trypsin_cleave, Protease};
pub use reconstruct::reconstruct_from_ordered;
pub use residue_set::ResidueSet;
pub use validate::{
    validate_ordered_fragments, ErrorKind, RuleSetOrigin, ValidatedFragments, ValidationError,
};
