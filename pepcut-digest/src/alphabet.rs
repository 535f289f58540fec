//! The canonical amino-acid alphabet.
//!
//! [`AminoAcidAlphabet`] is a zero-sized marker implementing [`Alphabet`] over
//! the 20 standard one-letter residue codes. Ambiguity codes (`X`, `B`, `Z`,
//! `J`) and the rare residues `U`/`O` are not members.

/// The 20 canonical amino-acid one-letter codes, uppercase and sorted.
pub const CANONICAL_RESIDUES: &[u8; 20] = b"ACDEFGHIKLMNPQRSTVWY";

/// Trait for residue alphabets.
///
/// Implementors define a fixed set of valid uppercase bytes. Callers
/// uppercase residues first, then check membership.
pub trait Alphabet: Clone + 'static {
    /// The set of valid uppercase bytes.
    const VALID_BYTES: &'static [u8];

    /// Check whether a byte (assumed already uppercased) is valid.
    fn is_valid(b: u8) -> bool {
        Self::VALID_BYTES.contains(&b)
    }

    /// Check whether a character is valid, ignoring case.
    ///
    /// Non-ASCII characters are never valid.
    fn is_valid_char(c: char) -> bool {
        c.is_ascii() && Self::is_valid(c.to_ascii_uppercase() as u8)
    }
}

/// The canonical 20-residue amino-acid alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AminoAcidAlphabet;

impl Alphabet for AminoAcidAlphabet {
    const VALID_BYTES: &'static [u8] = CANONICAL_RESIDUES;
}

/// Whether `residue` is one of the 20 canonical amino acids (case-insensitive).
pub fn is_canonical(residue: char) -> bool {
    AminoAcidAlphabet::is_valid_char(residue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_all_canonical_residues() {
        for &b in CANONICAL_RESIDUES {
            assert!(AminoAcidAlphabet::is_valid(b), "should accept {}", b as char);
            assert!(is_canonical((b as char).to_ascii_lowercase()));
        }
    }

    #[test]
    fn rejects_ambiguity_codes() {
        for c in ['X', 'B', 'Z', 'J', 'U', 'O', '*'] {
            assert!(!is_canonical(c), "should reject {c}");
        }
    }

    #[test]
    fn rejects_non_letters() {
        assert!(!is_canonical('1'));
        assert!(!is_canonical(' '));
        assert!(!is_canonical('é'));
    }

    #[test]
    fn alphabet_has_twenty_members() {
        assert_eq!(CANONICAL_RESIDUES.len(), 20);
        assert!(CANONICAL_RESIDUES.windows(2).all(|w| w[0] < w[1]));
    }
}
