//! Sequence reconstruction from ordered fragments.

/// Concatenate ordered fragments back into the full sequence.
///
/// Fragments are joined with no separator and their case is preserved.
/// Nothing is re-validated. An empty list reconstructs to the empty
/// sequence, matching what cleaving an empty sequence produces.
pub fn reconstruct_from_ordered<S: AsRef<str>>(fragments: &[S]) -> String {
    let len = fragments.iter().map(|f| f.as_ref().len()).sum();
    let mut seq = String::with_capacity(len);
    for fragment in fragments {
        seq.push_str(fragment.as_ref());
    }
    seq
}
