//! Naming and summary traits shared by pepcut's domain types.

/// Something identified by a name, such as a protease.
pub trait Annotated {
    fn name(&self) -> &str;
}

/// Something that renders as a one-line, human-readable report.
///
/// The demo binary prints these next to its results.
pub trait Summarizable {
    fn summary(&self) -> String;
}
