//! Cross-cutting, shared constants.
//!
//! The matching defaults here mirror the reference catalog-matching
//! behaviour; prefer threading them through [`crate::matching::MatchEngine`]
//! rather than re-declaring them at call sites.

/// Shortlist size per ranking axis. A codelist qualifies for a bundle's
/// shortlist when it places within the top `TOP_N` of either axis.
pub const DEFAULT_TOP_N: usize = 5;

/// Codelist name emitted on the sentinel row when no candidate qualifies.
pub const NO_MATCH_NAME: &str = "None";

/// Field separator used when joining a codelist's text fields into the
/// single scored document.
pub const FIELD_SEPARATOR: &str = ". ";
