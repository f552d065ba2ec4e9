//! Match mode selection for the execution methods.

/// How many matches the execution methods look for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Stop at the first match.
    #[default]
    Single,
    /// Scan the whole input for non-overlapping matches.
    Global,
}
