//! What a failed lookup means to the checker.

use crate::error_handling::LookupError;

/// How a lookup error is folded into the records a check sees.
///
/// The checker reports presence or absence only, so a name that does not
/// exist, a name without records of the type, and a resolver failure all
/// read the same.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResolutionPolicy {
    /// Any lookup error yields an empty record set. Nothing is logged.
    #[default]
    TreatAsAbsent,
}

impl ResolutionPolicy {
    /// Applies the policy to the outcome of one lookup.
    pub fn apply<T>(self, lookup: Result<Vec<T>, LookupError>) -> Vec<T> {
        match self {
            ResolutionPolicy::TreatAsAbsent => lookup.unwrap_or_default(),
        }
    }
}
