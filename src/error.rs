use thiserror::Error;

/// Errors surfaced by the criteria engine.
///
/// All variants are recoverable by the caller; none are fatal. Note that an
/// invalid weight configuration is *not* an error during editing — mutators
/// never fail on invalidity, and `validate()` reports it as observable state.
/// Only aggregation refuses to run on an invalid tree.
#[derive(Debug, Error)]
pub enum CriteriaError {
    /// Template lookup with a fund type string we don't recognize.
    #[error("unknown fund type '{0}' (expected 'vc' or 'pe')")]
    UnknownFundType(String),

    /// A mutation referenced a category or subcategory id that does not
    /// exist in the tree. The payload is the path that failed to resolve,
    /// e.g. "team" or "team/founder-experience".
    #[error("no node with id '{0}'")]
    UnknownNodeId(String),

    /// Aggregation was attempted on a tree whose enabled weights do not sum
    /// to 100 at every level.
    #[error("criteria weights violate the 100% sum invariant ({violations} violation(s))")]
    InvalidWeights { violations: usize },

    /// A plain-object payload could not be reconstructed into a tree.
    #[error("malformed criteria tree: {0}")]
    Malformed(#[from] serde_json::Error),
}
