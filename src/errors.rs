//! Geometric failure kinds

/// All the ways a section computation can fail.
///
/// The crate performs no recovery: every failure aborts the current
/// computation and the partially built shape is discarded.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeometryError {
    /// A primitive or parameter set cannot produce valid geometry
    /// (non-positive radius/extent, zero-thickness wall, too few segments).
    #[error("cannot construct {shape}: {reason}")]
    Construction {
        shape: &'static str,
        reason: String,
    },

    /// A boolean subtract/union step produced an invalid result.
    #[error("boolean {op} produced an invalid result")]
    BooleanOperation { op: &'static str },

    /// Inertia/lever-arm derivation hit a zero-area region or a
    /// zero-extent axis.
    #[error("degenerate section: {reason}")]
    DegenerateSection { reason: String },
}
