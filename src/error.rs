//! Types describing errors that occur during emission.
//!
//! Emission fails fast: the first unresolved name aborts with an error naming
//! the offending construct, and no partial module is produced. The optimizer
//! and vectorizer cannot fail on well-formed IR (they return their input
//! unchanged for shapes they do not recognize), and the feature probes report
//! `false` rather than failing.

/// An error produced by [`emit_binary`](crate::emit_binary).
///
/// Every name referenced by an instruction must resolve to a declaration in
/// scope, or be a bare non-negative integer to be used as the index directly.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum EmitError {
    /// A `call` or `export` target is neither a known function nor an index.
    #[error("`{0}` is not an imported or declared function")]
    UnresolvedFunction(String),

    /// A `local.get`/`local.set`/`local.tee` name is neither a declared
    /// param/local of the enclosing function nor an index.
    #[error("`{0}` is not a param or local of the enclosing function")]
    UnresolvedLocal(String),

    /// A `global.get`/`global.set` name is neither a known global nor an
    /// index.
    #[error("`{0}` is not an imported global")]
    UnresolvedGlobal(String),

    /// A branch target is neither a label of an enclosing block nor a
    /// relative depth.
    #[error("branch label `{0}` is not in scope")]
    UnresolvedLabel(String),
}
