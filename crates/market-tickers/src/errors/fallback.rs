/// Classification for the cross-category fallback.
///
/// Used by [`TickerResolver::get`](crate::TickerResolver::get) to decide
/// whether a failed category attempt lets the next category run.
///
/// # Behavior Summary
///
/// | Class | Try Next Category? | Returned to caller? |
/// |-------|--------------------|---------------------|
/// | `NextCategory` | Yes | Only if it was the last attempt |
/// | `Terminal` | Depends on `surface_ambiguity` | Yes when surfaced |
/// | `Propagate` | No | Always, immediately |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FallbackClass {
    /// The category simply does not know the name.
    /// Another category might.
    NextCategory,

    /// The category knows several records for the name.
    ///
    /// The caller has to disambiguate. The smart resolver keeps going only
    /// when configured to treat ambiguity as a soft failure.
    Terminal,

    /// The request itself is wrong (empty name, unknown category,
    /// unsupported country). No other category can fix it.
    Propagate,
}
