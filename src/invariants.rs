/*!
# Invariant Verification

Every representation maintains four invariants:
1. vertex labels are pairwise distinct,
2. both endpoints of every edge are vertices,
3. no two edges share the same `(source, target)` pair,
4. every stored weight is strictly positive.

[`CheckInvariants`] re-validates them on demand and is the entry point used by the test suite.
In addition, every mutating operation re-checks them afterwards if the crate is compiled with
`debug_assertions` or with the `check-invariants` feature. In all other builds the check is
compiled out and has no observable effect.
*/

use std::fmt::Debug;

use crate::InvariantViolation;

/// Trait for structures that can verify their representation invariants
pub trait CheckInvariants {
    /// Returns the first violated invariant, if any
    fn check_invariants(&self) -> Result<(), InvariantViolation>;

    /// Returns *true* if all invariants hold
    fn satisfies_invariants(&self) -> bool {
        self.check_invariants().is_ok()
    }
}

/// Renders a label for an [`InvariantViolation`]
pub(crate) fn describe<L: Debug>(label: &L) -> String {
    format!("{label:?}")
}

/// Returns *true* if post-mutation checks are compiled in
pub const fn invariant_checks_enabled() -> bool {
    cfg!(any(debug_assertions, feature = "check-invariants"))
}

/// Re-validates all invariants of a graph after a mutation.
/// ** Panics if an invariant is broken, which always indicates a bug in the representation **
macro_rules! debug_check_invariants {
    ($graph:expr) => {
        if $crate::invariants::invariant_checks_enabled() {
            if let Err(violation) = $crate::invariants::CheckInvariants::check_invariants(&*$graph) {
                tracing::error!(%violation, "graph invariant violated");
                panic!("graph invariant violated: {violation}");
            }
        }
    };
}

pub(crate) use debug_check_invariants;
