//! Structural equality.

use tracing::trace;

use crate::inspect::{same_instance, Inspect, Kind, Members, Sequence};

/// Compares two nullable values by dispatching on their classification.
pub(crate) fn values_equal(a: Option<&dyn Inspect>, b: Option<&dyn Inspect>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => present_equal(a, b),
        _ => false,
    }
}

fn present_equal(a: &dyn Inspect, b: &dyn Inspect) -> bool {
    if same_instance(a, b) {
        return true;
    }
    if a.runtime_type() != b.runtime_type() {
        return false;
    }

    match (a.kind(), b.kind()) {
        (Kind::Equatable(a), Kind::Equatable(b)) => a.equals_native(b),
        (Kind::Sequence(a), Kind::Sequence(b)) => sequences_equal(a, b),
        (Kind::Composite(a), Kind::Composite(b)) => members_equal(a, b),
        _ => false,
    }
}

/// Lockstep walk over two sequences. Stops at the first unequal pair.
pub(crate) fn sequences_equal(a: &dyn Sequence, b: &dyn Sequence) -> bool {
    let left = a.elements();
    let right = b.elements();

    if left.len() != right.len() {
        return false;
    }

    let all_equal = left
        .iter()
        .zip(right.iter())
        .enumerate()
        .all(|(index, (l, r))| {
            let equal = elements_equal(l, r);
            if !equal {
                trace!(index, element = %l.runtime_type(), "sequence element mismatch");
            }
            equal
        });
    all_equal
}

/// Element pairs are classified by the element's own runtime type. Anything
/// not equatable is compared by its surface, so a nested sequence element is
/// matched on its length and not on its contents.
fn elements_equal(a: &dyn Inspect, b: &dyn Inspect) -> bool {
    match (a.kind(), b.kind()) {
        (Kind::Equatable(a), Kind::Equatable(b)) => a.equals_native(b),
        (Kind::Equatable(_), _) => false,
        _ => surface_equal(a, b),
    }
}

/// Compares the public readable surface of two values: the properties of a
/// composite, the element count of a sequence.
fn surface_equal(a: &dyn Inspect, b: &dyn Inspect) -> bool {
    if same_instance(a, b) {
        return true;
    }
    if a.runtime_type() != b.runtime_type() {
        return false;
    }

    match (a.kind(), b.kind()) {
        (Kind::Composite(a), Kind::Composite(b)) => members_equal(a, b),
        (Kind::Sequence(a), Kind::Sequence(b)) => a.len() == b.len(),
        (Kind::Equatable(a), Kind::Equatable(b)) => a.equals_native(b),
        _ => false,
    }
}

/// Property-by-property comparison in table order. Stops at the first
/// mismatching property.
pub(crate) fn members_equal(a: &dyn Members, b: &dyn Members) -> bool {
    let left = a.members();
    let right = b.members();

    if left.len() != right.len() {
        return false;
    }

    for (l, r) in left.iter().zip(right.iter()) {
        if !values_equal(l.value, r.value) {
            trace!(property = l.name, "property mismatch");
            return false;
        }
    }
    true
}
