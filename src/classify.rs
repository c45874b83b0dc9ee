//! Type classification.

use serde::{Deserialize, Serialize};

use crate::inspect::{Inspect, Kind};

/// Comparison strategy for a runtime type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Compared by the type's own equivalence.
    Equatable,
    /// Compared element by element, in order.
    Sequence,
    /// Compared property by property.
    Composite,
}

impl Kind<'_> {
    pub fn classification(&self) -> Classification {
        match self {
            Kind::Equatable(_) => Classification::Equatable,
            Kind::Sequence(_) => Classification::Sequence,
            Kind::Composite(_) => Classification::Composite,
        }
    }
}

/// Classifies the runtime type of `value`.
///
/// Every type resolves to exactly one strategy. Text types are iterable but
/// register as equatable, so they never reach the sequence strategy.
pub fn classify(value: &dyn Inspect) -> Classification {
    value.kind().classification()
}
