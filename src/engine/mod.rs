//! The structural equality and hashing engine.
//!
//! Both operations classify each value they meet and recurse per the value's
//! own runtime type. They share no state across calls and may run
//! concurrently on independent value graphs. Value graphs must be acyclic.

pub mod compare;
pub mod hash;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::inspect::Inspect;

pub use hash::{HashParams, HashParamsError, StructuralHasher};

/// Structural comparer for values of declared type `T`.
///
/// `T` may be `Box<dyn Inspect>` when the concrete types are only known at
/// runtime; operands of different runtime types compare unequal.
pub struct StructuralComparer<T> {
    hasher: StructuralHasher,
    _marker: PhantomData<fn(&T)>,
}

impl<T: Inspect> StructuralComparer<T> {
    pub fn new() -> Self {
        Self {
            hasher: StructuralHasher::default(),
            _marker: PhantomData,
        }
    }

    pub fn with_params(params: HashParams) -> Result<Self, HashParamsError> {
        Ok(Self {
            hasher: StructuralHasher::new(params)?,
            _marker: PhantomData,
        })
    }

    /// Two nulls are equal; a null is never equal to a value.
    pub fn equals(&self, a: Option<&T>, b: Option<&T>) -> bool {
        compare::values_equal(a.map(as_inspect), b.map(as_inspect))
    }

    pub fn hash(&self, value: Option<&T>) -> u64 {
        self.hasher.hash_value(value.map(as_inspect))
    }
}

impl<T: Inspect> Default for StructuralComparer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for StructuralComparer<T> {
    fn clone(&self) -> Self {
        Self {
            hasher: self.hasher,
            _marker: PhantomData,
        }
    }
}

impl<T> fmt::Debug for StructuralComparer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructuralComparer")
            .field("type", &std::any::type_name::<T>())
            .field("params", self.hasher.params())
            .finish()
    }
}

fn as_inspect<T: Inspect>(value: &T) -> &dyn Inspect {
    value
}

/// Structural equality of two values.
pub fn equals<T: Inspect>(a: &T, b: &T) -> bool {
    compare::values_equal(Some(a), Some(b))
}

/// Structural equality of two values whose concrete types are only known at
/// runtime.
pub fn equals_dyn(a: Option<&dyn Inspect>, b: Option<&dyn Inspect>) -> bool {
    compare::values_equal(a, b)
}

/// Structural hash under [`HashParams::v0`]. The value is process-local.
pub fn hash<T: Inspect>(value: &T) -> u64 {
    StructuralHasher::default().hash_value(Some(value))
}

pub fn hash_dyn(value: Option<&dyn Inspect>) -> u64 {
    StructuralHasher::default().hash_value(value)
}

/// Gives a value structural `PartialEq`, `Eq` and `Hash`, so it can key a
/// `HashMap` or `HashSet`.
#[derive(Clone, Default)]
pub struct Structural<T>(pub T);

impl<T> Structural<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Inspect> PartialEq for Structural<T> {
    fn eq(&self, other: &Self) -> bool {
        equals(&self.0, &other.0)
    }
}

impl<T: Inspect> Eq for Structural<T> {}

impl<T: Inspect> Hash for Structural<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(hash(&self.0));
    }
}

impl<T: fmt::Debug> fmt::Debug for Structural<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Structural").field(&self.0).finish()
    }
}
