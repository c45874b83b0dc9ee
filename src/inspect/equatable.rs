//! Types compared by their own equivalence.

use std::any::Any;
use std::hash::Hasher;

/// Type-erased native equality and hashing.
///
/// Implementations must keep `hash_native` consistent with `equals_native`:
/// values that compare equal feed identical bytes to the hasher.
pub trait Equatable: Any {
    /// Native equality. Values of a different concrete type are never equal.
    fn equals_native(&self, other: &dyn Equatable) -> bool;

    fn hash_native(&self, state: &mut dyn Hasher);

    fn as_any(&self) -> &dyn Any;
}

/// Registers types whose `PartialEq` and `Hash` impls define their equivalence.
///
/// Use it for enums, small value structs, and any type that already carries
/// its own equality contract.
///
/// ```
/// use structural_eq::equatable;
///
/// #[derive(Debug, PartialEq, Eq, Hash)]
/// enum Fuel {
///     Petrol,
///     Diesel,
/// }
///
/// equatable!(Fuel);
///
/// assert!(structural_eq::equals(&Fuel::Petrol, &Fuel::Petrol));
/// assert!(!structural_eq::equals(&Fuel::Petrol, &Fuel::Diesel));
/// ```
#[macro_export]
macro_rules! equatable {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::inspect::Equatable for $ty {
            fn equals_native(&self, other: &dyn $crate::inspect::Equatable) -> bool {
                other
                    .as_any()
                    .downcast_ref::<Self>()
                    .map_or(false, |other| self == other)
            }

            fn hash_native(&self, mut state: &mut dyn ::std::hash::Hasher) {
                ::std::hash::Hash::hash(self, &mut state)
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
        }

        impl $crate::inspect::Inspect for $ty {
            fn kind(&self) -> $crate::inspect::Kind<'_> {
                $crate::inspect::Kind::Equatable(self)
            }
        }
    )+};
}

equatable!(
    bool,
    char,
    (),
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    String,
    &'static str,
    std::time::Duration,
);

// Floats have no `Hash`; they hash canonical bits so that `0.0 == -0.0`
// and every NaN land in the same bucket.
macro_rules! equatable_float {
    ($($ty:ty),+) => {$(
        impl Equatable for $ty {
            fn equals_native(&self, other: &dyn Equatable) -> bool {
                other
                    .as_any()
                    .downcast_ref::<Self>()
                    .map_or(false, |other| self == other)
            }

            fn hash_native(&self, state: &mut dyn Hasher) {
                let canonical = if self.is_nan() {
                    <$ty>::NAN
                } else if *self == 0.0 {
                    0.0
                } else {
                    *self
                };
                state.write(&canonical.to_bits().to_le_bytes());
            }

            fn as_any(&self) -> &dyn Any {
                self
            }
        }

        impl crate::inspect::Inspect for $ty {
            fn kind(&self) -> crate::inspect::Kind<'_> {
                crate::inspect::Kind::Equatable(self)
            }
        }
    )+};
}

equatable_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn native_hash(value: &dyn Equatable) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash_native(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn different_concrete_types_never_compare_equal() {
        assert!(!1i32.equals_native(&1i64));
        assert!(!String::from("a").equals_native(&"a"));
    }

    #[test]
    fn signed_zero_hashes_like_zero() {
        assert!(0.0f64.equals_native(&-0.0f64));
        assert_eq!(native_hash(&0.0f64), native_hash(&-0.0f64));
    }

    #[test]
    fn nan_payloads_share_a_hash() {
        let quiet = f32::NAN;
        let other = f32::from_bits(f32::NAN.to_bits() | 1);
        assert!(other.is_nan());
        assert_eq!(native_hash(&quiet), native_hash(&other));
    }
}
