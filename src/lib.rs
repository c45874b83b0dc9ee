//! Runtime-introspective structural equality and hashing.
//!
//! `structural-eq` decides whether two values hold equivalent data without
//! relying on each type's own `PartialEq`. Every value is classified as
//! equatable, sequence, or composite, and the engine recurses through
//! sequences and composite properties accordingly. The structural hash is
//! consistent with structural equality: equal values always hash equally.
//!
//! Around the engine sit two small collaborators: a flat text serializer for
//! composites with scalar properties, and cache glue that stores those texts
//! with a per-type time-to-live.

pub mod cache;
pub mod classify;
pub mod engine;
pub mod flat;
pub mod inspect;

pub use classify::{classify, Classification};
pub use engine::{equals, equals_dyn, hash, hash_dyn, Structural, StructuralComparer};
pub use inspect::{Inspect, Kind, RuntimeType};
