//! Structural hashing, kept consistent with structural equality.

use std::collections::hash_map::DefaultHasher;
use std::hash::Hasher;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::inspect::{Equatable, Inspect, Kind, Members, Sequence};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HashParamsError {
    #[error("Hash seed must be non-zero")]
    ZeroSeed,
    #[error("Hash multiplier must be non-zero")]
    ZeroMultiplier,
}

/// Constants of the hash fold.
///
/// Persisting these pins the fold, not the hash values it produces; see
/// [`StructuralHasher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HashParams {
    pub seed: u64,
    pub multiplier: u64,
    /// Contribution of a null property.
    pub null_hash: u64,
}

impl HashParams {
    pub fn v0() -> Self {
        Self {
            seed: 73,
            multiplier: 11,
            null_hash: 0,
        }
    }

    pub fn validate(&self) -> Result<(), HashParamsError> {
        if self.seed == 0 {
            return Err(HashParamsError::ZeroSeed);
        }
        if self.multiplier == 0 {
            return Err(HashParamsError::ZeroMultiplier);
        }
        Ok(())
    }
}

impl Default for HashParams {
    fn default() -> Self {
        Self::v0()
    }
}

/// Folds a value graph into a `u64` with `hash = hash * K + part`.
///
/// Every nested contribution goes through the same classification as
/// equality, so structurally equal values hash equally even when they are
/// distinct instances.
///
/// Hash values are process-local. Leaves are hashed with the standard
/// library's `DefaultHasher`, whose algorithm may change between Rust
/// releases, so a hash must not be persisted or compared across builds.
/// Only the fold parameters are stable.
#[derive(Debug, Clone, Copy)]
pub struct StructuralHasher {
    params: HashParams,
}

impl StructuralHasher {
    pub fn new(params: HashParams) -> Result<Self, HashParamsError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &HashParams {
        &self.params
    }

    pub fn hash_value(&self, value: Option<&dyn Inspect>) -> u64 {
        let Some(value) = value else {
            return self.params.null_hash;
        };
        match value.kind() {
            Kind::Equatable(e) => native(e),
            Kind::Sequence(s) => self.sequence(s),
            Kind::Composite(m) => self.members(m),
        }
    }

    fn combine(&self, acc: u64, part: u64) -> u64 {
        acc.wrapping_mul(self.params.multiplier).wrapping_add(part)
    }

    fn sequence(&self, sequence: &dyn Sequence) -> u64 {
        sequence
            .elements()
            .iter()
            .fold(self.params.seed, |acc, element| self.combine(acc, self.element(element)))
    }

    fn element(&self, element: &dyn Inspect) -> u64 {
        match element.kind() {
            Kind::Equatable(e) => native(e),
            _ => self.surface(element),
        }
    }

    fn surface(&self, value: &dyn Inspect) -> u64 {
        match value.kind() {
            Kind::Composite(m) => self.members(m),
            Kind::Sequence(s) => self.combine(self.params.seed, s.len() as u64),
            Kind::Equatable(e) => native(e),
        }
    }

    fn members(&self, members: &dyn Members) -> u64 {
        members
            .members()
            .iter()
            .fold(self.params.seed, |acc, member| self.combine(acc, self.hash_value(member.value)))
    }
}

impl Default for StructuralHasher {
    fn default() -> Self {
        Self {
            params: HashParams::v0(),
        }
    }
}

// Process-local: `DefaultHasher::new` uses fixed keys within one build only.
fn native(value: &dyn Equatable) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash_native(&mut hasher);
    hasher.finish()
}
