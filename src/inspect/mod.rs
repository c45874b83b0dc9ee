//! Runtime introspection.
//!
//! A type takes part in structural comparison by implementing [`Inspect`],
//! which hands the engine a [`Kind`]: one of three capability views. Most
//! types never implement it by hand; they are registered with
//! [`equatable!`](crate::equatable) or [`composite!`](crate::composite), and
//! the standard containers are covered here.

use std::any::{Any, TypeId};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

pub mod composite;
pub mod equatable;
pub mod sequence;

pub use composite::{Composite, Member, Members, Property, PropertyTable, PropertyTableBuilder};
pub use equatable::Equatable;
pub use sequence::{Sequence, SequenceView};

/// A value the engine can look inside.
pub trait Inspect: Any {
    /// The capability view of this value.
    fn kind(&self) -> Kind<'_>;

    /// The concrete type behind this value.
    ///
    /// Pointer types report their pointee, so a `Box<dyn Inspect>` holding an
    /// `i32` has the runtime type of `i32`.
    fn runtime_type(&self) -> RuntimeType {
        RuntimeType::of::<Self>()
    }
}

/// Capability view handed out by [`Inspect::kind`].
///
/// Exactly one variant applies per type.
#[derive(Clone, Copy)]
pub enum Kind<'a> {
    Equatable(&'a dyn Equatable),
    Sequence(&'a dyn Sequence),
    Composite(&'a dyn Members),
}

impl fmt::Debug for Kind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Equatable(_) => f.write_str("Kind::Equatable"),
            Kind::Sequence(s) => write!(f, "Kind::Sequence(len = {})", s.len()),
            Kind::Composite(m) => write!(f, "Kind::Composite(members = {})", m.member_count()),
        }
    }
}

/// Identity of a concrete type, with its name kept for diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct RuntimeType {
    id: TypeId,
    name: &'static str,
}

impl RuntimeType {
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for RuntimeType {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for RuntimeType {}

impl fmt::Display for RuntimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Whether `a` and `b` are the very same instance.
///
/// The runtime type takes part because distinct zero-sized values may share an
/// address.
pub fn same_instance(a: &dyn Inspect, b: &dyn Inspect) -> bool {
    let left = a as *const dyn Inspect as *const ();
    let right = b as *const dyn Inspect as *const ();
    left == right && a.runtime_type() == b.runtime_type()
}

impl<T: Inspect + ?Sized> Inspect for Box<T> {
    fn kind(&self) -> Kind<'_> {
        (**self).kind()
    }

    fn runtime_type(&self) -> RuntimeType {
        (**self).runtime_type()
    }
}

impl<T: Inspect + ?Sized> Inspect for Rc<T> {
    fn kind(&self) -> Kind<'_> {
        (**self).kind()
    }

    fn runtime_type(&self) -> RuntimeType {
        (**self).runtime_type()
    }
}

impl<T: Inspect + ?Sized> Inspect for Arc<T> {
    fn kind(&self) -> Kind<'_> {
        (**self).kind()
    }

    fn runtime_type(&self) -> RuntimeType {
        (**self).runtime_type()
    }
}
