//! Ordered containers, viewed independently of their concrete kind.

use std::collections::{BTreeSet, LinkedList, VecDeque};

use super::{Inspect, Kind};

/// An ordered, finite container of inspectable elements.
pub trait Sequence {
    /// Materializes the elements in iteration order.
    fn elements(&self) -> SequenceView<'_>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A replayable snapshot of a sequence's elements.
#[derive(Default)]
pub struct SequenceView<'a> {
    items: Vec<&'a dyn Inspect>,
}

impl<'a> SequenceView<'a> {
    pub fn new(items: Vec<&'a dyn Inspect>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a dyn Inspect> {
        self.items.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a dyn Inspect> + '_ {
        self.items.iter().copied()
    }
}

impl<'a> FromIterator<&'a dyn Inspect> for SequenceView<'a> {
    fn from_iter<I: IntoIterator<Item = &'a dyn Inspect>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

fn view_of<'a, T: Inspect>(iter: impl Iterator<Item = &'a T>) -> SequenceView<'a> {
    iter.map(|item| item as &dyn Inspect).collect()
}

macro_rules! sequence_impl {
    ($(impl<$param:ident> for $ty:ty;)+) => {$(
        impl<$param: Inspect> Sequence for $ty {
            fn elements(&self) -> SequenceView<'_> {
                view_of(self.iter())
            }

            fn len(&self) -> usize {
                <$ty>::len(self)
            }
        }

        impl<$param: Inspect> Inspect for $ty {
            fn kind(&self) -> Kind<'_> {
                Kind::Sequence(self)
            }
        }
    )+};
}

sequence_impl! {
    impl<T> for Vec<T>;
    impl<T> for VecDeque<T>;
    impl<T> for LinkedList<T>;
    impl<T> for BTreeSet<T>;
}

impl<T: Inspect, const N: usize> Sequence for [T; N] {
    fn elements(&self) -> SequenceView<'_> {
        view_of(self.iter())
    }

    fn len(&self) -> usize {
        N
    }
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    fn kind(&self) -> Kind<'_> {
        Kind::Sequence(self)
    }
}

impl<T: Inspect> Sequence for &'static [T] {
    fn elements(&self) -> SequenceView<'_> {
        view_of(self.iter())
    }

    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T: Inspect> Inspect for &'static [T] {
    fn kind(&self) -> Kind<'_> {
        Kind::Sequence(self)
    }
}
