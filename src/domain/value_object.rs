// src/domain/value_object.rs
use std::hash::{Hash, Hasher};

/// An immutable value compared by its contents rather than by identity.
///
/// Implementors expose their fields, in a fixed order, as an equality key.
/// Equality and hashing are derived from that key alone, so two values with
/// the same key are interchangeable.
pub trait ValueObject {
    type Key<'a>: PartialEq + Hash
    where
        Self: 'a;

    fn equality_key(&self) -> Self::Key<'_>;
}

pub fn structural_equals<T: ValueObject + ?Sized>(left: &T, right: &T) -> bool {
    left.equality_key() == right.equality_key()
}

pub fn structural_hash<T: ValueObject + ?Sized, H: Hasher>(value: &T, state: &mut H) {
    value.equality_key().hash(state);
}

/// Implements `PartialEq`, `Eq` and `Hash` for a [`ValueObject`] in terms of
/// its equality key.
macro_rules! value_object {
    ($ty:ty) => {
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                $crate::domain::value_object::structural_equals(self, other)
            }
        }

        impl Eq for $ty {}

        impl ::std::hash::Hash for $ty {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                $crate::domain::value_object::structural_hash(self, state)
            }
        }
    };
}

pub(crate) use value_object;
