//! Pass-through handles for foreign instances.

use std::{any::Any, rc::Rc};

/// A handle to a value the tree does not model.
///
/// Specialized instances (timestamps, domain objects, anything that is not a
/// scalar, a container, or a file leaf) travel through a value tree inside
/// an `Opaque`. Extraction never looks inside one: it passes the handle
/// through to the clone unchanged. Caller predicates can still classify the
/// inner value via [`Opaque::is`] / [`Opaque::downcast_ref`] and have it
/// extracted as a leaf.
#[derive(Clone)]
pub struct Opaque {
    inner: Rc<dyn Any>,
}

impl Opaque {
    /// Wraps `value`.
    #[must_use]
    pub fn new<T: Any>(value: T) -> Self {
        Self {
            inner: Rc::new(value),
        }
    }

    /// Whether the inner value is a `T`.
    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.inner.is::<T>()
    }

    /// Borrows the inner value as a `T`, if it is one.
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref()
    }

    /// Whether `self` and `other` are the same allocation.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn address(&self) -> usize {
        Rc::as_ptr(&self.inner) as *const () as usize
    }
}

#[cfg(test)]
mod tests {
    use super::Opaque;

    struct Marker(u32);

    #[test]
    fn downcast_recovers_the_inner_value() {
        let opaque = Opaque::new(Marker(7));
        assert!(opaque.is::<Marker>());
        assert_eq!(opaque.downcast_ref::<Marker>().unwrap().0, 7);
        assert!(!opaque.is::<String>());
        assert!(opaque.downcast_ref::<String>().is_none());
    }

    #[test]
    fn clones_share_identity() {
        let opaque = Opaque::new(Marker(1));
        let alias = opaque.clone();
        assert!(opaque.ptr_eq(&alias));
        assert!(!opaque.ptr_eq(&Opaque::new(Marker(1))));
    }
}
