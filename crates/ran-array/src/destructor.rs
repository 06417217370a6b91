//! Per-element destructor callbacks.

use std::fmt;
use std::rc::Rc;

/// Callback run on an element right before the array removes it through
/// [`pop_back`](crate::GrowableArray::pop_back) or tears itself down.
///
/// The handle is reference-counted: cloning it, or reading it back with
/// [`element_destructor`](crate::GrowableArray::element_destructor), yields
/// the same callback. Use [`ptr_eq`](Self::ptr_eq) to compare identity.
pub struct ElementDestructor<T> {
    callback: Rc<dyn Fn(&mut T)>,
}

impl<T> ElementDestructor<T> {
    /// Wrap a closure as an element destructor.
    pub fn new<F>(callback: F) -> Self
    where
        F: Fn(&mut T) + 'static,
    {
        Self {
            callback: Rc::new(callback),
        }
    }

    /// Invoke the callback on `elem`.
    #[inline]
    pub fn call(&self, elem: &mut T) {
        (self.callback)(elem)
    }

    /// Whether both handles refer to the same callback.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.callback, &other.callback)
    }
}

impl<T> Clone for ElementDestructor<T> {
    fn clone(&self) -> Self {
        Self {
            callback: Rc::clone(&self.callback),
        }
    }
}

impl<T> fmt::Debug for ElementDestructor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementDestructor")
            .field("callback", &Rc::as_ptr(&self.callback))
            .finish()
    }
}
