//! The growable array container.
//!
//! [`GrowableArray`] keeps its live elements in a `Vec<T>` and tracks a
//! logical capacity on top of it. The logical capacity is what callers
//! observe and what the growth policy advances; the `Vec` is always
//! reserved to at least that many slots, so appends within the logical
//! capacity never reallocate.

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut, Range};
use std::slice;

use crate::destructor::ElementDestructor;
use crate::error::ArrayError;
use crate::growth::{DefaultGrowth, GrowthKind, GrowthPolicy};

/// Contiguous, ordered, resizable sequence of `T`.
///
/// `G` selects the [`GrowthPolicy`] applied when an append finds the array
/// full. A freshly constructed array owns no storage ("not allocated") and
/// reports length and capacity 0; it behaves like an empty allocated array
/// for every read.
///
/// An optional [`ElementDestructor`] runs on each element removed by
/// [`pop_back`](Self::pop_back) and on every live element when the array is
/// [`free`](Self::free)d or dropped. [`erase`](Self::erase) and direct
/// index assignment do not run it.
///
/// Not thread-safe: the destructor handle is reference-counted without
/// atomics, so the array is neither `Send` nor `Sync`.
pub struct GrowableArray<T, G = DefaultGrowth> {
    /// Live elements, `buf.len() <= capacity <= buf.capacity()`.
    buf: Vec<T>,
    /// Logical slot count.
    capacity: usize,
    /// False until the first operation that needs storage.
    allocated: bool,
    destructor: Option<ElementDestructor<T>>,
    _growth: PhantomData<fn() -> G>,
}

impl<T, G> GrowableArray<T, G> {
    /// Create an array with no backing storage.
    pub const fn new() -> Self {
        Self {
            buf: Vec::new(),
            capacity: 0,
            allocated: false,
            destructor: None,
            _growth: PhantomData,
        }
    }

    /// Create an array with exactly `capacity` slots allocated.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut arr = Self::new();
        arr.reallocate(capacity);
        arr
    }

    /// Number of allocated element slots. 0 when not allocated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Alias for [`len`](Self::len).
    #[inline]
    pub fn size(&self) -> usize {
        self.buf.len()
    }

    /// Whether the array holds no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Whether backing storage has been set up.
    ///
    /// False for a new array and after [`free`](Self::free); true after any
    /// growth, [`reserve`](Self::reserve) or destructor installation.
    #[inline]
    pub fn is_allocated(&self) -> bool {
        self.allocated
    }

    /// Install `callback` as the element destructor, replacing any previous
    /// one without invoking it.
    ///
    /// Sets up zero-capacity storage if the array was not allocated yet.
    pub fn set_element_destructor<F>(&mut self, callback: F)
    where
        F: Fn(&mut T) + 'static,
    {
        self.replace_element_destructor(Some(ElementDestructor::new(callback)));
    }

    /// Swap the element destructor, returning the previous one.
    ///
    /// Passing `None` uninstalls it. Installing `Some` on an unallocated
    /// array sets up zero-capacity storage.
    pub fn replace_element_destructor(
        &mut self,
        destructor: Option<ElementDestructor<T>>,
    ) -> Option<ElementDestructor<T>> {
        if destructor.is_some() && !self.allocated {
            self.reallocate(0);
        }
        std::mem::replace(&mut self.destructor, destructor)
    }

    /// The installed element destructor, if any.
    pub fn element_destructor(&self) -> Option<ElementDestructor<T>> {
        self.destructor.clone()
    }

    /// Ensure `capacity() >= min_capacity`.
    ///
    /// When growth is needed the capacity becomes exactly `min_capacity`;
    /// the growth policy is not consulted. Elements and destructor are kept.
    pub fn reserve(&mut self, min_capacity: usize) {
        if self.capacity < min_capacity {
            log::trace!(
                "reserving array slots: {} -> {}",
                self.capacity,
                min_capacity
            );
            self.reallocate(min_capacity);
        }
    }

    /// Remove the last element, running the destructor on it first.
    ///
    /// Returns [`ArrayError::Empty`] and leaves the array untouched when
    /// there is nothing to remove.
    pub fn try_pop_back(&mut self) -> Result<(), ArrayError> {
        let Some(last) = self.buf.last_mut() else {
            return Err(ArrayError::Empty);
        };
        if let Some(destructor) = &self.destructor {
            destructor.call(last);
        }
        self.buf.pop();
        Ok(())
    }

    /// Remove the last element, running the destructor on it first.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    pub fn pop_back(&mut self) {
        if let Err(e) = self.try_pop_back() {
            panic!("pop_back: {e}");
        }
    }

    /// Remove the element at `index`, shifting later elements left by one.
    ///
    /// The destructor is not run; the removed value is handed back instead.
    /// Returns `None` and does nothing when `index >= len()`.
    pub fn erase(&mut self, index: usize) -> Option<T> {
        if index < self.buf.len() {
            Some(self.buf.remove(index))
        } else {
            None
        }
    }

    /// Overwrite `to` with a copy of this array's elements.
    ///
    /// `to` ends up with `len() == capacity() == self.len()`. Its previous
    /// elements are dropped without running its destructor, and its
    /// destructor setting is kept: the source's destructor is not copied.
    /// Does nothing if this array is not allocated.
    pub fn copy_into<H>(&self, to: &mut GrowableArray<T, H>)
    where
        T: Clone,
    {
        if !self.allocated {
            return;
        }
        to.buf.clear();
        to.reallocate(self.buf.len());
        to.buf.extend_from_slice(&self.buf);
    }

    /// Tear the array down.
    ///
    /// Runs the destructor (if any) on every live element in index order,
    /// releases the storage, and uninstalls the destructor. The array is
    /// left in the unallocated state. Does nothing if not allocated.
    pub fn free(&mut self) {
        if !self.allocated {
            return;
        }
        log::trace!(
            "freeing array: {} elements, {} slots",
            self.buf.len(),
            self.capacity
        );
        if let Some(destructor) = self.destructor.take() {
            for elem in self.buf.iter_mut() {
                destructor.call(elem);
            }
        }
        self.buf = Vec::new();
        self.capacity = 0;
        self.allocated = false;
    }

    /// Live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    /// Live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf
    }

    /// Start and one-past-the-end pointers of the live range.
    ///
    /// Both ends coincide for an empty or unallocated array.
    pub fn as_ptr_range(&self) -> Range<*const T> {
        self.buf.as_ptr_range()
    }

    /// Iterate over live elements in index order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.buf.iter()
    }

    /// Iterate mutably over live elements in index order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.buf.iter_mut()
    }

    /// Element at `index`, or `None` past the live range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.buf.get(index)
    }

    /// Mutable element at `index`, or `None` past the live range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.buf.get_mut(index)
    }

    /// Move the live elements out without running the destructor.
    ///
    /// The array is left unallocated.
    pub fn into_vec(mut self) -> Vec<T> {
        self.destructor = None;
        std::mem::take(&mut self.buf)
    }

    /// Set the logical capacity, resizing the `Vec` reservation to match.
    fn reallocate(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity >= self.buf.len());
        if new_capacity > self.buf.capacity() {
            self.buf.reserve_exact(new_capacity - self.buf.len());
        } else if new_capacity < self.buf.capacity() {
            self.buf.shrink_to(new_capacity);
        }
        self.capacity = new_capacity;
        self.allocated = true;
    }
}

impl<T, G: GrowthPolicy> GrowableArray<T, G> {
    /// Which growth policy this array type uses.
    pub fn growth_kind(&self) -> GrowthKind {
        G::KIND
    }

    /// Append `value`, growing by the policy first if the array is full.
    ///
    /// Amortised O(1) under [`Logarithmic`](crate::Logarithmic) growth.
    pub fn push_back(&mut self, value: T) {
        if self.capacity <= self.buf.len() {
            self.grow();
        }
        self.buf.push(value);
    }

    /// Insert `value` at `pos`, shifting `[pos, len)` right by one.
    ///
    /// Grows by one policy step when fewer than two slots are free.
    /// Inserting at `pos == len()` appends.
    ///
    /// Returns [`ArrayError::IndexOutOfBounds`] and leaves the array
    /// untouched when `pos > len()`.
    pub fn try_insert(&mut self, pos: usize, value: T) -> Result<(), ArrayError> {
        let len = self.buf.len();
        if pos > len {
            return Err(ArrayError::IndexOutOfBounds { index: pos, len });
        }
        if self.capacity <= len + 1 {
            self.grow();
        }
        self.buf.insert(pos, value);
        Ok(())
    }

    /// Insert `value` at `pos`, shifting `[pos, len)` right by one.
    ///
    /// # Panics
    ///
    /// Panics if `pos > len()`.
    pub fn insert(&mut self, pos: usize, value: T) {
        if let Err(e) = self.try_insert(pos, value) {
            panic!("insert: {e}");
        }
    }

    fn grow(&mut self) {
        let next = G::next_capacity(self.capacity);
        assert!(
            next > self.capacity,
            "growth policy {} did not increase capacity ({} -> {})",
            G::KIND,
            self.capacity,
            next
        );
        log::trace!(
            "growing array ({} policy): {} -> {} slots",
            G::KIND,
            self.capacity,
            next
        );
        self.reallocate(next);
    }
}

impl<T, G> Drop for GrowableArray<T, G> {
    fn drop(&mut self) {
        self.free();
    }
}

impl<T, G> Default for GrowableArray<T, G> {
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy with identical capacity. The destructor handle is shared
/// between the original and the clone.
impl<T: Clone, G> Clone for GrowableArray<T, G> {
    fn clone(&self) -> Self {
        let mut buf = Vec::with_capacity(self.capacity);
        buf.extend_from_slice(&self.buf);
        Self {
            buf,
            capacity: self.capacity,
            allocated: self.allocated,
            destructor: self.destructor.clone(),
            _growth: PhantomData,
        }
    }
}

impl<T: fmt::Debug, G> fmt::Debug for GrowableArray<T, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GrowableArray")
            .field("len", &self.buf.len())
            .field("capacity", &self.capacity)
            .field("has_destructor", &self.destructor.is_some())
            .field("elements", &self.buf)
            .finish()
    }
}

impl<T: PartialEq, G, H> PartialEq<GrowableArray<T, H>> for GrowableArray<T, G> {
    fn eq(&self, other: &GrowableArray<T, H>) -> bool {
        self.buf == other.buf
    }
}

impl<T, G> Index<usize> for GrowableArray<T, G> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.buf.get(index) {
            Some(elem) => elem,
            None => panic!(
                "{}",
                ArrayError::IndexOutOfBounds {
                    index,
                    len: self.buf.len()
                }
            ),
        }
    }
}

impl<T, G> IndexMut<usize> for GrowableArray<T, G> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.buf.len();
        match self.buf.get_mut(index) {
            Some(elem) => elem,
            None => panic!("{}", ArrayError::IndexOutOfBounds { index, len }),
        }
    }
}

impl<T, G: GrowthPolicy> Extend<T> for GrowableArray<T, G> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<T, G: GrowthPolicy> FromIterator<T> for GrowableArray<T, G> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr = Self::new();
        arr.extend(iter);
        arr
    }
}

impl<'a, T, G> IntoIterator for &'a GrowableArray<T, G> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, G> IntoIterator for &'a mut GrowableArray<T, G> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
