//! Test utilities for ran development.
//!
//! Provides a [`DestructorLog`] for observing element destructors, an
//! idempotent [`init_logging`] hook, and proptest [`strategies`] for the
//! numeric types.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod strategies;

use std::cell::RefCell;
use std::rc::Rc;

/// Records every element handed to a destructor, in call order.
///
/// Cloning shares the underlying log. Install [`recorder`](Self::recorder)
/// as an element destructor, then inspect [`entries`](Self::entries).
pub struct DestructorLog<T> {
    seen: Rc<RefCell<Vec<T>>>,
}

impl<T: Clone + 'static> DestructorLog<T> {
    pub fn new() -> Self {
        Self {
            seen: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// A destructor callback that appends a clone of each element it sees.
    pub fn recorder(&self) -> impl Fn(&mut T) + 'static {
        let seen = Rc::clone(&self.seen);
        move |value: &mut T| seen.borrow_mut().push(value.clone())
    }

    /// Snapshot of everything recorded so far.
    pub fn entries(&self) -> Vec<T> {
        self.seen.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.seen.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.borrow().is_empty()
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        self.seen.borrow_mut().clear();
    }
}

impl<T: Clone + 'static> Default for DestructorLog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for DestructorLog<T> {
    fn clone(&self) -> Self {
        Self {
            seen: Rc::clone(&self.seen),
        }
    }
}

/// Route `log` output to the test harness at trace level for the ran
/// crates. Safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_module("ran_array", log::LevelFilter::Trace)
        .filter_module("ran_math", log::LevelFilter::Trace)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_appends_in_order() {
        let log = DestructorLog::new();
        let rec = log.recorder();
        let mut a = 1;
        let mut b = 2;
        rec(&mut a);
        rec(&mut b);
        assert_eq!(log.entries(), vec![1, 2]);
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn clones_share_the_log() {
        let log: DestructorLog<&str> = DestructorLog::default();
        let other = log.clone();
        (other.recorder())(&mut "x");
        assert_eq!(log.entries(), vec!["x"]);
        log.clear();
        assert!(other.is_empty());
    }

    #[test]
    fn init_logging_is_idempotent() {
        init_logging();
        init_logging();
        log::trace!("logging initialised twice");
    }
}
