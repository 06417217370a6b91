//! Growable contiguous array with per-element destructors.
//!
//! [`GrowableArray`] is an owned, ordered, index-addressable sequence with
//! explicit capacity control:
//!
//! ```text
//! GrowableArray<T, G>
//! ├── Vec<T>                    live elements [0, len)
//! ├── capacity                  logical slot count (len <= capacity)
//! ├── Option<ElementDestructor> run on pop_back and teardown
//! └── G: GrowthPolicy           Linear (+1) or Logarithmic (x2)
//! ```
//!
//! # Failure model
//!
//! Allocation failure aborts the process through the global allocator.
//! Caller bugs (inserting past the end, popping an empty array, indexing
//! out of range) panic; `try_*` variants report them as [`ArrayError`]
//! instead.
//!
//! # Example
//!
//! ```
//! use ran_array::{GrowableArray, Logarithmic};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let freed = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&freed);
//!
//! let mut arr: GrowableArray<&str, Logarithmic> = GrowableArray::new();
//! arr.set_element_destructor(move |s: &mut &str| sink.borrow_mut().push(*s));
//! arr.push_back("a");
//! arr.push_back("b");
//! arr.push_back("c");
//! arr.free();
//!
//! assert_eq!(*freed.borrow(), vec!["a", "b", "c"]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod destructor;
pub mod error;
pub mod growth;

// Public re-exports for the primary API surface.
pub use array::GrowableArray;
pub use destructor::ElementDestructor;
pub use error::ArrayError;
pub use growth::{DefaultGrowth, GrowthKind, GrowthPolicy, Linear, Logarithmic};
