//! ran: growable arrays and small numeric primitives.
//!
//! This is the facade crate that re-exports the public API of the ran
//! sub-crates. Depend on `ran` alone unless you only need one half.
//!
//! # Quick start
//!
//! ```rust
//! use ran::prelude::*;
//!
//! // A growable array of transforms, with a destructor that counts frees.
//! let freed = std::rc::Rc::new(std::cell::Cell::new(0));
//! let counter = std::rc::Rc::clone(&freed);
//!
//! let mut transforms: GrowableArray<Mat4> = Mat4::identity_array(2);
//! transforms.set_element_destructor(move |_: &mut Mat4| counter.set(counter.get() + 1));
//! transforms.push_back(Mat4 {
//!     c4: Vec4::new(1.0, 2.0, 3.0, 1.0),
//!     ..Mat4::IDENTITY
//! });
//!
//! let world = Mat4::product(transforms.as_slice());
//! assert_eq!(world.mul_vec3(Vec3::ZERO, 1.0), Vec3::new(1.0, 2.0, 3.0));
//!
//! transforms.pop_back();
//! assert_eq!(freed.get(), 1);
//! drop(transforms);
//! assert_eq!(freed.get(), 3);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`array`] | `ran-array` | `GrowableArray`, growth policies, element destructors |
//! | [`math`] | `ran-math` | Vectors, matrices, scalar helpers, decibel conversion |
//!
//! # Features
//!
//! - `logarithmic-growth`: make [`array::DefaultGrowth`] double capacity
//!   instead of adding one slot.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Growable contiguous array (`ran-array`).
///
/// [`array::GrowableArray`] plus the [`array::GrowthPolicy`] trait and its
/// two policies, [`array::Linear`] and [`array::Logarithmic`].
pub use ran_array as array;

/// Vectors, matrices and conversions (`ran-math`).
///
/// See [`math::vector`], [`math::matrix`], [`math::scalar`] and
/// [`math::audio`].
pub use ran_math as math;

/// Common imports for typical ran usage.
///
/// ```rust
/// use ran::prelude::*;
/// ```
pub mod prelude {
    // Container
    pub use ran_array::{
        ArrayError, DefaultGrowth, ElementDestructor, GrowableArray, GrowthPolicy, Linear,
        Logarithmic,
    };

    // Numeric types
    pub use ran_math::{IVec2, IVec3, IVec4, Mat2, Mat3, Mat4, Vec2, Vec3, Vec4};

    // Conversions
    pub use ran_math::{amp_to_db, db_to_amp};
}
