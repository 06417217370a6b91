//! Small numeric primitives for graphics and audio code.
//!
//! - [`vector`]: `Vec2`/`Vec3`/`Vec4` over `f32` and `IVec2`/`IVec3`/`IVec4`
//!   over `i32`, with the usual component-wise operators.
//! - [`matrix`]: column-major `Mat2`/`Mat3`/`Mat4`, including inverse,
//!   determinant and quaternion extraction.
//! - [`scalar`]: angle conversion, `min`/`max`/`clamp` helpers.
//! - [`audio`]: decibel and linear amplitude conversion.
//!
//! Every type is `Copy` plain data; nothing here allocates except
//! `identity_array`, which returns a [`ran_array::GrowableArray`].
//!
//! ```
//! use ran_math::{Mat4, Vec3};
//!
//! let model = Mat4 {
//!     c4: Vec3::new(1.0, 2.0, 3.0).extend(1.0),
//!     ..Mat4::IDENTITY
//! };
//! let p = model.mul_vec3(Vec3::ZERO, 1.0);
//! assert_eq!(p, Vec3::new(1.0, 2.0, 3.0));
//! assert_eq!(model.inverse().mul_vec3(p, 1.0), Vec3::ZERO);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod audio;
pub mod matrix;
pub mod scalar;
pub mod vector;

pub use audio::{amp_to_db, db_to_amp};
pub use matrix::{Mat2, Mat3, Mat4};
pub use vector::{IVec2, IVec3, IVec4, Vec2, Vec3, Vec4};
