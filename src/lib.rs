//! numvec: Generic Numeric Vectors
//!
//! **numvec** provides a single owned, one-dimensional container,
//! [`Vector<T>`], generic over the built-in integer and floating-point types,
//! together with:
//!
//! 1. **Statistics** - sum, mean, min/max, argmin/argmax, variance, standard deviation
//! 2. **Transforms** - normalize, abs, scale, apply, cumsum, diff, unique, sort, reverse
//! 3. **Arithmetic** - elementwise add/sub/mul/div, dot product, distance, cosine similarity
//!
//! # Design Principles
//!
//! - **Validate, then compute**: every precondition is checked before a result is allocated
//! - **Owned values**: no shared storage; `clone` is a deep copy
//! - **Fixed-width integers wrap**: integer overflow wraps identically in debug and release
//! - **Floats for statistics**: mean, norm, distance and friends widen to `f64`
//!
//! # Quick Start
//!
//! ```rust
//! use numvec::{arithmetic, create_vector};
//!
//! let a = create_vector([1_i32, 2, 3, 4]).unwrap();
//! let b = create_vector([5_i32, 6, 7, 8]).unwrap();
//!
//! let result = arithmetic::add(&[&a, &b]).unwrap();
//! assert_eq!(result.as_slice(), &[6, 8, 10, 12]);
//! assert_eq!(a.mean().unwrap(), 2.5);
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `tracing` | `tracing` spans on normalize, sort, unique, std_dev and all arithmetic |

pub mod arithmetic;
pub mod backends;
pub mod error;
pub mod factory;
pub mod numeric;
pub mod vector;

pub use arithmetic::{
    add, cosine_similarity, div, dot_product, element_wise_max, element_wise_min, equal,
    euclidean_distance, mul, sub,
};
pub use error::{Result, VectorError};
pub use factory::create_vector;
pub use numeric::Numeric;
pub use vector::Vector;
