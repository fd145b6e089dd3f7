//! Slice kernels behind [`Vector`](crate::Vector) and the arithmetic functions
//!
//! Every loop that walks element data lives behind the [`VectorBackend`]
//! trait so that callers validate once and then hand plain slices to a
//! kernel. Kernels never allocate and never fail; length and emptiness
//! checks are the caller's job.
//!
//! # Backends
//!
//! - `scalar`: Portable baseline implementation (sequential loops)

pub mod scalar;

use crate::Numeric;

/// Backend trait defining common slice kernels
///
/// Integer arithmetic wraps on overflow (see [`Numeric::wrapping_add`]).
///
/// # Panics
///
/// Implementations may panic when a documented precondition is violated:
/// - binary kernels expect `a`, `b` and `result` to share one length
/// - `max`, `min`, `argmax` and `argmin` expect a non-empty slice
pub trait VectorBackend {
    /// Element-wise addition: a[i] + b[i]
    fn add<T: Numeric>(a: &[T], b: &[T], result: &mut [T]);

    /// Element-wise subtraction: a[i] - b[i]
    fn sub<T: Numeric>(a: &[T], b: &[T], result: &mut [T]);

    /// Element-wise multiplication: a[i] * b[i]
    fn mul<T: Numeric>(a: &[T], b: &[T], result: &mut [T]);

    /// Element-wise division: a[i] / b[i]
    ///
    /// `b` must not contain zeros.
    fn div<T: Numeric>(a: &[T], b: &[T], result: &mut [T]);

    /// Accumulate `a` into `acc`: acc[i] += a[i]
    fn accumulate<T: Numeric>(acc: &mut [T], a: &[T]);

    /// Dot product: sum(a[i] * b[i]), folded in index order
    fn dot<T: Numeric>(a: &[T], b: &[T]) -> T;

    /// Sum reduction folded in index order; zero for an empty slice
    fn sum<T: Numeric>(a: &[T]) -> T;

    /// Euclidean norm widened to f64
    ///
    /// Elements are scaled by the largest magnitude before squaring, so the
    /// result neither overflows nor underflows for finite input. Returns 0.0
    /// only when every element is zero (or the slice is empty).
    fn norm<T: Numeric>(a: &[T]) -> f64;

    /// Sum of squared differences widened to f64
    fn squared_distance<T: Numeric>(a: &[T], b: &[T]) -> f64;

    /// Max reduction, first occurrence wins
    fn max<T: Numeric>(a: &[T]) -> T;

    /// Min reduction, first occurrence wins
    fn min<T: Numeric>(a: &[T]) -> T;

    /// Index of the first maximum
    fn argmax<T: Numeric>(a: &[T]) -> usize;

    /// Index of the first minimum
    fn argmin<T: Numeric>(a: &[T]) -> usize;

    /// Element-wise maximum: a[i] if a[i] > b[i], else b[i]
    fn maximum<T: Numeric>(a: &[T], b: &[T], result: &mut [T]);

    /// Element-wise minimum: a[i] if a[i] < b[i], else b[i]
    fn minimum<T: Numeric>(a: &[T], b: &[T], result: &mut [T]);

    /// Multiply every element by `scalar`
    fn scale<T: Numeric>(a: &[T], scalar: T, result: &mut [T]);

    /// Running sum: result[i] = a[0] + ... + a[i]
    fn cumsum<T: Numeric>(a: &[T], result: &mut [T]);

    /// Consecutive differences: result[i] = a[i + 1] - a[i]
    ///
    /// `result` must have length `a.len() - 1`.
    fn diff<T: Numeric>(a: &[T], result: &mut [T]);
}
