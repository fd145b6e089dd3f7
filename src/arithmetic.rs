//! Elementwise arithmetic and metrics across vectors
//!
//! Every binary function requires operands of equal length and fails with
//! [`VectorError::LengthMismatch`] otherwise. Validation always runs before
//! any result is allocated, so a failed call never produces a partial
//! vector.
//!
//! # Example
//!
//! ```
//! use numvec::{arithmetic, Vector};
//!
//! let a = Vector::from_slice(&[1, 2, 3]);
//! let b = Vector::from_slice(&[4, 5, 6]);
//!
//! assert_eq!(arithmetic::add(&[&a, &b]).unwrap().as_slice(), &[5, 7, 9]);
//! assert_eq!(arithmetic::dot_product(&a, &b).unwrap(), 32);
//! ```

use crate::backends::scalar::ScalarBackend;
use crate::backends::VectorBackend;
use crate::{Numeric, Result, Vector, VectorError};

#[cfg(feature = "tracing")]
use tracing::instrument;

fn check_lengths<T: Numeric>(a: &Vector<T>, b: &Vector<T>) -> Result<()> {
    if a.len() != b.len() {
        return Err(VectorError::LengthMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }
    Ok(())
}

/// Apply a binary slice kernel to two equal-length vectors
fn zip_with<T, K>(a: &Vector<T>, b: &Vector<T>, kernel: K) -> Result<Vector<T>>
where
    T: Numeric,
    K: FnOnce(&[T], &[T], &mut [T]),
{
    check_lengths(a, b)?;

    let mut result = vec![T::zero(); a.len()];
    kernel(a.as_slice(), b.as_slice(), &mut result);
    Ok(Vector::from_vec(result))
}

/// Element-wise sum of two or more vectors
///
/// Contributions are accumulated into a zero-initialized buffer operand by
/// operand, in the order given.
///
/// # Examples
///
/// ```
/// use numvec::{arithmetic, Vector};
///
/// let a = Vector::from_slice(&[1.0, 2.0]);
/// let b = Vector::from_slice(&[10.0, 20.0]);
/// let c = Vector::from_slice(&[100.0, 200.0]);
///
/// let total = arithmetic::add(&[&a, &b, &c]).unwrap();
/// assert_eq!(total.as_slice(), &[111.0, 222.0]);
/// ```
///
/// # Errors
///
/// - [`VectorError::InsufficientOperands`] if fewer than two vectors are given
/// - [`VectorError::LengthMismatch`] if any operand's length differs from the first
#[cfg_attr(feature = "tracing", instrument(skip_all, fields(operands = vectors.len()), err))]
pub fn add<T: Numeric>(vectors: &[&Vector<T>]) -> Result<Vector<T>> {
    if vectors.len() < 2 {
        return Err(VectorError::InsufficientOperands { got: vectors.len() });
    }

    let first = vectors[0];
    for v in &vectors[1..] {
        check_lengths(first, v)?;
    }

    let mut result = vec![T::zero(); first.len()];
    for v in vectors {
        ScalarBackend::accumulate(&mut result, v.as_slice());
    }
    Ok(Vector::from_vec(result))
}

/// Element-wise difference `a - b`
///
/// # Errors
///
/// Returns [`VectorError::LengthMismatch`] if lengths differ.
#[cfg_attr(feature = "tracing", instrument(skip_all, fields(len = a.len()), err))]
pub fn sub<T: Numeric>(a: &Vector<T>, b: &Vector<T>) -> Result<Vector<T>> {
    zip_with(a, b, ScalarBackend::sub)
}

/// Element-wise product `a * b`
///
/// # Errors
///
/// Returns [`VectorError::LengthMismatch`] if lengths differ.
#[cfg_attr(feature = "tracing", instrument(skip_all, fields(len = a.len()), err))]
pub fn mul<T: Numeric>(a: &Vector<T>, b: &Vector<T>) -> Result<Vector<T>> {
    zip_with(a, b, ScalarBackend::mul)
}

/// Element-wise quotient `a / b`
///
/// Integer division truncates toward zero.
///
/// # Examples
///
/// ```
/// use numvec::{arithmetic, Vector, VectorError};
///
/// let a = Vector::from_slice(&[10, 15, 20]);
/// let b = Vector::from_slice(&[2, 0, 4]);
///
/// assert_eq!(
///     arithmetic::div(&a, &b).unwrap_err(),
///     VectorError::DivideByZero { index: 1 }
/// );
/// ```
///
/// # Errors
///
/// - [`VectorError::LengthMismatch`] if lengths differ
/// - [`VectorError::DivideByZero`] if any element of `b` is zero; no
///   element is divided in that case
#[cfg_attr(feature = "tracing", instrument(skip_all, fields(len = a.len()), err))]
pub fn div<T: Numeric>(a: &Vector<T>, b: &Vector<T>) -> Result<Vector<T>> {
    check_lengths(a, b)?;

    if let Some(index) = b.iter().position(|x| x.is_zero()) {
        return Err(VectorError::DivideByZero { index });
    }

    zip_with(a, b, ScalarBackend::div)
}

/// Dot product folded in `T`
///
/// # Errors
///
/// Returns [`VectorError::LengthMismatch`] if lengths differ.
#[cfg_attr(feature = "tracing", instrument(skip_all, fields(len = a.len()), err))]
pub fn dot_product<T: Numeric>(a: &Vector<T>, b: &Vector<T>) -> Result<T> {
    check_lengths(a, b)?;
    Ok(ScalarBackend::dot(a.as_slice(), b.as_slice()))
}

/// Euclidean distance computed in `f64`
///
/// Elements are widened before subtracting, so unsigned operands never
/// wrap.
///
/// # Errors
///
/// Returns [`VectorError::LengthMismatch`] if lengths differ.
#[cfg_attr(feature = "tracing", instrument(skip_all, fields(len = a.len()), err))]
pub fn euclidean_distance<T: Numeric>(a: &Vector<T>, b: &Vector<T>) -> Result<f64> {
    check_lengths(a, b)?;
    Ok(ScalarBackend::squared_distance(a.as_slice(), b.as_slice()).sqrt())
}

/// Cosine similarity, nominally in `[-1, 1]`
///
/// # Examples
///
/// ```
/// use numvec::{arithmetic, Vector};
///
/// let a = Vector::from_slice(&[1, 0]);
/// let b = Vector::from_slice(&[0, 5]);
/// assert_eq!(arithmetic::cosine_similarity(&a, &b).unwrap(), 0.0);
/// ```
///
/// # Errors
///
/// - [`VectorError::LengthMismatch`] if lengths differ
/// - [`VectorError::UndefinedSimilarity`] if either operand is all zeros
#[cfg_attr(feature = "tracing", instrument(skip_all, fields(len = a.len()), err))]
pub fn cosine_similarity<T: Numeric>(a: &Vector<T>, b: &Vector<T>) -> Result<f64> {
    check_lengths(a, b)?;

    let norm_a = a.norm();
    let norm_b = b.norm();
    if norm_a == 0.0 || norm_b == 0.0 {
        return Err(VectorError::UndefinedSimilarity);
    }

    // dot of the unit vectors; dividing first keeps products in range
    Ok(a
        .iter()
        .zip(b.iter())
        .map(|(&x, &y)| (x.to_f64() / norm_a) * (y.to_f64() / norm_b))
        .sum())
}

/// True iff both vectors have the same length and pairwise-equal elements
///
/// Never fails; two empty vectors are equal.
pub fn equal<T: Numeric>(a: &Vector<T>, b: &Vector<T>) -> bool {
    a.len() == b.len() && a.iter().zip(b.iter()).all(|(x, y)| x == y)
}

/// Per-index maximum
///
/// # Errors
///
/// Returns [`VectorError::LengthMismatch`] if lengths differ.
#[cfg_attr(feature = "tracing", instrument(skip_all, fields(len = a.len()), err))]
pub fn element_wise_max<T: Numeric>(a: &Vector<T>, b: &Vector<T>) -> Result<Vector<T>> {
    zip_with(a, b, ScalarBackend::maximum)
}

/// Per-index minimum
///
/// # Errors
///
/// Returns [`VectorError::LengthMismatch`] if lengths differ.
#[cfg_attr(feature = "tracing", instrument(skip_all, fields(len = a.len()), err))]
pub fn element_wise_min<T: Numeric>(a: &Vector<T>, b: &Vector<T>) -> Result<Vector<T>> {
    zip_with(a, b, ScalarBackend::minimum)
}
