//! Validating entry point for vector construction

use crate::{Numeric, Result, Vector, VectorError};

/// Create a vector, rejecting empty input
///
/// Accepts anything convertible into a `Vec<T>`: a `Vec`, an array, or a
/// borrowed slice.
///
/// # Examples
///
/// ```
/// use numvec::{create_vector, VectorError};
///
/// let v = create_vector([1_i32, 2, 3, 4, 5]).unwrap();
/// assert_eq!(v.sum(), 15);
///
/// let empty: Vec<f64> = Vec::new();
/// assert_eq!(create_vector(empty).unwrap_err(), VectorError::EmptyVector);
/// ```
///
/// # Errors
///
/// Returns [`VectorError::EmptyVector`] if the sequence is empty.
pub fn create_vector<T, D>(data: D) -> Result<Vector<T>>
where
    T: Numeric,
    D: Into<Vec<T>>,
{
    let data = data.into();
    if data.is_empty() {
        return Err(VectorError::EmptyVector);
    }
    Ok(Vector::from_vec(data))
}
