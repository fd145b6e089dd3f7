//! Vector type with statistics and transforms

use std::collections::HashSet;

use crate::backends::scalar::ScalarBackend;
use crate::backends::VectorBackend;
use crate::{Numeric, Result, VectorError};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Owned one-dimensional numeric vector
///
/// Mutators (`reverse`, `sort`) work in place through `&mut self`. Every
/// other operation leaves the receiver untouched and returns a freshly
/// allocated vector. `clone` is a deep copy.
///
/// # Examples
///
/// ```
/// use numvec::Vector;
///
/// let v = Vector::from_slice(&[1, 2, 3, 4, 5]);
/// assert_eq!(v.sum(), 15);
/// assert_eq!(v.mean().unwrap(), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T: Numeric> Vector<T> {
    /// Create vector from slice
    ///
    /// Empty input is accepted here; use [`create_vector`](crate::create_vector)
    /// to reject it.
    ///
    /// # Examples
    ///
    /// ```
    /// use numvec::Vector;
    ///
    /// let v = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(v.len(), 4);
    /// ```
    pub fn from_slice(data: &[T]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    /// Create vector taking ownership of `data`
    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    /// Get underlying data as slice
    ///
    /// # Examples
    ///
    /// ```
    /// use numvec::Vector;
    ///
    /// let v = Vector::from_slice(&[1, 2, 3]);
    /// assert_eq!(v.as_slice(), &[1, 2, 3]);
    /// ```
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the vector, returning its backing storage
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Get vector length
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if vector is empty
    ///
    /// # Examples
    ///
    /// ```
    /// use numvec::Vector;
    ///
    /// let v1: Vector<f32> = Vector::from_slice(&[]);
    /// assert!(v1.is_empty());
    ///
    /// let v2 = Vector::from_slice(&[1.0]);
    /// assert!(!v2.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element at `index`, `None` when out of bounds
    pub fn get(&self, index: usize) -> Option<T> {
        self.data.get(index).copied()
    }

    /// Iterate over elements in index order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Sum all elements in index order
    ///
    /// An empty vector sums to zero. Integer sums wrap on overflow.
    ///
    /// # Examples
    ///
    /// ```
    /// use numvec::Vector;
    ///
    /// let v = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(v.sum(), 10.0);
    /// ```
    pub fn sum(&self) -> T {
        ScalarBackend::sum(&self.data)
    }

    /// Arithmetic mean as `f64`
    ///
    /// The sum is folded in `T` and then widened.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::EmptyInput`] if vector is empty.
    pub fn mean(&self) -> Result<f64> {
        if self.data.is_empty() {
            return Err(VectorError::EmptyInput { operation: "mean" });
        }

        Ok(self.sum().to_f64() / self.len() as f64)
    }

    /// Find maximum element
    ///
    /// # Examples
    ///
    /// ```
    /// use numvec::Vector;
    ///
    /// let v = Vector::from_slice(&[1, 5, 3, 9, 2]);
    /// assert_eq!(v.max().unwrap(), 9);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::EmptyInput`] if vector is empty.
    pub fn max(&self) -> Result<T> {
        if self.data.is_empty() {
            return Err(VectorError::EmptyInput { operation: "max" });
        }

        Ok(ScalarBackend::max(&self.data))
    }

    /// Find minimum element
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::EmptyInput`] if vector is empty.
    pub fn min(&self) -> Result<T> {
        if self.data.is_empty() {
            return Err(VectorError::EmptyInput { operation: "min" });
        }

        Ok(ScalarBackend::min(&self.data))
    }

    /// Index of the first maximum element
    ///
    /// Unlike [`Vector::max`], an empty vector is not an error: it yields
    /// `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use numvec::Vector;
    ///
    /// let v = Vector::from_slice(&[1, 5, 3, 9, 2]);
    /// assert_eq!(v.argmax(), Some(3));
    ///
    /// let empty: Vector<i32> = Vector::from_slice(&[]);
    /// assert_eq!(empty.argmax(), None);
    /// ```
    pub fn argmax(&self) -> Option<usize> {
        if self.data.is_empty() {
            return None;
        }
        Some(ScalarBackend::argmax(&self.data))
    }

    /// Index of the first minimum element, `None` when empty
    pub fn argmin(&self) -> Option<usize> {
        if self.data.is_empty() {
            return None;
        }
        Some(ScalarBackend::argmin(&self.data))
    }

    /// Euclidean (L2) norm computed in `f64`
    ///
    /// Scaled internally, so magnitudes near the ends of the `f64` range
    /// neither overflow nor flush to zero.
    pub fn norm(&self) -> f64 {
        ScalarBackend::norm(&self.data)
    }

    /// Scale to unit Euclidean length
    ///
    /// # Examples
    ///
    /// ```
    /// use numvec::Vector;
    ///
    /// let v = Vector::from_slice(&[3, 4]);
    /// let unit = v.normalize().unwrap();
    /// assert_eq!(unit.as_slice(), &[0.6, 0.8]);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::ZeroNorm`] if every element is zero, which
    /// includes the empty vector.
    #[cfg_attr(feature = "tracing", instrument(skip(self), fields(len = self.len()), err))]
    pub fn normalize(&self) -> Result<Vector<f64>> {
        let norm = self.norm();
        if norm == 0.0 {
            return Err(VectorError::ZeroNorm);
        }

        Ok(self.data.iter().map(|&x| x.to_f64() / norm).collect())
    }

    /// Reverse the elements in place
    ///
    /// # Examples
    ///
    /// ```
    /// use numvec::Vector;
    ///
    /// let mut v = Vector::from_slice(&[1, 2, 3]);
    /// v.reverse();
    /// assert_eq!(v.as_slice(), &[3, 2, 1]);
    /// ```
    pub fn reverse(&mut self) -> &mut Self {
        self.data.reverse();
        self
    }

    /// Absolute values, widened to `f64`
    pub fn abs(&self) -> Vector<f64> {
        self.data.iter().map(|&x| x.to_f64().abs()).collect()
    }

    /// Multiply every element by `scalar`
    ///
    /// # Examples
    ///
    /// ```
    /// use numvec::Vector;
    ///
    /// let v = Vector::from_slice(&[1, -2, 3]);
    /// assert_eq!(v.scale(3).as_slice(), &[3, -6, 9]);
    /// ```
    pub fn scale(&self, scalar: T) -> Self {
        let mut result = vec![T::zero(); self.len()];
        ScalarBackend::scale(&self.data, scalar, &mut result);
        Self { data: result }
    }

    /// Apply `f` to every element in index order
    ///
    /// # Examples
    ///
    /// ```
    /// use numvec::Vector;
    ///
    /// let v = Vector::from_slice(&[1, 2, 3]);
    /// let squared = v.apply(|x| x * x);
    /// assert_eq!(squared.as_slice(), &[1, 4, 9]);
    /// ```
    pub fn apply<F>(&self, f: F) -> Self
    where
        F: FnMut(T) -> T,
    {
        Self {
            data: self.data.iter().copied().map(f).collect(),
        }
    }

    /// Cumulative sum
    ///
    /// # Examples
    ///
    /// ```
    /// use numvec::Vector;
    ///
    /// let v = Vector::from_slice(&[1, 2, 3, 4]);
    /// assert_eq!(v.cumsum().as_slice(), &[1, 3, 6, 10]);
    /// ```
    pub fn cumsum(&self) -> Self {
        let mut result = vec![T::zero(); self.len()];
        ScalarBackend::cumsum(&self.data, &mut result);
        Self { data: result }
    }

    /// Differences between consecutive elements
    ///
    /// Fewer than two elements yield an empty vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use numvec::Vector;
    ///
    /// let v = Vector::from_slice(&[1, 3, 6, 10]);
    /// assert_eq!(v.diff().as_slice(), &[2, 3, 4]);
    /// assert!(Vector::from_slice(&[5]).diff().is_empty());
    /// ```
    pub fn diff(&self) -> Self {
        if self.len() < 2 {
            return Self { data: Vec::new() };
        }

        let mut result = vec![T::zero(); self.len() - 1];
        ScalarBackend::diff(&self.data, &mut result);
        Self { data: result }
    }

    /// Sort ascending in place
    ///
    /// Uses [`Numeric::total_cmp`], so float NaNs have a defined position.
    #[cfg_attr(feature = "tracing", instrument(skip(self), fields(len = self.len())))]
    pub fn sort(&mut self) -> &mut Self {
        self.data.sort_by(T::total_cmp);
        self
    }

    /// Population variance computed in `f64`
    ///
    /// Returns 0.0 for an empty vector.
    pub fn variance(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }

        let n = self.len() as f64;
        let mean = self.data.iter().map(|&x| x.to_f64()).sum::<f64>() / n;
        let sq_diff: f64 = self
            .data
            .iter()
            .map(|&x| {
                let d = x.to_f64() - mean;
                d * d
            })
            .sum();
        sq_diff / n
    }

    /// Population standard deviation
    ///
    /// Unlike [`Vector::mean`], an empty vector is not an error: it yields
    /// 0.0.
    ///
    /// # Examples
    ///
    /// ```
    /// use numvec::Vector;
    ///
    /// let v = Vector::from_slice(&[2, 4, 4, 4, 5, 5, 7, 9]);
    /// assert_eq!(v.std_dev(), 2.0);
    /// ```
    #[cfg_attr(feature = "tracing", instrument(skip(self), fields(len = self.len())))]
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Distinct values in order of first appearance
    ///
    /// `-0.0` and `0.0` count as one value; NaN never equals anything, so
    /// every NaN is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use numvec::Vector;
    ///
    /// let v = Vector::from_slice(&[1, 2, 2, 3, 1, 4]);
    /// assert_eq!(v.unique().as_slice(), &[1, 2, 3, 4]);
    /// ```
    #[cfg_attr(feature = "tracing", instrument(skip(self), fields(len = self.len())))]
    pub fn unique(&self) -> Self {
        let mut seen = HashSet::with_capacity(self.len());
        let mut unique = Vec::with_capacity(self.len());

        for &val in &self.data {
            match val.dedup_key() {
                Some(key) => {
                    if seen.insert(key) {
                        unique.push(val);
                    }
                }
                None => unique.push(val),
            }
        }

        Self { data: unique }
    }
}

impl<T: Numeric> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T: Numeric> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<T: Numeric> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> IntoIterator for Vector<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    // Basic construction tests
    #[test]
    fn test_from_slice() {
        let v = Vector::from_slice(&[1.0, 2.0, 3.0]);
        assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
        assert_eq!(v.len(), 3);
    }

    #[test]
    fn test_from_slice_empty() {
        let v: Vector<f32> = Vector::from_slice(&[]);
        assert_eq!(v.len(), 0);
        assert!(v.is_empty());
    }

    #[test]
    fn test_collect_and_into_vec() {
        let v: Vector<u16> = (1..=4).collect();
        assert_eq!(v.get(3), Some(4));
        assert_eq!(v.get(4), None);
        assert_eq!(v.into_vec(), vec![1, 2, 3, 4]);
    }

    // Sum / mean
    #[test]
    fn test_sum() {
        let v = Vector::from_slice(&[1, 2, 3, 4]);
        assert_eq!(v.sum(), 10);
    }

    #[test]
    fn test_sum_empty_is_zero() {
        let v: Vector<f64> = Vector::from_slice(&[]);
        assert_eq!(v.sum(), 0.0);
    }

    #[test]
    fn test_sum_wraps_on_overflow() {
        let v = Vector::from_slice(&[u8::MAX, 2]);
        assert_eq!(v.sum(), 1);
    }

    #[test]
    fn test_mean() {
        let v = Vector::from_slice(&[1, 2, 3, 4, 5]);
        assert_eq!(v.mean().unwrap(), 3.0);
    }

    #[test]
    fn test_mean_empty() {
        let v: Vector<i32> = Vector::from_slice(&[]);
        assert_eq!(
            v.mean().unwrap_err(),
            VectorError::EmptyInput { operation: "mean" }
        );
    }

    // Max / min / argmax / argmin
    #[test]
    fn test_max_min() {
        let v = Vector::from_slice(&[1, 5, 3, 9, 2]);
        assert_eq!(v.max().unwrap(), 9);
        assert_eq!(v.min().unwrap(), 1);
    }

    #[test]
    fn test_max_negative() {
        let v = Vector::from_slice(&[-5.0, -1.0, -10.0, -3.0]);
        assert_eq!(v.max().unwrap(), -1.0);
    }

    #[test]
    fn test_max_min_empty() {
        let v: Vector<f32> = Vector::from_slice(&[]);
        assert_eq!(
            v.max().unwrap_err(),
            VectorError::EmptyInput { operation: "max" }
        );
        assert_eq!(
            v.min().unwrap_err(),
            VectorError::EmptyInput { operation: "min" }
        );
    }

    #[test]
    fn test_argmax_argmin() {
        let v = Vector::from_slice(&[1, 5, 3, 9, 2]);
        assert_eq!(v.argmax(), Some(3));
        assert_eq!(v.argmin(), Some(0));
    }

    #[test]
    fn test_argmax_ties_first_occurrence() {
        let v = Vector::from_slice(&[4, 7, 7, 0, 0]);
        assert_eq!(v.argmax(), Some(1));
        assert_eq!(v.argmin(), Some(3));
    }

    #[test]
    fn test_argmax_empty_is_not_an_error() {
        let v: Vector<i64> = Vector::from_slice(&[]);
        assert_eq!(v.argmax(), None);
        assert_eq!(v.argmin(), None);
    }

    // Normalize / norm / abs
    #[test]
    fn test_norm() {
        let v = Vector::from_slice(&[3, 4]);
        assert_eq!(v.norm(), 5.0);
    }

    #[test]
    fn test_normalize_unit_length() {
        let v = Vector::from_slice(&[1, 2, 3, 4]);
        let unit = v.normalize().unwrap();
        assert!((unit.norm() - 1.0).abs() < 1e-10);
        assert_eq!(unit.len(), 4);
    }

    #[test]
    fn test_normalize_zero_vector() {
        let v = Vector::from_slice(&[0, 0, 0]);
        assert_eq!(v.normalize().unwrap_err(), VectorError::ZeroNorm);
    }

    #[test]
    fn test_normalize_empty_is_zero_norm() {
        let v: Vector<f64> = Vector::from_slice(&[]);
        assert_eq!(v.normalize().unwrap_err(), VectorError::ZeroNorm);
    }

    #[test]
    fn test_normalize_extreme_magnitudes() {
        for magnitude in [1e200, 1e-200] {
            let v = Vector::from_slice(&[magnitude, magnitude]);
            let unit = v.normalize().unwrap();
            assert!((unit.norm() - 1.0).abs() < 1e-12);
            assert!((unit.as_slice()[0] - 0.5_f64.sqrt()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_normalize_subnormal_is_not_zero() {
        let v = Vector::from_slice(&[f64::MIN_POSITIVE / 4.0, 0.0]);
        assert_eq!(v.normalize().unwrap().as_slice(), &[1.0, 0.0]);
    }

    #[test]
    fn test_abs() {
        let v = Vector::from_slice(&[-3, 0, 2]);
        assert_eq!(v.abs().as_slice(), &[3.0, 0.0, 2.0]);
    }

    // Transforms
    #[test]
    fn test_clone_is_deep_copy() {
        let v = Vector::from_slice(&[3, 1, 2]);
        let mut copy = v.clone();
        assert_eq!(copy.as_slice(), v.as_slice());

        copy.sort();
        assert_eq!(copy.as_slice(), &[1, 2, 3]);
        assert_eq!(v.as_slice(), &[3, 1, 2]);
    }

    #[test]
    fn test_reverse() {
        let mut v = Vector::from_slice(&[1, 2, 3, 4]);
        v.reverse();
        assert_eq!(v.as_slice(), &[4, 3, 2, 1]);
    }

    #[test]
    fn test_reverse_short_is_noop() {
        let mut single = Vector::from_slice(&[7]);
        single.reverse();
        assert_eq!(single.as_slice(), &[7]);

        let mut empty: Vector<u8> = Vector::default();
        empty.reverse();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_mutators_chain() {
        let mut v = Vector::from_slice(&[2, 3, 1]);
        v.sort().reverse();
        assert_eq!(v.as_slice(), &[3, 2, 1]);
    }

    #[test]
    fn test_scale() {
        let v = Vector::from_slice(&[1.5, -2.0]);
        assert_eq!(v.scale(2.0).as_slice(), &[3.0, -4.0]);
        assert_eq!(v.as_slice(), &[1.5, -2.0]);
    }

    #[test]
    fn test_scale_wraps_on_overflow() {
        let v = Vector::from_slice(&[i32::MAX, 1]);
        assert_eq!(v.scale(2).as_slice(), &[-2, 2]);
    }

    #[test]
    fn test_apply_in_order() {
        let v = Vector::from_slice(&[1, 2, 3]);
        let mut seen = Vec::new();
        let out = v.apply(|x| {
            seen.push(x);
            x + 10
        });
        assert_eq!(out.as_slice(), &[11, 12, 13]);
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn test_cumsum() {
        let v = Vector::from_slice(&[1, 2, 3, 4]);
        assert_eq!(v.cumsum().as_slice(), &[1, 3, 6, 10]);
    }

    #[test]
    fn test_cumsum_wraps_on_overflow() {
        let v = Vector::from_slice(&[i32::MAX, 1]);
        assert_eq!(v.cumsum().as_slice(), &[i32::MAX, i32::MIN]);
    }

    #[test]
    fn test_cumsum_empty() {
        let v: Vector<i32> = Vector::from_slice(&[]);
        assert!(v.cumsum().is_empty());
    }

    #[test]
    fn test_diff() {
        let v = Vector::from_slice(&[1, 3, 6, 10]);
        assert_eq!(v.diff().as_slice(), &[2, 3, 4]);
    }

    #[test]
    fn test_diff_wraps_unsigned() {
        let v = Vector::from_slice(&[255_u8, 0, 3]);
        assert_eq!(v.diff().as_slice(), &[1, 3]);
    }

    #[test]
    fn test_diff_short() {
        assert!(Vector::from_slice(&[5]).diff().is_empty());
        assert!(Vector::<f32>::from_slice(&[]).diff().is_empty());
    }

    #[test]
    fn test_sort() {
        let mut v = Vector::from_slice(&[3.5, -1.0, 2.0, 0.0]);
        v.sort();
        assert_eq!(v.as_slice(), &[-1.0, 0.0, 2.0, 3.5]);
    }

    #[test]
    fn test_sort_places_nan_last() {
        let mut v = Vector::from_slice(&[f64::NAN, 1.0, -1.0]);
        v.sort();
        assert_eq!(&v.as_slice()[..2], &[-1.0, 1.0]);
        assert!(v.as_slice()[2].is_nan());
    }

    // Statistics
    #[test]
    fn test_std_dev() {
        let v = Vector::from_slice(&[2, 4, 4, 4, 5, 5, 7, 9]);
        assert_eq!(v.std_dev(), 2.0);
        assert_eq!(v.variance(), 4.0);
    }

    #[test]
    fn test_std_dev_constant() {
        let v = Vector::from_slice(&[3.0, 3.0, 3.0]);
        assert_eq!(v.std_dev(), 0.0);
    }

    #[test]
    fn test_std_dev_empty_is_zero() {
        let v: Vector<f64> = Vector::from_slice(&[]);
        assert_eq!(v.std_dev(), 0.0);
    }

    #[test]
    fn test_unique() {
        let v = Vector::from_slice(&[1, 2, 2, 3, 1, 4]);
        assert_eq!(v.unique().as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_unique_signed_zero_and_nan() {
        let v = Vector::from_slice(&[0.0, -0.0, f64::NAN, f64::NAN, 1.0]);
        let u = v.unique();
        assert_eq!(u.len(), 4);
        assert_eq!(u.as_slice()[0], 0.0);
        assert!(u.as_slice()[1].is_nan());
        assert!(u.as_slice()[2].is_nan());
        assert_eq!(u.as_slice()[3], 1.0);
    }

    #[test]
    fn test_unique_negative_integers() {
        let v = Vector::from_slice(&[-1_i8, 1, -1, 127, -128, 127]);
        assert_eq!(v.unique().as_slice(), &[-1, 1, 127, -128]);
    }
}
