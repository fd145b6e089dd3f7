//! Scalar backend implementation
//!
//! This is the portable baseline implementation that works on all platforms.
//! It uses simple sequential loops, so floating-point results follow index
//! order exactly.

use super::VectorBackend;
use crate::Numeric;

/// Scalar backend (portable, sequential)
pub struct ScalarBackend;

impl VectorBackend for ScalarBackend {
    fn add<T: Numeric>(a: &[T], b: &[T], result: &mut [T]) {
        for i in 0..a.len() {
            result[i] = a[i].wrapping_add(b[i]);
        }
    }

    fn sub<T: Numeric>(a: &[T], b: &[T], result: &mut [T]) {
        for i in 0..a.len() {
            result[i] = a[i].wrapping_sub(b[i]);
        }
    }

    fn mul<T: Numeric>(a: &[T], b: &[T], result: &mut [T]) {
        for i in 0..a.len() {
            result[i] = a[i].wrapping_mul(b[i]);
        }
    }

    fn div<T: Numeric>(a: &[T], b: &[T], result: &mut [T]) {
        for i in 0..a.len() {
            result[i] = a[i].wrapping_div(b[i]);
        }
    }

    fn accumulate<T: Numeric>(acc: &mut [T], a: &[T]) {
        for (slot, &val) in acc.iter_mut().zip(a) {
            *slot = slot.wrapping_add(val);
        }
    }

    fn dot<T: Numeric>(a: &[T], b: &[T]) -> T {
        let mut sum = T::zero();
        for i in 0..a.len() {
            sum = sum.wrapping_add(a[i].wrapping_mul(b[i]));
        }
        sum
    }

    fn sum<T: Numeric>(a: &[T]) -> T {
        let mut total = T::zero();
        for &val in a {
            total = total.wrapping_add(val);
        }
        total
    }

    fn norm<T: Numeric>(a: &[T]) -> f64 {
        // NaN sticks once seen
        let scale = a.iter().map(|&val| val.to_f64().abs()).fold(0.0, |m, x| {
            if x > m || x.is_nan() {
                x
            } else {
                m
            }
        });
        if scale == 0.0 || !scale.is_finite() {
            return scale;
        }

        let mut total = 0.0;
        for &val in a {
            let x = val.to_f64() / scale;
            total += x * x;
        }
        scale * total.sqrt()
    }

    fn squared_distance<T: Numeric>(a: &[T], b: &[T]) -> f64 {
        let mut total = 0.0;
        for (&x, &y) in a.iter().zip(b) {
            let d = x.to_f64() - y.to_f64();
            total += d * d;
        }
        total
    }

    fn max<T: Numeric>(a: &[T]) -> T {
        let mut maximum = a[0];
        for &val in &a[1..] {
            if val > maximum {
                maximum = val;
            }
        }
        maximum
    }

    fn min<T: Numeric>(a: &[T]) -> T {
        let mut minimum = a[0];
        for &val in &a[1..] {
            if val < minimum {
                minimum = val;
            }
        }
        minimum
    }

    fn argmax<T: Numeric>(a: &[T]) -> usize {
        let mut max_value = a[0];
        let mut max_index = 0;
        for (i, &val) in a.iter().enumerate() {
            if val > max_value {
                max_value = val;
                max_index = i;
            }
        }
        max_index
    }

    fn argmin<T: Numeric>(a: &[T]) -> usize {
        let mut min_value = a[0];
        let mut min_index = 0;
        for (i, &val) in a.iter().enumerate() {
            if val < min_value {
                min_value = val;
                min_index = i;
            }
        }
        min_index
    }

    fn maximum<T: Numeric>(a: &[T], b: &[T], result: &mut [T]) {
        for (i, (&a_val, &b_val)) in a.iter().zip(b).enumerate() {
            result[i] = if a_val > b_val { a_val } else { b_val };
        }
    }

    fn minimum<T: Numeric>(a: &[T], b: &[T], result: &mut [T]) {
        for (i, (&a_val, &b_val)) in a.iter().zip(b).enumerate() {
            result[i] = if a_val < b_val { a_val } else { b_val };
        }
    }

    fn scale<T: Numeric>(a: &[T], scalar: T, result: &mut [T]) {
        for (i, &val) in a.iter().enumerate() {
            result[i] = val.wrapping_mul(scalar);
        }
    }

    fn cumsum<T: Numeric>(a: &[T], result: &mut [T]) {
        let mut running = T::zero();
        for (i, &val) in a.iter().enumerate() {
            running = running.wrapping_add(val);
            result[i] = running;
        }
    }

    fn diff<T: Numeric>(a: &[T], result: &mut [T]) {
        for (i, pair) in a.windows(2).enumerate() {
            result[i] = pair[1].wrapping_sub(pair[0]);
        }
    }
}
