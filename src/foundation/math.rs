use std::ops::{Mul, Sub};

/// `-1`, `0` or `1` depending on the sign of `x`.
#[inline]
pub(crate) fn sign<T>(x: T) -> T
where
    T: Copy + PartialOrd + Default + From<bool> + Sub<Output = T>,
{
    let zero = T::default();
    T::from(x > zero) - T::from(x < zero)
}

#[inline]
pub(crate) fn abs<T>(x: T) -> T
where
    T: Copy + PartialOrd + Default + From<bool> + Sub<Output = T> + Mul<Output = T>,
{
    sign(x) * x
}

/// Returns `(a, b)` reordered so the first element is not greater than the second.
#[inline]
pub(crate) fn ordered<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if a > b { (b, a) } else { (a, b) }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
