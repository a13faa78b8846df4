//! Integer helpers.

use crate::utils::errors::MathError;

/// Greatest common divisor of the absolute values of `x` and `y`.
///
/// `gcd(0, 0)` is 0.
pub const fn gcd(x: i64, y: i64) -> u64 {
    let mut a = x.unsigned_abs();
    let mut b = y.unsigned_abs();
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }

    a
}

/// Least common multiple of `x` and `y`.
///
/// The result is always non-negative. Fails when both inputs are zero or when
/// the result does not fit in a `u64`.
///
/// ```
/// use romkit::utils::math::lcm;
///
/// assert_eq!(lcm(4, 6)?, 12);
/// assert_eq!(lcm(-4, 6)?, 12);
/// # Ok::<(), romkit::utils::errors::MathError>(())
/// ```
pub fn lcm(x: i64, y: i64) -> Result<u64, MathError> {
    let divisor = gcd(x, y);
    if divisor == 0 {
        return Err(MathError::DegenerateLcm);
    }

    (x.unsigned_abs() / divisor)
        .checked_mul(y.unsigned_abs())
        .ok_or(MathError::Overflow(x, y))
}
