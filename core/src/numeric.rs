//! Numeric range and equality checks.
//!
//! The range checks are generic over [`Integer`], which is implemented for every
//! signed primitive width. Comparisons happen in the caller's own type, so an
//! `i64` is never narrowed and an `i32` is never widened.

use std::fmt::Display;

use precond_types::{CheckResult, Violation};

use crate::report::reject;

mod sealed {
    pub trait Sealed {}
}

/// Signed primitive integers accepted by the range checks.
pub trait Integer: sealed::Sealed + Copy + Ord + Display {
    const ZERO: Self;

    /// `|self| >= Self::MAX`, without overflowing on `Self::MIN`.
    fn magnitude_reaches_max(self) -> bool;
}

macro_rules! impl_integer {
    ($($t:ty),* $(,)?) => {$(
        impl sealed::Sealed for $t {}

        impl Integer for $t {
            const ZERO: Self = 0;

            fn magnitude_reaches_max(self) -> bool {
                self.unsigned_abs() >= <$t>::MAX.unsigned_abs()
            }
        }
    )*};
}

impl_integer!(i8, i16, i32, i64, i128, isize);

/// Fails with `OutOfRange` when `number <= 0`.
pub fn positive<N: Integer>(number: N, name: &str) -> CheckResult {
    if number <= N::ZERO {
        return reject(Violation::out_of_range(name, format!("{name} should be positive.")));
    }
    Ok(())
}

/// Fails with `OutOfRange` when `number < 1`.
pub fn greater_than_zero(number: i32, name: &str) -> CheckResult {
    if number < 1 {
        return reject(Violation::out_of_range(
            name,
            format!("{name} should be greater than zero."),
        ));
    }
    Ok(())
}

/// Fails with `OutOfRange` when the magnitude of `number` reaches the type's
/// maximum. Both `MAX` and `MIN` fail.
pub fn less_than_max_value<N: Integer>(number: N, name: &str) -> CheckResult {
    if number.magnitude_reaches_max() {
        return reject(Violation::out_of_range(name, format!("{name} is too large.")));
    }
    Ok(())
}

/// Fails with `OutOfRange` when `number < 0`.
pub fn nonnegative<N: Integer>(number: N, name: &str) -> CheckResult {
    if number < N::ZERO {
        return reject(Violation::out_of_range(
            name,
            format!("{name} should be non negative."),
        ));
    }
    Ok(())
}

/// Fails with `InvalidArgument` when `expected != actual`. The message carries both.
pub fn equal<T: PartialEq + Display>(expected: T, actual: T, name: &str) -> CheckResult {
    if expected != actual {
        return reject(Violation::invalid_argument(
            name,
            format!("{name} expected value: {expected}, actual value: {actual}"),
        ));
    }
    Ok(())
}
