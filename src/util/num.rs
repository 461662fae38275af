use crate::{
    error::{ErrorKind, LispError},
    interpreter::evaluator::core::EvalResult,
};

/// Raises `base` to `exponent`, truncating the exact result toward zero.
///
/// Non-negative exponents use checked integer exponentiation, so the result is
/// exact or an overflow error. A negative exponent gives `1 / base^-exponent`,
/// whose truncation is `0` for every base except `1` and `-1`. Zero to a
/// negative power is a division by zero.
///
/// ## Errors
/// - `ErrorKind::Overflow` if the result does not fit in an `i64`.
/// - `ErrorKind::DivisionByZero` for `0` raised to a negative power.
///
/// ## Example
/// ```
/// use lispty::{error::ErrorKind, util::num::pow_truncated};
///
/// assert_eq!(pow_truncated(2, 10), Ok(1024));
/// assert_eq!(pow_truncated(2, -1), Ok(0));
/// assert_eq!(pow_truncated(-1, -3), Ok(-1));
/// assert_eq!(pow_truncated(10, 30).unwrap_err().kind, ErrorKind::Overflow);
/// ```
pub fn pow_truncated(base: i64, exponent: i64) -> EvalResult<i64> {
    let odd = exponent % 2 != 0;

    match base {
        1 => return Ok(1),
        -1 => return Ok(if odd { -1 } else { 1 }),
        0 if exponent < 0 => return Err(LispError::new(ErrorKind::DivisionByZero)),
        0 => return Ok(i64::from(exponent == 0)),
        _ if exponent < 0 => return Ok(0),
        _ => {},
    }

    u32::try_from(exponent).ok()
                           .and_then(|exponent| base.checked_pow(exponent))
                           .ok_or_else(|| overflow("^"))
}

/// Builds the overflow error reported by arithmetic on `operator`.
#[must_use]
pub fn overflow(operator: &str) -> LispError {
    LispError::with_detail(ErrorKind::Overflow,
                           format!("Integer overflow while computing '{operator}'"))
}
