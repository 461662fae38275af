use crate::{
    error::{ErrorKind, LispError},
    interpreter::{
        evaluator::core::EvalResult,
        value::{cells::Cells, core::Value},
    },
    util::num::{overflow, pow_truncated},
};

/// An arithmetic builtin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`, or negation with a single argument.
    Sub,
    /// `*`
    Mul,
    /// `/`, truncating integer division.
    Div,
    /// `%`, remainder with the sign of the dividend.
    Rem,
    /// `^`
    Pow,
    /// `min`
    Min,
    /// `max`
    Max,
}

impl Operator {
    /// The builtin name this operator is bound to.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Rem => "%",
            Self::Pow => "^",
            Self::Min => "min",
            Self::Max => "max",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Folds `op` over the arguments, left to right, from the first one.
///
/// Every argument must be a number; this is checked before any arithmetic
/// happens. A lone argument to `-` is negated. The first zero divisor stops
/// the fold.
///
/// # Errors
/// - `TypeMismatch` if any argument is not a number.
/// - `DivisionByZero` for a zero divisor in `/` or `%`.
/// - `Overflow` if an intermediate result does not fit in an `i64`.
///
/// # Example
/// ```
/// use lispty::interpreter::{
///     evaluator::function::arithmetic::{Operator, fold},
///     value::core::Value,
/// };
///
/// let args = [10, 4, 1].into_iter().map(Value::Number).collect();
/// assert_eq!(fold(Operator::Sub, args), Ok(Value::Number(5)));
///
/// let args = [5].into_iter().map(Value::Number).collect();
/// assert_eq!(fold(Operator::Sub, args), Ok(Value::Number(-5)));
/// ```
pub fn fold(op: Operator, args: Cells) -> EvalResult<Value> {
    let numbers = args.into_iter()
                      .map(|arg| match arg {
                          Value::Number(n) => Ok(n),
                          _ => Err(LispError::with_detail(ErrorKind::TypeMismatch,
                                                          "Cannot operate on non-number")),
                      })
                      .collect::<EvalResult<Vec<_>>>()?;

    let Some((&first, rest)) = numbers.split_first() else {
        return Err(LispError::with_detail(ErrorKind::ArgumentCount,
                                          format!("Operator '{op}' passed no arguments")));
    };

    if op == Operator::Sub && rest.is_empty() {
        return first.checked_neg()
                    .map(Value::Number)
                    .ok_or_else(|| overflow("-"));
    }

    rest.iter()
        .try_fold(first, |acc, &n| apply(op, acc, n))
        .map(Value::Number)
}

/// Applies one step of the fold.
fn apply(op: Operator, left: i64, right: i64) -> EvalResult<i64> {
    let symbol = op.symbol();

    match op {
        Operator::Add => left.checked_add(right).ok_or_else(|| overflow(symbol)),
        Operator::Sub => left.checked_sub(right).ok_or_else(|| overflow(symbol)),
        Operator::Mul => left.checked_mul(right).ok_or_else(|| overflow(symbol)),
        Operator::Div | Operator::Rem if right == 0 => {
            Err(LispError::new(ErrorKind::DivisionByZero))
        },
        Operator::Div => left.checked_div(right).ok_or_else(|| overflow(symbol)),
        Operator::Rem => Ok(left.wrapping_rem(right)),
        Operator::Pow => pow_truncated(left, right),
        Operator::Min => Ok(left.min(right)),
        Operator::Max => Ok(left.max(right)),
    }
}
