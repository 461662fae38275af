use crate::{
    error::{ErrorKind, LispError},
    interpreter::{
        evaluator::function::core::dispatch,
        value::{cells::Cells, core::Value},
    },
    util::stack::ensure_sufficient_stack,
};

/// Result type used by the builtins.
///
/// Builtins return either a value of type `T` or a `LispError` describing the
/// failure. The dispatcher turns the error into a `Value::Error`.
pub type EvalResult<T> = Result<T, LispError>;

/// Tunables for evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EvalConfig {
    /// Maximum number of nested S-expression evaluations. An S-expression
    /// deeper than this reduces to a `DepthExceeded` error. `None` means
    /// unbounded; the stack then grows on demand.
    pub max_depth: Option<usize>,
}

/// Evaluates values.
///
/// The evaluator holds only its configuration. Every call to [`eval`] is
/// independent: nothing is remembered between expressions and no variables
/// exist.
///
/// [`eval`]: Evaluator::eval
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    config: EvalConfig,
}

impl Evaluator {
    /// Creates an evaluator with the given configuration.
    #[must_use]
    pub const fn new(config: EvalConfig) -> Self {
        Self { config }
    }

    /// Evaluates a value.
    ///
    /// S-expressions are reduced; every other value evaluates to itself.
    ///
    /// # Example
    /// ```
    /// use lispty::interpreter::{evaluator::core::Evaluator, value::core::Value};
    ///
    /// let expr = Value::sexpr([Value::symbol("+"), Value::Number(1), Value::Number(2)]);
    /// assert_eq!(Evaluator::default().eval(expr), Value::Number(3));
    ///
    /// let data = Value::qexpr([Value::symbol("+"), Value::Number(1)]);
    /// assert_eq!(Evaluator::default().eval(data).to_string(), "{+ 1}");
    /// ```
    #[must_use]
    pub fn eval(&self, value: Value) -> Value {
        self.eval_at(value, 0)
    }

    /// Evaluates `value` nested `depth` S-expressions deep.
    pub(crate) fn eval_at(&self, value: Value, depth: usize) -> Value {
        match value {
            Value::SExpr(cells) => ensure_sufficient_stack(|| self.eval_sexpr(cells, depth + 1)),
            other => other,
        }
    }

    /// Reduces the children of an S-expression.
    ///
    /// All children are evaluated first, left to right. Then the first error
    /// among them, if any, becomes the result. An empty expression evaluates
    /// to itself and a single child is unwrapped. Otherwise the first child
    /// must be a symbol naming the builtin applied to the rest.
    fn eval_sexpr(&self, cells: Cells, depth: usize) -> Value {
        if let Some(max_depth) = self.config.max_depth
           && depth > max_depth
        {
            tracing::debug!(depth, max_depth, "evaluation depth bound exceeded");
            return LispError::with_detail(ErrorKind::DepthExceeded,
                                          format!("Maximum evaluation depth of {max_depth} exceeded"))
                   .into();
        }

        let mut cells: Cells = cells.into_iter().map(|cell| self.eval_at(cell, depth)).collect();

        if let Some(index) = cells.iter().position(Value::is_error) {
            return cells.take(index);
        }

        match cells.len() {
            0 => return Value::SExpr(cells),
            1 => return cells.take(0),
            _ => {},
        }

        let Value::Symbol(name) = cells.pop(0) else {
            return LispError::new(ErrorKind::NotASymbol).into();
        };

        dispatch(self, &name, cells, depth)
    }
}
