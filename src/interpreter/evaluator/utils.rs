use crate::{
    error::{ErrorKind, LispError},
    interpreter::{
        evaluator::core::EvalResult,
        value::{cells::Cells, core::Value},
    },
};

/// Takes the only argument of `name` and checks that it is a Q-expression.
///
/// The dispatcher has already checked that exactly one argument was passed.
///
/// # Errors
/// `ErrorKind::TypeMismatch` if the argument is not a Q-expression.
///
/// # Panics
/// Panics if `args` is empty.
pub fn single_qexpr(name: &str, args: Cells) -> EvalResult<Cells> {
    match args.take(0) {
        Value::QExpr(cells) => Ok(cells),
        other => Err(type_error(name, &other)),
    }
}

/// Like [`single_qexpr`], but also rejects the empty Q-expression.
///
/// # Errors
/// - `ErrorKind::TypeMismatch` if the argument is not a Q-expression.
/// - `ErrorKind::EmptyList` if it has no elements.
pub fn non_empty_qexpr(name: &str, args: Cells) -> EvalResult<Cells> {
    let cells = single_qexpr(name, args)?;

    if cells.is_empty() {
        return Err(LispError::with_detail(ErrorKind::EmptyList,
                                          format!("Function '{name}' passed {{}}")));
    }

    Ok(cells)
}

/// Builds the error for a builtin that expected a Q-expression.
#[must_use]
pub fn type_error(name: &str, found: &Value) -> LispError {
    LispError::with_detail(ErrorKind::TypeMismatch,
                           format!("Function '{name}' passed incorrect type: expected Q-Expression, got {}",
                                   found.type_name()))
}
