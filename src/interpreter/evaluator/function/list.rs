use crate::interpreter::{
    evaluator::{
        core::{EvalResult, Evaluator},
        utils::{non_empty_qexpr, single_qexpr, type_error},
    },
    value::{cells::Cells, core::Value},
};

/// `list`: turns the arguments themselves into a Q-expression.
pub fn list(_: &Evaluator, args: Cells, _: usize) -> EvalResult<Value> {
    Ok(Value::QExpr(args))
}

/// `head`: a Q-expression holding only the first element of its argument.
///
/// # Example
/// ```
/// use lispty::get_result;
///
/// assert_eq!(get_result("head {1 2 3}").unwrap(), "{1}");
/// assert_eq!(get_result("head {}").unwrap(), "Function 'head' passed {}");
/// ```
pub fn head(_: &Evaluator, args: Cells, _: usize) -> EvalResult<Value> {
    let cells = non_empty_qexpr("head", args)?;

    Ok(Value::qexpr([cells.take(0)]))
}

/// `tail`: its argument without the first element.
pub fn tail(_: &Evaluator, args: Cells, _: usize) -> EvalResult<Value> {
    let mut cells = non_empty_qexpr("tail", args)?;
    drop(cells.pop(0));

    Ok(Value::QExpr(cells))
}

/// `join`: concatenates Q-expressions in argument order.
///
/// Every argument is checked before anything is moved, so a bad argument
/// anywhere leaves no partial result.
pub fn join(_: &Evaluator, args: Cells, _: usize) -> EvalResult<Value> {
    let lists = args.into_iter()
                    .map(|arg| match arg {
                        Value::QExpr(cells) => Ok(cells),
                        other => Err(type_error("join", &other)),
                    })
                    .collect::<EvalResult<Vec<_>>>()?;

    Ok(Value::QExpr(lists.into_iter().fold(Cells::new(), Cells::join)))
}

/// `eval`: evaluates a Q-expression as if it were an S-expression.
pub fn eval(evaluator: &Evaluator, args: Cells, depth: usize) -> EvalResult<Value> {
    let cells = single_qexpr("eval", args)?;

    Ok(evaluator.eval_at(Value::SExpr(cells), depth))
}
