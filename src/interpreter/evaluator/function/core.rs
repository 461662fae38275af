use crate::{
    error::{ErrorKind, LispError},
    interpreter::{
        evaluator::{
            core::{EvalResult, Evaluator},
            function::{
                arithmetic::{self, Operator},
                list,
            },
        },
        value::{cells::Cells, core::Value},
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the evaluator (for `eval`), its already evaluated
/// arguments and the current nesting depth.
type BuiltinFn = fn(&Evaluator, Cells, usize) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `AtLeast(n)` means the builtin accepts `n` or more arguments.
#[derive(Clone, Copy)]
enum Arity {
    Exact(usize),
    AtLeast(usize),
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            arity: Arity,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Every name the dispatcher recognises.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "list" => { arity: Arity::AtLeast(0), func: list::list },
    "head" => { arity: Arity::Exact(1),   func: list::head },
    "tail" => { arity: Arity::Exact(1),   func: list::tail },
    "join" => { arity: Arity::AtLeast(1), func: list::join },
    "eval" => { arity: Arity::Exact(1),   func: list::eval },
    "+"    => { arity: Arity::AtLeast(1), func: |_, args, _| arithmetic::fold(Operator::Add, args) },
    "-"    => { arity: Arity::AtLeast(1), func: |_, args, _| arithmetic::fold(Operator::Sub, args) },
    "*"    => { arity: Arity::AtLeast(1), func: |_, args, _| arithmetic::fold(Operator::Mul, args) },
    "/"    => { arity: Arity::AtLeast(1), func: |_, args, _| arithmetic::fold(Operator::Div, args) },
    "%"    => { arity: Arity::AtLeast(1), func: |_, args, _| arithmetic::fold(Operator::Rem, args) },
    "^"    => { arity: Arity::AtLeast(1), func: |_, args, _| arithmetic::fold(Operator::Pow, args) },
    "min"  => { arity: Arity::AtLeast(1), func: |_, args, _| arithmetic::fold(Operator::Min, args) },
    "max"  => { arity: Arity::AtLeast(1), func: |_, args, _| arithmetic::fold(Operator::Max, args) },
}

impl Arity {
    /// Tests whether the given argument count satisfies this arity constraint.
    const fn check(self, n: usize) -> bool {
        match self {
            Self::Exact(m) => n == m,
            Self::AtLeast(m) => n >= m,
        }
    }

    fn describe(self) -> String {
        match self {
            Self::Exact(m) => format!("{m}"),
            Self::AtLeast(m) => format!("at least {m}"),
        }
    }
}

/// Applies the builtin called `name` to `args`.
///
/// `args` is always consumed. Unknown names produce `Unknown Function`, a
/// wrong argument count produces an `ArgumentCount` error, and any error the
/// builtin reports is returned as a `Value::Error`.
///
/// # Example
/// ```
/// use lispty::interpreter::{
///     evaluator::{core::Evaluator, function::core::dispatch},
///     value::core::Value,
/// };
///
/// let args = [3, 1, 2].into_iter().map(Value::Number).collect();
/// assert_eq!(dispatch(&Evaluator::default(), "min", args, 0), Value::Number(1));
///
/// let unknown = dispatch(&Evaluator::default(), "foo", Default::default(), 0);
/// assert_eq!(unknown.to_string(), "Unknown Function");
/// ```
#[tracing::instrument(level = "trace", skip_all, fields(name = name, argc = args.len()))]
pub fn dispatch(evaluator: &Evaluator, name: &str, args: Cells, depth: usize) -> Value {
    let Some(builtin) = BUILTIN_TABLE.iter().find(|b| b.name == name) else {
        tracing::debug!(name, "unknown function");
        return LispError::new(ErrorKind::UnknownFunction).into();
    };

    if !builtin.arity.check(args.len()) {
        return LispError::with_detail(ErrorKind::ArgumentCount,
                                      format!("Function '{name}' passed {} arguments, expected {}",
                                              args.len(),
                                              builtin.arity.describe()))
               .into();
    }

    (builtin.func)(evaluator, args, depth).unwrap_or_else(|error| {
                                              tracing::debug!(name, %error, "builtin failed");
                                              Value::Error(error)
                                          })
}
