use crate::{
    error::{ErrorKind, LispError},
    interpreter::value::cells::Cells,
    util::stack::ensure_sufficient_stack,
};

/// Represents a runtime value in the interpreter.
///
/// Values form a finite tree: S-expressions and Q-expressions own their
/// children through [`Cells`], and nothing is shared. `Value` is deliberately
/// not `Clone`; moving a child out of its container is the only way to get at
/// it by value.
#[derive(Debug, PartialEq, Eq)]
pub enum Value {
    /// A 64-bit integer, either a literal or a computed result.
    Number(i64),
    /// A failure. Replaces the whole subtree it occurred in.
    Error(LispError),
    /// An operator name such as `+` or `head`.
    Symbol(String),
    /// A parenthesised list, evaluated as a call.
    SExpr(Cells),
    /// A braced list, which is data and never evaluated on its own.
    QExpr(Cells),
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<LispError> for Value {
    fn from(error: LispError) -> Self {
        Self::Error(error)
    }
}

impl From<ErrorKind> for Value {
    fn from(kind: ErrorKind) -> Self {
        Self::Error(LispError::new(kind))
    }
}

impl Value {
    /// Builds a symbol value.
    #[must_use]
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    /// Builds an S-expression from the given children.
    #[must_use]
    pub fn sexpr(children: impl IntoIterator<Item = Self>) -> Self {
        Self::SExpr(children.into_iter().collect())
    }

    /// Builds a Q-expression from the given children.
    #[must_use]
    pub fn qexpr(children: impl IntoIterator<Item = Self>) -> Self {
        Self::QExpr(children.into_iter().collect())
    }

    /// Returns `true` for `Value::Error`.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Returns the error payload, if this is an error value.
    #[must_use]
    pub const fn as_error(&self) -> Option<&LispError> {
        match self {
            Self::Error(error) => Some(error),
            _ => None,
        }
    }

    /// The children of an S- or Q-expression.
    #[must_use]
    pub const fn cells(&self) -> Option<&Cells> {
        match self {
            Self::SExpr(cells) | Self::QExpr(cells) => Some(cells),
            _ => None,
        }
    }

    /// A human readable name of the variant, used in type error messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "Number",
            Self::Error(_) => "Error",
            Self::Symbol(_) => "Symbol",
            Self::SExpr(_) => "S-Expression",
            Self::QExpr(_) => "Q-Expression",
        }
    }
}

/// Writes `cells` space separated between `open` and `close`.
fn write_cells(f: &mut std::fmt::Formatter<'_>,
               cells: &Cells,
               open: char,
               close: char)
               -> std::fmt::Result {
    write!(f, "{open}")?;

    for (index, value) in cells.iter().enumerate() {
        if index > 0 {
            write!(f, " ")?;
        }

        ensure_sufficient_stack(|| write!(f, "{value}"))?;
    }

    write!(f, "{close}")
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Error(e) => write!(f, "{e}"),
            Self::Symbol(s) => f.write_str(s),
            Self::SExpr(cells) => write_cells(f, cells, '(', ')'),
            Self::QExpr(cells) => write_cells(f, cells, '{', '}'),
        }
    }
}
