/// The closed set of ways an evaluation can fail.
///
/// Every error value produced by the reader, the evaluator or a builtin
/// carries exactly one of these kinds, so callers can match on the failure
/// without parsing the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A `/` or `%` divisor was zero, or zero was raised to a negative power.
    DivisionByZero,
    /// A number literal could not be represented as a 64-bit integer.
    BadNumber,
    /// The operator symbol does not name a builtin.
    UnknownFunction,
    /// An S-expression with two or more elements did not start with a symbol.
    NotASymbol,
    /// A builtin received the wrong number of arguments.
    ArgumentCount,
    /// A builtin received an argument of the wrong type.
    TypeMismatch,
    /// `head` or `tail` received an empty Q-expression.
    EmptyList,
    /// Integer arithmetic overflowed.
    Overflow,
    /// The configured evaluation depth bound was exceeded.
    DepthExceeded,
}

impl ErrorKind {
    /// The message shown when an error of this kind has no detail attached.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::DivisionByZero => "Division By Zero",
            Self::BadNumber => "Invalid number",
            Self::UnknownFunction => "Unknown Function",
            Self::NotASymbol => "S-expression does not start with symbol",
            Self::ArgumentCount => "Argument count mismatch",
            Self::TypeMismatch => "Incorrect type",
            Self::EmptyList => "Empty list",
            Self::Overflow => "Integer overflow",
            Self::DepthExceeded => "Maximum evaluation depth exceeded",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// An evaluation failure: a kind plus an optional human readable detail.
///
/// `LispError` is the payload of `Value::Error`. Inside builtins it is also
/// the `Err` side of `EvalResult`, which lets the arithmetic and list code
/// propagate with `?` before the dispatcher folds it back into a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LispError {
    /// The coarse failure category.
    pub kind:   ErrorKind,
    /// Text that replaces the kind's default message when rendered.
    pub detail: Option<String>,
}

impl LispError {
    /// Creates an error that renders with the kind's default message.
    #[must_use]
    pub const fn new(kind: ErrorKind) -> Self {
        Self { kind,
               detail: None }
    }

    /// Creates an error with a specific message.
    #[must_use]
    pub fn with_detail(kind: ErrorKind, detail: impl Into<String>) -> Self {
        Self { kind,
               detail: Some(detail.into()) }
    }

    /// The text shown to the user: the detail if present, otherwise the
    /// kind's default message.
    ///
    /// # Example
    /// ```
    /// use lispty::error::{ErrorKind, LispError};
    ///
    /// assert_eq!(LispError::new(ErrorKind::DivisionByZero).message(), "Division By Zero");
    ///
    /// let err = LispError::with_detail(ErrorKind::EmptyList, "Function 'head' passed {}");
    /// assert_eq!(err.message(), "Function 'head' passed {}");
    /// ```
    #[must_use]
    pub fn message(&self) -> &str {
        self.detail.as_deref().unwrap_or_else(|| self.kind.message())
    }
}

impl From<ErrorKind> for LispError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl std::fmt::Display for LispError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for LispError {}
