use logos::Logos;

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Integer literal tokens, such as `42` or `-7`. The text is kept as is;
    /// range checking happens when the literal is read into a value.
    #[regex(r"-?[0-9]+", |lex| lex.slice().to_string())]
    Number(String),
    /// Operator and function names, such as `+`, `min` or `head`.
    #[token("+", |lex| lex.slice().to_string())]
    #[token("-", |lex| lex.slice().to_string())]
    #[token("*", |lex| lex.slice().to_string())]
    #[token("/", |lex| lex.slice().to_string())]
    #[token("%", |lex| lex.slice().to_string())]
    #[token("^", |lex| lex.slice().to_string())]
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Symbol(String),
    /// `; Comments.`
    #[regex(r";[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,

    /// Line breaks only advance the line counter.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\f]+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(text) | Self::Symbol(text) => f.write_str(text),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
            Self::LBrace => f.write_str("{"),
            Self::RBrace => f.write_str("}"),
            Self::Comment | Self::NewLine | Self::Ignored => Ok(()),
        }
    }
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}
