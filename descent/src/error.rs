use thiserror::Error;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum ErrorKind {
    #[error("invalid character")]
    InvalidChar,
    #[error("invalid input")]
    InvalidInput,
    #[error("open parenthesis missing after function")]
    MissingOParen,
    #[error("close parenthesis missing after function")]
    MissingFnCParen,
    #[error("close parenthesis missing")]
    MissingCParen,
    #[error("division by zero")]
    DivByZero,
    #[error("variable name too long")]
    VarTooLong,
    #[error("multiple variables not allowed")]
    MultipleVars,
    #[error("unexpected input after expression")]
    TrailingInput,
}

/// An evaluation failure and the byte offset where it was detected. The
/// offset may sit one past the end of the input, eg: an unclosed paren.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
#[error("{kind} at offset {offset}")]
pub struct EvalError {
    pub kind: ErrorKind,
    pub offset: usize,
}

impl EvalError {
    pub fn new(kind: ErrorKind, offset: usize) -> Self {
        EvalError { kind, offset }
    }

    /// Marker line to print under the offending source text, `len` being
    /// that text's length in bytes: dashes with a caret at the error.
    pub fn marker(&self, len: usize) -> String {
        let mut line = String::with_capacity(len + 1);
        for i in 0..len {
            line.push(if i == self.offset { '^' } else { '-' });
        }
        if self.offset == len {
            line.push('^');
        }
        line
    }
}

///////////////////////////////////////////////////////////////////////////////
