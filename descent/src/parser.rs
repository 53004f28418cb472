use crate::error::{ErrorKind, EvalError};
use lexing::{Token, TokenKind, Tokenizer};

/// Longest variable name an expression may use, in bytes.
pub const MAX_VAR_NAME: usize = 15;

/// The single free variable an expression may reference.
#[derive(Clone, PartialEq, Debug)]
pub struct Variable {
    pub name: String,
    pub value: f64,
}

/// What evaluating the text produced: the numeric value, plus the name of
/// the variable the text referenced if it referenced one.
#[derive(Clone, PartialEq, Debug)]
pub struct Evaluation {
    pub value: f64,
    pub variable: Option<String>,
}

/// One evaluation in flight: a tokenizer cursor over the source text plus
/// the variable binding discovered along the way. Parsing and computing
/// happen in the same descent; no syntax tree is ever built, so every
/// evaluation re-reads the text from the start.
pub struct Expression<'a> {
    lexer: Tokenizer<'a>,
    var: Option<Variable>,
    seed: f64,
}

impl<'a> Expression<'a> {
    /// Evaluate `text` with nothing bound: a variable that shows up
    /// evaluates as 0.
    pub fn new(text: &'a str) -> Self {
        Self::with_variable(text, 0.0)
    }

    /// Evaluate `text`, binding `value` to the variable if one shows up.
    pub fn with_variable(text: &'a str, value: f64) -> Self {
        Expression {
            lexer: Tokenizer::new(text),
            var: None,
            seed: value,
        }
    }

    /// Run the descent. The first error anywhere aborts the whole
    /// evaluation; input left over after the top-level expression is an
    /// error as well.
    pub fn eval(mut self) -> Result<Evaluation, EvalError> {
        let value = self.expression()?;
        let token = self.read_token()?;
        if token.kind != TokenKind::End {
            if let TokenKind::Ident(name) = token.kind {
                // let an over-long or second variable name report itself
                self.resolve(name, token.offset)?;
            }
            return Err(EvalError::new(ErrorKind::TrailingInput, token.offset));
        }
        Ok(Evaluation {
            value,
            variable: self.var.map(|v| v.name),
        })
    }

    // expression := term ( ('+' | '-') term )*
    fn expression(&mut self) -> Result<f64, EvalError> {
        let mut left = self.term()?;
        loop {
            let token = self.read_token()?;
            match token.kind {
                TokenKind::Plus => left += self.term()?,
                TokenKind::Minus => left -= self.term()?,
                _ => {
                    self.lexer.unread(&token);
                    return Ok(left);
                }
            }
        }
    }

    // term := primary ( ('*' | '/') primary )*
    fn term(&mut self) -> Result<f64, EvalError> {
        let mut left = self.primary()?;
        loop {
            let token = self.read_token()?;
            match token.kind {
                TokenKind::Star => left *= self.primary()?,
                TokenKind::Slash => {
                    let right = self.primary()?;
                    if right == 0.0 {
                        return Err(EvalError::new(ErrorKind::DivByZero, token.offset));
                    }
                    left /= right;
                }
                _ => {
                    self.lexer.unread(&token);
                    return Ok(left);
                }
            }
        }
    }

    // primary := number | variable | ('+'|'-') primary
    //          | function '(' expression ')' | '(' expression ')'
    fn primary(&mut self) -> Result<f64, EvalError> {
        let token = self.read_token()?;
        match token.kind {
            TokenKind::Number(num) => Ok(num),
            TokenKind::Ident(name) => self.resolve(name, token.offset),
            // unary sign recurses, so `---5` is well-formed
            TokenKind::Plus => self.primary(),
            TokenKind::Minus => Ok(-self.primary()?),
            TokenKind::Func(func) => {
                let token = self.read_token()?;
                if token.kind != TokenKind::OParen {
                    return Err(EvalError::new(ErrorKind::MissingOParen, self.lexer.pos()));
                }
                let arg = self.expression()?;
                let token = self.read_token()?;
                if token.kind != TokenKind::CParen {
                    return Err(EvalError::new(ErrorKind::MissingFnCParen, self.lexer.pos()));
                }
                Ok(func.apply(arg))
            }
            TokenKind::OParen => {
                let value = self.expression()?;
                let token = self.read_token()?;
                if token.kind != TokenKind::CParen {
                    return Err(EvalError::new(ErrorKind::MissingCParen, self.lexer.pos()));
                }
                Ok(value)
            }
            _ => Err(EvalError::new(ErrorKind::InvalidInput, token.offset)),
        }
    }

    // Lexical misses become errors here; everything else flows through.
    fn read_token(&mut self) -> Result<Token<'a>, EvalError> {
        let token = self.lexer.next_token();
        if let TokenKind::Unknown(_) = token.kind {
            return Err(EvalError::new(ErrorKind::InvalidChar, token.offset));
        }
        Ok(token)
    }

    // First identifier binds THE variable; later ones must spell the same
    // name. Only one distinct variable is allowed per expression.
    fn resolve(&mut self, name: &str, offset: usize) -> Result<f64, EvalError> {
        if name.len() > MAX_VAR_NAME {
            return Err(EvalError::new(ErrorKind::VarTooLong, offset + name.len()));
        }
        if let Some(var) = &self.var {
            return if var.name == name {
                Ok(var.value)
            } else {
                Err(EvalError::new(ErrorKind::MultipleVars, offset))
            };
        }
        let value = self.seed;
        self.var = Some(Variable {
            name: name.to_string(),
            value,
        });
        Ok(value)
    }
}
