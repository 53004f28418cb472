#![deny(warnings)]

use crate::scanner::Scanner;

/// The six function names the tokenizer recognizes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MathFn {
    Sin,
    Cos,
    Tan,
    Atan,
    Exp,
    Sqrt,
}

// Longest literals first so no shorter keyword can shadow a longer one.
const KEYWORDS: &[(&str, MathFn)] = &[
    ("sqrt", MathFn::Sqrt),
    ("atan", MathFn::Atan),
    ("sin", MathFn::Sin),
    ("cos", MathFn::Cos),
    ("tan", MathFn::Tan),
    ("exp", MathFn::Exp),
];

impl MathFn {
    pub fn name(self) -> &'static str {
        match self {
            MathFn::Sin => "sin",
            MathFn::Cos => "cos",
            MathFn::Tan => "tan",
            MathFn::Atan => "atan",
            MathFn::Exp => "exp",
            MathFn::Sqrt => "sqrt",
        }
    }

    pub fn apply(self, x: f64) -> f64 {
        match self {
            MathFn::Sin => x.sin(),
            MathFn::Cos => x.cos(),
            MathFn::Tan => x.tan(),
            MathFn::Atan => x.atan(),
            MathFn::Exp => x.exp(),
            MathFn::Sqrt => x.sqrt(),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum TokenKind<'a> {
    Number(f64),
    Ident(&'a str),
    Func(MathFn),
    OParen,
    CParen,
    Plus,
    Minus,
    Star,
    Slash,
    Unknown(char),
    End,
}

/// A token plus the byte offset where it starts (leading whitespace skipped).
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Token<'a> {
    pub kind: TokenKind<'a>,
    pub offset: usize,
}

pub struct Tokenizer<'a> {
    src: Scanner<'a>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(source: &'a str) -> Self {
        Tokenizer { src: Scanner::new(source) }
    }

    /// Byte offset of the cursor.
    pub fn pos(&self) -> usize {
        self.src.pos()
    }

    /// Roll the cursor back to `token`'s start so the next read re-exposes
    /// it. Only the most recently read token can be unread.
    pub fn unread(&mut self, token: &Token<'a>) {
        self.src.set_pos(token.offset);
    }

    /// Classify the next token and advance past it. An unclassifiable
    /// character comes back as `Unknown` with the cursor already moved past
    /// it; end of input keeps yielding `End` without advancing.
    pub fn next_token(&mut self) -> Token<'a> {
        self.src.skip_whitespace();
        let offset = self.src.pos();
        let kind = self.classify();
        Token { kind, offset }
    }

    fn classify(&mut self) -> TokenKind<'a> {
        // function keywords are literal prefix matches, tried before the
        // identifier scan -- "sinx" lexes as `sin` followed by `x`
        for &(lit, func) in KEYWORDS {
            if self.src.accept_str(lit) {
                return TokenKind::Func(func);
            }
        }
        if let Some(num) = self.src.scan_number() {
            use std::str::FromStr;
            return TokenKind::Number(f64::from_str(num).unwrap());
        }
        if let Some(id) = self.src.scan_identifier() {
            return TokenKind::Ident(id);
        }
        match self.src.bump() {
            Some('(') => TokenKind::OParen,
            Some(')') => TokenKind::CParen,
            Some('+') => TokenKind::Plus,
            Some('-') => TokenKind::Minus,
            Some('*') => TokenKind::Star,
            Some('/') => TokenKind::Slash,
            Some(other) => TokenKind::Unknown(other),
            None => TokenKind::End,
        }
    }
}

///////////////////////////////////////////////////////////////////////////////
