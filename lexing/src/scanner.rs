#![deny(warnings)]

pub struct Scanner<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(src: &'a str) -> Scanner<'a> {
        Scanner { src, pos: 0 }
    }

    /// Current byte offset into the source.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Move the cursor to an absolute offset, eg: to re-expose a token.
    pub fn set_pos(&mut self, pos: usize) -> bool {
        if pos > self.src.len() || !self.src.is_char_boundary(pos) {
            return false;
        }
        self.pos = pos;
        true
    }

    pub fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    pub fn bump(&mut self) -> Option<char> {
        let next = self.peek()?;
        self.pos += next.len_utf8();
        Some(next)
    }

    // Advance the scanner only if the next char is 'what'
    pub fn accept(&mut self, what: char) -> bool {
        match self.peek() {
            Some(next) if next == what => {
                self.pos += next.len_utf8();
                true
            }
            _ => false,
        }
    }

    // Consume 'lit' only if the remaining input starts with it
    pub fn accept_str(&mut self, lit: &str) -> bool {
        if self.src[self.pos..].starts_with(lit) {
            self.pos += lit.len();
            true
        } else {
            false
        }
    }

    // Skip over chars matching 'pred', result is if the scanner advanced
    pub fn skip_all(&mut self, pred: impl Fn(char) -> bool) -> bool {
        let mut advanced = false;
        while self.peek().is_some_and(&pred) {
            self.bump();
            advanced = true;
        }
        advanced
    }

    pub fn skip_whitespace(&mut self) {
        self.skip_all(|c| c.is_ascii_whitespace());
    }

    // scan numbers like [0-9]+(\.[0-9]+)? -- sign and exponent are handled
    // at the grammar level, not here
    pub fn scan_number(&mut self) -> Option<&'a str> {
        let start = self.pos;
        if !self.skip_all(|c| c.is_ascii_digit()) {
            return None;
        }
        // the dot only belongs to the number if digits follow it
        let backtrack = self.pos;
        if self.accept('.') && !self.skip_all(|c| c.is_ascii_digit()) {
            self.pos = backtrack;
        }
        Some(&self.src[start..self.pos])
    }

    // scan [a-zA-Z][a-zA-Z0-9]*
    pub fn scan_identifier(&mut self) -> Option<&'a str> {
        let start = self.pos;
        match self.peek() {
            Some(c) if c.is_ascii_alphabetic() => self.bump(),
            _ => return None,
        };
        self.skip_all(|c| c.is_ascii_alphanumeric());
        Some(&self.src[start..self.pos])
    }
}

///////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Scanner;

    #[test]
    fn scan_number() {
        let tests = vec!["987", "41.98", "0", "553", "2.5"];
        for t in tests.iter() {
            let result = Scanner::new(t).scan_number();
            assert_eq!(Some(*t), result);
        }
    }

    #[test]
    fn scan_number_stops_at_bare_dot() {
        let mut s = Scanner::new("5.");
        assert_eq!(Some("5"), s.scan_number());
        assert_eq!(Some('.'), s.peek());
    }

    #[test]
    fn scan_number_has_no_exponent() {
        let mut s = Scanner::new("28e3");
        assert_eq!(Some("28"), s.scan_number());
        assert_eq!(2, s.pos());
    }

    #[test]
    fn scan_number_has_no_sign() {
        assert_eq!(None, Scanner::new("-543").scan_number());
    }

    #[test]
    fn scan_identifiers() {
        let tests = vec!["id1", "func", "anyword", "bla23"];
        for t in tests.iter() {
            let result = Scanner::new(t).scan_identifier();
            assert_eq!(Some(*t), result);
        }
        assert_eq!(None, Scanner::new("9lives").scan_identifier());
    }

    #[test]
    fn backtracking() {
        let mut s = Scanner::new("sin(x)");
        assert!(s.accept_str("sin"));
        assert_eq!(3, s.pos());
        assert!(s.set_pos(0));
        assert_eq!(Some('s'), s.peek());
        assert!(!s.set_pos(99));
    }
}
