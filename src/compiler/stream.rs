//! A forward-only cursor over the token sequence.
//!
//! The emitter drives parsing entirely through these primitives. The
//! cursor is a plain index into the owned vector and never moves
//! backwards; because every sequence ends in `Eof` and no primitive
//! advances past it, the current token is always in bounds.
use crate::compiler::error::{CompileError, CompileResult};
use crate::compiler::lexer::Token;

pub struct TokenStream {
    tokens: Vec<Token>,
    cursor: usize,
}

impl TokenStream {
    /// Wrap a tokenized sequence. Expects the lexer's `Eof`-terminated
    /// output.
    pub fn new(tokens: Vec<Token>) -> Self {
        debug_assert!(matches!(tokens.last(), Some(Token::Eof(_))));
        TokenStream { tokens, cursor: 0 }
    }

    /// True if the current token is the operator `op`. Never advances.
    pub fn peek_is_operator(&self, op: char) -> bool {
        matches!(*self.current(), Token::Op(c, _) if c == op)
    }

    /// Advance past the current token if it is the operator `op`.
    /// On mismatch the cursor is untouched.
    pub fn consume_if_operator(&mut self, op: char) -> bool {
        if self.peek_is_operator(op) {
            self.cursor += 1;
            return true;
        }
        false
    }

    /// Advance past the operator `op`, or fail at the current token.
    pub fn require_operator(&mut self, op: char) -> CompileResult<()> {
        if self.consume_if_operator(op) {
            Ok(())
        } else {
            Err(CompileError::parse(
                self.current().pos(),
                format!("expected operator '{}'", op),
            ))
        }
    }

    /// Advance past a number token and return its value, or fail at the
    /// current token.
    pub fn require_number(&mut self) -> CompileResult<u64> {
        match *self.current() {
            Token::Num(value, _) => {
                self.cursor += 1;
                Ok(value)
            }
            tok => Err(CompileError::parse(tok.pos(), "expected a number")),
        }
    }

    /// True once the cursor sits on the terminating `Eof` token.
    pub fn at_end(&self) -> bool {
        matches!(self.current(), Token::Eof(_))
    }

    fn current(&self) -> &Token {
        &self.tokens[self.cursor]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::lexer::tokenize;

    fn stream(input: &str) -> TokenStream {
        TokenStream::new(tokenize(input).unwrap())
    }

    #[test]
    fn test_peek_does_not_advance() {
        let s = stream("+ 1");
        assert!(s.peek_is_operator('+'));
        assert!(!s.peek_is_operator('-'));
        // Still on the same token.
        assert!(s.peek_is_operator('+'));
    }

    #[test]
    fn test_consume_if_operator_probe_is_side_effect_free() {
        let mut s = stream("- 1");
        assert!(!s.consume_if_operator('+'));
        assert!(s.consume_if_operator('-'));
        assert!(!s.consume_if_operator('-'));
        assert_eq!(s.require_number().unwrap(), 1);
        assert!(s.at_end());
    }

    #[test]
    fn test_require_operator_error_position() {
        let mut s = stream("1 2");
        assert_eq!(s.require_number().unwrap(), 1);
        match s.require_operator('-') {
            Err(CompileError::Parse { pos, message }) => {
                assert_eq!(pos, 2);
                assert_eq!(message, "expected operator '-'");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
        // Failed require leaves the cursor in place.
        assert_eq!(s.require_number().unwrap(), 2);
    }

    #[test]
    fn test_require_number_at_eof() {
        let mut s = stream("");
        assert!(s.at_end());
        match s.require_number() {
            Err(CompileError::Parse { pos, message }) => {
                assert_eq!(pos, 0);
                assert_eq!(message, "expected a number");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
        // Still safely parked on Eof.
        assert!(s.at_end());
    }

    #[test]
    fn test_require_number_after_trailing_operator() {
        let mut s = stream("1+");
        assert_eq!(s.require_number().unwrap(), 1);
        assert!(s.consume_if_operator('+'));
        match s.require_number() {
            Err(CompileError::Parse { pos, .. }) => assert_eq!(pos, 2),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_full_walk() {
        let mut s = stream("10 + 20 - 5");
        assert_eq!(s.require_number().unwrap(), 10);
        assert!(s.consume_if_operator('+'));
        assert_eq!(s.require_number().unwrap(), 20);
        assert!(s.require_operator('-').is_ok());
        assert_eq!(s.require_number().unwrap(), 5);
        assert!(s.at_end());
    }
}
