//! Structured compile errors and the single diagnostic formatter.
//!
//! Lexing and parsing failures carry the byte offset of the offending
//! input so the boundary can point at it with a caret. Nothing in this
//! module prints or exits; rendering happens once, in main.

use std::io;
use thiserror::Error;

pub type CompileResult<T> = Result<T, CompileError>;

#[derive(Debug, Error)]
pub enum CompileError {
    /// A byte in the input is not whitespace, a digit, `+`, or `-`,
    /// or a digit run does not fit the token's storage width.
    #[error("{message}")]
    Lex { pos: usize, message: String },

    /// The token sequence does not match `NUMBER (('+'|'-') NUMBER)*`.
    #[error("{message}")]
    Parse { pos: usize, message: String },

    /// The output sink rejected a write. No source position.
    #[error("{0}")]
    Io(#[from] io::Error),
}

impl CompileError {
    pub fn lex(pos: usize, message: impl Into<String>) -> Self {
        CompileError::Lex {
            pos,
            message: message.into(),
        }
    }

    pub fn parse(pos: usize, message: impl Into<String>) -> Self {
        CompileError::Parse {
            pos,
            message: message.into(),
        }
    }

    /// Byte offset into the source, when the error has one.
    pub fn position(&self) -> Option<usize> {
        match self {
            CompileError::Lex { pos, .. } | CompileError::Parse { pos, .. } => Some(*pos),
            CompileError::Io(_) => None,
        }
    }

    /// Render the diagnostic for the terminal: the offending line echoed
    /// back, then a caret aligned under the failing byte. The caret line
    /// is exactly `pos` spaces followed by `^`.
    pub fn render(&self, source: &str) -> String {
        match self.position() {
            Some(pos) => format!("{}\n{}^ {}", source, " ".repeat(pos), self),
            None => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_caret_alignment() {
        let source = "1 * 2";
        let err = CompileError::lex(2, "invalid token '*'");
        assert_eq!(err.render(source), "1 * 2\n  ^ invalid token '*'");
    }

    #[test]
    fn test_render_at_offset_zero() {
        let err = CompileError::parse(0, "expected a number");
        assert_eq!(err.render("+1"), "+1\n^ expected a number");
    }

    #[test]
    fn test_render_at_end_of_input() {
        // Errors anchored past the last byte point one column after it.
        let err = CompileError::parse(2, "expected a number");
        assert_eq!(err.render("1+"), "1+\n  ^ expected a number");
    }

    #[test]
    fn test_io_renders_bare() {
        let err = CompileError::from(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        assert_eq!(err.render("1+2"), "pipe closed");
        assert_eq!(err.position(), None);
    }
}
