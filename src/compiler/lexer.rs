//! This lexer tokenizes a single arithmetic expression.
use crate::compiler::error::{CompileError, CompileResult};

// Tokens carry their payload plus the byte offset they start at in the
// input. The offset is for diagnostics only.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Token {
    /// A single-character operator, either `+` or `-`.
    Op(char, usize),
    /// A non-negative decimal literal, 64 bits wide like the accumulator.
    Num(u64, usize),
    /// Sentinel terminating every token sequence; sits at input length.
    Eof(usize),
}

impl Token {
    /// Byte offset of the token's first character.
    pub fn pos(&self) -> usize {
        match *self {
            Token::Op(_, pos) | Token::Num(_, pos) | Token::Eof(pos) => pos,
        }
    }
}

/// Tokenize the whole input up front, left to right. The returned vector
/// always ends with exactly one `Eof` token; empty input yields just that.
///
/// Whitespace separates tokens and is never emitted. Any byte that is not
/// whitespace, a digit, `+`, or `-` fails with a `Lex` error at its offset.
pub fn tokenize(input: &str) -> CompileResult<Vec<Token>> {
    let mut tokens: Vec<Token> = Vec::with_capacity(16);
    let bytes = input.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i];

        // Skip spaces, tabs, linefeeds, vertical tabs, form feeds, and
        // carriage returns. They bound tokens and are never emitted.
        if matches!(c, b'\t' | b'\n' | b'\x0B' | b'\x0C' | b'\x0D' | b' ') {
            i += 1;
            continue;
        }

        if c == b'+' || c == b'-' {
            tokens.push(Token::Op(c as char, i));
            i += 1;
            continue;
        }

        if c.is_ascii_digit() {
            // Consume the maximal run of decimal digits. A following '-'
            // or '+' is always a separate operator token.
            let start = i;
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            let value = input[start..i]
                .parse::<u64>()
                .map_err(|e| CompileError::lex(start, format!("invalid number: {}", e)))?;
            tokens.push(Token::Num(value, start));
            continue;
        }

        // First unknown byte wins; multi-byte characters report the whole
        // character but anchor at its first byte.
        let invalid = input[i..].chars().next().unwrap_or('\0');
        return Err(CompileError::lex(
            i,
            format!("invalid token '{}'", invalid),
        ));
    }

    tokens.push(Token::Eof(input.len()));
    Ok(tokens)
}
