//! The Compiler module is in charge of taking a single
//! arithmetic expression and producing x86-64 assembly for it.
//!
//! It does this with a simple eager tokenizer and a fused
//! parse-and-emit pass with one token of lookahead.

pub mod emitter;
pub mod error;
pub mod lexer;
pub mod stream;

pub use self::error::{CompileError, CompileResult};

use std::io::Write;

use self::stream::TokenStream;

/// Compile `expr` into assembly text written to `out`.
///
/// Tokenization is eager; emission streams, so `out` may hold a partial
/// program when this returns an error.
pub fn compile<W: Write>(expr: &str, out: &mut W) -> CompileResult<()> {
    let tokens = lexer::tokenize(expr)?;
    debug!("lexed {} token(s) from {} byte(s)", tokens.len(), expr.len());

    emitter::emit(&mut TokenStream::new(tokens), out)
}
