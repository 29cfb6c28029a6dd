//! The emitter walks the token stream exactly once and prints x86-64
//! assembly (Intel syntax) as a side effect of parsing. There is no AST:
//! the grammar is `expr := NUMBER (('+'|'-') NUMBER)*`, so instruction
//! selection is immediate.
//!
//! Output goes to any `io::Write` sink so tests can drive the emitter
//! against an in-memory buffer. Instructions stream out as they are
//! recognized, so on a parse error the sink keeps whatever was already
//! written; callers must discard it on failure.
use std::fmt;
use std::io::Write;

use crate::compiler::error::CompileResult;
use crate::compiler::stream::TokenStream;

/// One line of generated code. The accumulator is `rax`, which also
/// carries the return value under the System V convention.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Instruction {
    MOV(u64),
    ADD(u64),
    SUB(u64),
    RET,
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use Instruction::*;
        match self {
            MOV(value) => write!(f, "    mov rax, {}", value),
            ADD(value) => write!(f, "    add rax, {}", value),
            SUB(value) => write!(f, "    sub rax, {}", value),
            RET => write!(f, "    ret"),
        }
    }
}

/// Parse the whole expression off `stream`, writing the preamble, one
/// instruction per consumed number, and a final `ret` into `out`.
pub fn emit<W: Write>(stream: &mut TokenStream, out: &mut W) -> CompileResult<()> {
    writeln!(out, ".intel_syntax noprefix")?;
    writeln!(out, ".globl main")?;
    writeln!(out, "main:")?;

    // The first token must be a number; it seeds the accumulator.
    writeln!(out, "{}", Instruction::MOV(stream.require_number()?))?;
    let mut count: usize = 1;

    while !stream.at_end() {
        if stream.consume_if_operator('+') {
            writeln!(out, "{}", Instruction::ADD(stream.require_number()?))?;
            count += 1;
            continue;
        }

        // Only '+' and '-' exist lexically, so anything else here is a
        // number in operator position.
        stream.require_operator('-')?;
        writeln!(out, "{}", Instruction::SUB(stream.require_number()?))?;
        count += 1;
    }

    writeln!(out, "{}", Instruction::RET)?;
    debug!("emitted {} arithmetic instruction(s)", count);
    Ok(())
}
