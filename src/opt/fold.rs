//! Constant folding: a binary operation over two `const` operands collapses
//! into a single `const` of the result.
//!
//! Integer arithmetic uses two's-complement 32-bit wrap semantics, matching
//! the target instruction; shifts mask their count the way the instructions
//! do. `i32.div_s` by zero is left unfolded (it traps at runtime). There is
//! no constant propagation across locals.

use crate::ir::{Func, Instr, Literal};
use crate::isa::Opcode;

pub(super) fn run(func: Func) -> Func {
    Func {
        body: func.body.into_iter().map(rewrite).collect(),
        ..func
    }
}

fn rewrite(node: Instr) -> Instr {
    let node = node.map_subtrees(&mut rewrite);
    match node {
        Instr::Op { op, operands } => match <[Instr; 2]>::try_from(operands) {
            Ok([Instr::Const(lhs), Instr::Const(rhs)]) => match fold_binary(op, lhs, rhs) {
                Some(folded) => Instr::Const(folded),
                None => Instr::Op {
                    op,
                    operands: vec![Instr::Const(lhs), Instr::Const(rhs)],
                },
            },
            Ok([lhs, rhs]) => Instr::Op {
                op,
                operands: vec![lhs, rhs],
            },
            Err(operands) => Instr::Op { op, operands },
        },
        other => other,
    }
}

fn fold_binary(op: Opcode, lhs: Literal, rhs: Literal) -> Option<Literal> {
    use Literal::{F32, I32};

    Some(match (op, lhs, rhs) {
        (Opcode::I32Add, I32(a), I32(b)) => I32(a.wrapping_add(b)),
        (Opcode::I32Sub, I32(a), I32(b)) => I32(a.wrapping_sub(b)),
        (Opcode::I32Mul, I32(a), I32(b)) => I32(a.wrapping_mul(b)),
        // Division by zero traps; leave it for the runtime.
        (Opcode::I32DivS, I32(_), I32(0)) => return None,
        (Opcode::I32DivS, I32(a), I32(b)) => I32(a.wrapping_div(b)),
        (Opcode::I32Shl, I32(a), I32(b)) => I32(a.wrapping_shl(b as u32)),
        (Opcode::I32ShrS, I32(a), I32(b)) => I32(a.wrapping_shr(b as u32)),
        (Opcode::F32Add, F32(a), F32(b)) => F32(a + b),
        (Opcode::F32Sub, F32(a), F32(b)) => F32(a - b),
        (Opcode::F32Mul, F32(a), F32(b)) => F32(a * b),
        (Opcode::F32Div, F32(a), F32(b)) => F32(a / b),
        _ => return None,
    })
}
