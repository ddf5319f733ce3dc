//! Algebraic peephole: identity and absorbing elements of binary operations.
//!
//! `x + 0`, `x − 0`, `x << 0`, `x >> 0`, and `x × 1` reduce to `x` (for both
//! the i32 and f32 families; a float zero matches `+0.0` and `−0.0`), and an
//! `i32.mul` with a zero operand reduces to `i32.const 0`. Float
//! multiply-by-zero is left alone: it is observable through NaN and infinity.

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
            Ok([lhs, rhs]) => simplify(op, lhs, rhs),
            Err(operands) => Instr::Op { op, operands },
        },
        other => other,
    }
}

fn simplify(op: Opcode, lhs: Instr, rhs: Instr) -> Instr {
    match op {
        Opcode::I32Add | Opcode::F32Add => {
            if is_zero(&rhs) {
                return lhs;
            }
            if is_zero(&lhs) {
                return rhs;
            }
        }
        Opcode::I32Sub | Opcode::F32Sub => {
            if is_zero(&rhs) {
                return lhs;
            }
        }
        Opcode::I32Shl | Opcode::I32ShrS => {
            if is_zero(&rhs) {
                return lhs;
            }
        }
        Opcode::I32Mul => {
            if is_one(&rhs) {
                return lhs;
            }
            if is_one(&lhs) {
                return rhs;
            }
            if is_zero(&lhs) || is_zero(&rhs) {
                return Instr::Const(Literal::I32(0));
            }
        }
        Opcode::F32Mul => {
            if is_one(&rhs) {
                return lhs;
            }
            if is_one(&lhs) {
                return rhs;
            }
        }
        _ => {}
    }
    Instr::Op {
        op,
        operands: vec![lhs, rhs],
    }
}

fn is_zero(node: &Instr) -> bool {
    match node {
        Instr::Const(Literal::I32(value)) => *value == 0,
        Instr::Const(Literal::F32(value)) => *value == 0.0,
        _ => false,
    }
}

fn is_one(node: &Instr) -> bool {
    match node {
        Instr::Const(Literal::I32(value)) => *value == 1,
        Instr::Const(Literal::F32(value)) => *value == 1.0,
        _ => false,
    }
}
