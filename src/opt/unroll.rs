//! Loop unrolling over the canonical counted-loop shape:
//!
//! ```text
//! loop $top {
//!     br_if $out (condition over i and the bound)
//!     ... body ...
//!     local.set $i (i32.add (local.get $i) (i32.const step))
//!     br $top
//! }
//! ```
//!
//! For factor *k* the rewritten loop keeps the single exit check, then runs
//! *k* copies of the body with one increment between consecutive copies, so
//! that the *m*-th copy observes `i + m·step`, and one final increment before
//! the back edge. Loops of any other shape are returned unchanged.

use crate::ir::{Func, Instr, Literal};
use crate::isa::Opcode;
use crate::types::BlockType;

pub(super) fn run(func: Func, factor: u32) -> Func {
    let factor = factor.max(1);
    Func {
        body: func
            .body
            .into_iter()
            .map(|node| rewrite(node, factor))
            .collect(),
        ..func
    }
}

fn rewrite(node: Instr, factor: u32) -> Instr {
    let node = node.map_subtrees(&mut |child| rewrite(child, factor));
    match node {
        Instr::Loop { label, ty, body } => try_unroll(label, ty, body, factor),
        other => other,
    }
}

fn try_unroll(label: String, ty: BlockType, body: Vec<Instr>, factor: u32) -> Instr {
    if !matches_counted_loop(&label, &body) {
        return Instr::Loop { label, ty, body };
    }

    let check = body[0].clone();
    let increment = body[body.len() - 2].clone();
    let back_edge = body[body.len() - 1].clone();
    let chunk = &body[1..body.len() - 2];

    let mut unrolled = Vec::with_capacity(2 + factor as usize * (chunk.len() + 1) + 1);
    unrolled.push(check);
    for copy in 0..factor {
        if copy > 0 {
            unrolled.push(increment.clone());
        }
        unrolled.extend(chunk.iter().cloned());
    }
    unrolled.push(increment);
    unrolled.push(back_edge);

    Instr::Loop {
        label,
        ty,
        body: unrolled,
    }
}

fn matches_counted_loop(label: &str, body: &[Instr]) -> bool {
    if body.len() < 4 {
        return false;
    }
    if !matches!(body[0], Instr::BrIf { .. }) {
        return false;
    }
    let increment = match &body[body.len() - 2] {
        Instr::LocalSet { local, value } => is_index_increment(local, value),
        _ => false,
    };
    let back_edge = matches!(&body[body.len() - 1], Instr::Br { target } if target == label);
    increment && back_edge
}

/// Matches `local.set $i (i32.add (local.get $i) (i32.const step))`.
fn is_index_increment(local: &str, value: &Instr) -> bool {
    match value {
        Instr::Op {
            op: Opcode::I32Add,
            operands,
        } => matches!(
            operands.as_slice(),
            [Instr::LocalGet { local: counter }, Instr::Const(Literal::I32(_))]
                if counter == local
        ),
        _ => false,
    }
}
