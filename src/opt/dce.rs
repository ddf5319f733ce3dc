//! Structural dead-code elimination: within a `block`, `loop`, or function
//! body, everything after an unconditional transfer of control is
//! unreachable and dropped.
//!
//! `br_if` falls through when its condition is false, so it does not
//! terminate a body.

use crate::ir::{Func, Instr};

pub(super) fn run(func: Func) -> Func {
    Func {
        body: body(func.body),
        ..func
    }
}

fn body(nodes: Vec<Instr>) -> Vec<Instr> {
    let mut live = Vec::with_capacity(nodes.len());
    for node in nodes {
        let node = rewrite(node);
        let terminal = is_terminator(&node);
        live.push(node);
        if terminal {
            break;
        }
    }
    live
}

fn rewrite(node: Instr) -> Instr {
    match node {
        Instr::Block {
            label,
            ty,
            body: nodes,
        } => Instr::Block {
            label,
            ty,
            body: body(nodes),
        },
        Instr::Loop {
            label,
            ty,
            body: nodes,
        } => Instr::Loop {
            label,
            ty,
            body: body(nodes),
        },
        other => other.map_subtrees(&mut rewrite),
    }
}

fn is_terminator(node: &Instr) -> bool {
    matches!(
        node,
        Instr::Return { .. } | Instr::Br { .. } | Instr::Unreachable | Instr::BrTable { .. }
    )
}
