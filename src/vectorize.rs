//! The auto-vectorizer: rewrites a scalar `i32` or `f32` kernel to its
//! 128-bit SIMD equivalent.
//!
//! The rewrite is intentionally shallow. It does not prove that consecutive
//! iterations are independent and it does not handle reductions; it is
//! effective precisely on map-style loops: load, compute, store, advance
//! the index by one element per iteration. Target-type loads and stores
//! widen to `v128` accesses, mapped arithmetic moves to its `i32x4`/`f32x4`
//! counterpart (bitwise operations to the type-agnostic `v128` forms),
//! surviving target-type constants are broadcast with a splat, and the
//! canonical `i + 1` index increment stays scalar with its constant lifted
//! to the lane count, advancing one lane-group per iteration.

use crate::ir::{Func, Instr, Literal};
use crate::isa::{MemArg, Opcode};

/// The number of lanes a vectorized kernel processes per iteration.
const LANES: u32 = 4;

/// The scalar element type a kernel is vectorized over.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum VectorTarget {
    /// Vectorize `i32` arithmetic to `i32x4`.
    I32,
    /// Vectorize `f32` arithmetic to `f32x4`.
    #[default]
    F32,
}

/// Configuration for [`auto_vectorize`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VectorizeOptions {
    /// The element type to vectorize over.
    pub target: VectorTarget,
    /// Whether the runtime supports `v128`.
    ///
    /// The host wires the result of
    /// [`FeatureProbes::simd_supported`](crate::probe::FeatureProbes::simd_supported)
    /// in here; when `false` the vectorizer falls back to the scalar
    /// function.
    pub simd_supported: bool,
}

impl Default for VectorizeOptions {
    fn default() -> Self {
        Self {
            target: VectorTarget::F32,
            simd_supported: true,
        }
    }
}

/// The outcome of [`auto_vectorize`].
#[derive(Clone, Debug, PartialEq)]
pub struct Vectorized {
    /// The rewritten function (named `<input>_simd`), or a clone of the
    /// input when vectorization did not apply.
    pub func: Func,
    /// Elements processed per iteration: the lane count on success, 1
    /// otherwise.
    pub width: u32,
    /// Whether the rewrite applied.
    pub success: bool,
}

/// Lifts a scalar kernel to `v128`, falling back to the input when the
/// runtime lacks SIMD or the body contains nothing to vectorize.
pub fn auto_vectorize(func: &Func, options: &VectorizeOptions) -> Vectorized {
    let applicable = options.simd_supported
        && func
            .body
            .iter()
            .any(|node| has_candidate(node, options.target));
    if !applicable {
        return Vectorized {
            func: func.clone(),
            width: 1,
            success: false,
        };
    }

    let mut vectorized = func.clone();
    vectorized.name.push_str("_simd");
    vectorized.body = vectorized
        .body
        .into_iter()
        .map(|node| rewrite(node, options.target))
        .collect();

    Vectorized {
        func: vectorized,
        width: LANES,
        success: true,
    }
}

/// Whether the subtree contains a target-type load/store or another mapped
/// operation.
fn has_candidate(node: &Instr, target: VectorTarget) -> bool {
    let mapped = match node {
        Instr::Mem { op, .. } => vector_memory_op(*op, target).is_some(),
        Instr::Op { op, .. } => map_op(*op, target).is_some(),
        _ => false,
    };
    mapped
        || node
            .children()
            .into_iter()
            .any(|child| has_candidate(child, target))
}

fn rewrite(node: Instr, target: VectorTarget) -> Instr {
    // The loop-index increment `i + 1` appears only as the canonical stride;
    // it stays scalar, with the constant lifted to the lane count. Checked
    // before descending so the splat rule cannot consume the constant.
    let node = match node {
        Instr::Op {
            op: Opcode::I32Add,
            operands,
        } => match <[Instr; 2]>::try_from(operands) {
            Ok([base, Instr::Const(Literal::I32(1))]) => {
                return Instr::Op {
                    op: Opcode::I32Add,
                    operands: vec![
                        rewrite(base, target),
                        Instr::Const(Literal::I32(LANES as i32)),
                    ],
                };
            }
            Ok([lhs, rhs]) => Instr::Op {
                op: Opcode::I32Add,
                operands: vec![lhs, rhs],
            },
            Err(operands) => Instr::Op {
                op: Opcode::I32Add,
                operands,
            },
        },
        other => other,
    };

    let node = node.map_subtrees(&mut |child| rewrite(child, target));

    match node {
        Instr::Mem {
            op,
            memarg,
            operands,
        } => match vector_memory_op(op, target) {
            Some(vector_op) => Instr::Mem {
                op: vector_op,
                memarg: promote_alignment(memarg),
                operands,
            },
            None => Instr::Mem {
                op,
                memarg,
                operands,
            },
        },
        Instr::Op { op, operands } => match map_op(op, target) {
            Some(mapped) => Instr::Op {
                op: mapped,
                operands,
            },
            None => Instr::Op { op, operands },
        },
        Instr::Const(literal) if splats(literal, target) => Instr::Op {
            op: splat_op(target),
            operands: vec![Instr::Const(literal)],
        },
        other => other,
    }
}

/// The `v128` counterpart of a mapped scalar operation, if any.
///
/// In `f32` mode, `i32` arithmetic is pointer math and passes through
/// untouched (its subtrees are still walked).
fn map_op(op: Opcode, target: VectorTarget) -> Option<Opcode> {
    match target {
        VectorTarget::I32 => match op {
            Opcode::I32Add => Some(Opcode::I32x4Add),
            Opcode::I32Sub => Some(Opcode::I32x4Sub),
            Opcode::I32Mul => Some(Opcode::I32x4Mul),
            Opcode::I32And => Some(Opcode::V128And),
            Opcode::I32Or => Some(Opcode::V128Or),
            Opcode::I32Xor => Some(Opcode::V128Xor),
            _ => None,
        },
        VectorTarget::F32 => match op {
            Opcode::F32Add => Some(Opcode::F32x4Add),
            Opcode::F32Sub => Some(Opcode::F32x4Sub),
            Opcode::F32Mul => Some(Opcode::F32x4Mul),
            Opcode::F32Div => Some(Opcode::F32x4Div),
            Opcode::F32Min => Some(Opcode::F32x4Min),
            Opcode::F32Max => Some(Opcode::F32x4Max),
            _ => None,
        },
    }
}

fn vector_memory_op(op: Opcode, target: VectorTarget) -> Option<Opcode> {
    match (target, op) {
        (VectorTarget::I32, Opcode::I32Load) | (VectorTarget::F32, Opcode::F32Load) => {
            Some(Opcode::V128Load)
        }
        (VectorTarget::I32, Opcode::I32Store) | (VectorTarget::F32, Opcode::F32Store) => {
            Some(Opcode::V128Store)
        }
        _ => None,
    }
}

/// A byte-aligned scalar access stays packed; anything wider promotes to the
/// full 16-byte alignment of the vector access.
fn promote_alignment(memarg: MemArg) -> MemArg {
    MemArg {
        offset: memarg.offset,
        align: if memarg.align <= 1 { 1 } else { 16 },
    }
}

fn splats(literal: Literal, target: VectorTarget) -> bool {
    matches!(
        (target, literal),
        (VectorTarget::I32, Literal::I32(_)) | (VectorTarget::F32, Literal::F32(_))
    )
}

fn splat_op(target: VectorTarget) -> Opcode {
    match target {
        VectorTarget::I32 => Opcode::I32x4Splat,
        VectorTarget::F32 => Opcode::F32x4Splat,
    }
}
