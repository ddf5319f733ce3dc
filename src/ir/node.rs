use crate::isa::{MemArg, Opcode};
use crate::types::{BlockType, ValType};

/// A numeric constant payload, carried by [`Instr::Const`].
#[derive(Clone, Copy, Debug)]
pub enum Literal {
    /// A 32-bit integer constant.
    I32(i32),
    /// A 64-bit integer constant.
    I64(i64),
    /// A 32-bit float constant.
    F32(f32),
    /// A 64-bit float constant.
    F64(f64),
}

impl Literal {
    /// The value type of this constant.
    pub const fn ty(self) -> ValType {
        match self {
            Self::I32(_) => ValType::I32,
            Self::I64(_) => ValType::I64,
            Self::F32(_) => ValType::F32,
            Self::F64(_) => ValType::F64,
        }
    }
}

// Float literals compare by bit pattern so that structural equality of nodes
// is total; the optimizer's fixed-point detection relies on it.
impl PartialEq for Literal {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::I32(a), Self::I32(b)) => a == b,
            (Self::I64(a), Self::I64(b)) => a == b,
            (Self::F32(a), Self::F32(b)) => a.to_bits() == b.to_bits(),
            (Self::F64(a), Self::F64(b)) => a.to_bits() == b.to_bits(),
            _ => false,
        }
    }
}

impl Eq for Literal {}

impl From<i32> for Literal {
    #[inline]
    fn from(value: i32) -> Self {
        Self::I32(value)
    }
}

impl From<i64> for Literal {
    #[inline]
    fn from(value: i64) -> Self {
        Self::I64(value)
    }
}

impl From<f32> for Literal {
    #[inline]
    fn from(value: f32) -> Self {
        Self::F32(value)
    }
}

impl From<f64> for Literal {
    #[inline]
    fn from(value: f64) -> Self {
        Self::F64(value)
    }
}

/// An instruction node.
///
/// Operand children are ordered left-to-right as they appear on the value
/// stack before the opcode. Names (locals, branch labels, call targets) are
/// symbolic; the emitter resolves them to indices, falling back to the
/// numeric value when a name is a bare non-negative integer.
#[derive(Clone, Debug, PartialEq)]
pub enum Instr {
    /// A `t.const` instruction for `t` ∈ {i32, i64, f32, f64}.
    Const(Literal),
    /// A `v128.const`, carrying its 16-byte little-endian literal.
    V128Const([u8; 16]),
    /// Any operation without immediates: numeric, SIMD, parametric.
    ///
    /// This is the umbrella for plain binary and unary operations; the
    /// concrete operation lives in `op`.
    Op {
        /// The operation.
        op: Opcode,
        /// The operand subtrees.
        operands: Vec<Instr>,
    },
    /// A memory or atomic access carrying a [`MemArg`] immediate.
    Mem {
        /// The operation.
        op: Opcode,
        /// The `(align, offset)` immediate.
        memarg: MemArg,
        /// Address first, then the value operands the operation takes.
        operands: Vec<Instr>,
    },
    /// A SIMD `extract_lane`/`replace_lane` carrying its lane index.
    Lane {
        /// The operation.
        op: Opcode,
        /// The lane immediate.
        lane: u8,
        /// The vector, then the replacement value when replacing.
        operands: Vec<Instr>,
    },
    /// A `block` structured instruction.
    Block {
        /// The branch label, possibly empty.
        label: String,
        /// The declared result type.
        ty: BlockType,
        /// The body, in order.
        body: Vec<Instr>,
    },
    /// A `loop` structured instruction. Branching to its label re-enters the
    /// loop from the top.
    Loop {
        /// The branch label, possibly empty.
        label: String,
        /// The declared result type.
        ty: BlockType,
        /// The body, in order.
        body: Vec<Instr>,
    },
    /// An `if`/`else` structured instruction.
    If {
        /// The branch label, possibly empty.
        label: String,
        /// The declared result type.
        ty: BlockType,
        /// The condition, placed on the stack before the `if` opcode.
        condition: Box<Instr>,
        /// The then-arm body; may be empty.
        consequent: Vec<Instr>,
        /// The else-arm body; an empty body omits the `else` marker.
        alternate: Vec<Instr>,
    },
    /// An unconditional branch to a label.
    Br {
        /// The target label or relative depth.
        target: String,
    },
    /// A conditional branch to a label.
    BrIf {
        /// The target label or relative depth.
        target: String,
        /// The branch condition.
        condition: Box<Instr>,
    },
    /// A `br_table` indexed branch.
    BrTable {
        /// The branch targets selected by the index operand.
        targets: Vec<String>,
        /// The target taken when the index is out of range.
        default: String,
        /// The index operand.
        index: Box<Instr>,
    },
    /// Reads a param or local.
    LocalGet {
        /// The param or local name, or a bare index.
        local: String,
    },
    /// Writes a param or local.
    LocalSet {
        /// The param or local name, or a bare index.
        local: String,
        /// The value to store.
        value: Box<Instr>,
    },
    /// Writes a param or local, leaving the value on the stack.
    LocalTee {
        /// The param or local name, or a bare index.
        local: String,
        /// The value to store.
        value: Box<Instr>,
    },
    /// Reads a global.
    GlobalGet {
        /// The global's import field name, or a bare index.
        global: String,
    },
    /// Writes a global.
    GlobalSet {
        /// The global's import field name, or a bare index.
        global: String,
        /// The value to store.
        value: Box<Instr>,
    },
    /// A direct call.
    Call {
        /// The callee: a function name, import field name, or bare index.
        target: String,
        /// The arguments, in signature order.
        args: Vec<Instr>,
    },
    /// An indirect call through a table.
    CallIndirect {
        /// The index of the callee's signature in the type section.
        type_index: u32,
        /// The table holding the function references.
        table_index: u32,
        /// The arguments, then the table element index.
        operands: Vec<Instr>,
    },
    /// Returns from the enclosing function.
    Return {
        /// The returned values, if any.
        values: Vec<Instr>,
    },
    /// Discards a value.
    Drop {
        /// The discarded operand.
        value: Box<Instr>,
    },
    /// Chooses between two values without branching.
    Select {
        /// The two candidate values, then the i32 condition.
        operands: Vec<Instr>,
    },
    /// Traps unconditionally.
    Unreachable,
    /// Does nothing.
    Nop,
    /// Pushes the current size of the default memory, in pages.
    MemorySize,
    /// Grows the default memory, pushing the previous size or −1.
    MemoryGrow {
        /// The number of pages to grow by.
        delta: Box<Instr>,
    },
    /// Copies a passive data segment into memory.
    MemoryInit {
        /// The data segment index.
        data: u32,
        /// Destination address, source offset, length.
        operands: Vec<Instr>,
    },
    /// Discards a passive data segment.
    DataDrop {
        /// The data segment index.
        data: u32,
    },
    /// Copies a memory region, handling overlap.
    MemoryCopy {
        /// Destination address, source address, length.
        operands: Vec<Instr>,
    },
    /// Fills a memory region with a byte value.
    MemoryFill {
        /// Destination address, fill value, length.
        operands: Vec<Instr>,
    },
    /// An `atomic.fence`, ordering preceding and following accesses.
    AtomicFence,
}

impl Instr {
    /// The direct child subtrees of this node, in operand order.
    ///
    /// For `if` this is the condition followed by both arms; for structured
    /// instructions, the body.
    pub fn children(&self) -> Vec<&Instr> {
        match self {
            Self::Const(_)
            | Self::V128Const(_)
            | Self::Br { .. }
            | Self::LocalGet { .. }
            | Self::GlobalGet { .. }
            | Self::Unreachable
            | Self::Nop
            | Self::MemorySize
            | Self::DataDrop { .. }
            | Self::AtomicFence => Vec::new(),
            Self::Op { operands, .. }
            | Self::Mem { operands, .. }
            | Self::Lane { operands, .. }
            | Self::CallIndirect { operands, .. }
            | Self::Select { operands }
            | Self::MemoryInit { operands, .. }
            | Self::MemoryCopy { operands }
            | Self::MemoryFill { operands } => operands.iter().collect(),
            Self::Block { body, .. } | Self::Loop { body, .. } => body.iter().collect(),
            Self::If {
                condition,
                consequent,
                alternate,
                ..
            } => core::iter::once(condition.as_ref())
                .chain(consequent)
                .chain(alternate)
                .collect(),
            Self::BrIf { condition, .. } => vec![condition.as_ref()],
            Self::BrTable { index, .. } => vec![index.as_ref()],
            Self::LocalSet { value, .. }
            | Self::LocalTee { value, .. }
            | Self::GlobalSet { value, .. } => vec![value.as_ref()],
            Self::Call { args, .. } => args.iter().collect(),
            Self::Return { values } => values.iter().collect(),
            Self::Drop { value } => vec![value.as_ref()],
            Self::MemoryGrow { delta } => vec![delta.as_ref()],
        }
    }

    /// Rebuilds this node, applying `f` to each direct child subtree.
    ///
    /// Bottom-up passes are written against this: recurse through
    /// `map_subtrees`, then apply the local rewrite to the rebuilt node.
    pub(crate) fn map_subtrees(self, f: &mut impl FnMut(Instr) -> Instr) -> Instr {
        fn each(children: Vec<Instr>, f: &mut impl FnMut(Instr) -> Instr) -> Vec<Instr> {
            children.into_iter().map(|child| f(child)).collect()
        }

        match self {
            Self::Const(_)
            | Self::V128Const(_)
            | Self::Br { .. }
            | Self::LocalGet { .. }
            | Self::GlobalGet { .. }
            | Self::Unreachable
            | Self::Nop
            | Self::MemorySize
            | Self::DataDrop { .. }
            | Self::AtomicFence => self,
            Self::Op { op, operands } => Self::Op {
                op,
                operands: each(operands, f),
            },
            Self::Mem {
                op,
                memarg,
                operands,
            } => Self::Mem {
                op,
                memarg,
                operands: each(operands, f),
            },
            Self::Lane { op, lane, operands } => Self::Lane {
                op,
                lane,
                operands: each(operands, f),
            },
            Self::Block { label, ty, body } => Self::Block {
                label,
                ty,
                body: each(body, f),
            },
            Self::Loop { label, ty, body } => Self::Loop {
                label,
                ty,
                body: each(body, f),
            },
            Self::If {
                label,
                ty,
                condition,
                consequent,
                alternate,
            } => Self::If {
                label,
                ty,
                condition: Box::new(f(*condition)),
                consequent: each(consequent, f),
                alternate: each(alternate, f),
            },
            Self::BrIf { target, condition } => Self::BrIf {
                target,
                condition: Box::new(f(*condition)),
            },
            Self::BrTable {
                targets,
                default,
                index,
            } => Self::BrTable {
                targets,
                default,
                index: Box::new(f(*index)),
            },
            Self::LocalSet { local, value } => Self::LocalSet {
                local,
                value: Box::new(f(*value)),
            },
            Self::LocalTee { local, value } => Self::LocalTee {
                local,
                value: Box::new(f(*value)),
            },
            Self::GlobalSet { global, value } => Self::GlobalSet {
                global,
                value: Box::new(f(*value)),
            },
            Self::Call { target, args } => Self::Call {
                target,
                args: each(args, f),
            },
            Self::CallIndirect {
                type_index,
                table_index,
                operands,
            } => Self::CallIndirect {
                type_index,
                table_index,
                operands: each(operands, f),
            },
            Self::Return { values } => Self::Return {
                values: each(values, f),
            },
            Self::Drop { value } => Self::Drop {
                value: Box::new(f(*value)),
            },
            Self::Select { operands } => Self::Select {
                operands: each(operands, f),
            },
            Self::MemoryGrow { delta } => Self::MemoryGrow {
                delta: Box::new(f(*delta)),
            },
            Self::MemoryInit { data, operands } => Self::MemoryInit {
                data,
                operands: each(operands, f),
            },
            Self::MemoryCopy { operands } => Self::MemoryCopy {
                operands: each(operands, f),
            },
            Self::MemoryFill { operands } => Self::MemoryFill {
                operands: each(operands, f),
            },
        }
    }
}
