//! Constructor functions for every instruction family.
//!
//! Each constructor returns a node that, when walked by the emitter, yields
//! the exact byte sequence of the corresponding instruction with the given
//! operands and immediates. Memory operations default to an `offset` of 0 and
//! the natural alignment of the access width; both can be adjusted with
//! [`Instr::with_offset`] and [`Instr::with_align`].

use crate::ir::{Instr, Literal};
use crate::isa::{MemArg, Opcode};
use crate::types::BlockType;

macro_rules! binary_ops {
    ($(
        $wasm_name:literal $name:ident => $op:ident;
    )*) => {$(
        #[doc = concat!("Builds a `", $wasm_name, "` applied to `lhs` and `rhs`.")]
        pub fn $name(lhs: Instr, rhs: Instr) -> Instr {
            Instr::Op {
                op: Opcode::$op,
                operands: vec![lhs, rhs],
            }
        }
    )*};
}

macro_rules! unary_ops {
    ($(
        $wasm_name:literal $name:ident => $op:ident;
    )*) => {$(
        #[doc = concat!("Builds a `", $wasm_name, "` applied to `value`.")]
        pub fn $name(value: Instr) -> Instr {
            Instr::Op {
                op: Opcode::$op,
                operands: vec![value],
            }
        }
    )*};
}

macro_rules! load_ops {
    ($(
        $wasm_name:literal $name:ident => $op:ident / $width:literal;
    )*) => {$(
        #[doc = concat!("Builds a `", $wasm_name, "` from the address `addr`, ")]
        #[doc = concat!("offset 0, natural alignment ", stringify!($width), ".")]
        pub fn $name(addr: Instr) -> Instr {
            Instr::Mem {
                op: Opcode::$op,
                memarg: MemArg::natural($width),
                operands: vec![addr],
            }
        }
    )*};
}

macro_rules! store_ops {
    ($(
        $wasm_name:literal $name:ident => $op:ident / $width:literal;
    )*) => {$(
        #[doc = concat!("Builds a `", $wasm_name, "` of `value` to the address `addr`, ")]
        #[doc = concat!("offset 0, natural alignment ", stringify!($width), ".")]
        pub fn $name(addr: Instr, value: Instr) -> Instr {
            Instr::Mem {
                op: Opcode::$op,
                memarg: MemArg::natural($width),
                operands: vec![addr, value],
            }
        }
    )*};
}

macro_rules! atomic_wait_ops {
    ($(
        $wasm_name:literal $name:ident => $op:ident / $width:literal;
    )*) => {$(
        #[doc = concat!("Builds a `", $wasm_name, "` on the address `addr`.")]
        pub fn $name(addr: Instr, expected: Instr, timeout: Instr) -> Instr {
            Instr::Mem {
                op: Opcode::$op,
                memarg: MemArg::natural($width),
                operands: vec![addr, expected, timeout],
            }
        }
    )*};
}

macro_rules! atomic_cmpxchg_ops {
    ($(
        $wasm_name:literal $name:ident => $op:ident / $width:literal;
    )*) => {$(
        #[doc = concat!("Builds a `", $wasm_name, "` on the address `addr`.")]
        pub fn $name(addr: Instr, expected: Instr, replacement: Instr) -> Instr {
            Instr::Mem {
                op: Opcode::$op,
                memarg: MemArg::natural($width),
                operands: vec![addr, expected, replacement],
            }
        }
    )*};
}

macro_rules! extract_lane_ops {
    ($(
        $wasm_name:literal $name:ident => $op:ident;
    )*) => {$(
        #[doc = concat!("Builds a `", $wasm_name, "` reading lane `lane` of `vector`.")]
        pub fn $name(vector: Instr, lane: u8) -> Instr {
            Instr::Lane {
                op: Opcode::$op,
                lane,
                operands: vec![vector],
            }
        }
    )*};
}

macro_rules! replace_lane_ops {
    ($(
        $wasm_name:literal $name:ident => $op:ident;
    )*) => {$(
        #[doc = concat!("Builds a `", $wasm_name, "` writing `value` into lane `lane` of `vector`.")]
        pub fn $name(vector: Instr, value: Instr, lane: u8) -> Instr {
            Instr::Lane {
                op: Opcode::$op,
                lane,
                operands: vec![vector, value],
            }
        }
    )*};
}

impl Instr {
    /// Builds an `i32.const`.
    pub fn i32_const(value: i32) -> Self {
        Self::Const(Literal::I32(value))
    }

    /// Builds an `i64.const`.
    pub fn i64_const(value: i64) -> Self {
        Self::Const(Literal::I64(value))
    }

    /// Builds an `f32.const`.
    pub fn f32_const(value: f32) -> Self {
        Self::Const(Literal::F32(value))
    }

    /// Builds an `f64.const`.
    pub fn f64_const(value: f64) -> Self {
        Self::Const(Literal::F64(value))
    }

    /// Builds a `v128.const` from its 16-byte little-endian literal.
    pub fn v128_const(bytes: [u8; 16]) -> Self {
        Self::V128Const(bytes)
    }

    /// Builds a `block` with an empty result type.
    pub fn block(label: impl Into<String>, body: Vec<Instr>) -> Self {
        Self::Block {
            label: label.into(),
            ty: BlockType::Empty,
            body,
        }
    }

    /// Builds a `block` with the given result type.
    pub fn block_valued(label: impl Into<String>, ty: BlockType, body: Vec<Instr>) -> Self {
        Self::Block {
            label: label.into(),
            ty,
            body,
        }
    }

    /// Builds a `loop` with an empty result type.
    pub fn loop_(label: impl Into<String>, body: Vec<Instr>) -> Self {
        Self::Loop {
            label: label.into(),
            ty: BlockType::Empty,
            body,
        }
    }

    /// Builds an `if` with no else arm and an empty result type.
    pub fn if_(condition: Instr, consequent: Vec<Instr>) -> Self {
        Self::If {
            label: String::new(),
            ty: BlockType::Empty,
            condition: Box::new(condition),
            consequent,
            alternate: Vec::new(),
        }
    }

    /// Builds an `if`/`else` with an empty result type.
    pub fn if_else(condition: Instr, consequent: Vec<Instr>, alternate: Vec<Instr>) -> Self {
        Self::If {
            label: String::new(),
            ty: BlockType::Empty,
            condition: Box::new(condition),
            consequent,
            alternate,
        }
    }

    /// Builds a `br` to the given label or relative depth.
    pub fn br(target: impl Into<String>) -> Self {
        Self::Br {
            target: target.into(),
        }
    }

    /// Builds a `br_if` to the given label or relative depth.
    pub fn br_if(target: impl Into<String>, condition: Instr) -> Self {
        Self::BrIf {
            target: target.into(),
            condition: Box::new(condition),
        }
    }

    /// Builds a `br_table` over the given targets.
    pub fn br_table(targets: Vec<String>, default: impl Into<String>, index: Instr) -> Self {
        Self::BrTable {
            targets,
            default: default.into(),
            index: Box::new(index),
        }
    }

    /// Builds a `local.get`.
    pub fn local_get(local: impl Into<String>) -> Self {
        Self::LocalGet {
            local: local.into(),
        }
    }

    /// Builds a `local.set`.
    pub fn local_set(local: impl Into<String>, value: Instr) -> Self {
        Self::LocalSet {
            local: local.into(),
            value: Box::new(value),
        }
    }

    /// Builds a `local.tee`.
    pub fn local_tee(local: impl Into<String>, value: Instr) -> Self {
        Self::LocalTee {
            local: local.into(),
            value: Box::new(value),
        }
    }

    /// Builds a `global.get`.
    pub fn global_get(global: impl Into<String>) -> Self {
        Self::GlobalGet {
            global: global.into(),
        }
    }

    /// Builds a `global.set`.
    pub fn global_set(global: impl Into<String>, value: Instr) -> Self {
        Self::GlobalSet {
            global: global.into(),
            value: Box::new(value),
        }
    }

    /// Builds a `call` of the named function.
    pub fn call(target: impl Into<String>, args: Vec<Instr>) -> Self {
        Self::Call {
            target: target.into(),
            args,
        }
    }

    /// Builds a `call_indirect` through table `table_index` with the
    /// signature at `type_index`; the table element index is the last
    /// operand.
    pub fn call_indirect(type_index: u32, table_index: u32, operands: Vec<Instr>) -> Self {
        Self::CallIndirect {
            type_index,
            table_index,
            operands,
        }
    }

    /// Builds a `return`.
    pub fn ret(values: Vec<Instr>) -> Self {
        Self::Return { values }
    }

    /// Builds a `drop`.
    pub fn drop_(value: Instr) -> Self {
        Self::Drop {
            value: Box::new(value),
        }
    }

    /// Builds a `select` choosing between `a` and `b` by `condition`.
    pub fn select(a: Instr, b: Instr, condition: Instr) -> Self {
        Self::Select {
            operands: vec![a, b, condition],
        }
    }

    /// Builds an `unreachable`.
    pub fn unreachable() -> Self {
        Self::Unreachable
    }

    /// Builds a `nop`.
    pub fn nop() -> Self {
        Self::Nop
    }

    /// Builds a `memory.size`.
    pub fn memory_size() -> Self {
        Self::MemorySize
    }

    /// Builds a `memory.grow`.
    pub fn memory_grow(delta: Instr) -> Self {
        Self::MemoryGrow {
            delta: Box::new(delta),
        }
    }

    /// Builds a `memory.init` from data segment `data`.
    pub fn memory_init(data: u32, dest: Instr, src: Instr, len: Instr) -> Self {
        Self::MemoryInit {
            data,
            operands: vec![dest, src, len],
        }
    }

    /// Builds a `data.drop` discarding data segment `data`.
    pub fn data_drop(data: u32) -> Self {
        Self::DataDrop { data }
    }

    /// Builds a `memory.copy`.
    pub fn memory_copy(dest: Instr, src: Instr, len: Instr) -> Self {
        Self::MemoryCopy {
            operands: vec![dest, src, len],
        }
    }

    /// Builds a `memory.fill`.
    pub fn memory_fill(dest: Instr, value: Instr, len: Instr) -> Self {
        Self::MemoryFill {
            operands: vec![dest, value, len],
        }
    }

    /// Builds an `atomic.fence`.
    pub fn atomic_fence() -> Self {
        Self::AtomicFence
    }

    /// Builds a `v128.bitselect` of `a` and `b` under `mask`.
    pub fn v128_bitselect(a: Instr, b: Instr, mask: Instr) -> Self {
        Self::Op {
            op: Opcode::V128Bitselect,
            operands: vec![a, b, mask],
        }
    }

    /// Replaces the offset of a memory or atomic access; other nodes are
    /// returned unchanged.
    #[must_use]
    pub fn with_offset(self, offset: u32) -> Self {
        match self {
            Self::Mem {
                op,
                mut memarg,
                operands,
            } => {
                memarg.offset = offset;
                Self::Mem {
                    op,
                    memarg,
                    operands,
                }
            }
            other => other,
        }
    }

    /// Replaces the alignment (a power-of-two byte count) of a memory or
    /// atomic access; other nodes are returned unchanged.
    #[must_use]
    pub fn with_align(self, align: u32) -> Self {
        match self {
            Self::Mem {
                op,
                mut memarg,
                operands,
            } => {
                memarg.align = align;
                Self::Mem {
                    op,
                    memarg,
                    operands,
                }
            }
            other => other,
        }
    }

    binary_ops! {
        "i32.add" i32_add => I32Add;
        "i32.sub" i32_sub => I32Sub;
        "i32.mul" i32_mul => I32Mul;
        "i32.div_s" i32_div_s => I32DivS;
        "i32.div_u" i32_div_u => I32DivU;
        "i32.rem_s" i32_rem_s => I32RemS;
        "i32.rem_u" i32_rem_u => I32RemU;
        "i32.and" i32_and => I32And;
        "i32.or" i32_or => I32Or;
        "i32.xor" i32_xor => I32Xor;
        "i32.shl" i32_shl => I32Shl;
        "i32.shr_s" i32_shr_s => I32ShrS;
        "i32.shr_u" i32_shr_u => I32ShrU;
        "i32.rotl" i32_rotl => I32Rotl;
        "i32.rotr" i32_rotr => I32Rotr;
        "i32.eq" i32_eq => I32Eq;
        "i32.ne" i32_ne => I32Ne;
        "i32.lt_s" i32_lt_s => I32LtS;
        "i32.lt_u" i32_lt_u => I32LtU;
        "i32.gt_s" i32_gt_s => I32GtS;
        "i32.gt_u" i32_gt_u => I32GtU;
        "i32.le_s" i32_le_s => I32LeS;
        "i32.le_u" i32_le_u => I32LeU;
        "i32.ge_s" i32_ge_s => I32GeS;
        "i32.ge_u" i32_ge_u => I32GeU;

        "i64.add" i64_add => I64Add;
        "i64.sub" i64_sub => I64Sub;
        "i64.mul" i64_mul => I64Mul;
        "i64.div_s" i64_div_s => I64DivS;
        "i64.div_u" i64_div_u => I64DivU;
        "i64.rem_s" i64_rem_s => I64RemS;
        "i64.rem_u" i64_rem_u => I64RemU;
        "i64.and" i64_and => I64And;
        "i64.or" i64_or => I64Or;
        "i64.xor" i64_xor => I64Xor;
        "i64.shl" i64_shl => I64Shl;
        "i64.shr_s" i64_shr_s => I64ShrS;
        "i64.shr_u" i64_shr_u => I64ShrU;
        "i64.rotl" i64_rotl => I64Rotl;
        "i64.rotr" i64_rotr => I64Rotr;
        "i64.eq" i64_eq => I64Eq;
        "i64.ne" i64_ne => I64Ne;
        "i64.lt_s" i64_lt_s => I64LtS;
        "i64.lt_u" i64_lt_u => I64LtU;
        "i64.gt_s" i64_gt_s => I64GtS;
        "i64.gt_u" i64_gt_u => I64GtU;
        "i64.le_s" i64_le_s => I64LeS;
        "i64.le_u" i64_le_u => I64LeU;
        "i64.ge_s" i64_ge_s => I64GeS;
        "i64.ge_u" i64_ge_u => I64GeU;

        "f32.add" f32_add => F32Add;
        "f32.sub" f32_sub => F32Sub;
        "f32.mul" f32_mul => F32Mul;
        "f32.div" f32_div => F32Div;
        "f32.min" f32_min => F32Min;
        "f32.max" f32_max => F32Max;
        "f32.copysign" f32_copysign => F32Copysign;
        "f32.eq" f32_eq => F32Eq;
        "f32.ne" f32_ne => F32Ne;
        "f32.lt" f32_lt => F32Lt;
        "f32.gt" f32_gt => F32Gt;
        "f32.le" f32_le => F32Le;
        "f32.ge" f32_ge => F32Ge;

        "f64.add" f64_add => F64Add;
        "f64.sub" f64_sub => F64Sub;
        "f64.mul" f64_mul => F64Mul;
        "f64.div" f64_div => F64Div;
        "f64.min" f64_min => F64Min;
        "f64.max" f64_max => F64Max;
        "f64.copysign" f64_copysign => F64Copysign;
        "f64.eq" f64_eq => F64Eq;
        "f64.ne" f64_ne => F64Ne;
        "f64.lt" f64_lt => F64Lt;
        "f64.gt" f64_gt => F64Gt;
        "f64.le" f64_le => F64Le;
        "f64.ge" f64_ge => F64Ge;

        "i8x16.swizzle" i8x16_swizzle => I8x16Swizzle;
        "i8x16.eq" i8x16_eq => I8x16Eq;
        "i8x16.ne" i8x16_ne => I8x16Ne;
        "i8x16.lt_s" i8x16_lt_s => I8x16LtS;
        "i8x16.lt_u" i8x16_lt_u => I8x16LtU;
        "i8x16.gt_s" i8x16_gt_s => I8x16GtS;
        "i8x16.gt_u" i8x16_gt_u => I8x16GtU;
        "i8x16.le_s" i8x16_le_s => I8x16LeS;
        "i8x16.le_u" i8x16_le_u => I8x16LeU;
        "i8x16.ge_s" i8x16_ge_s => I8x16GeS;
        "i8x16.ge_u" i8x16_ge_u => I8x16GeU;
        "i8x16.narrow_i16x8_s" i8x16_narrow_i16x8_s => I8x16NarrowI16x8S;
        "i8x16.narrow_i16x8_u" i8x16_narrow_i16x8_u => I8x16NarrowI16x8U;
        "i8x16.shl" i8x16_shl => I8x16Shl;
        "i8x16.shr_s" i8x16_shr_s => I8x16ShrS;
        "i8x16.shr_u" i8x16_shr_u => I8x16ShrU;
        "i8x16.add" i8x16_add => I8x16Add;
        "i8x16.add_sat_s" i8x16_add_sat_s => I8x16AddSatS;
        "i8x16.add_sat_u" i8x16_add_sat_u => I8x16AddSatU;
        "i8x16.sub" i8x16_sub => I8x16Sub;
        "i8x16.sub_sat_s" i8x16_sub_sat_s => I8x16SubSatS;
        "i8x16.sub_sat_u" i8x16_sub_sat_u => I8x16SubSatU;
        "i8x16.min_s" i8x16_min_s => I8x16MinS;
        "i8x16.min_u" i8x16_min_u => I8x16MinU;
        "i8x16.max_s" i8x16_max_s => I8x16MaxS;
        "i8x16.max_u" i8x16_max_u => I8x16MaxU;
        "i8x16.avgr_u" i8x16_avgr_u => I8x16AvgrU;

        "i16x8.eq" i16x8_eq => I16x8Eq;
        "i16x8.ne" i16x8_ne => I16x8Ne;
        "i16x8.lt_s" i16x8_lt_s => I16x8LtS;
        "i16x8.lt_u" i16x8_lt_u => I16x8LtU;
        "i16x8.gt_s" i16x8_gt_s => I16x8GtS;
        "i16x8.gt_u" i16x8_gt_u => I16x8GtU;
        "i16x8.le_s" i16x8_le_s => I16x8LeS;
        "i16x8.le_u" i16x8_le_u => I16x8LeU;
        "i16x8.ge_s" i16x8_ge_s => I16x8GeS;
        "i16x8.ge_u" i16x8_ge_u => I16x8GeU;
        "i16x8.narrow_i32x4_s" i16x8_narrow_i32x4_s => I16x8NarrowI32x4S;
        "i16x8.narrow_i32x4_u" i16x8_narrow_i32x4_u => I16x8NarrowI32x4U;
        "i16x8.shl" i16x8_shl => I16x8Shl;
        "i16x8.shr_s" i16x8_shr_s => I16x8ShrS;
        "i16x8.shr_u" i16x8_shr_u => I16x8ShrU;
        "i16x8.add" i16x8_add => I16x8Add;
        "i16x8.add_sat_s" i16x8_add_sat_s => I16x8AddSatS;
        "i16x8.add_sat_u" i16x8_add_sat_u => I16x8AddSatU;
        "i16x8.sub" i16x8_sub => I16x8Sub;
        "i16x8.sub_sat_s" i16x8_sub_sat_s => I16x8SubSatS;
        "i16x8.sub_sat_u" i16x8_sub_sat_u => I16x8SubSatU;
        "i16x8.mul" i16x8_mul => I16x8Mul;
        "i16x8.min_s" i16x8_min_s => I16x8MinS;
        "i16x8.min_u" i16x8_min_u => I16x8MinU;
        "i16x8.max_s" i16x8_max_s => I16x8MaxS;
        "i16x8.max_u" i16x8_max_u => I16x8MaxU;
        "i16x8.avgr_u" i16x8_avgr_u => I16x8AvgrU;
        "i16x8.q15mulr_sat_s" i16x8_q15mulr_sat_s => I16x8Q15mulrSatS;
        "i16x8.extmul_low_i8x16_s" i16x8_extmul_low_i8x16_s => I16x8ExtmulLowI8x16S;
        "i16x8.extmul_high_i8x16_s" i16x8_extmul_high_i8x16_s => I16x8ExtmulHighI8x16S;
        "i16x8.extmul_low_i8x16_u" i16x8_extmul_low_i8x16_u => I16x8ExtmulLowI8x16U;
        "i16x8.extmul_high_i8x16_u" i16x8_extmul_high_i8x16_u => I16x8ExtmulHighI8x16U;

        "i32x4.eq" i32x4_eq => I32x4Eq;
        "i32x4.ne" i32x4_ne => I32x4Ne;
        "i32x4.lt_s" i32x4_lt_s => I32x4LtS;
        "i32x4.lt_u" i32x4_lt_u => I32x4LtU;
        "i32x4.gt_s" i32x4_gt_s => I32x4GtS;
        "i32x4.gt_u" i32x4_gt_u => I32x4GtU;
        "i32x4.le_s" i32x4_le_s => I32x4LeS;
        "i32x4.le_u" i32x4_le_u => I32x4LeU;
        "i32x4.ge_s" i32x4_ge_s => I32x4GeS;
        "i32x4.ge_u" i32x4_ge_u => I32x4GeU;
        "i32x4.shl" i32x4_shl => I32x4Shl;
        "i32x4.shr_s" i32x4_shr_s => I32x4ShrS;
        "i32x4.shr_u" i32x4_shr_u => I32x4ShrU;
        "i32x4.add" i32x4_add => I32x4Add;
        "i32x4.sub" i32x4_sub => I32x4Sub;
        "i32x4.mul" i32x4_mul => I32x4Mul;
        "i32x4.min_s" i32x4_min_s => I32x4MinS;
        "i32x4.min_u" i32x4_min_u => I32x4MinU;
        "i32x4.max_s" i32x4_max_s => I32x4MaxS;
        "i32x4.max_u" i32x4_max_u => I32x4MaxU;
        "i32x4.dot_i16x8_s" i32x4_dot_i16x8_s => I32x4DotI16x8S;
        "i32x4.extmul_low_i16x8_s" i32x4_extmul_low_i16x8_s => I32x4ExtmulLowI16x8S;
        "i32x4.extmul_high_i16x8_s" i32x4_extmul_high_i16x8_s => I32x4ExtmulHighI16x8S;
        "i32x4.extmul_low_i16x8_u" i32x4_extmul_low_i16x8_u => I32x4ExtmulLowI16x8U;
        "i32x4.extmul_high_i16x8_u" i32x4_extmul_high_i16x8_u => I32x4ExtmulHighI16x8U;

        "i64x2.eq" i64x2_eq => I64x2Eq;
        "i64x2.ne" i64x2_ne => I64x2Ne;
        "i64x2.lt_s" i64x2_lt_s => I64x2LtS;
        "i64x2.gt_s" i64x2_gt_s => I64x2GtS;
        "i64x2.le_s" i64x2_le_s => I64x2LeS;
        "i64x2.ge_s" i64x2_ge_s => I64x2GeS;
        "i64x2.shl" i64x2_shl => I64x2Shl;
        "i64x2.shr_s" i64x2_shr_s => I64x2ShrS;
        "i64x2.shr_u" i64x2_shr_u => I64x2ShrU;
        "i64x2.add" i64x2_add => I64x2Add;
        "i64x2.sub" i64x2_sub => I64x2Sub;
        "i64x2.mul" i64x2_mul => I64x2Mul;
        "i64x2.extmul_low_i32x4_s" i64x2_extmul_low_i32x4_s => I64x2ExtmulLowI32x4S;
        "i64x2.extmul_high_i32x4_s" i64x2_extmul_high_i32x4_s => I64x2ExtmulHighI32x4S;
        "i64x2.extmul_low_i32x4_u" i64x2_extmul_low_i32x4_u => I64x2ExtmulLowI32x4U;
        "i64x2.extmul_high_i32x4_u" i64x2_extmul_high_i32x4_u => I64x2ExtmulHighI32x4U;

        "f32x4.eq" f32x4_eq => F32x4Eq;
        "f32x4.ne" f32x4_ne => F32x4Ne;
        "f32x4.lt" f32x4_lt => F32x4Lt;
        "f32x4.gt" f32x4_gt => F32x4Gt;
        "f32x4.le" f32x4_le => F32x4Le;
        "f32x4.ge" f32x4_ge => F32x4Ge;
        "f32x4.add" f32x4_add => F32x4Add;
        "f32x4.sub" f32x4_sub => F32x4Sub;
        "f32x4.mul" f32x4_mul => F32x4Mul;
        "f32x4.div" f32x4_div => F32x4Div;
        "f32x4.min" f32x4_min => F32x4Min;
        "f32x4.max" f32x4_max => F32x4Max;
        "f32x4.pmin" f32x4_pmin => F32x4Pmin;
        "f32x4.pmax" f32x4_pmax => F32x4Pmax;

        "f64x2.eq" f64x2_eq => F64x2Eq;
        "f64x2.ne" f64x2_ne => F64x2Ne;
        "f64x2.lt" f64x2_lt => F64x2Lt;
        "f64x2.gt" f64x2_gt => F64x2Gt;
        "f64x2.le" f64x2_le => F64x2Le;
        "f64x2.ge" f64x2_ge => F64x2Ge;
        "f64x2.add" f64x2_add => F64x2Add;
        "f64x2.sub" f64x2_sub => F64x2Sub;
        "f64x2.mul" f64x2_mul => F64x2Mul;
        "f64x2.div" f64x2_div => F64x2Div;
        "f64x2.min" f64x2_min => F64x2Min;
        "f64x2.max" f64x2_max => F64x2Max;
        "f64x2.pmin" f64x2_pmin => F64x2Pmin;
        "f64x2.pmax" f64x2_pmax => F64x2Pmax;

        "v128.and" v128_and => V128And;
        "v128.andnot" v128_andnot => V128AndNot;
        "v128.or" v128_or => V128Or;
        "v128.xor" v128_xor => V128Xor;
    }

    unary_ops! {
        "i32.clz" i32_clz => I32Clz;
        "i32.ctz" i32_ctz => I32Ctz;
        "i32.popcnt" i32_popcnt => I32Popcnt;
        "i32.eqz" i32_eqz => I32Eqz;
        "i32.extend8_s" i32_extend8_s => I32Extend8S;
        "i32.extend16_s" i32_extend16_s => I32Extend16S;
        "i32.wrap_i64" i32_wrap_i64 => I32WrapI64;
        "i32.trunc_f32_s" i32_trunc_f32_s => I32TruncF32S;
        "i32.trunc_f32_u" i32_trunc_f32_u => I32TruncF32U;
        "i32.trunc_f64_s" i32_trunc_f64_s => I32TruncF64S;
        "i32.trunc_f64_u" i32_trunc_f64_u => I32TruncF64U;
        "i32.trunc_sat_f32_s" i32_trunc_sat_f32_s => I32TruncSatF32S;
        "i32.trunc_sat_f32_u" i32_trunc_sat_f32_u => I32TruncSatF32U;
        "i32.trunc_sat_f64_s" i32_trunc_sat_f64_s => I32TruncSatF64S;
        "i32.trunc_sat_f64_u" i32_trunc_sat_f64_u => I32TruncSatF64U;
        "i32.reinterpret_f32" i32_reinterpret_f32 => I32ReinterpretF32;

        "i64.clz" i64_clz => I64Clz;
        "i64.ctz" i64_ctz => I64Ctz;
        "i64.popcnt" i64_popcnt => I64Popcnt;
        "i64.eqz" i64_eqz => I64Eqz;
        "i64.extend8_s" i64_extend8_s => I64Extend8S;
        "i64.extend16_s" i64_extend16_s => I64Extend16S;
        "i64.extend32_s" i64_extend32_s => I64Extend32S;
        "i64.extend_i32_s" i64_extend_i32_s => I64ExtendI32S;
        "i64.extend_i32_u" i64_extend_i32_u => I64ExtendI32U;
        "i64.trunc_f32_s" i64_trunc_f32_s => I64TruncF32S;
        "i64.trunc_f32_u" i64_trunc_f32_u => I64TruncF32U;
        "i64.trunc_f64_s" i64_trunc_f64_s => I64TruncF64S;
        "i64.trunc_f64_u" i64_trunc_f64_u => I64TruncF64U;
        "i64.trunc_sat_f32_s" i64_trunc_sat_f32_s => I64TruncSatF32S;
        "i64.trunc_sat_f32_u" i64_trunc_sat_f32_u => I64TruncSatF32U;
        "i64.trunc_sat_f64_s" i64_trunc_sat_f64_s => I64TruncSatF64S;
        "i64.trunc_sat_f64_u" i64_trunc_sat_f64_u => I64TruncSatF64U;
        "i64.reinterpret_f64" i64_reinterpret_f64 => I64ReinterpretF64;

        "f32.abs" f32_abs => F32Abs;
        "f32.neg" f32_neg => F32Neg;
        "f32.ceil" f32_ceil => F32Ceil;
        "f32.floor" f32_floor => F32Floor;
        "f32.trunc" f32_trunc => F32Trunc;
        "f32.nearest" f32_nearest => F32Nearest;
        "f32.sqrt" f32_sqrt => F32Sqrt;
        "f32.convert_i32_s" f32_convert_i32_s => F32ConvertI32S;
        "f32.convert_i32_u" f32_convert_i32_u => F32ConvertI32U;
        "f32.convert_i64_s" f32_convert_i64_s => F32ConvertI64S;
        "f32.convert_i64_u" f32_convert_i64_u => F32ConvertI64U;
        "f32.demote_f64" f32_demote_f64 => F32DemoteF64;
        "f32.reinterpret_i32" f32_reinterpret_i32 => F32ReinterpretI32;

        "f64.abs" f64_abs => F64Abs;
        "f64.neg" f64_neg => F64Neg;
        "f64.ceil" f64_ceil => F64Ceil;
        "f64.floor" f64_floor => F64Floor;
        "f64.trunc" f64_trunc => F64Trunc;
        "f64.nearest" f64_nearest => F64Nearest;
        "f64.sqrt" f64_sqrt => F64Sqrt;
        "f64.convert_i32_s" f64_convert_i32_s => F64ConvertI32S;
        "f64.convert_i32_u" f64_convert_i32_u => F64ConvertI32U;
        "f64.convert_i64_s" f64_convert_i64_s => F64ConvertI64S;
        "f64.convert_i64_u" f64_convert_i64_u => F64ConvertI64U;
        "f64.promote_f32" f64_promote_f32 => F64PromoteF32;
        "f64.reinterpret_i64" f64_reinterpret_i64 => F64ReinterpretI64;

        "i8x16.splat" i8x16_splat => I8x16Splat;
        "i16x8.splat" i16x8_splat => I16x8Splat;
        "i32x4.splat" i32x4_splat => I32x4Splat;
        "i64x2.splat" i64x2_splat => I64x2Splat;
        "f32x4.splat" f32x4_splat => F32x4Splat;
        "f64x2.splat" f64x2_splat => F64x2Splat;

        "v128.not" v128_not => V128Not;
        "v128.any_true" v128_any_true => V128AnyTrue;

        "i8x16.abs" i8x16_abs => I8x16Abs;
        "i8x16.neg" i8x16_neg => I8x16Neg;
        "i8x16.popcnt" i8x16_popcnt => I8x16Popcnt;
        "i8x16.all_true" i8x16_all_true => I8x16AllTrue;
        "i8x16.bitmask" i8x16_bitmask => I8x16Bitmask;

        "i16x8.abs" i16x8_abs => I16x8Abs;
        "i16x8.neg" i16x8_neg => I16x8Neg;
        "i16x8.all_true" i16x8_all_true => I16x8AllTrue;
        "i16x8.bitmask" i16x8_bitmask => I16x8Bitmask;
        "i16x8.extend_low_i8x16_s" i16x8_extend_low_i8x16_s => I16x8ExtendLowI8x16S;
        "i16x8.extend_high_i8x16_s" i16x8_extend_high_i8x16_s => I16x8ExtendHighI8x16S;
        "i16x8.extend_low_i8x16_u" i16x8_extend_low_i8x16_u => I16x8ExtendLowI8x16U;
        "i16x8.extend_high_i8x16_u" i16x8_extend_high_i8x16_u => I16x8ExtendHighI8x16U;
        "i16x8.extadd_pairwise_i8x16_s" i16x8_extadd_pairwise_i8x16_s => I16x8ExtaddPairwiseI8x16S;
        "i16x8.extadd_pairwise_i8x16_u" i16x8_extadd_pairwise_i8x16_u => I16x8ExtaddPairwiseI8x16U;

        "i32x4.abs" i32x4_abs => I32x4Abs;
        "i32x4.neg" i32x4_neg => I32x4Neg;
        "i32x4.all_true" i32x4_all_true => I32x4AllTrue;
        "i32x4.bitmask" i32x4_bitmask => I32x4Bitmask;
        "i32x4.extend_low_i16x8_s" i32x4_extend_low_i16x8_s => I32x4ExtendLowI16x8S;
        "i32x4.extend_high_i16x8_s" i32x4_extend_high_i16x8_s => I32x4ExtendHighI16x8S;
        "i32x4.extend_low_i16x8_u" i32x4_extend_low_i16x8_u => I32x4ExtendLowI16x8U;
        "i32x4.extend_high_i16x8_u" i32x4_extend_high_i16x8_u => I32x4ExtendHighI16x8U;
        "i32x4.extadd_pairwise_i16x8_s" i32x4_extadd_pairwise_i16x8_s => I32x4ExtaddPairwiseI16x8S;
        "i32x4.extadd_pairwise_i16x8_u" i32x4_extadd_pairwise_i16x8_u => I32x4ExtaddPairwiseI16x8U;
        "i32x4.trunc_sat_f32x4_s" i32x4_trunc_sat_f32x4_s => I32x4TruncSatF32x4S;
        "i32x4.trunc_sat_f32x4_u" i32x4_trunc_sat_f32x4_u => I32x4TruncSatF32x4U;
        "i32x4.trunc_sat_f64x2_s_zero" i32x4_trunc_sat_f64x2_s_zero => I32x4TruncSatF64x2SZero;
        "i32x4.trunc_sat_f64x2_u_zero" i32x4_trunc_sat_f64x2_u_zero => I32x4TruncSatF64x2UZero;

        "i64x2.abs" i64x2_abs => I64x2Abs;
        "i64x2.neg" i64x2_neg => I64x2Neg;
        "i64x2.all_true" i64x2_all_true => I64x2AllTrue;
        "i64x2.bitmask" i64x2_bitmask => I64x2Bitmask;
        "i64x2.extend_low_i32x4_s" i64x2_extend_low_i32x4_s => I64x2ExtendLowI32x4S;
        "i64x2.extend_high_i32x4_s" i64x2_extend_high_i32x4_s => I64x2ExtendHighI32x4S;
        "i64x2.extend_low_i32x4_u" i64x2_extend_low_i32x4_u => I64x2ExtendLowI32x4U;
        "i64x2.extend_high_i32x4_u" i64x2_extend_high_i32x4_u => I64x2ExtendHighI32x4U;

        "f32x4.abs" f32x4_abs => F32x4Abs;
        "f32x4.neg" f32x4_neg => F32x4Neg;
        "f32x4.sqrt" f32x4_sqrt => F32x4Sqrt;
        "f32x4.ceil" f32x4_ceil => F32x4Ceil;
        "f32x4.floor" f32x4_floor => F32x4Floor;
        "f32x4.trunc" f32x4_trunc => F32x4Trunc;
        "f32x4.nearest" f32x4_nearest => F32x4Nearest;
        "f32x4.convert_i32x4_s" f32x4_convert_i32x4_s => F32x4ConvertI32x4S;
        "f32x4.convert_i32x4_u" f32x4_convert_i32x4_u => F32x4ConvertI32x4U;
        "f32x4.demote_f64x2_zero" f32x4_demote_f64x2_zero => F32x4DemoteF64x2Zero;

        "f64x2.abs" f64x2_abs => F64x2Abs;
        "f64x2.neg" f64x2_neg => F64x2Neg;
        "f64x2.sqrt" f64x2_sqrt => F64x2Sqrt;
        "f64x2.ceil" f64x2_ceil => F64x2Ceil;
        "f64x2.floor" f64x2_floor => F64x2Floor;
        "f64x2.trunc" f64x2_trunc => F64x2Trunc;
        "f64x2.nearest" f64x2_nearest => F64x2Nearest;
        "f64x2.convert_low_i32x4_s" f64x2_convert_low_i32x4_s => F64x2ConvertLowI32x4S;
        "f64x2.convert_low_i32x4_u" f64x2_convert_low_i32x4_u => F64x2ConvertLowI32x4U;
        "f64x2.promote_low_f32x4" f64x2_promote_low_f32x4 => F64x2PromoteLowF32x4;
    }

    load_ops! {
        "i32.load" i32_load => I32Load / 4;
        "i64.load" i64_load => I64Load / 8;
        "f32.load" f32_load => F32Load / 4;
        "f64.load" f64_load => F64Load / 8;
        "i32.load8_s" i32_load8_s => I32Load8S / 1;
        "i32.load8_u" i32_load8_u => I32Load8U / 1;
        "i32.load16_s" i32_load16_s => I32Load16S / 2;
        "i32.load16_u" i32_load16_u => I32Load16U / 2;
        "i64.load8_s" i64_load8_s => I64Load8S / 1;
        "i64.load8_u" i64_load8_u => I64Load8U / 1;
        "i64.load16_s" i64_load16_s => I64Load16S / 2;
        "i64.load16_u" i64_load16_u => I64Load16U / 2;
        "i64.load32_s" i64_load32_s => I64Load32S / 4;
        "i64.load32_u" i64_load32_u => I64Load32U / 4;

        "v128.load" v128_load => V128Load / 16;
        "v128.load8x8_s" v128_load8x8_s => V128Load8x8S / 8;
        "v128.load8x8_u" v128_load8x8_u => V128Load8x8U / 8;
        "v128.load16x4_s" v128_load16x4_s => V128Load16x4S / 8;
        "v128.load16x4_u" v128_load16x4_u => V128Load16x4U / 8;
        "v128.load32x2_s" v128_load32x2_s => V128Load32x2S / 8;
        "v128.load32x2_u" v128_load32x2_u => V128Load32x2U / 8;
        "v128.load8_splat" v128_load8_splat => V128Load8Splat / 1;
        "v128.load16_splat" v128_load16_splat => V128Load16Splat / 2;
        "v128.load32_splat" v128_load32_splat => V128Load32Splat / 4;
        "v128.load64_splat" v128_load64_splat => V128Load64Splat / 8;
        "v128.load32_zero" v128_load32_zero => V128Load32Zero / 4;
        "v128.load64_zero" v128_load64_zero => V128Load64Zero / 8;

        "i32.atomic.load" i32_atomic_load => I32AtomicLoad / 4;
        "i64.atomic.load" i64_atomic_load => I64AtomicLoad / 8;
        "i32.atomic.load8_u" i32_atomic_load8_u => I32AtomicLoad8U / 1;
        "i32.atomic.load16_u" i32_atomic_load16_u => I32AtomicLoad16U / 2;
        "i64.atomic.load8_u" i64_atomic_load8_u => I64AtomicLoad8U / 1;
        "i64.atomic.load16_u" i64_atomic_load16_u => I64AtomicLoad16U / 2;
        "i64.atomic.load32_u" i64_atomic_load32_u => I64AtomicLoad32U / 4;
    }

    store_ops! {
        "i32.store" i32_store => I32Store / 4;
        "i64.store" i64_store => I64Store / 8;
        "f32.store" f32_store => F32Store / 4;
        "f64.store" f64_store => F64Store / 8;
        "i32.store8" i32_store8 => I32Store8 / 1;
        "i32.store16" i32_store16 => I32Store16 / 2;
        "i64.store8" i64_store8 => I64Store8 / 1;
        "i64.store16" i64_store16 => I64Store16 / 2;
        "i64.store32" i64_store32 => I64Store32 / 4;
        "v128.store" v128_store => V128Store / 16;

        "i32.atomic.store" i32_atomic_store => I32AtomicStore / 4;
        "i64.atomic.store" i64_atomic_store => I64AtomicStore / 8;
        "i32.atomic.store8" i32_atomic_store8 => I32AtomicStore8 / 1;
        "i32.atomic.store16" i32_atomic_store16 => I32AtomicStore16 / 2;
        "i64.atomic.store8" i64_atomic_store8 => I64AtomicStore8 / 1;
        "i64.atomic.store16" i64_atomic_store16 => I64AtomicStore16 / 2;
        "i64.atomic.store32" i64_atomic_store32 => I64AtomicStore32 / 4;

        "memory.atomic.notify" memory_atomic_notify => MemoryAtomicNotify / 4;

        "i32.atomic.rmw.add" i32_atomic_rmw_add => I32AtomicRmwAdd / 4;
        "i64.atomic.rmw.add" i64_atomic_rmw_add => I64AtomicRmwAdd / 8;
        "i32.atomic.rmw8.add_u" i32_atomic_rmw8_add_u => I32AtomicRmw8AddU / 1;
        "i32.atomic.rmw16.add_u" i32_atomic_rmw16_add_u => I32AtomicRmw16AddU / 2;
        "i64.atomic.rmw8.add_u" i64_atomic_rmw8_add_u => I64AtomicRmw8AddU / 1;
        "i64.atomic.rmw16.add_u" i64_atomic_rmw16_add_u => I64AtomicRmw16AddU / 2;
        "i64.atomic.rmw32.add_u" i64_atomic_rmw32_add_u => I64AtomicRmw32AddU / 4;

        "i32.atomic.rmw.sub" i32_atomic_rmw_sub => I32AtomicRmwSub / 4;
        "i64.atomic.rmw.sub" i64_atomic_rmw_sub => I64AtomicRmwSub / 8;
        "i32.atomic.rmw8.sub_u" i32_atomic_rmw8_sub_u => I32AtomicRmw8SubU / 1;
        "i32.atomic.rmw16.sub_u" i32_atomic_rmw16_sub_u => I32AtomicRmw16SubU / 2;
        "i64.atomic.rmw8.sub_u" i64_atomic_rmw8_sub_u => I64AtomicRmw8SubU / 1;
        "i64.atomic.rmw16.sub_u" i64_atomic_rmw16_sub_u => I64AtomicRmw16SubU / 2;
        "i64.atomic.rmw32.sub_u" i64_atomic_rmw32_sub_u => I64AtomicRmw32SubU / 4;

        "i32.atomic.rmw.and" i32_atomic_rmw_and => I32AtomicRmwAnd / 4;
        "i64.atomic.rmw.and" i64_atomic_rmw_and => I64AtomicRmwAnd / 8;
        "i32.atomic.rmw8.and_u" i32_atomic_rmw8_and_u => I32AtomicRmw8AndU / 1;
        "i32.atomic.rmw16.and_u" i32_atomic_rmw16_and_u => I32AtomicRmw16AndU / 2;
        "i64.atomic.rmw8.and_u" i64_atomic_rmw8_and_u => I64AtomicRmw8AndU / 1;
        "i64.atomic.rmw16.and_u" i64_atomic_rmw16_and_u => I64AtomicRmw16AndU / 2;
        "i64.atomic.rmw32.and_u" i64_atomic_rmw32_and_u => I64AtomicRmw32AndU / 4;

        "i32.atomic.rmw.or" i32_atomic_rmw_or => I32AtomicRmwOr / 4;
        "i64.atomic.rmw.or" i64_atomic_rmw_or => I64AtomicRmwOr / 8;
        "i32.atomic.rmw8.or_u" i32_atomic_rmw8_or_u => I32AtomicRmw8OrU / 1;
        "i32.atomic.rmw16.or_u" i32_atomic_rmw16_or_u => I32AtomicRmw16OrU / 2;
        "i64.atomic.rmw8.or_u" i64_atomic_rmw8_or_u => I64AtomicRmw8OrU / 1;
        "i64.atomic.rmw16.or_u" i64_atomic_rmw16_or_u => I64AtomicRmw16OrU / 2;
        "i64.atomic.rmw32.or_u" i64_atomic_rmw32_or_u => I64AtomicRmw32OrU / 4;

        "i32.atomic.rmw.xor" i32_atomic_rmw_xor => I32AtomicRmwXor / 4;
        "i64.atomic.rmw.xor" i64_atomic_rmw_xor => I64AtomicRmwXor / 8;
        "i32.atomic.rmw8.xor_u" i32_atomic_rmw8_xor_u => I32AtomicRmw8XorU / 1;
        "i32.atomic.rmw16.xor_u" i32_atomic_rmw16_xor_u => I32AtomicRmw16XorU / 2;
        "i64.atomic.rmw8.xor_u" i64_atomic_rmw8_xor_u => I64AtomicRmw8XorU / 1;
        "i64.atomic.rmw16.xor_u" i64_atomic_rmw16_xor_u => I64AtomicRmw16XorU / 2;
        "i64.atomic.rmw32.xor_u" i64_atomic_rmw32_xor_u => I64AtomicRmw32XorU / 4;

        "i32.atomic.rmw.xchg" i32_atomic_rmw_xchg => I32AtomicRmwXchg / 4;
        "i64.atomic.rmw.xchg" i64_atomic_rmw_xchg => I64AtomicRmwXchg / 8;
        "i32.atomic.rmw8.xchg_u" i32_atomic_rmw8_xchg_u => I32AtomicRmw8XchgU / 1;
        "i32.atomic.rmw16.xchg_u" i32_atomic_rmw16_xchg_u => I32AtomicRmw16XchgU / 2;
        "i64.atomic.rmw8.xchg_u" i64_atomic_rmw8_xchg_u => I64AtomicRmw8XchgU / 1;
        "i64.atomic.rmw16.xchg_u" i64_atomic_rmw16_xchg_u => I64AtomicRmw16XchgU / 2;
        "i64.atomic.rmw32.xchg_u" i64_atomic_rmw32_xchg_u => I64AtomicRmw32XchgU / 4;
    }

    atomic_wait_ops! {
        "memory.atomic.wait32" memory_atomic_wait32 => MemoryAtomicWait32 / 4;
        "memory.atomic.wait64" memory_atomic_wait64 => MemoryAtomicWait64 / 8;
    }

    atomic_cmpxchg_ops! {
        "i32.atomic.rmw.cmpxchg" i32_atomic_rmw_cmpxchg => I32AtomicRmwCmpxchg / 4;
        "i64.atomic.rmw.cmpxchg" i64_atomic_rmw_cmpxchg => I64AtomicRmwCmpxchg / 8;
        "i32.atomic.rmw8.cmpxchg_u" i32_atomic_rmw8_cmpxchg_u => I32AtomicRmw8CmpxchgU / 1;
        "i32.atomic.rmw16.cmpxchg_u" i32_atomic_rmw16_cmpxchg_u => I32AtomicRmw16CmpxchgU / 2;
        "i64.atomic.rmw8.cmpxchg_u" i64_atomic_rmw8_cmpxchg_u => I64AtomicRmw8CmpxchgU / 1;
        "i64.atomic.rmw16.cmpxchg_u" i64_atomic_rmw16_cmpxchg_u => I64AtomicRmw16CmpxchgU / 2;
        "i64.atomic.rmw32.cmpxchg_u" i64_atomic_rmw32_cmpxchg_u => I64AtomicRmw32CmpxchgU / 4;
    }

    extract_lane_ops! {
        "i8x16.extract_lane_s" i8x16_extract_lane_s => I8x16ExtractLaneS;
        "i8x16.extract_lane_u" i8x16_extract_lane_u => I8x16ExtractLaneU;
        "i16x8.extract_lane_s" i16x8_extract_lane_s => I16x8ExtractLaneS;
        "i16x8.extract_lane_u" i16x8_extract_lane_u => I16x8ExtractLaneU;
        "i32x4.extract_lane" i32x4_extract_lane => I32x4ExtractLane;
        "i64x2.extract_lane" i64x2_extract_lane => I64x2ExtractLane;
        "f32x4.extract_lane" f32x4_extract_lane => F32x4ExtractLane;
        "f64x2.extract_lane" f64x2_extract_lane => F64x2ExtractLane;
    }

    replace_lane_ops! {
        "i8x16.replace_lane" i8x16_replace_lane => I8x16ReplaceLane;
        "i16x8.replace_lane" i16x8_replace_lane => I16x8ReplaceLane;
        "i32x4.replace_lane" i32x4_replace_lane => I32x4ReplaceLane;
        "i64x2.replace_lane" i64x2_replace_lane => I64x2ReplaceLane;
        "f32x4.replace_lane" f32x4_replace_lane => F32x4ReplaceLane;
        "f64x2.replace_lane" f64x2_replace_lane => F64x2ReplaceLane;
    }
}
