use crate::emit::context::{FuncScope, ModuleLayout};
use crate::error::EmitError;
use crate::ir::{Instr, Literal};
use crate::isa::{Encoding, Opcode};
use crate::section::{ELSE, END};
use crate::values::Writer;

fn opcode(w: &mut Writer, op: Opcode) {
    match op.encoding() {
        Encoding::Byte(byte) => w.u8(byte),
        Encoding::Prefixed { prefix, code } => {
            w.u8(prefix);
            // The sub-code is a LEB128 integer, not a raw byte.
            w.u32(code);
        }
    }
}

/// Emits one node: operand children first, then the opcode, then any
/// operation-specific immediates.
pub(super) fn instr<'m>(
    w: &mut Writer,
    node: &'m Instr,
    layout: &ModuleLayout<'m>,
    scope: &mut FuncScope<'m>,
) -> Result<(), EmitError> {
    match node {
        Instr::Const(literal) => match literal {
            Literal::I32(value) => {
                opcode(w, Opcode::I32Const);
                w.s32(*value);
            }
            Literal::I64(value) => {
                opcode(w, Opcode::I64Const);
                w.s64(*value);
            }
            Literal::F32(value) => {
                opcode(w, Opcode::F32Const);
                w.f32(*value);
            }
            Literal::F64(value) => {
                opcode(w, Opcode::F64Const);
                w.f64(*value);
            }
        },
        Instr::V128Const(bytes) => {
            opcode(w, Opcode::V128Const);
            w.bytes(bytes);
        }
        Instr::Op { op, operands } => {
            each(w, operands, layout, scope)?;
            opcode(w, *op);
        }
        Instr::Mem {
            op,
            memarg,
            operands,
        } => {
            each(w, operands, layout, scope)?;
            opcode(w, *op);
            w.u32(memarg.align_log2());
            w.u32(memarg.offset);
        }
        Instr::Lane { op, lane, operands } => {
            each(w, operands, layout, scope)?;
            opcode(w, *op);
            w.u8(*lane);
        }
        Instr::Block { label, ty, body } => {
            opcode(w, Opcode::Block);
            w.u8(ty.to_byte());
            scope.push_label(label);
            let result = each(w, body, layout, scope);
            scope.pop_label();
            result?;
            w.u8(END);
        }
        Instr::Loop { label, ty, body } => {
            opcode(w, Opcode::Loop);
            w.u8(ty.to_byte());
            scope.push_label(label);
            let result = each(w, body, layout, scope);
            scope.pop_label();
            result?;
            w.u8(END);
        }
        Instr::If {
            label,
            ty,
            condition,
            consequent,
            alternate,
        } => {
            // The condition must be on the stack before the `if` opcode.
            instr(w, condition, layout, scope)?;
            opcode(w, Opcode::If);
            w.u8(ty.to_byte());
            scope.push_label(label);
            let mut result = each(w, consequent, layout, scope);
            if result.is_ok() && !alternate.is_empty() {
                w.u8(ELSE);
                result = each(w, alternate, layout, scope);
            }
            scope.pop_label();
            result?;
            w.u8(END);
        }
        Instr::Br { target } => {
            opcode(w, Opcode::Br);
            w.u32(scope.branch_depth(target)?);
        }
        Instr::BrIf { target, condition } => {
            instr(w, condition, layout, scope)?;
            opcode(w, Opcode::BrIf);
            w.u32(scope.branch_depth(target)?);
        }
        Instr::BrTable {
            targets,
            default,
            index,
        } => {
            instr(w, index, layout, scope)?;
            opcode(w, Opcode::BrTable);
            w.u32(targets.len() as u32);
            for target in targets {
                w.u32(scope.branch_depth(target)?);
            }
            w.u32(scope.branch_depth(default)?);
        }
        Instr::LocalGet { local } => {
            opcode(w, Opcode::LocalGet);
            w.u32(scope.local(local)?);
        }
        Instr::LocalSet { local, value } => {
            instr(w, value, layout, scope)?;
            opcode(w, Opcode::LocalSet);
            w.u32(scope.local(local)?);
        }
        Instr::LocalTee { local, value } => {
            instr(w, value, layout, scope)?;
            opcode(w, Opcode::LocalTee);
            w.u32(scope.local(local)?);
        }
        Instr::GlobalGet { global } => {
            opcode(w, Opcode::GlobalGet);
            w.u32(layout.global(global)?);
        }
        Instr::GlobalSet { global, value } => {
            instr(w, value, layout, scope)?;
            opcode(w, Opcode::GlobalSet);
            w.u32(layout.global(global)?);
        }
        Instr::Call { target, args } => {
            each(w, args, layout, scope)?;
            opcode(w, Opcode::Call);
            w.u32(layout.func(target)?);
        }
        Instr::CallIndirect {
            type_index,
            table_index,
            operands,
        } => {
            each(w, operands, layout, scope)?;
            opcode(w, Opcode::CallIndirect);
            w.u32(*type_index);
            w.u32(*table_index);
        }
        Instr::Return { values } => {
            each(w, values, layout, scope)?;
            opcode(w, Opcode::Return);
        }
        Instr::Drop { value } => {
            instr(w, value, layout, scope)?;
            opcode(w, Opcode::Drop);
        }
        Instr::Select { operands } => {
            each(w, operands, layout, scope)?;
            opcode(w, Opcode::Select);
        }
        Instr::Unreachable => opcode(w, Opcode::Unreachable),
        Instr::Nop => opcode(w, Opcode::Nop),
        Instr::MemorySize => {
            opcode(w, Opcode::MemorySize);
            w.u8(0x00);
        }
        Instr::MemoryGrow { delta } => {
            instr(w, delta, layout, scope)?;
            opcode(w, Opcode::MemoryGrow);
            w.u8(0x00);
        }
        Instr::MemoryInit { data, operands } => {
            each(w, operands, layout, scope)?;
            opcode(w, Opcode::MemoryInit);
            w.u32(*data);
            w.u8(0x00);
        }
        Instr::DataDrop { data } => {
            opcode(w, Opcode::DataDrop);
            w.u32(*data);
        }
        Instr::MemoryCopy { operands } => {
            each(w, operands, layout, scope)?;
            opcode(w, Opcode::MemoryCopy);
            w.u8(0x00);
            w.u8(0x00);
        }
        Instr::MemoryFill { operands } => {
            each(w, operands, layout, scope)?;
            opcode(w, Opcode::MemoryFill);
            w.u8(0x00);
        }
        Instr::AtomicFence => {
            opcode(w, Opcode::AtomicFence);
            w.u8(0x00);
        }
    }
    Ok(())
}

fn each<'m>(
    w: &mut Writer,
    nodes: &'m [Instr],
    layout: &ModuleLayout<'m>,
    scope: &mut FuncScope<'m>,
) -> Result<(), EmitError> {
    for node in nodes {
        instr(w, node, layout, scope)?;
    }
    Ok(())
}
