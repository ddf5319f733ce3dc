//! Serialization of a [`Module`] into the [WebAssembly binary format].
//!
//! Emission is a single pre-order walk per section, preceded by a pre-pass
//! that fixes every index: imports of each kind come first in their index
//! space, declared functions follow in declaration order, and function
//! signatures are deduplicated into the type section. Because the pre-pass is
//! a deterministic traversal, two structurally identical modules emit
//! byte-identical binaries.
//!
//! [WebAssembly binary format]: https://webassembly.github.io/spec/core/binary/modules.html

mod context;
mod instr;

use itertools::Itertools as _;

use crate::error::EmitError;
use crate::ir::{Func, ImportDesc, Module};
use crate::section::{SectionId, END};
use crate::types::FuncType;
use crate::values::Writer;

use context::{FuncScope, ModuleLayout};

/// The module preamble: the `\0asm` magic followed by version 1.
const PREAMBLE: [u8; 8] = [0x00, 0x61, 0x73, 0x6D, 0x01, 0x00, 0x00, 0x00];

/// Serializes `module` into the binary format.
///
/// Deterministic and pure: repeated calls on the same module produce the same
/// bytes. Fails fast on the first name that neither resolves to a declaration
/// in scope nor is a bare index; no partial module is produced.
///
/// # Errors
///
/// Returns an [`EmitError`] naming the offending construct.
pub fn emit_binary(module: &Module) -> Result<Vec<u8>, EmitError> {
    let layout = ModuleLayout::build(module)?;

    let mut out = Writer::new();
    out.bytes(&PREAMBLE);

    type_section(&mut out, &layout);
    import_section(&mut out, &layout);
    function_section(&mut out, &layout);
    export_section(&mut out, &layout);
    code_section(&mut out, &layout)?;

    Ok(out.into_bytes())
}

fn type_section(out: &mut Writer, layout: &ModuleLayout<'_>) {
    if layout.types.is_empty() {
        return;
    }
    let mut payload = Writer::new();
    payload.vec(&layout.types, |w, ty| {
        w.u8(FuncType::TAG);
        w.vec(&ty.params, |w, param| w.u8(u8::from(*param)));
        w.vec(&ty.results, |w, result| w.u8(u8::from(*result)));
    });
    out.section(SectionId::Type, &payload);
}

fn import_section(out: &mut Writer, layout: &ModuleLayout<'_>) {
    if layout.imports.is_empty() {
        return;
    }
    let mut payload = Writer::new();
    payload.vec(&layout.imports, |w, import| {
        w.name(&import.module);
        w.name(&import.field);
        w.u8(u8::from(import.desc.kind()));
        match &import.desc {
            ImportDesc::Func(signature) => w.u32(layout.type_index(signature)),
            ImportDesc::Table(table) => {
                w.u8(u8::from(table.element));
                w.u8(table.flags().bits());
                w.u32(table.limits.min);
                if let Some(max) = table.limits.max {
                    w.u32(max);
                }
            }
            ImportDesc::Memory(memory) => {
                w.u8(memory.flags().bits());
                w.u32(memory.limits.min);
                if let Some(max) = memory.limits.max {
                    w.u32(max);
                }
            }
            ImportDesc::Global(global) => {
                w.u8(u8::from(global.content));
                w.u8(global.mutable as u8);
            }
        }
    });
    out.section(SectionId::Import, &payload);
}

fn function_section(out: &mut Writer, layout: &ModuleLayout<'_>) {
    if layout.declared.is_empty() {
        return;
    }
    let mut payload = Writer::new();
    payload.vec(&layout.declared_type_indices, |w, index| w.u32(*index));
    out.section(SectionId::Function, &payload);
}

fn export_section(out: &mut Writer, layout: &ModuleLayout<'_>) {
    if layout.exports.is_empty() {
        return;
    }
    let mut payload = Writer::new();
    payload.vec(&layout.exports, |w, (name, index)| {
        w.name(name);
        w.u8(u8::from(crate::section::ExternalKind::Func));
        w.u32(*index);
    });
    out.section(SectionId::Export, &payload);
}

fn code_section(out: &mut Writer, layout: &ModuleLayout<'_>) -> Result<(), EmitError> {
    if layout.declared.is_empty() {
        return Ok(());
    }
    let mut payload = Writer::new();
    payload.u32(layout.declared.len() as u32);
    for func in &layout.declared {
        let mut body = Writer::new();
        local_declarations(&mut body, func);

        let mut scope = FuncScope::new(func);
        for node in &func.body {
            instr::instr(&mut body, node, layout, &mut scope)?;
        }
        body.u8(END);

        payload.u32(body.len() as u32);
        payload.bytes(body.as_slice());
    }
    out.section(SectionId::Code, &payload);
    Ok(())
}

/// Writes the run-length-compressed local declarations: consecutive locals
/// sharing a type coalesce into one `(count, type)` entry.
fn local_declarations(body: &mut Writer, func: &Func) {
    let groups: Vec<(usize, _)> = func
        .locals
        .iter()
        .map(|local| local.ty)
        .dedup_with_count()
        .collect();
    body.u32(groups.len() as u32);
    for (count, ty) in groups {
        body.u32(count as u32);
        body.u8(u8::from(ty));
    }
}
