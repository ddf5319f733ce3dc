use std::collections::HashMap;

use crate::error::EmitError;
use crate::ir::{Func, Import, ImportDesc, Module, ModuleField};
use crate::types::FuncType;

/// The result of the pre-pass over a module: every index fixed, every
/// signature interned.
pub(super) struct ModuleLayout<'m> {
    /// The distinct function signatures, in first-use order.
    pub(super) types: Vec<FuncType>,
    type_indices: HashMap<FuncType, u32>,
    /// Imports, in declaration order.
    pub(super) imports: Vec<&'m Import>,
    /// Declared functions, in declaration order.
    pub(super) declared: Vec<&'m Func>,
    /// Each declared function's index into the type section.
    pub(super) declared_type_indices: Vec<u32>,
    /// The export list: automatic exports in declaration order, then any
    /// explicit exports that did not override one.
    pub(super) exports: Vec<(String, u32)>,
    func_indices: HashMap<&'m str, u32>,
    global_indices: HashMap<&'m str, u32>,
}

impl<'m> ModuleLayout<'m> {
    pub(super) fn build(module: &'m Module) -> Result<Self, EmitError> {
        let mut layout = Self {
            types: Vec::new(),
            type_indices: HashMap::new(),
            imports: Vec::new(),
            declared: Vec::new(),
            declared_type_indices: Vec::new(),
            exports: Vec::new(),
            func_indices: HashMap::new(),
            global_indices: HashMap::new(),
        };

        // Imports partition by kind; the count of each kind fixes the base
        // index for anything declared afterwards.
        let mut imported_funcs = 0u32;
        let mut imported_globals = 0u32;
        for field in &module.fields {
            if let ModuleField::Import(import) = field {
                layout.imports.push(import);
                match &import.desc {
                    ImportDesc::Func(signature) => {
                        layout.intern_type(signature.clone());
                        layout.func_indices.insert(import.field.as_str(), imported_funcs);
                        imported_funcs += 1;
                    }
                    ImportDesc::Global(_) => {
                        layout
                            .global_indices
                            .insert(import.field.as_str(), imported_globals);
                        imported_globals += 1;
                    }
                    ImportDesc::Table(_) | ImportDesc::Memory(_) => {}
                }
            }
        }

        for field in &module.fields {
            if let ModuleField::Func(func) = field {
                let index = imported_funcs + layout.declared.len() as u32;
                layout.func_indices.insert(func.name.as_str(), index);
                let type_index = layout.intern_type(func.signature());
                layout.declared.push(func);
                layout.declared_type_indices.push(type_index);
            }
        }

        let mut exports = Vec::new();
        for func in &layout.declared {
            if !func.is_hidden() {
                let index = layout.func(&func.name)?;
                exports.push((func.export_name().to_owned(), index));
            }
        }
        for field in &module.fields {
            if let ModuleField::Export(export) = field {
                let index = layout.func(&export.target)?;
                match exports.iter_mut().find(|(name, _)| *name == export.name) {
                    Some(existing) => existing.1 = index,
                    None => exports.push((export.name.clone(), index)),
                }
            }
        }
        layout.exports = exports;

        Ok(layout)
    }

    fn intern_type(&mut self, signature: FuncType) -> u32 {
        if let Some(&index) = self.type_indices.get(&signature) {
            return index;
        }
        let index = self.types.len() as u32;
        self.type_indices.insert(signature.clone(), index);
        self.types.push(signature);
        index
    }

    /// The type-section index of an interned signature.
    ///
    /// Only called for signatures registered by the pre-pass.
    pub(super) fn type_index(&self, signature: &FuncType) -> u32 {
        self.type_indices.get(signature).copied().unwrap_or(0)
    }

    /// Resolves a `call` or `export` target to a function index.
    pub(super) fn func(&self, name: &str) -> Result<u32, EmitError> {
        match self.func_indices.get(name) {
            Some(&index) => Ok(index),
            None => numeric(name).ok_or_else(|| EmitError::UnresolvedFunction(name.to_owned())),
        }
    }

    /// Resolves a `global.get`/`global.set` name to a global index.
    pub(super) fn global(&self, name: &str) -> Result<u32, EmitError> {
        match self.global_indices.get(name) {
            Some(&index) => Ok(index),
            None => numeric(name).ok_or_else(|| EmitError::UnresolvedGlobal(name.to_owned())),
        }
    }
}

/// Per-function emission state: the param/local name table and the label
/// stack for branch-depth resolution.
pub(super) struct FuncScope<'m> {
    locals: HashMap<&'m str, u32>,
    labels: Vec<&'m str>,
}

impl<'m> FuncScope<'m> {
    pub(super) fn new(func: &'m Func) -> Self {
        // Params and locals share one index space, params first.
        let locals = func
            .params
            .iter()
            .chain(&func.locals)
            .enumerate()
            .map(|(index, local)| (local.name.as_str(), index as u32))
            .collect();
        Self {
            locals,
            labels: Vec::new(),
        }
    }

    pub(super) fn local(&self, name: &str) -> Result<u32, EmitError> {
        match self.locals.get(name) {
            Some(&index) => Ok(index),
            None => numeric(name).ok_or_else(|| EmitError::UnresolvedLocal(name.to_owned())),
        }
    }

    pub(super) fn push_label(&mut self, label: &'m str) {
        self.labels.push(label);
    }

    pub(super) fn pop_label(&mut self) {
        self.labels.pop();
    }

    /// Resolves a branch target to a relative depth: the distance from the
    /// innermost label to the nearest one matching `target`.
    pub(super) fn branch_depth(&self, target: &str) -> Result<u32, EmitError> {
        for (depth, label) in self.labels.iter().rev().enumerate() {
            if !label.is_empty() && *label == target {
                return Ok(depth as u32);
            }
        }
        numeric(target).ok_or_else(|| EmitError::UnresolvedLabel(target.to_owned()))
    }
}

/// The numeric fallback: a name consisting solely of ASCII digits is used as
/// the index directly.
fn numeric(name: &str) -> Option<u32> {
    if !name.is_empty() && name.bytes().all(|b| b.is_ascii_digit()) {
        name.parse().ok()
    } else {
        None
    }
}
