use crate::ir::Instr;
use crate::section::ExternalKind;
use crate::types::{FuncType, GlobalType, Limits, MemoryType, RefType, TableType, ValType};

/// A module under construction: the root of the IR.
///
/// Field order is significant: indices are assigned by traversal order, with
/// imports of each kind preceding declarations, so two structurally identical
/// modules emit byte-identical binaries.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Module {
    /// The imports, functions, and exports of the module, in order.
    pub fields: Vec<ModuleField>,
}

/// One top-level field of a [`Module`].
#[derive(Clone, Debug, PartialEq)]
pub enum ModuleField {
    /// An import of a foreign function, memory, global, or table.
    Import(Import),
    /// A function declared by this module.
    Func(Func),
    /// An explicit export, overriding or augmenting the automatic ones.
    Export(Export),
}

/// An import of a foreign entity.
#[derive(Clone, Debug, PartialEq)]
pub struct Import {
    /// The name of the module the import originates from.
    pub module: String,
    /// The field name within that module.
    ///
    /// Instructions refer to imported entities by this name.
    pub field: String,
    /// What is imported.
    pub desc: ImportDesc,
}

/// Describes what an [`Import`] brings into the module.
#[derive(Clone, Debug, PartialEq)]
pub enum ImportDesc {
    /// A function with the given signature.
    Func(FuncType),
    /// A table.
    Table(TableType),
    /// A linear memory, possibly shared.
    Memory(MemoryType),
    /// A global.
    Global(GlobalType),
}

impl ImportDesc {
    /// The kind byte this descriptor is encoded with.
    pub const fn kind(&self) -> ExternalKind {
        match self {
            Self::Func(_) => ExternalKind::Func,
            Self::Table(_) => ExternalKind::Table,
            Self::Memory(_) => ExternalKind::Memory,
            Self::Global(_) => ExternalKind::Global,
        }
    }
}

/// An explicit function export.
///
/// Declared functions are exported automatically unless their name starts
/// with `$_`; explicit exports override an automatic export of the same name
/// and may add aliases.
#[derive(Clone, Debug, PartialEq)]
pub struct Export {
    /// The name the function is exported under.
    pub name: String,
    /// The exported function: a name or a bare index.
    pub target: String,
}

/// A named, typed parameter or local declaration.
///
/// Params and locals share a single index space, params first; declaration
/// order determines indices.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Local {
    /// The name instructions refer to this slot by.
    pub name: String,
    /// The declared type.
    pub ty: ValType,
}

/// A function declared by the module.
#[derive(Clone, Debug, PartialEq)]
pub struct Func {
    /// The function's name: the symbol `call` targets resolve against, and
    /// the source of its automatic export name.
    pub name: String,
    /// The parameters, in order.
    pub params: Vec<Local>,
    /// The result types, in order.
    pub results: Vec<ValType>,
    /// The locals, in order, indexed after the params.
    pub locals: Vec<Local>,
    /// The body, in order.
    pub body: Vec<Instr>,
}

impl Func {
    /// Creates an empty function with the given name.
    ///
    /// A name starting with `$_` keeps the function internal; any other name
    /// is exported, with a single leading `$` stripped.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            results: Vec::new(),
            locals: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Appends a parameter.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, ty: ValType) -> Self {
        self.params.push(Local {
            name: name.into(),
            ty,
        });
        self
    }

    /// Appends a result type.
    #[must_use]
    pub fn result(mut self, ty: ValType) -> Self {
        self.results.push(ty);
        self
    }

    /// Appends a local.
    #[must_use]
    pub fn local(mut self, name: impl Into<String>, ty: ValType) -> Self {
        self.locals.push(Local {
            name: name.into(),
            ty,
        });
        self
    }

    /// Replaces the body.
    #[must_use]
    pub fn body(mut self, body: Vec<Instr>) -> Self {
        self.body = body;
        self
    }

    /// The function's signature, as deduplicated into the type section.
    pub fn signature(&self) -> FuncType {
        FuncType {
            params: self.params.iter().map(|p| p.ty).collect(),
            results: self.results.clone(),
        }
    }

    /// Whether the function is kept out of the export section.
    pub(crate) fn is_hidden(&self) -> bool {
        self.name.starts_with("$_")
    }

    /// The name the function is automatically exported under.
    pub(crate) fn export_name(&self) -> &str {
        self.name.strip_prefix('$').unwrap_or(&self.name)
    }
}

impl Module {
    /// Creates an empty module.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an import.
    #[must_use]
    pub fn import(mut self, import: Import) -> Self {
        self.fields.push(ModuleField::Import(import));
        self
    }

    /// Appends a function.
    #[must_use]
    pub fn func(mut self, func: Func) -> Self {
        self.fields.push(ModuleField::Func(func));
        self
    }

    /// Appends an explicit export.
    #[must_use]
    pub fn export(mut self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.fields.push(ModuleField::Export(Export {
            name: name.into(),
            target: target.into(),
        }));
        self
    }
}

impl Import {
    /// Imports a function with the given signature.
    pub fn func(module: impl Into<String>, field: impl Into<String>, signature: FuncType) -> Self {
        Self {
            module: module.into(),
            field: field.into(),
            desc: ImportDesc::Func(signature),
        }
    }

    /// Imports a linear memory.
    pub fn memory(
        module: impl Into<String>,
        field: impl Into<String>,
        limits: Limits,
        shared: bool,
    ) -> Self {
        Self {
            module: module.into(),
            field: field.into(),
            desc: ImportDesc::Memory(MemoryType { limits, shared }),
        }
    }

    /// Imports a global.
    pub fn global(
        module: impl Into<String>,
        field: impl Into<String>,
        content: ValType,
        mutable: bool,
    ) -> Self {
        Self {
            module: module.into(),
            field: field.into(),
            desc: ImportDesc::Global(GlobalType { content, mutable }),
        }
    }

    /// Imports a table.
    pub fn table(
        module: impl Into<String>,
        field: impl Into<String>,
        element: RefType,
        limits: Limits,
    ) -> Self {
        Self {
            module: module.into(),
            field: field.into(),
            desc: ImportDesc::Table(TableType { element, limits }),
        }
    }
}
