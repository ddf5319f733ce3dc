//! The intermediate representation: a tree of instruction and structural
//! nodes, and the constructor functions that assemble it.
//!
//! Producers build a [`Module`] out of [`Func`]s, [`Import`]s, and
//! [`Export`]s; function bodies are trees of [`Instr`] nodes whose operand
//! order matches the order WebAssembly requires on the value stack. Nodes are
//! plain data; every pass consumes a tree by reference and returns a freshly
//! constructed one.

mod build;
mod module;
mod node;

pub use module::{Export, Func, Import, ImportDesc, Local, Module, ModuleField};
pub use node::{Instr, Literal};
