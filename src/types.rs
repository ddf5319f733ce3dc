//! Types for representing [WebAssembly types].
//!
//! [WebAssembly types]: https://webassembly.github.io/spec/core/syntax/types.html

mod func_type;
mod limits;
mod val_type;

pub use func_type::FuncType;
pub use limits::{GlobalType, Limits, MemoryType, TableType};
pub use val_type::{BlockType, RefType, ValType};
