//! Identifiers for the [sections of a module].
//!
//! [sections of a module]: https://webassembly.github.io/spec/core/binary/modules.html#sections

use num_enum::IntoPrimitive;

/// The [*id*] of a section within a module.
///
/// The emitter writes sections in increasing *id* order; a module produced by
/// this crate therefore always has its section ids strictly increasing.
///
/// [*id*]: https://webassembly.github.io/spec/core/binary/modules.html#sections
#[derive(Clone, Copy, Debug, Eq, Hash, IntoPrimitive, PartialEq)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum SectionId {
    Custom = 0,
    Type = 1,
    Import = 2,
    Function = 3,
    Table = 4,
    Memory = 5,
    Global = 6,
    Export = 7,
    Start = 8,
    Element = 9,
    Code = 10,
    Data = 11,
    DataCount = 12,
}

/// The kind byte shared by import and export descriptors.
#[derive(Clone, Copy, Debug, Eq, Hash, IntoPrimitive, PartialEq)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum ExternalKind {
    Func = 0,
    Table = 1,
    Memory = 2,
    Global = 3,
}

/// Marks the end of an expression or structured instruction.
pub const END: u8 = 0x0B;

/// Separates the two arms of an `if` instruction.
pub const ELSE: u8 = 0x05;
