use crate::types::{RefType, ValType};

bitflags::bitflags! {
    /// The flags byte preceding the bounds of a memory or table.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub(crate) struct LimitFlags: u8 {
        /// A maximum bound follows the minimum.
        const HAS_MAX = 0b01;
        /// The memory is shared between agents, per the [threads proposal].
        ///
        /// [threads proposal]: https://github.com/webassembly/threads
        const SHARED = 0b10;
    }
}

/// The minimum size, and an optional maximum size, of a memory or table,
/// counted in pages for memories and in elements for tables.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Limits {
    /// The initial size.
    pub min: u32,
    /// The size the memory or table may never grow beyond, if any.
    pub max: Option<u32>,
}

impl Limits {
    /// Creates bounds with the given minimum and no maximum.
    pub const fn at_least(min: u32) -> Self {
        Self { min, max: None }
    }

    /// Creates bounds with the given minimum and maximum.
    pub const fn bounded(min: u32, max: u32) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }
}

/// The type of a linear memory.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct MemoryType {
    /// The size bounds of the memory, in 64 KiB pages.
    pub limits: Limits,
    /// Whether the memory is shared between agents.
    ///
    /// A shared memory must declare a maximum bound.
    pub shared: bool,
}

impl MemoryType {
    pub(crate) fn flags(&self) -> LimitFlags {
        let mut flags = LimitFlags::empty();
        if self.limits.max.is_some() {
            flags |= LimitFlags::HAS_MAX;
        }
        if self.shared {
            flags |= LimitFlags::SHARED;
        }
        flags
    }
}

/// The type of a global: its content type and mutability.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct GlobalType {
    /// The type of the value the global holds.
    pub content: ValType,
    /// Whether the global may be written after instantiation.
    pub mutable: bool,
}

/// The type of a table: its element type and size bounds.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct TableType {
    /// The type of the table's elements.
    pub element: RefType,
    /// The size bounds of the table, in elements.
    pub limits: Limits,
}

impl TableType {
    pub(crate) fn flags(&self) -> LimitFlags {
        if self.limits.max.is_some() {
            LimitFlags::HAS_MAX
        } else {
            LimitFlags::empty()
        }
    }
}
