use core::fmt::{Display, Formatter};
use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Represents a
/// [WebAssembly value type](https://webassembly.github.io/spec/core/syntax/types.html#value-types),
/// which indicates the type of a value.
///
/// The discriminant of each case is its encoding in the binary format.
#[derive(Clone, Copy, Debug, Eq, Hash, IntoPrimitive, PartialEq, TryFromPrimitive)]
#[repr(u8)]
pub enum ValType {
    /// The 32-bit integer, `i32`.
    I32 = 0x7F,
    /// The 64-bit integer, `i64`.
    I64 = 0x7E,
    /// 32-bit IEEE-754 floating point, sometimes referred to as `float`.
    F32 = 0x7D,
    /// 64-bit IEEE-754 floating point, sometimes referred to as `double`.
    F64 = 0x7C,
    /// A 128-bit vector, introduced as part of the [fixed-width SIMD proposal].
    ///
    /// [fixed-width SIMD proposal]: https://github.com/webassembly/simd
    V128 = 0x7B,
    /// A `funcref`, a reference to a function.
    FuncRef = 0x70,
    /// An `externref`, an opaque reference to an object provided by the embedder.
    ExternRef = 0x6F,
}

/// Represents a
/// [WebAssembly reference type](https://webassembly.github.io/spec/core/syntax/types.html#reference-types).
#[derive(Clone, Copy, Debug, Eq, Hash, IntoPrimitive, PartialEq)]
#[repr(u8)]
#[allow(missing_docs)]
pub enum RefType {
    Func = 0x70,
    Extern = 0x6F,
}

/// Represents a [**blocktype**], the declared result type of a `block`,
/// `loop`, or `if`.
///
/// [**blocktype**]: https://webassembly.github.io/spec/core/binary/instructions.html#binary-blocktype
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum BlockType {
    /// The block produces no value, encoded as `0x40`.
    #[default]
    Empty,
    /// The block produces a single value of the given type.
    Value(ValType),
}

impl BlockType {
    /// The encoding of this block type in the binary format.
    pub const fn to_byte(self) -> u8 {
        match self {
            Self::Empty => 0x40,
            Self::Value(ty) => ty as u8,
        }
    }
}

impl From<RefType> for ValType {
    fn from(ty: RefType) -> Self {
        match ty {
            RefType::Func => Self::FuncRef,
            RefType::Extern => Self::ExternRef,
        }
    }
}

impl From<ValType> for BlockType {
    #[inline]
    fn from(ty: ValType) -> Self {
        Self::Value(ty)
    }
}

impl Display for ValType {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::V128 => "v128",
            Self::FuncRef => "funcref",
            Self::ExternRef => "externref",
        })
    }
}

impl Display for RefType {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        Display::fmt(&ValType::from(*self), f)
    }
}
