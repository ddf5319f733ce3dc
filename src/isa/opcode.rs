use crate::isa;

/// How an [`Opcode`] is written in the binary format.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Encoding {
    /// A single opcode byte.
    Byte(u8),
    /// A prefix byte followed by a sub-code.
    ///
    /// The sub-code is written as an unsigned *LEB128* integer, not a raw
    /// byte, per the bulk-memory, SIMD, and threads proposals.
    Prefixed {
        /// The `0xFC`, `0xFD`, or `0xFE` prefix byte.
        prefix: u8,
        /// The sub-code following the prefix.
        code: u32,
    },
}

impl Encoding {
    const fn byte(opcode: u8) -> Self {
        Self::Byte(opcode)
    }

    const fn fc(code: u32) -> Self {
        Self::Prefixed { prefix: 0xFC, code }
    }

    const fn simd(code: u32) -> Self {
        Self::Prefixed { prefix: 0xFD, code }
    }

    const fn atomic(code: u32) -> Self {
        Self::Prefixed { prefix: 0xFE, code }
    }
}

macro_rules! opcode_enum {
    ($(
        $class:ident $wasm_name:literal $pascal_ident:ident = $value:literal;
    )*) => {
        /// Identifies a WebAssembly instruction.
        ///
        /// Some instructions are encoded with a byte prefix followed by the
        /// actual opcode as a [*LEB128*](crate::values::leb128) integer; see
        /// [`Opcode::encoding()`].
        #[derive(Clone, Copy, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        #[allow(missing_docs)]
        pub enum Opcode {
            $($pascal_ident,)*
        }

        impl Opcode {
            /// Gets a list of every opcode supported by this crate.
            pub const ALL: &'static [Self] = &[$(Self::$pascal_ident,)*];

            /// Gets the name of this instruction in the [WebAssembly text format].
            ///
            /// [WebAssembly text format]: https://webassembly.github.io/spec/core/text/instructions.html
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$pascal_ident => $wasm_name,)*
                }
            }

            /// Gets the encoding of this instruction's opcode in the
            /// [binary format].
            ///
            /// [binary format]: https://webassembly.github.io/spec/core/binary/instructions.html
            pub const fn encoding(self) -> Encoding {
                match self {
                    $(Self::$pascal_ident => Encoding::$class($value),)*
                }
            }
        }
    };
}

isa::instr_definitions::all!(opcode_enum);

impl core::fmt::Debug for Opcode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::fmt::Display for Opcode {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
