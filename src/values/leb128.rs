//! Functions for encoding integers in the
//! [*LEB128* format](https://webassembly.github.io/spec/core/binary/values.html#integers).
//!
//! Each encoder returns a fixed-capacity [`ArrayVec`] holding the encoded
//! bytes; a 32-bit value occupies at most 5 bytes and a 64-bit value at most
//! 10, so no allocation ever occurs.

use arrayvec::ArrayVec;

const MORE_FLAG: u8 = 0b1000_0000;
const VALUE_MASK: u8 = 0b0111_1111;
const SIGN_FLAG: u8 = 0b0100_0000;

/// The most bytes an encoded 32-bit value can occupy.
pub const MAX_LEN_32: usize = 5;

/// The most bytes an encoded 64-bit value can occupy.
pub const MAX_LEN_64: usize = 10;

macro_rules! unsigned_encoders {
    ($(
        $(#[$meta:meta])*
        $integer:ty => $name:ident[$capacity:ident];
    )*) => {$(
        $(#[$meta])*
        pub fn $name(mut value: $integer) -> ArrayVec<u8, $capacity> {
            let mut encoded = ArrayVec::new();
            loop {
                let byte = (value as u8) & VALUE_MASK;
                value >>= 7;
                if value == 0 {
                    encoded.push(byte);
                    return encoded;
                }
                encoded.push(byte | MORE_FLAG);
            }
        }
    )*};
}

macro_rules! signed_encoders {
    ($(
        $(#[$meta:meta])*
        $integer:ty => $name:ident[$capacity:ident];
    )*) => {$(
        $(#[$meta])*
        pub fn $name(mut value: $integer) -> ArrayVec<u8, $capacity> {
            let mut encoded = ArrayVec::new();
            loop {
                let byte = (value as u8) & VALUE_MASK;
                // Arithmetic shift; the sign propagates into the working value.
                value >>= 7;
                let done = (value == 0 && byte & SIGN_FLAG == 0)
                    || (value == -1 && byte & SIGN_FLAG != 0);
                if done {
                    encoded.push(byte);
                    return encoded;
                }
                encoded.push(byte | MORE_FLAG);
            }
        }
    )*};
}

unsigned_encoders! {
    /// Encodes an unsigned 32-bit integer, producing at most 5 bytes.
    u32 => u32[MAX_LEN_32];
    /// Encodes an unsigned 64-bit integer, producing at most 10 bytes.
    u64 => u64[MAX_LEN_64];
}

signed_encoders! {
    /// Encodes a signed 32-bit integer, producing at most 5 bytes.
    i32 => s32[MAX_LEN_32];
    /// Encodes a signed 64-bit integer, producing at most 10 bytes.
    i64 => s64[MAX_LEN_64];
}
