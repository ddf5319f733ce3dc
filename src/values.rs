//! Encoding of the values of the [binary format]: *LEB128* integers,
//! IEEE-754 floats, names, and vectors, and the [`Writer`] they are
//! assembled in.
//!
//! [binary format]: https://webassembly.github.io/spec/core/binary/values.html

pub mod leb128;

mod writer;

pub use writer::Writer;
