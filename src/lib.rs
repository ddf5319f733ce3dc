//! A library for building [WebAssembly] modules as an intermediate
//! representation, optimizing them, and emitting the [binary format].
//!
//! The pipeline is: assemble a [`Module`](ir::Module) with the constructors in
//! [`ir`] → optionally [`auto_vectorize`] selected functions → optionally
//! [`optimize`] → [`emit_binary`]. Emission is deterministic and pure; the
//! produced bytes validate against an engine with the [fixed-width SIMD],
//! [bulk memory], and [threads] proposals enabled.
//!
//! [WebAssembly]: https://webassembly.github.io/spec/core/index.html
//! [binary format]: https://webassembly.github.io/spec/core/binary/index.html
//! [fixed-width SIMD]: https://github.com/webassembly/simd
//! [bulk memory]: https://github.com/WebAssembly/bulk-memory-operations
//! [threads]: https://github.com/webassembly/threads

#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(unreachable_pub)]

pub mod emit;
pub mod error;
pub mod ir;
pub mod isa;
pub mod opt;
pub mod probe;
pub mod section;
pub mod types;
pub mod values;
pub mod vectorize;

pub use emit::emit_binary;
pub use error::EmitError;
pub use opt::{optimize, optimize_func, OptLevel, OptimizeOptions};
pub use vectorize::{auto_vectorize, VectorTarget, Vectorized, VectorizeOptions};
