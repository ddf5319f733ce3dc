//! Runtime feature detection for 128-bit SIMD and shared-memory threading.
//!
//! This crate performs no I/O and never talks to a WebAssembly engine
//! itself; the host supplies one behind the [`Engine`] trait. The SIMD probe
//! uses this crate's own builders and emitter to assemble a minimal module
//! whose single function returns `v128`, which an engine without SIMD
//! rejects at validation. The threads probe asks the engine to construct a
//! small shared linear memory and report whether its backing buffer is
//! actually shared, which catches both missing engine support and host
//! security-policy gating.
//!
//! Probes never fail: anything that goes wrong reads as "unsupported".

use core::cell::OnceCell;

use crate::emit::emit_binary;
use crate::ir::{Func, Instr, Module};
use crate::types::ValType;

/// The host's view of the platform WebAssembly engine.
pub trait Engine {
    /// Whether `wasm` passes the engine's validation.
    fn validate(&self, wasm: &[u8]) -> bool;

    /// Attempts to construct a shared linear memory with the given page
    /// bounds, returning whether its backing buffer is a shared buffer.
    ///
    /// The memory is only used for detection; implementations should release
    /// it before returning.
    fn allocate_shared_memory(&self, min_pages: u32, max_pages: u32) -> bool;
}

/// Cached feature probes over a host-provided [`Engine`].
pub struct FeatureProbes<E> {
    engine: E,
    simd: OnceCell<bool>,
    threads: OnceCell<bool>,
}

impl<E: Engine> FeatureProbes<E> {
    /// Creates probes that consult `engine` on first use and cache the
    /// answers.
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            simd: OnceCell::new(),
            threads: OnceCell::new(),
        }
    }

    /// Whether the engine validates a module using `v128`.
    pub fn simd_supported(&self) -> bool {
        *self.simd.get_or_init(|| match emit_binary(&simd_probe_module()) {
            Ok(wasm) => self.engine.validate(&wasm),
            Err(_) => false,
        })
    }

    /// Whether a shared linear memory can actually be constructed.
    pub fn threads_supported(&self) -> bool {
        *self
            .threads
            .get_or_init(|| self.engine.allocate_shared_memory(1, 1))
    }
}

impl<E> core::fmt::Debug for FeatureProbes<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FeatureProbes")
            .field("simd", &self.simd.get())
            .field("threads", &self.threads.get())
            .finish_non_exhaustive()
    }
}

/// One hidden function returning `v128`; nothing else.
fn simd_probe_module() -> Module {
    Module::new().func(
        Func::new("$_simd_probe")
            .result(ValType::V128)
            .body(vec![Instr::v128_const([0; 16])]),
    )
}
