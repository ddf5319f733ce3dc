use std::cell::Cell;

use forge_wasm::probe::{Engine, FeatureProbes};

use crate::support::PREAMBLE;

struct StubEngine {
    simd: bool,
    threads: bool,
    validations: Cell<u32>,
    allocations: Cell<u32>,
}

impl StubEngine {
    fn new(simd: bool, threads: bool) -> Self {
        Self {
            simd,
            threads,
            validations: Cell::new(0),
            allocations: Cell::new(0),
        }
    }
}

impl Engine for &StubEngine {
    fn validate(&self, wasm: &[u8]) -> bool {
        self.validations.set(self.validations.get() + 1);
        // The probe hands over a well-formed module declaring a v128 result.
        assert_eq!(&wasm[..8], &PREAMBLE);
        assert!(wasm.contains(&0x7B));
        self.simd
    }

    fn allocate_shared_memory(&self, min_pages: u32, max_pages: u32) -> bool {
        self.allocations.set(self.allocations.get() + 1);
        assert!(min_pages <= max_pages);
        self.threads
    }
}

#[test]
fn probes_report_engine_support() {
    let engine = StubEngine::new(true, false);
    let probes = FeatureProbes::new(&engine);
    assert!(probes.simd_supported());
    assert!(!probes.threads_supported());

    let engine = StubEngine::new(false, true);
    let probes = FeatureProbes::new(&engine);
    assert!(!probes.simd_supported());
    assert!(probes.threads_supported());
}

#[test]
fn probe_results_are_cached() {
    let engine = StubEngine::new(true, true);
    let probes = FeatureProbes::new(&engine);
    for _ in 0..3 {
        assert!(probes.simd_supported());
        assert!(probes.threads_supported());
    }
    assert_eq!(engine.validations.get(), 1);
    assert_eq!(engine.allocations.get(), 1);
}
