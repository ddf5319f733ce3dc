//! The optimizer: fixed-point constant folding, algebraic peephole,
//! structural dead-code elimination, and a pattern-matched loop unroller.
//!
//! Every pass is a bottom-up rewrite producing fresh nodes; inputs are never
//! mutated, and a pass returns its input unchanged for shapes it does not
//! recognize. The optimizer cannot fail on well-formed IR.

mod dce;
mod fold;
mod peephole;
mod unroll;

use crate::ir::{Func, Module, ModuleField};

/// How aggressively [`optimize`] rewrites.
#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub enum OptLevel {
    /// No rewriting: the input is returned as-is.
    O0,
    /// Constant folding to a fixed point.
    #[default]
    O1,
    /// Adds the algebraic peephole and structural dead-code elimination.
    O2,
    /// Adds one loop-unroll pass after the fixed point, followed by another
    /// round of folding to simplify the inserted index arithmetic.
    O3,
}

/// Configuration for [`optimize`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct OptimizeOptions {
    /// The optimization level.
    pub level: OptLevel,
    /// How many copies of a recognized counted-loop body to emit at
    /// [`OptLevel::O3`].
    ///
    /// The unroller inserts no remainder loop: the iteration count must be a
    /// multiple of the factor times the loop step, or the tail iterations are
    /// truncated.
    pub unroll_factor: u32,
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self {
            level: OptLevel::O1,
            unroll_factor: 4,
        }
    }
}

/// Iteration bound for the fixed-point loop; in practice folding settles in
/// two or three passes.
const MAX_PASSES: usize = 10;

/// Optimizes every function of a module, passing other fields through.
pub fn optimize(module: &Module, options: &OptimizeOptions) -> Module {
    if options.level == OptLevel::O0 {
        return module.clone();
    }
    Module {
        fields: module
            .fields
            .iter()
            .map(|field| match field {
                ModuleField::Func(func) => ModuleField::Func(optimize_func(func, options)),
                other => other.clone(),
            })
            .collect(),
    }
}

/// Optimizes a single function.
///
/// Runs up to [`MAX_PASSES`] rounds of folding (plus peephole and DCE at
/// [`OptLevel::O2`] and above), stopping as soon as a round leaves the
/// function structurally unchanged. At [`OptLevel::O3`] the loop unroller
/// then runs once, followed by a final round of folding.
pub fn optimize_func(func: &Func, options: &OptimizeOptions) -> Func {
    if options.level == OptLevel::O0 {
        return func.clone();
    }

    let mut current = func.clone();
    for _ in 0..MAX_PASSES {
        let mut next = fold::run(current.clone());
        if options.level >= OptLevel::O2 {
            next = dce::run(peephole::run(next));
        }
        if next == current {
            break;
        }
        current = next;
    }

    if options.level >= OptLevel::O3 {
        current = fold::run(unroll::run(current, options.unroll_factor));
    }
    current
}
