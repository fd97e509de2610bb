use std::mem;

use log::trace;

use crate::{config::RetryBudget, wiring::WiringMap};

pub const fn nand(a: bool, b: bool) -> bool {
    !(a && b)
}

/// How a relaxation run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Convergence {
    /// The last pass changed nothing.
    Settled { passes: usize },
    /// The budget ran out while values were still changing; the last computed
    /// vector was kept.
    RetryExhausted { passes: usize },
}

impl Convergence {
    pub fn is_settled(&self) -> bool {
        matches!(self, Convergence::Settled { .. })
    }

    pub fn passes(&self) -> usize {
        match *self {
            Convergence::Settled { passes } | Convergence::RetryExhausted { passes } => passes,
        }
    }
}

/// Evaluates every gate against the previous pass until nothing changes or the
/// budget is spent. `values` must be seeded (see `SignalLayout::seed`) and holds
/// the last computed vector on return.
pub fn relax(wiring: &WiringMap, values: &mut Vec<bool>, budget: RetryBudget) -> Convergence {
    let layout = wiring.layout();
    let first_gate = layout.first_gate_index();
    let limit = budget.passes(layout.gate_count());

    let mut previous = mem::take(values);
    let mut current = previous.clone();
    let mut changed = true;
    let mut passes = 0;

    while changed && passes < limit {
        // synchronous update: reads only the previous pass
        let mut flips = 0;
        for (gate, &[a, b]) in wiring.gate_inputs().iter().enumerate() {
            let out = nand(previous[a], previous[b]);
            if out != previous[first_gate + gate] {
                flips += 1;
            }
            current[first_gate + gate] = out;
        }
        changed = flips > 0;
        mem::swap(&mut previous, &mut current);
        passes += 1;
        trace!("pass {}: {} gate(s) changed", passes, flips);
    }

    *values = previous;
    if changed {
        Convergence::RetryExhausted { passes }
    } else {
        Convergence::Settled { passes }
    }
}
