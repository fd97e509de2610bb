pub mod circuit;
pub mod config;
pub mod error;
pub mod parallel;
pub mod relax;
pub mod signal;
pub mod table;
pub mod types;
pub mod wiring;

pub use circuit::GateArray;
pub use config::{RetryBudget, SimConfig};
pub use error::{CircuitError, WiringIssue};
pub use parallel::simulate_rows_parallel;
pub use relax::Convergence;
pub use signal::SignalLayout;
pub use table::{render, simulate_rows, ResultRow, RowReport, TruthTable};
pub use types::{GateInputName, GatePos, SignalDestination, SignalSource, WireConnection};
pub use wiring::WiringMap;

/// Truth table of a `num_rows` x `num_cols` NAND array, one row per input
/// combination in increasing binary order (input 0 is the least significant bit).
///
/// Never fails: unresolvable wires degrade to the floating-high sentinel and rows
/// that do not settle keep their last computed values.
pub fn simulate(
    num_rows: usize,
    num_cols: usize,
    num_inputs: usize,
    num_outputs: usize,
    wires: &[WireConnection],
) -> Vec<ResultRow> {
    let layout = SignalLayout::new(num_rows, num_cols, num_inputs, num_outputs);
    let wiring = WiringMap::resolve(layout, wires);
    simulate_rows(&wiring, RetryBudget::default()).into_rows()
}
