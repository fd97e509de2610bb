use std::thread;

use crossbeam::channel;
use log::debug;

use crate::{
    config::RetryBudget,
    table::{finish, simulate_row, simulate_rows, RowReport, TruthTable},
    wiring::WiringMap,
};

/// Same table as [`simulate_rows`], with rows spread over `threads` workers.
/// Worker `w` takes rows `w, w + threads, ...` and reports back over a channel;
/// the wiring map is shared read-only.
pub fn simulate_rows_parallel(wiring: &WiringMap, budget: RetryBudget, threads: usize) -> TruthTable {
    let total = wiring.layout().row_count();
    let threads = threads.clamp(1, total.max(1));
    if threads == 1 {
        return simulate_rows(wiring, budget);
    }
    debug!("enumerating {} row(s) on {} threads", total, threads);

    let (sender, receiver) = channel::unbounded::<RowReport>();
    thread::scope(|s| {
        for worker in 0..threads {
            let sender = sender.clone();
            s.spawn(move || {
                for index in (worker..total).step_by(threads) {
                    if sender.send(simulate_row(wiring, index, budget)).is_err() {
                        break;
                    }
                }
            });
        }
    });
    drop(sender);

    let mut reports: Vec<RowReport> = receiver.iter().collect();
    reports.sort_unstable_by_key(|r| r.index);
    finish(wiring, reports)
}
