use std::fmt;

use log::{debug, trace};

use crate::{
    config::RetryBudget,
    relax::{relax, Convergence},
    wiring::WiringMap,
};

/// One enumerated input combination and the outputs it settled to.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResultRow {
    pub inputs: Vec<bool>,
    pub outputs: Vec<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowReport {
    pub index: usize,
    pub row: ResultRow,
    pub convergence: Convergence,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    num_inputs: usize,
    num_outputs: usize,
    reports: Vec<RowReport>,
}

impl TruthTable {
    /// `reports` must be ordered by row index.
    pub fn new(num_inputs: usize, num_outputs: usize, reports: Vec<RowReport>) -> TruthTable {
        TruthTable {
            num_inputs,
            num_outputs,
            reports,
        }
    }

    pub fn num_inputs(&self) -> usize {
        self.num_inputs
    }

    pub fn num_outputs(&self) -> usize {
        self.num_outputs
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn reports(&self) -> &[RowReport] {
        &self.reports
    }

    pub fn row(&self, index: usize) -> Option<&ResultRow> {
        self.reports.get(index).map(|r| &r.row)
    }

    pub fn rows(&self) -> impl Iterator<Item = &ResultRow> {
        self.reports.iter().map(|r| &r.row)
    }

    pub fn into_rows(self) -> Vec<ResultRow> {
        self.reports.into_iter().map(|r| r.row).collect()
    }

    pub fn is_settled(&self) -> bool {
        self.reports.iter().all(|r| r.convergence.is_settled())
    }

    /// Indices of rows whose relaxation ran out of passes.
    pub fn unsettled(&self) -> Vec<usize> {
        self.reports
            .iter()
            .filter(|r| !r.convergence.is_settled())
            .map(|r| r.index)
            .collect()
    }
}

/// Primary-input vector for row `index`: input `b` is bit `b` of the index.
pub fn input_combination(index: usize, bits: usize) -> Vec<bool> {
    (0..bits).map(|b| (index >> b) & 1 == 1).collect()
}

pub fn simulate_row(wiring: &WiringMap, index: usize, budget: RetryBudget) -> RowReport {
    let layout = wiring.layout();
    let inputs = input_combination(index, layout.num_inputs);
    let mut values = layout.seed(&inputs);
    trace!("row {}: seeded {:?}", index, inputs);

    let convergence = relax(wiring, &mut values, budget);
    trace!("row {}: {:?}", index, convergence);

    let outputs = wiring.read_outputs(&values);
    RowReport {
        index,
        row: ResultRow { inputs, outputs },
        convergence,
    }
}

/// Enumerates every input combination in increasing order on the calling thread.
pub fn simulate_rows(wiring: &WiringMap, budget: RetryBudget) -> TruthTable {
    let layout = wiring.layout();
    debug!(
        "simulating {}x{} array, {} input(s), {} output(s), {} row(s)",
        layout.num_rows,
        layout.num_cols,
        layout.num_inputs,
        layout.num_outputs,
        layout.row_count()
    );
    let reports = (0..layout.row_count())
        .map(|index| simulate_row(wiring, index, budget))
        .collect();
    finish(wiring, reports)
}

pub(crate) fn finish(wiring: &WiringMap, reports: Vec<RowReport>) -> TruthTable {
    let layout = wiring.layout();
    let table = TruthTable::new(layout.num_inputs, layout.num_outputs, reports);
    let unsettled = table.unsettled();
    if !unsettled.is_empty() {
        debug!("{} row(s) did not settle: {:?}", unsettled.len(), unsettled);
    }
    table
}

/// Text rendering of a result list; empty input renders as an empty string.
pub fn render(rows: &[ResultRow]) -> String {
    let mut out = String::new();
    // fmt::Write into a String does not fail
    let _ = write_rows(&mut out, rows);
    out
}

fn write_rows<'a, W: fmt::Write>(w: &mut W, rows: impl IntoIterator<Item = &'a ResultRow>) -> fmt::Result {
    let mut rows = rows.into_iter().peekable();
    let Some(first) = rows.peek() else {
        return Ok(());
    };
    let (n_in, n_out) = (first.inputs.len(), first.outputs.len());

    writeln!(w, "Inputs {}| Outputs", " ".repeat(n_in))?;
    writeln!(w, "{}", "-".repeat(n_in + n_out + 10))?;
    for row in rows {
        for &bit in &row.inputs {
            w.write_str(if bit { "1 " } else { "0 " })?;
        }
        w.write_str("| ")?;
        for &bit in &row.outputs {
            w.write_str(if bit { "1 " } else { "0 " })?;
        }
        writeln!(w)?;
    }
    Ok(())
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_rows(f, self.rows())
    }
}
