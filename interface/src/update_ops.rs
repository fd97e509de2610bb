use std::path::PathBuf;

use nandsim_engine::{GateArray, TruthTable};

#[derive(Debug)]
pub enum CircuitUpdateOps {
    Load(PathBuf),
    Run { threads: usize },
}

#[derive(Debug, PartialEq, Eq)]
pub enum SyncState {
    Synced,
    Error(String),
    NotSynced,
}

impl SyncState {
    pub fn is_synced(&self) -> bool {
        matches!(self, SyncState::Synced)
    }
    pub fn is_error(&self) -> bool {
        matches!(self, SyncState::Error(_))
    }
    pub fn error_msg(&self) -> &str {
        if let SyncState::Error(msg) = self {
            msg
        } else {
            ""
        }
    }
}

/// What the viewer shows about a loaded circuit besides its table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircuitSummary {
    pub rows: usize,
    pub cols: usize,
    pub inputs: usize,
    pub outputs: usize,
    pub wires: usize,
    pub issues: Vec<String>,
}

impl CircuitSummary {
    pub fn of(array: &GateArray) -> CircuitSummary {
        CircuitSummary {
            rows: array.rows,
            cols: array.cols,
            inputs: array.inputs,
            outputs: array.outputs,
            wires: array.wires().len(),
            issues: array.audit().iter().map(ToString::to_string).collect(),
        }
    }
}

#[derive(Debug)]
pub enum UiUpdateOps {
    Loaded {
        path: PathBuf,
        summary: CircuitSummary,
    },
    Simulated(TruthTable),
    Failed(String),
}
