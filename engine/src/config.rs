use serde::{Deserialize, Serialize};

/// How many relaxation passes a row may take before its last vector is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RetryBudget {
    /// One pass per gate plus one.
    #[default]
    GateCountPlusOne,
    /// At most this many passes, never fewer than one.
    Fixed(usize),
}

impl RetryBudget {
    pub fn passes(self, gate_count: usize) -> usize {
        match self {
            RetryBudget::GateCountPlusOne => gate_count + 1,
            RetryBudget::Fixed(n) => n.max(1),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub retry_budget: RetryBudget,
    /// Worker threads used to enumerate rows; 1 keeps everything on the caller's thread.
    pub threads: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            retry_budget: RetryBudget::default(),
            threads: 1,
        }
    }
}
