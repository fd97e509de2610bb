use thiserror::Error;

use crate::types::{GatePos, PinIndex, SignalDestination};

/// An irregular wiring entry. The resolver tolerates all of these; only strict
/// validation reports them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WiringIssue {
    #[error("wire #{wire}: source is unused, destination floats high")]
    UnusedSource { wire: usize },

    #[error("wire #{wire}: destination is unused, entry ignored")]
    UnusedDestination { wire: usize },

    #[error("wire #{wire}: input pin {pin} out of range (circuit has {num_inputs} inputs)")]
    InputPinOutOfRange {
        wire: usize,
        pin: PinIndex,
        num_inputs: usize,
    },

    #[error("wire #{wire}: output pin {pin} out of range (circuit has {num_outputs} outputs)")]
    OutputPinOutOfRange {
        wire: usize,
        pin: PinIndex,
        num_outputs: usize,
    },

    #[error("wire #{wire}: gate {pos} outside the {rows}x{cols} array")]
    GateOutOfRange {
        wire: usize,
        pos: GatePos,
        rows: usize,
        cols: usize,
    },

    #[error("wire #{wire}: overrides wire #{previous} driving {destination}")]
    Overwritten {
        wire: usize,
        previous: usize,
        destination: SignalDestination,
    },

    #[error("{num_inputs} inputs cannot be enumerated")]
    TooManyInputs { num_inputs: usize },
}

#[derive(Debug, Error)]
pub enum CircuitError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed circuit description: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("could not write circuit description: {0}")]
    Serialize(#[from] ron::Error),

    #[error("wiring has {} issue(s)", .0.len())]
    Wiring(Vec<WiringIssue>),
}

pub type Result<T> = std::result::Result<T, CircuitError>;
