use std::fmt;

use serde::{Deserialize, Serialize};

/// Position of a slot in the flat value vector.
pub type SignalIndex = usize;
/// Index of a primary input or primary output pin.
pub type PinIndex = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GatePos {
    pub row: usize,
    pub col: usize,
}

impl GatePos {
    pub const fn new(row: usize, col: usize) -> GatePos {
        GatePos { row, col }
    }
}

impl fmt::Display for GatePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the two inputs of a NAND gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GateInputName {
    A,
    B,
}

impl GateInputName {
    pub const fn slot(self) -> usize {
        match self {
            GateInputName::A => 0,
            GateInputName::B => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalSource {
    /// Placeholder entry, resolves to the floating-high sentinel.
    Unused,
    InputPin(PinIndex),
    GateOutput(GatePos),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalDestination {
    /// Placeholder entry, ignored.
    Unused,
    OutputPin(PinIndex),
    GateInput(GatePos, GateInputName),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireConnection {
    pub from: SignalSource,
    pub to: SignalDestination,
}

impl WireConnection {
    pub const fn new(from: SignalSource, to: SignalDestination) -> WireConnection {
        WireConnection { from, to }
    }

    pub const fn input_to_gate(pin: PinIndex, pos: GatePos, input: GateInputName) -> WireConnection {
        WireConnection::new(
            SignalSource::InputPin(pin),
            SignalDestination::GateInput(pos, input),
        )
    }

    pub const fn gate_to_gate(from: GatePos, to: GatePos, input: GateInputName) -> WireConnection {
        WireConnection::new(
            SignalSource::GateOutput(from),
            SignalDestination::GateInput(to, input),
        )
    }

    pub const fn gate_to_output(pos: GatePos, pin: PinIndex) -> WireConnection {
        WireConnection::new(SignalSource::GateOutput(pos), SignalDestination::OutputPin(pin))
    }
}

impl fmt::Display for SignalSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalSource::Unused => write!(f, "unused"),
            SignalSource::InputPin(pin) => write!(f, "input {}", pin),
            SignalSource::GateOutput(pos) => write!(f, "gate {} output", pos),
        }
    }
}

impl fmt::Display for SignalDestination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalDestination::Unused => write!(f, "unused"),
            SignalDestination::OutputPin(pin) => write!(f, "output {}", pin),
            SignalDestination::GateInput(pos, input) => write!(f, "gate {} input {:?}", pos, input),
        }
    }
}

impl fmt::Display for WireConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
