//! Flat addressing of every node in a gate array.
//!
//! The value vector is laid out as
//! `[inputs | gates (row-major) | output pins | sentinel]`; the sentinel is the
//! last slot and always reads high.

use serde::{Deserialize, Serialize};

use crate::types::{GatePos, PinIndex, SignalIndex, SignalSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SignalLayout {
    pub num_rows: usize,
    pub num_cols: usize,
    pub num_inputs: usize,
    pub num_outputs: usize,
}

/// What a slot of the value vector stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalKind {
    PrimaryInput(PinIndex),
    GateOutput(GatePos),
    OutputPin(PinIndex),
    Unused,
}

impl SignalLayout {
    pub const fn new(
        num_rows: usize,
        num_cols: usize,
        num_inputs: usize,
        num_outputs: usize,
    ) -> SignalLayout {
        SignalLayout {
            num_rows,
            num_cols,
            num_inputs,
            num_outputs,
        }
    }

    pub const fn gate_count(&self) -> usize {
        self.num_rows * self.num_cols
    }

    /// Size of the value vector, sentinel included.
    pub const fn len(&self) -> usize {
        self.num_inputs + self.gate_count() + self.num_outputs + 1
    }

    pub const fn unused_index(&self) -> SignalIndex {
        self.len() - 1
    }

    pub const fn first_gate_index(&self) -> SignalIndex {
        self.num_inputs
    }

    /// Number of input combinations. Panics on overflow when `num_inputs`
    /// reaches the pointer width; enumerating that many rows is not feasible anyway.
    pub const fn row_count(&self) -> usize {
        1 << self.num_inputs
    }

    pub fn input_index(&self, pin: PinIndex) -> Option<SignalIndex> {
        (pin < self.num_inputs).then_some(pin)
    }

    /// Row-major position of a gate inside the array.
    pub fn gate_slot(&self, pos: GatePos) -> Option<usize> {
        (pos.row < self.num_rows && pos.col < self.num_cols).then(|| pos.row * self.num_cols + pos.col)
    }

    pub fn gate_output_index(&self, pos: GatePos) -> Option<SignalIndex> {
        self.gate_slot(pos).map(|slot| self.first_gate_index() + slot)
    }

    pub fn output_pin_index(&self, pin: PinIndex) -> Option<SignalIndex> {
        (pin < self.num_outputs).then(|| self.num_inputs + self.gate_count() + pin)
    }

    /// `None` for placeholder or out-of-range sources.
    pub fn source_index(&self, source: &SignalSource) -> Option<SignalIndex> {
        match *source {
            SignalSource::Unused => None,
            SignalSource::InputPin(pin) => self.input_index(pin),
            SignalSource::GateOutput(pos) => self.gate_output_index(pos),
        }
    }

    /// Inverse of the addressing functions above.
    pub fn kind(&self, index: SignalIndex) -> Option<SignalKind> {
        let gates_end = self.first_gate_index() + self.gate_count();
        let outputs_end = gates_end + self.num_outputs;
        if index < self.num_inputs {
            Some(SignalKind::PrimaryInput(index))
        } else if index < gates_end {
            let slot = index - self.first_gate_index();
            Some(SignalKind::GateOutput(GatePos::new(
                slot / self.num_cols,
                slot % self.num_cols,
            )))
        } else if index < outputs_end {
            Some(SignalKind::OutputPin(index - gates_end))
        } else if index == self.unused_index() {
            Some(SignalKind::Unused)
        } else {
            None
        }
    }

    /// Fresh value vector for one row: the given inputs, everything else high.
    pub fn seed(&self, inputs: &[bool]) -> Vec<bool> {
        let mut values = vec![true; self.len()];
        for (slot, value) in values.iter_mut().zip(inputs.iter().take(self.num_inputs)) {
            *slot = *value;
        }
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_space_is_partitioned() {
        let layout = SignalLayout::new(2, 3, 2, 1);
        assert_eq!(layout.gate_count(), 6);
        assert_eq!(layout.len(), 2 + 6 + 1 + 1);
        assert_eq!(layout.unused_index(), 9);

        assert_eq!(layout.input_index(1), Some(1));
        assert_eq!(layout.input_index(2), None);
        assert_eq!(layout.gate_output_index(GatePos::new(0, 0)), Some(2));
        assert_eq!(layout.gate_output_index(GatePos::new(1, 0)), Some(5));
        assert_eq!(layout.gate_output_index(GatePos::new(1, 2)), Some(7));
        assert_eq!(layout.output_pin_index(0), Some(8));
        assert_eq!(layout.output_pin_index(1), None);
    }

    #[test]
    fn out_of_range_gates_have_no_address() {
        let layout = SignalLayout::new(2, 3, 2, 1);
        assert_eq!(layout.gate_slot(GatePos::new(2, 0)), None);
        assert_eq!(layout.gate_slot(GatePos::new(0, 3)), None);
        assert_eq!(layout.source_index(&SignalSource::GateOutput(GatePos::new(0, 3))), None);
        assert_eq!(layout.source_index(&SignalSource::Unused), None);
        assert_eq!(layout.source_index(&SignalSource::InputPin(0)), Some(0));
    }

    #[test]
    fn every_index_maps_back_to_one_node() {
        let layout = SignalLayout::new(3, 2, 3, 2);
        for index in 0..layout.len() {
            let kind = layout.kind(index).unwrap();
            let back = match kind {
                SignalKind::PrimaryInput(pin) => layout.input_index(pin),
                SignalKind::GateOutput(pos) => layout.gate_output_index(pos),
                SignalKind::OutputPin(pin) => layout.output_pin_index(pin),
                SignalKind::Unused => Some(layout.unused_index()),
            };
            assert_eq!(back, Some(index), "{:?}", kind);
        }
        assert_eq!(layout.kind(layout.len()), None);
    }

    #[test]
    fn seed_keeps_non_inputs_high() {
        let layout = SignalLayout::new(1, 2, 2, 1);
        let values = layout.seed(&[false, true]);
        assert_eq!(values, vec![false, true, true, true, true, true]);
        assert!(values[layout.unused_index()]);
    }

    #[test]
    fn empty_array_still_has_a_sentinel() {
        let layout = SignalLayout::new(0, 0, 0, 0);
        assert_eq!(layout.len(), 1);
        assert_eq!(layout.unused_index(), 0);
        assert_eq!(layout.row_count(), 1);
        assert_eq!(layout.kind(0), Some(SignalKind::Unused));
    }
}
