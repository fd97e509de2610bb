use std::collections::HashMap;

use log::{debug, warn};

use crate::{
    error::WiringIssue,
    signal::SignalLayout,
    types::{SignalDestination, SignalIndex, SignalSource, WireConnection},
};

/// Resolved wiring: which signal feeds every gate input and every output pin.
/// Built once per simulation and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WiringMap {
    layout: SignalLayout,
    // [gate slot, [input A, input B]]
    gate_inputs: Vec<[SignalIndex; 2]>,
    output_sources: Vec<SignalIndex>,
}

impl WiringMap {
    /// Applies the wires in order. Later wires into the same destination replace
    /// earlier ones; entries that cannot be resolved fall back to the sentinel
    /// (bad source) or are skipped (bad destination).
    pub fn resolve(layout: SignalLayout, wires: &[WireConnection]) -> WiringMap {
        let unused = layout.unused_index();
        let mut gate_inputs = vec![[unused; 2]; layout.gate_count()];
        let mut output_sources = vec![unused; layout.num_outputs];

        for (n, wire) in wires.iter().enumerate() {
            let source = match layout.source_index(&wire.from) {
                Some(index) => index,
                None => {
                    if wire.from != SignalSource::Unused {
                        warn!("wire #{}: unresolvable source {}, using sentinel", n, wire.from);
                    }
                    unused
                }
            };

            match wire.to {
                SignalDestination::Unused => {
                    debug!("wire #{}: no destination, skipped", n);
                }
                SignalDestination::OutputPin(pin) => match output_sources.get_mut(pin) {
                    Some(slot) => *slot = source,
                    None => warn!("wire #{}: output pin {} out of range, skipped", n, pin),
                },
                SignalDestination::GateInput(pos, input) => match layout.gate_slot(pos) {
                    Some(gate) => gate_inputs[gate][input.slot()] = source,
                    None => warn!("wire #{}: gate {} out of range, skipped", n, pos),
                },
            }
        }

        WiringMap {
            layout,
            gate_inputs,
            output_sources,
        }
    }

    pub fn layout(&self) -> SignalLayout {
        self.layout
    }

    pub fn gate_inputs(&self) -> &[[SignalIndex; 2]] {
        &self.gate_inputs
    }

    pub fn output_sources(&self) -> &[SignalIndex] {
        &self.output_sources
    }

    /// Reads the output pins off a value vector, in pin order.
    pub fn read_outputs(&self, values: &[bool]) -> Vec<bool> {
        self.output_sources.iter().map(|&index| values[index]).collect()
    }
}

/// Lists every irregular entry `resolve` would silently tolerate.
pub fn audit(layout: SignalLayout, wires: &[WireConnection]) -> Vec<WiringIssue> {
    let mut issues = Vec::new();
    let mut drivers: HashMap<SignalDestination, usize> = HashMap::new();

    if layout.num_inputs >= usize::BITS as usize {
        issues.push(WiringIssue::TooManyInputs {
            num_inputs: layout.num_inputs,
        });
    }

    for (wire, connection) in wires.iter().enumerate() {
        match connection.from {
            SignalSource::Unused => issues.push(WiringIssue::UnusedSource { wire }),
            SignalSource::InputPin(pin) if layout.input_index(pin).is_none() => {
                issues.push(WiringIssue::InputPinOutOfRange {
                    wire,
                    pin,
                    num_inputs: layout.num_inputs,
                })
            }
            SignalSource::GateOutput(pos) if layout.gate_slot(pos).is_none() => {
                issues.push(WiringIssue::GateOutOfRange {
                    wire,
                    pos,
                    rows: layout.num_rows,
                    cols: layout.num_cols,
                })
            }
            SignalSource::InputPin(_) | SignalSource::GateOutput(_) => {}
        }

        let in_range = match connection.to {
            SignalDestination::Unused => {
                issues.push(WiringIssue::UnusedDestination { wire });
                false
            }
            SignalDestination::OutputPin(pin) => {
                let ok = layout.output_pin_index(pin).is_some();
                if !ok {
                    issues.push(WiringIssue::OutputPinOutOfRange {
                        wire,
                        pin,
                        num_outputs: layout.num_outputs,
                    });
                }
                ok
            }
            SignalDestination::GateInput(pos, _) => {
                let ok = layout.gate_slot(pos).is_some();
                if !ok {
                    issues.push(WiringIssue::GateOutOfRange {
                        wire,
                        pos,
                        rows: layout.num_rows,
                        cols: layout.num_cols,
                    });
                }
                ok
            }
        };

        if in_range {
            if let Some(previous) = drivers.insert(connection.to, wire) {
                issues.push(WiringIssue::Overwritten {
                    wire,
                    previous,
                    destination: connection.to,
                });
            }
        }
    }
    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GateInputName, GatePos};

    const G00: GatePos = GatePos::new(0, 0);
    const G01: GatePos = GatePos::new(0, 1);

    #[test]
    fn unconnected_slots_point_at_sentinel() {
        let layout = SignalLayout::new(1, 2, 2, 2);
        let map = WiringMap::resolve(layout, &[]);
        let unused = layout.unused_index();
        assert_eq!(map.gate_inputs(), &[[unused; 2], [unused; 2]]);
        assert_eq!(map.output_sources(), &[unused, unused]);
    }

    #[test]
    fn wires_land_in_their_slots() {
        let layout = SignalLayout::new(1, 2, 2, 1);
        let map = WiringMap::resolve(
            layout,
            &[
                WireConnection::input_to_gate(0, G00, GateInputName::A),
                WireConnection::input_to_gate(1, G00, GateInputName::B),
                WireConnection::gate_to_gate(G00, G01, GateInputName::A),
                WireConnection::gate_to_output(G01, 0),
            ],
        );
        let unused = layout.unused_index();
        assert_eq!(map.gate_inputs(), &[[0, 1], [2, unused]]);
        assert_eq!(map.output_sources(), &[3]);
    }

    #[test]
    fn last_wire_into_a_destination_wins() {
        let layout = SignalLayout::new(1, 1, 2, 1);
        let map = WiringMap::resolve(
            layout,
            &[
                WireConnection::input_to_gate(0, G00, GateInputName::A),
                WireConnection::input_to_gate(1, G00, GateInputName::A),
            ],
        );
        assert_eq!(map.gate_inputs()[0][0], 1);
    }

    #[test]
    fn unused_source_resets_the_destination() {
        let layout = SignalLayout::new(1, 1, 1, 1);
        let map = WiringMap::resolve(
            layout,
            &[
                WireConnection::gate_to_output(G00, 0),
                WireConnection::new(SignalSource::Unused, SignalDestination::OutputPin(0)),
            ],
        );
        assert_eq!(map.output_sources(), &[layout.unused_index()]);
    }

    #[test]
    fn bad_sources_and_destinations_degrade_quietly() {
        let layout = SignalLayout::new(1, 1, 1, 1);
        let map = WiringMap::resolve(
            layout,
            &[
                WireConnection::input_to_gate(5, G00, GateInputName::A),
                WireConnection::gate_to_output(GatePos::new(3, 3), 0),
                WireConnection::input_to_gate(0, GatePos::new(0, 9), GateInputName::B),
                WireConnection::new(SignalSource::InputPin(0), SignalDestination::OutputPin(4)),
                WireConnection::new(SignalSource::InputPin(0), SignalDestination::Unused),
            ],
        );
        let unused = layout.unused_index();
        assert_eq!(map.gate_inputs(), &[[unused, unused]]);
        assert_eq!(map.output_sources(), &[unused]);
    }

    #[test]
    fn audit_reports_what_resolve_tolerates() {
        let layout = SignalLayout::new(1, 1, 1, 1);
        let wires = [
            WireConnection::input_to_gate(0, G00, GateInputName::A),
            WireConnection::input_to_gate(3, G00, GateInputName::A),
            WireConnection::gate_to_output(GatePos::new(1, 0), 0),
            WireConnection::new(SignalSource::Unused, SignalDestination::Unused),
            WireConnection::new(SignalSource::InputPin(0), SignalDestination::OutputPin(2)),
        ];
        let issues = audit(layout, &wires);
        assert_eq!(
            issues,
            vec![
                WiringIssue::InputPinOutOfRange {
                    wire: 1,
                    pin: 3,
                    num_inputs: 1
                },
                WiringIssue::Overwritten {
                    wire: 1,
                    previous: 0,
                    destination: SignalDestination::GateInput(G00, GateInputName::A),
                },
                WiringIssue::GateOutOfRange {
                    wire: 2,
                    pos: GatePos::new(1, 0),
                    rows: 1,
                    cols: 1
                },
                WiringIssue::UnusedSource { wire: 3 },
                WiringIssue::UnusedDestination { wire: 3 },
                WiringIssue::OutputPinOutOfRange {
                    wire: 4,
                    pin: 2,
                    num_outputs: 1
                },
            ]
        );
    }

    #[test]
    fn clean_wiring_audits_clean() {
        let layout = SignalLayout::new(1, 2, 2, 1);
        let wires = [
            WireConnection::input_to_gate(0, G00, GateInputName::A),
            WireConnection::input_to_gate(1, G00, GateInputName::B),
            WireConnection::gate_to_gate(G00, G01, GateInputName::A),
            WireConnection::gate_to_output(G01, 0),
        ];
        assert!(audit(layout, &wires).is_empty());
    }
}
