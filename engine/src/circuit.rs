use std::{fs, path::Path};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{
    config::SimConfig,
    error::{CircuitError, Result, WiringIssue},
    parallel::simulate_rows_parallel,
    signal::SignalLayout,
    table::{ResultRow, TruthTable},
    types::{GateInputName, GatePos, PinIndex, SignalDestination, SignalSource, WireConnection},
    wiring::{audit, WiringMap},
};

/// A NAND gate array together with its wiring list, as stored in circuit files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateArray {
    pub rows: usize,
    pub cols: usize,
    pub inputs: usize,
    pub outputs: usize,
    #[serde(default)]
    pub wires: Vec<WireConnection>,
    #[serde(default)]
    pub config: SimConfig,
}

impl GateArray {
    pub fn new(rows: usize, cols: usize, inputs: usize, outputs: usize) -> GateArray {
        GateArray {
            rows,
            cols,
            inputs,
            outputs,
            wires: Vec::new(),
            config: SimConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SimConfig) -> GateArray {
        self.config = config;
        self
    }

    pub fn layout(&self) -> SignalLayout {
        SignalLayout::new(self.rows, self.cols, self.inputs, self.outputs)
    }

    pub fn wires(&self) -> &[WireConnection] {
        &self.wires
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut SimConfig {
        &mut self.config
    }

    /// Appends a wire. Nothing is checked here: a later wire into the same
    /// destination replaces this one when the array is resolved.
    pub fn connect(&mut self, from: SignalSource, to: SignalDestination) -> &mut Self {
        self.wires.push(WireConnection::new(from, to));
        self
    }

    pub fn connect_input(&mut self, pin: PinIndex, gate: GatePos, input: GateInputName) -> &mut Self {
        self.connect(SignalSource::InputPin(pin), SignalDestination::GateInput(gate, input))
    }

    pub fn connect_gate(&mut self, from: GatePos, to: GatePos, input: GateInputName) -> &mut Self {
        self.connect(SignalSource::GateOutput(from), SignalDestination::GateInput(to, input))
    }

    pub fn track_output(&mut self, gate: GatePos, pin: PinIndex) -> &mut Self {
        self.connect(SignalSource::GateOutput(gate), SignalDestination::OutputPin(pin))
    }

    pub fn wiring(&self) -> WiringMap {
        WiringMap::resolve(self.layout(), &self.wires)
    }

    pub fn audit(&self) -> Vec<WiringIssue> {
        audit(self.layout(), &self.wires)
    }

    /// Strict check, opt-in: rejects anything the resolver would paper over.
    pub fn validate(&self) -> Result<()> {
        let issues = self.audit();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(CircuitError::Wiring(issues))
        }
    }

    pub fn gen_truth_table(&self) -> TruthTable {
        simulate_rows_parallel(&self.wiring(), self.config.retry_budget, self.config.threads)
    }

    pub fn simulate(&self) -> Vec<ResultRow> {
        self.gen_truth_table().into_rows()
    }

    pub fn from_ron(text: &str) -> Result<GateArray> {
        let array: GateArray = ron::from_str(text)?;
        debug!(
            "parsed {}x{} array with {} wire(s)",
            array.rows,
            array.cols,
            array.wires.len()
        );
        Ok(array)
    }

    pub fn to_ron(&self) -> Result<String> {
        let pretty = ron::ser::PrettyConfig::new().depth_limit(3);
        Ok(ron::ser::to_string_pretty(self, pretty)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<GateArray> {
        let path = path.as_ref();
        info!("loading circuit from {}", path.display());
        let text = fs::read_to_string(path)?;
        GateArray::from_ron(&text)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        info!("saving circuit to {}", path.display());
        fs::write(path, self.to_ron()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RetryBudget;

    const SR_LATCH: &str = include_str!("../circuits/sr_latch.ron");
    const AND: &str = include_str!("../circuits/and.ron");

    #[test]
    fn builder_matches_hand_written_wires() {
        let mut array = GateArray::new(1, 1, 1, 1);
        array
            .connect_input(0, GatePos::new(0, 0), GateInputName::A)
            .track_output(GatePos::new(0, 0), 0);
        assert_eq!(
            array.wires(),
            &[
                WireConnection::input_to_gate(0, GatePos::new(0, 0), GateInputName::A),
                WireConnection::gate_to_output(GatePos::new(0, 0), 0),
            ]
        );
        let outputs: Vec<bool> = array.simulate().into_iter().map(|r| r.outputs[0]).collect();
        assert_eq!(outputs, vec![true, false]);
    }

    #[test]
    fn loads_bundled_circuits() {
        let and = GateArray::from_ron(AND).unwrap();
        assert_eq!((and.rows, and.cols, and.inputs, and.outputs), (1, 2, 2, 1));
        assert!(and.validate().is_ok());
        let outputs: Vec<bool> = and.simulate().into_iter().map(|r| r.outputs[0]).collect();
        assert_eq!(outputs, vec![false, false, false, true]);

        let latch = GateArray::from_ron(SR_LATCH).unwrap();
        assert_eq!(latch.wires().len(), 5);
        assert_eq!(latch.config().retry_budget, RetryBudget::GateCountPlusOne);
    }

    #[test]
    fn optional_sections_default() {
        let array = GateArray::from_ron("(rows: 1, cols: 1, inputs: 1, outputs: 1)").unwrap();
        assert!(array.wires().is_empty());
        assert_eq!(array.config(), &SimConfig::default());
        assert!(array.simulate().iter().all(|r| r.outputs == vec![true]));
    }

    #[test]
    fn ron_text_survives_a_save() {
        let latch = GateArray::from_ron(SR_LATCH).unwrap();
        let text = latch.to_ron().unwrap();
        assert_eq!(GateArray::from_ron(&text).unwrap(), latch);
    }

    #[test]
    fn save_and_load_through_a_file() {
        let path = std::env::temp_dir().join(format!("nandsim-{}.ron", std::process::id()));
        let mut array = GateArray::new(1, 2, 2, 1);
        array
            .connect_input(0, GatePos::new(0, 0), GateInputName::A)
            .connect_gate(GatePos::new(0, 0), GatePos::new(0, 1), GateInputName::B)
            .track_output(GatePos::new(0, 1), 0);
        array.save(&path).unwrap();
        let loaded = GateArray::load(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, array);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = GateArray::load("/definitely/not/here.ron").unwrap_err();
        assert!(matches!(err, CircuitError::Io(_)));
    }

    #[test]
    fn malformed_text_is_a_parse_error() {
        let err = GateArray::from_ron("(rows: 1, cols: )").unwrap_err();
        assert!(matches!(err, CircuitError::Parse(_)));
    }

    #[test]
    fn validate_surfaces_conflicts() {
        let mut array = GateArray::new(1, 1, 2, 1);
        array
            .connect_input(0, GatePos::new(0, 0), GateInputName::A)
            .connect_input(1, GatePos::new(0, 0), GateInputName::A)
            .track_output(GatePos::new(0, 0), 0);
        match array.validate() {
            Err(CircuitError::Wiring(issues)) => {
                assert_eq!(issues.len(), 1);
                assert!(matches!(issues[0], WiringIssue::Overwritten { wire: 1, previous: 0, .. }));
            }
            other => panic!("unexpected {:?}", other),
        }
        // the permissive path still simulates, input 1 wins
        let rows = array.simulate();
        assert_eq!(rows[1].outputs, vec![true]);
        assert_eq!(rows[2].outputs, vec![false]);
    }

    #[test]
    fn threads_setting_does_not_change_results() {
        let latch = GateArray::from_ron(SR_LATCH).unwrap();
        let threaded = latch.clone().with_config(SimConfig {
            threads: 3,
            ..SimConfig::default()
        });
        assert_eq!(latch.gen_truth_table(), threaded.gen_truth_table());
    }
}
