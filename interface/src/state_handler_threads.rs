use crossbeam::channel::{Receiver, Sender};
use log::{debug, info};
use nandsim_engine::GateArray;

use crate::update_ops::{CircuitSummary, CircuitUpdateOps, UiUpdateOps};

/// Background loop owning the loaded circuit. Runs until either side of the
/// channel pair hangs up.
pub fn ckt_communicate(
    receiver: Receiver<CircuitUpdateOps>,
    ui_sender: Sender<UiUpdateOps>,
    ctx: egui::Context,
) -> impl FnOnce() {
    move || {
        let mut loaded: Option<GateArray> = None;
        while let Ok(rec) = receiver.recv() {
            let update = match rec {
                CircuitUpdateOps::Load(path) => match GateArray::load(&path) {
                    Ok(array) => {
                        let summary = CircuitSummary::of(&array);
                        info!("loaded {} ({} wire(s))", path.display(), summary.wires);
                        loaded = Some(array);
                        UiUpdateOps::Loaded { path, summary }
                    }
                    Err(e) => UiUpdateOps::Failed(format!("{}: {}", path.display(), e)),
                },
                CircuitUpdateOps::Run { threads } => match &mut loaded {
                    Some(array) => {
                        array.config_mut().threads = threads;
                        UiUpdateOps::Simulated(array.gen_truth_table())
                    }
                    None => UiUpdateOps::Failed("no circuit loaded".to_string()),
                },
            };
            if ui_sender.send(update).is_err() {
                break;
            }
            ctx.request_repaint();
        }
        debug!("circuit thread exiting");
    }
}
