use std::{path::PathBuf, thread};

use crossbeam::channel::{self, Receiver, Sender};
use log::error;
use nandsim_engine::TruthTable;
use serde::{Deserialize, Serialize};

use crate::{
    state_handler_threads::ckt_communicate,
    table_view::{paint_summary, paint_truth_table},
    top_bar::{top_bar, TopBarOption},
    update_ops::{CircuitSummary, CircuitUpdateOps, SyncState, UiUpdateOps},
};

/// Persisted between sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    pub path: String,
    pub threads: usize,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        ViewerSettings {
            path: String::new(),
            threads: 1,
        }
    }
}

pub struct SimulatorUI {
    pub settings: ViewerSettings,
    sender: Sender<CircuitUpdateOps>,
    receiver: Receiver<UiUpdateOps>,
    sync: SyncState,
    loaded: Option<(PathBuf, CircuitSummary)>,
    table: Option<TruthTable>,
}

impl SimulatorUI {
    pub fn new(cc: &eframe::CreationContext<'_>, path: Option<String>) -> Self {
        let mut settings: ViewerSettings = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        let preload = path.is_some();
        if let Some(path) = path {
            settings.path = path;
        }
        let mut sim = Self::with_settings(cc.egui_ctx.clone(), settings);
        if preload {
            sim.load();
        }
        sim
    }

    pub fn with_settings(ctx: egui::Context, settings: ViewerSettings) -> Self {
        let (sender, receiver) = channel::unbounded();
        let (ui_sender, ui_receiver) = channel::unbounded();
        thread::spawn(ckt_communicate(receiver, ui_sender, ctx));
        Self {
            settings,
            sender,
            receiver: ui_receiver,
            sync: SyncState::Synced,
            loaded: None,
            table: None,
        }
    }

    pub fn sync(&self) -> &SyncState {
        &self.sync
    }

    pub fn table(&self) -> Option<&TruthTable> {
        self.table.as_ref()
    }

    pub fn load(&mut self) {
        let path = PathBuf::from(self.settings.path.trim());
        self.emit_event(CircuitUpdateOps::Load(path));
    }

    pub fn run(&mut self) {
        let threads = self.settings.threads.max(1);
        self.emit_event(CircuitUpdateOps::Run { threads });
    }

    pub fn emit_event(&mut self, ev: CircuitUpdateOps) {
        match self.sender.send(ev) {
            Ok(()) => self.sync = SyncState::NotSynced,
            Err(err) => {
                error!("{}", err);
                self.sync = SyncState::Error("circuit thread stopped".to_string());
            }
        }
    }

    pub fn handle_update(&mut self, update: UiUpdateOps) {
        match update {
            UiUpdateOps::Loaded { path, summary } => {
                self.loaded = Some((path, summary));
                self.table = None;
                self.sync = SyncState::Synced;
                // a fresh circuit is always worth a table
                self.run();
            }
            UiUpdateOps::Simulated(table) => {
                self.table = Some(table);
                self.sync = SyncState::Synced;
            }
            UiUpdateOps::Failed(msg) => {
                self.sync = SyncState::Error(msg);
            }
        }
    }

    fn drain_updates(&mut self) {
        while let Ok(update) = self.receiver.try_recv() {
            self.handle_update(update);
        }
    }

    fn ui(&mut self, ui: &mut egui::Ui) {
        match &self.loaded {
            Some((path, summary)) => {
                ui.heading(path.display().to_string());
                paint_summary(ui, summary);
            }
            None => {
                ui.heading("No circuit loaded");
                ui.label("Enter the path of a .ron circuit description and press Load.");
            }
        }
        ui.separator();
        if let Some(table) = &self.table {
            paint_truth_table(ui, table);
        }
    }
}

impl eframe::App for SimulatorUI {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.drain_updates();

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            let picked = top_bar(ui, &mut self.settings, &self.sync, self.loaded.is_some());
            match picked {
                Some(TopBarOption::Load) => self.load(),
                Some(TopBarOption::Run) => self.run(),
                None => {}
            }
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.settings);
    }
}
