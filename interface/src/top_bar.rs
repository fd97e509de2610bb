use egui::{Button, DragValue, TextEdit, Ui};

use crate::{app::ViewerSettings, consts::MAX_THREADS, true_false_color, update_ops::SyncState};

pub enum TopBarOption {
    Load,
    Run,
}

pub fn top_bar(
    ui: &mut Ui,
    settings: &mut ViewerSettings,
    sync: &SyncState,
    loaded: bool,
) -> Option<TopBarOption> {
    let mut picked = None;
    ui.horizontal(|ui| {
        ui.label("Circuit");
        let path_edit = ui.add(
            TextEdit::singleline(&mut settings.path)
                .hint_text("circuits/and.ron")
                .desired_width(260.0),
        );
        let enter = path_edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        let idle = !matches!(sync, SyncState::NotSynced);

        if ui
            .add_enabled(idle && !settings.path.trim().is_empty(), Button::new("Load"))
            .clicked()
            || (enter && idle)
        {
            picked = Some(TopBarOption::Load);
        }
        if ui.add_enabled(idle && loaded, Button::new("Run")).clicked() {
            picked = Some(TopBarOption::Run);
        }
        ui.add(
            DragValue::new(&mut settings.threads)
                .range(1..=MAX_THREADS)
                .prefix("threads: "),
        );

        ui.separator();
        match sync {
            SyncState::NotSynced => {
                ui.spinner();
            }
            SyncState::Synced => {
                ui.colored_label(true_false_color!(true), "ready");
            }
            SyncState::Error(_) => {
                ui.colored_label(true_false_color!(false), sync.error_msg());
            }
        }
    });
    picked
}
