use egui::{Grid, RichText, ScrollArea, Ui};
use nandsim_engine::TruthTable;

use crate::{
    consts::{AMBER_COL, CELL_SPACING},
    true_false_color,
    update_ops::CircuitSummary,
    utils::{bit_str, column_labels},
};

pub fn paint_summary(ui: &mut Ui, summary: &CircuitSummary) {
    ui.label(format!(
        "{}x{} gates, {} input(s), {} output(s), {} wire(s)",
        summary.rows, summary.cols, summary.inputs, summary.outputs, summary.wires
    ));
    if !summary.issues.is_empty() {
        ui.collapsing(format!("{} wiring issue(s)", summary.issues.len()), |ui| {
            for issue in &summary.issues {
                ui.colored_label(AMBER_COL, issue);
            }
        });
    }
}

pub fn paint_truth_table(ui: &mut Ui, table: &TruthTable) {
    let unsettled = table.unsettled().len();
    if unsettled > 0 {
        ui.colored_label(
            AMBER_COL,
            format!("{} row(s) ran out of passes, last values shown", unsettled),
        );
    }

    ScrollArea::both().auto_shrink([false, false]).show(ui, |ui| {
        Grid::new("truth_table")
            .striped(true)
            .spacing(CELL_SPACING)
            .show(ui, |ui| {
                ui.label(RichText::new("#").strong());
                for label in column_labels('I', table.num_inputs()) {
                    ui.label(RichText::new(label).strong().monospace());
                }
                ui.label("|");
                for label in column_labels('O', table.num_outputs()) {
                    ui.label(RichText::new(label).strong().monospace());
                }
                ui.label("");
                ui.end_row();

                for report in table.reports() {
                    ui.label(RichText::new(report.index.to_string()).weak().monospace());
                    for &bit in &report.row.inputs {
                        ui.label(RichText::new(bit_str(bit)).monospace());
                    }
                    ui.label("|");
                    for &bit in &report.row.outputs {
                        ui.label(
                            RichText::new(bit_str(bit))
                                .monospace()
                                .strong()
                                .color(true_false_color!(bit)),
                        );
                    }
                    if report.convergence.is_settled() {
                        ui.label("");
                    } else {
                        ui.colored_label(
                            AMBER_COL,
                            format!("unsettled ({} passes)", report.convergence.passes()),
                        );
                    }
                    ui.end_row();
                }
            });
    });
}
