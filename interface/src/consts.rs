pub const WINDOW_WIDTH: f32 = 720.0;
pub const WINDOW_HEIGHT: f32 = 540.0;
pub const CELL_SPACING: [f32; 2] = [14.0, 4.0];
pub const MAX_THREADS: usize = 64;

pub const RED_COL: egui::Color32 = egui::Color32::from_rgb(139, 0, 0);
pub const GREEN_COL: egui::Color32 = egui::Color32::from_rgb(34, 139, 34);
pub const AMBER_COL: egui::Color32 = egui::Color32::from_rgb(205, 133, 0);
