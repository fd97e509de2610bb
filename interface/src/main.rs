use nandsim_viewer::{
    consts::{WINDOW_HEIGHT, WINDOW_WIDTH},
    SimulatorUI,
};

fn main() -> eframe::Result {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    // optional circuit file to open right away
    let path = std::env::args().nth(1);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([WINDOW_WIDTH, WINDOW_HEIGHT])
            .with_min_inner_size([360.0, 240.0]),
        ..Default::default()
    };
    eframe::run_native(
        "NAND gate array",
        native_options,
        Box::new(|cc| Ok(Box::new(SimulatorUI::new(cc, path)))),
    )
}
