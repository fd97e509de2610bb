pub mod app;
pub mod consts;
pub mod state_handler_threads;
pub mod table_view;
pub mod top_bar;
pub mod update_ops;
pub mod utils;

pub use app::SimulatorUI;
