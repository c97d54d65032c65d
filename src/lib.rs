pub mod app;
pub mod charts;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod predictor;
pub mod stats;
pub mod storage;
pub mod triage;
pub mod ui;
pub mod view;
pub mod state;

pub use app::router;
pub use predictor::Predictor;
pub use state::AppState;
pub use storage::{load_dataset, resolve_dataset_path};
