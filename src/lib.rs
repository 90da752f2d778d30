pub mod app;
pub mod calendar;
pub mod config;
pub mod cursor;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod mood;
pub mod presenter;
pub mod state;
pub mod stats;
pub mod storage;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::load_log;
