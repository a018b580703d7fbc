pub mod app;
pub mod calendar;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod progress;
pub mod state;
pub mod storage;
pub mod summary;
pub mod ticker;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
pub use storage::{JsonFileStorage, Storage};
