pub mod aggregate;
pub mod app;
pub mod config;
pub mod errors;
pub mod fetcher;
pub mod format;
pub mod handlers;
pub mod models;
pub mod notify;
pub mod period;
pub mod sections;
pub mod session;
pub mod state;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use state::AppState;
