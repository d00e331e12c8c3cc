pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod recommendations;
pub mod session;
pub mod stats;
pub mod ui;
pub mod state;

pub use app::router;
pub use config::Config;
pub use session::Dashboard;
pub use state::AppState;
