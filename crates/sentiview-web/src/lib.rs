pub mod cli;
pub mod config;
pub mod page;
pub mod routes;
pub mod state;

pub use cli::Cli;
pub use config::AppConfig;
pub use routes::create_router;
pub use state::AppState;
