pub mod handlers;
pub mod logging;
pub mod server;
pub mod state;

pub use logging::init_logging;
pub use server::{create_router, run_server, ServerConfig};
pub use state::AppState;
