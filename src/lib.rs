// Public modules
pub mod types;
pub mod error;
pub mod config;
pub mod session;
pub mod checks;
pub mod matcher;
pub mod bulk;
pub mod report;
pub mod controller;
pub mod cli;

// Re-export commonly used items
pub use types::*;
pub use error::CheckPauseError;
pub use config::{load_config, load_config_with_env, resolve_token, EnvironmentProvider, SystemEnvironment, MockEnvironment};
pub use session::ApiSession;
pub use checks::fetch_all;
pub use matcher::filter;
pub use bulk::{apply_bulk, encode_ids};
pub use report::{render_preview, render_report, Outcome};
pub use controller::run;
