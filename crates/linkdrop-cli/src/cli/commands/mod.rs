//! CLI command handlers, one file per command.

mod pending;
mod run;
mod status;

pub use pending::run_pending;
pub use run::run_poll;
pub use status::run_status;
