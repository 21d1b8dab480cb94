pub mod config;
pub mod logging;

pub mod cycle;
pub mod delta;
pub mod fetcher;
pub mod filename;
pub mod source;
pub mod store;
