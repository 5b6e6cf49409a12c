/// Host-facing configuration.
pub mod config;
