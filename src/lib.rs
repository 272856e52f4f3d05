pub mod analyzer;
pub mod api_connection;
pub mod cli;
pub mod config;
pub mod server;
