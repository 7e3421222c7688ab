pub mod config;
pub mod server;
pub mod logger;
pub mod loader;
pub mod paginator;
pub mod user;
mod query_string;
mod text_utils;
mod view;
