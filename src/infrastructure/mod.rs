// Infrastructure layer - external dependencies and adapters
pub mod config;
pub mod display_time;
pub mod feed_client;
pub mod transport;
