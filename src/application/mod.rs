// Application layer - Use cases and ports
pub mod config_service;
pub mod config_source;
