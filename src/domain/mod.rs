// Domain layer - Device configuration entities
pub mod backend;
pub mod device_config;
pub mod haptics;
pub mod network;
pub mod pins;
pub mod position;
pub mod timing;
pub mod validation;
