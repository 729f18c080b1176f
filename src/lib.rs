// Configuration table for the wearable tracking device
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
