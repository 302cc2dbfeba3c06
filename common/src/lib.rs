pub mod admin;
pub mod datetime;
pub mod env_config;
pub mod error;
pub mod http;
pub mod serial;
