pub mod app_error;
pub mod config;
pub mod register;
pub mod render;
