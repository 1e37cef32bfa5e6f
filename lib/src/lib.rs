//! Entregas Backend Library

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod repository;
pub mod schema;
pub mod services;

pub use api::create_app;
pub use config::Config;
pub use error::{Error, Result};
