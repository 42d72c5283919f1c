pub mod config;
pub mod controller;
pub mod error;
pub mod types;
