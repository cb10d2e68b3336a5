pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod records;
pub mod utils;

pub use error::{AppError, Result};
