//! Job pilot library

pub mod cli;
pub mod config;
pub mod customizer;
pub mod error;
pub mod input;
pub mod matcher;
pub mod output;
pub mod parser;
pub mod store;

pub use config::Config;
pub use error::{JobPilotError, Result};
