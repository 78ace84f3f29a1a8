//! Resume tailor library

pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod processing;
pub mod llm;
pub mod output;
pub mod pipeline;
pub mod session;

pub use error::{Result, ResumeTailorError};
pub use config::Config;
