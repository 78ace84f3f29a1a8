//! Hosted language model integration

pub mod client;
pub mod prompts;
pub mod analyzer;

pub use client::{GeminiClient, LanguageModel};
