// src/core.rs
pub mod normalizer;
pub mod processor;
pub mod scanner;
