//! Command implementations

pub mod config;
pub mod name;
pub mod parse;
