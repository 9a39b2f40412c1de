pub mod cli;
pub mod config;
pub mod error;
pub mod graph;
pub mod session;
pub mod universe;
