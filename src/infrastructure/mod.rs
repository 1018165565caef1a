// Infrastructure layer - Registry loading and file output
pub mod config;
pub mod writer;
