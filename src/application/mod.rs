// Application layer - Grouping and dashboard assembly
pub mod builder;
pub mod grouping;
