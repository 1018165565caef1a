// Domain layer - Registry records and dashboard document models
pub mod dashboard;
pub mod device;
pub mod style;
