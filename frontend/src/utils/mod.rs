pub mod analytics;
pub mod api;
