pub mod actions;
pub mod core;
pub mod portal_query;
pub mod server;
pub mod types;
