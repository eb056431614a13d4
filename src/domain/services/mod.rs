pub mod analytics_service;
pub mod auth_service;
pub mod defaults;
pub mod filter;
pub mod lead_service;
pub mod mutations;
