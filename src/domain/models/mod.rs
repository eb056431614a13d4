pub mod analytics;
pub mod filter;
pub mod lead;
pub mod member;
pub mod session;
pub mod user;
