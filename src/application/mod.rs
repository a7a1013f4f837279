pub mod admin;
pub mod services;
