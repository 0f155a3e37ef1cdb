pub mod auth;
pub mod health;
pub mod heroes;
pub mod matches;
pub mod statistics;
