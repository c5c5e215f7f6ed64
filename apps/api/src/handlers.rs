pub mod apis;
pub mod audit;
pub mod health;
