pub mod error;
pub mod health;
pub mod registration;
