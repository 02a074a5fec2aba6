pub mod alternatives;
pub mod analyze;
pub mod dosage;
pub mod entities;
pub mod health;
pub mod interactions;
