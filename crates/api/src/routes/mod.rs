pub mod cinema;
pub mod health;
