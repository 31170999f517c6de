pub mod blogs;
pub mod health;
