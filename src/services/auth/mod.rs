pub mod access_jwt;
pub mod bearer;
pub mod factory;

pub use access_jwt::{AuthRejection, AuthService};
pub use factory::build_auth_service;
