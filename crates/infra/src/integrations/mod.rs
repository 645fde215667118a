//! External service integrations

pub mod meet;
