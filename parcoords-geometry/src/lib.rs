pub mod connector;
pub mod hermite;
