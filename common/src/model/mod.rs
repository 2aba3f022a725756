pub mod filters;
pub mod job;
pub mod mapping;
pub mod profile;
pub mod wire;
