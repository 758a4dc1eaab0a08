pub mod find;
pub mod project;
pub mod settings;
pub mod setup;
