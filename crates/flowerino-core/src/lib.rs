pub mod constants;
pub mod error;
pub mod identity;
pub mod settings;
pub mod version;
