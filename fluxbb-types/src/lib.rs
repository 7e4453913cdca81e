pub mod models;
pub mod enums;
pub mod config;

pub use models::*;
pub use enums::*;
pub use config::*;
