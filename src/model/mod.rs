pub mod config;
pub mod desk;
pub mod email;
pub mod filter;

pub use config::*;
pub use desk::*;
pub use email::*;
pub use filter::*;
