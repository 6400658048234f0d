pub mod catalog;
pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod render;
pub mod resolve;
pub mod search;
pub mod warnings;

pub use catalog::Catalog;
pub use config::SyazaiConfig;
pub use error::{Result, SyazaiError};
pub use resolve::{available_excuses, resolve};
pub use search::{search, search_with, SearchOptions};
