pub mod config;
mod error;
mod record;
mod stats;

pub use error::*;
pub use record::*;
pub use stats::*;
