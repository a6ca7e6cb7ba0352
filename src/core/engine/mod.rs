pub mod aggregate;
pub mod pms;
pub mod traits;
