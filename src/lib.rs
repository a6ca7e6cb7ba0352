pub mod core;
pub mod inputs;

// Re-export key items for easy importing in this crate
pub use crate::core::types;

// Re-export key items for easy importing in other crates
pub use crate::core::engine::aggregate::{Report, ReportAggregator};
pub use crate::core::engine::pms::{PMS_THRESHOLD, compute_pms, partition};
pub use crate::core::engine::traits::{ClassSelector, LineFormatter, MutationSource};
pub use crate::core::main_shared::run_main;
pub use inputs::Inputs;
