//! Display formatting for terminal output

pub mod budget;
pub mod scenario;
pub mod suggestions;

pub use budget::{format_budget, format_summary};
pub use scenario::format_optimization;
pub use suggestions::format_suggestions;
