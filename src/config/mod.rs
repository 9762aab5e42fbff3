//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::QbudgetPaths;
pub use settings::Settings;
