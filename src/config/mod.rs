//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::BudgetPaths;
pub use settings::Settings;
