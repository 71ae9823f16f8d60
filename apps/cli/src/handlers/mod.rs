pub mod analyze;
pub mod process;
pub mod repair;
