//! Terminal front end for the medicine inventory.
//!
//! `shell::run` drives a `MedicineController` whose prompt is a
//! `Terminal`, so alerts, confirmations and form input all share one
//! input/output pair.

pub mod cmd_args;
pub mod shell;
pub mod terminal;

pub use cmd_args::CommandLineArgs;
pub use terminal::Terminal;
