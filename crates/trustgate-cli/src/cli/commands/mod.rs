//! CLI command handlers. Each command is in its own file.

mod check;
mod completions;
mod extensions;

pub use check::run_check;
pub use completions::{run_completions, run_man};
pub use extensions::{run_extensions_gate, run_extensions_list, run_extensions_show};
