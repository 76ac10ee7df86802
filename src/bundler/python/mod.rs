//! Python toolchain integration.
//!
//! Interpreter discovery and probing, bundling-tool installation through pip,
//! and hidden-import resolution checks.

mod imports;
mod interpreter;
mod pip;

pub use imports::resolve_hidden_imports;
pub use interpreter::PythonInterpreter;
pub use pip::{check_tool_version, install_tool, minimum_tool_version, tool_version};
