//! Hidden-import resolvability checks.
//!
//! A hidden import is a module the bundling tool must include despite not
//! detecting it statically. The tool cannot tell a typo from a genuinely
//! dynamic import, so each declared module is resolved up front through the
//! interpreter's own import machinery.

use super::PythonInterpreter;
use crate::bundler::error::{Error, Result};

/// Checks that every declared hidden import resolves in the active
/// environment.
///
/// Each module name runs through `importlib.util.find_spec` in the selected
/// interpreter. Only declared imports are checked; omitting a required one
/// is not detectable at packaging time.
pub async fn resolve_hidden_imports(
    python: &PythonInterpreter,
    modules: &[String],
) -> Result<()> {
    for module in modules {
        if !is_valid_module_name(module) {
            return Err(Error::HiddenImportName(module.clone()));
        }

        let probe = format!(
            "import importlib.util, sys; \
             sys.exit(0 if importlib.util.find_spec(\"{}\") is not None else 1)",
            module
        );

        let status = python
            .command()
            .args(["-c", probe.as_str()])
            .status()
            .await
            .map_err(|error| Error::CommandFailed {
                command: format!("{} -c <find_spec {}>", python.path().display(), module),
                error,
            })?;

        if !status.success() {
            return Err(Error::HiddenImportUnresolved {
                module: module.clone(),
                interpreter: python.path().to_path_buf(),
            });
        }

        log::debug!("Hidden import {} resolves", module);
    }

    Ok(())
}

/// Validates a dotted module name before it is embedded in probe code.
fn is_valid_module_name(name: &str) -> bool {
    !name.is_empty()
        && name.split('.').all(|part| {
            !part.is_empty()
                && part
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || c == '_')
                && !part.starts_with(|c: char| c.is_ascii_digit())
        })
}
