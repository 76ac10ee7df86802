//! Application-level build configuration.

use std::path::PathBuf;

/// Application settings for a freeze run.
///
/// Identifies the program being packaged: the entry script the bundling tool
/// treats as the starting point, the name given to the distributable, and
/// whether a terminal window accompanies the running application.
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Path to the application's top-level executable module.
    pub entry_script: PathBuf,

    /// Name assigned to the generated distributable.
    ///
    /// Also names the executable inside the dist directory.
    pub name: String,

    /// Whether the frozen application keeps a console window.
    ///
    /// GUI applications build windowed by default (the bundling tool is
    /// invoked with its no-console flag).
    pub console: bool,
}
