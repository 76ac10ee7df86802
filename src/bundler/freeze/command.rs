//! Bundling-tool command composition.
//!
//! Pure assembly of the `-m PyInstaller` argument vector from validated
//! settings. Kept free of IO so the composed recipe is unit-testable.

use crate::bundler::settings::Settings;

/// Composes the interpreter arguments for a freeze run.
///
/// The flag set mirrors the reference recipe: entry script, `--name`,
/// `--noconsole` for windowed builds, `--icon`, one `--add-data` per data
/// file, one `--hidden-import` per module, plus `--noconfirm` so a rerun
/// overwrites prior output, and the explicit dist/work/spec paths.
pub fn compose_args(settings: &Settings) -> Vec<String> {
    let mut args = vec![
        "-m".to_string(),
        "PyInstaller".to_string(),
        settings.entry_script().display().to_string(),
        "--name".to_string(),
        settings.output_name().to_string(),
    ];

    if !settings.console() {
        args.push("--noconsole".to_string());
    }

    if let Some(icon) = settings.icon() {
        args.push("--icon".to_string());
        args.push(icon.display().to_string());
    }

    for data_file in settings.data_files() {
        args.push("--add-data".to_string());
        args.push(data_file.to_argument());
    }

    for module in settings.hidden_imports() {
        args.push("--hidden-import".to_string());
        args.push(module.clone());
    }

    args.push("--noconfirm".to_string());
    args.push("--distpath".to_string());
    args.push(settings.dist_dir().display().to_string());
    args.push("--workpath".to_string());
    args.push(settings.work_dir().display().to_string());
    args.push("--specpath".to_string());
    args.push(settings.spec_dir().display().to_string());

    args
}
