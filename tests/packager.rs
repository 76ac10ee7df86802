//! End-to-end tests driving the compiled binary against a fake Python
//! interpreter.
//!
//! The fake interpreter is a shell script that emulates the `-m pip` and
//! `-m PyInstaller` entry points, so the full pipeline runs without a real
//! Python toolchain. Unix-only, since the fake is a shell script.

#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Fake interpreter behaviour knobs.
struct FakePython {
    /// Version string reported by `-m PyInstaller --version`.
    tool_version: &'static str,
    /// When set, the build step prints to stderr and exits with this code
    /// instead of producing a bundle.
    fail_build_with: Option<i32>,
}

impl Default for FakePython {
    fn default() -> Self {
        Self {
            tool_version: "6.6.0",
            fail_build_with: None,
        }
    }
}

/// Writes the fake interpreter into `dir` and returns its path.
///
/// The script touches `pip.marker` beside itself when the install step runs,
/// which lets tests assert ordering (validation before any install side
/// effect). Probes for modules containing "ghost" fail, emulating an
/// unresolvable hidden import.
fn write_fake_python(dir: &Path, fake: &FakePython) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let marker = dir.join("pip.marker");
    let build_body = match fake.fail_build_with {
        Some(code) => format!("echo \"error: analysis failed\" >&2\nexit {}", code),
        None => r#"name=""
dist="dist"
prev=""
for a in "$@"; do
  case "$prev" in
    --name) name="$a" ;;
    --distpath) dist="$a" ;;
  esac
  prev="$a"
done
mkdir -p "$dist/$name"
printf '#!/bin/sh\nexit 0\n' > "$dist/$name/$name"
chmod +x "$dist/$name/$name"
echo "INFO: Building COLLECT COLLECT-00.toc completed successfully."
exit 0"#
            .to_string(),
    };

    let script = format!(
        r#"#!/bin/sh
if [ "$1" = "--version" ]; then
  echo "Python 3.12.2"
  exit 0
fi
if [ "$1" = "-c" ]; then
  case "$2" in
    *ghost*) exit 1 ;;
  esac
  exit 0
fi
if [ "$1" = "-m" ]; then
  mod="$2"
  shift 2
  case "$mod" in
    pip)
      echo "Successfully installed pyinstaller-{tool_version}"
      touch "{marker}"
      exit 0
      ;;
    PyInstaller)
      if [ "$1" = "--version" ]; then
        echo "{tool_version}"
        exit 0
      fi
      {build_body}
      ;;
  esac
fi
exit 0
"#,
        tool_version = fake.tool_version,
        marker = marker.display(),
        build_body = build_body,
    );

    let path = dir.join("fake-python");
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Writes a minimal entry script and a valid PNG icon into `dir`.
fn write_app_inputs(dir: &Path) {
    fs::write(dir.join("app.py"), "print('hello')\n").unwrap();
    image::RgbaImage::new(16, 16)
        .save(dir.join("icon.png"))
        .unwrap();
}

fn pyfreeze(dir: &Path, python: &Path) -> Command {
    let mut cmd = Command::cargo_bin("pyfreeze").unwrap();
    cmd.current_dir(dir)
        .arg("--no-pause")
        .arg("--python")
        .arg(python);
    cmd
}

#[test]
fn packages_entry_script_into_dist_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let python = write_fake_python(tmp.path(), &FakePython::default());
    write_app_inputs(tmp.path());

    pyfreeze(tmp.path(), &python)
        .args(["--entry", "app.py", "--name", "App"])
        .args(["--icon", "icon.png"])
        .args(["--hidden-import", "cv2"])
        .assert()
        .success();

    let executable = tmp.path().join("dist/App/App");
    assert!(executable.is_file(), "executable missing after exit code 0");
    assert!(tmp.path().join("pip.marker").exists(), "install step skipped");
}

#[test]
fn missing_entry_script_fails_before_any_side_effect() {
    let tmp = tempfile::tempdir().unwrap();
    let python = write_fake_python(tmp.path(), &FakePython::default());

    pyfreeze(tmp.path(), &python)
        .args(["--entry", "absent.py", "--name", "App"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("entry script not found"));

    assert!(!tmp.path().join("pip.marker").exists(), "pip ran anyway");
    assert!(!tmp.path().join("dist").exists(), "artifacts were created");
}

#[test]
fn missing_icon_aborts_without_usable_output() {
    let tmp = tempfile::tempdir().unwrap();
    let python = write_fake_python(tmp.path(), &FakePython::default());
    write_app_inputs(tmp.path());

    pyfreeze(tmp.path(), &python)
        .args(["--entry", "app.py", "--name", "App"])
        .args(["--icon", "nope.ico"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("icon file not found"));

    assert!(!tmp.path().join("pip.marker").exists());
    assert!(!tmp.path().join("dist/App").exists());
}

#[test]
fn missing_data_file_source_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let python = write_fake_python(tmp.path(), &FakePython::default());
    write_app_inputs(tmp.path());

    pyfreeze(tmp.path(), &python)
        .args(["--entry", "app.py", "--name", "App"])
        .args(["--add-data", "missing.json;assets"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("data file source not found"));
}

#[test]
fn unresolvable_hidden_import_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let python = write_fake_python(tmp.path(), &FakePython::default());
    write_app_inputs(tmp.path());

    pyfreeze(tmp.path(), &python)
        .args(["--entry", "app.py", "--name", "App"])
        .args(["--hidden-import", "ghost_module"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ghost_module"));

    assert!(!tmp.path().join("pip.marker").exists(), "pip ran anyway");
}

#[test]
fn rerunning_with_identical_inputs_overwrites_cleanly() {
    let tmp = tempfile::tempdir().unwrap();
    let python = write_fake_python(tmp.path(), &FakePython::default());
    write_app_inputs(tmp.path());

    for _ in 0..2 {
        pyfreeze(tmp.path(), &python)
            .args(["--entry", "app.py", "--name", "App"])
            .assert()
            .success();
    }

    assert!(tmp.path().join("dist/App/App").is_file());
}

#[test]
fn skip_install_bypasses_pip() {
    let tmp = tempfile::tempdir().unwrap();
    let python = write_fake_python(tmp.path(), &FakePython::default());
    write_app_inputs(tmp.path());

    pyfreeze(tmp.path(), &python)
        .args(["--entry", "app.py", "--name", "App", "--skip-install"])
        .assert()
        .success();

    assert!(!tmp.path().join("pip.marker").exists(), "pip ran anyway");
    assert!(tmp.path().join("dist/App/App").is_file());
}

#[test]
fn tool_failure_propagates_child_exit_code() {
    let tmp = tempfile::tempdir().unwrap();
    let python = write_fake_python(
        tmp.path(),
        &FakePython {
            fail_build_with: Some(7),
            ..Default::default()
        },
    );
    write_app_inputs(tmp.path());

    pyfreeze(tmp.path(), &python)
        .args(["--entry", "app.py", "--name", "App"])
        .assert()
        .failure()
        .code(7)
        .stderr(predicate::str::contains("analysis failed"));
}

#[test]
fn outdated_tool_release_is_rejected() {
    let tmp = tempfile::tempdir().unwrap();
    let python = write_fake_python(
        tmp.path(),
        &FakePython {
            tool_version: "3.5",
            ..Default::default()
        },
    );
    write_app_inputs(tmp.path());

    pyfreeze(tmp.path(), &python)
        .args(["--entry", "app.py", "--name", "App"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("minimum supported"));
}

#[test]
fn report_file_contains_artifact_summary() {
    let tmp = tempfile::tempdir().unwrap();
    let python = write_fake_python(tmp.path(), &FakePython::default());
    write_app_inputs(tmp.path());

    pyfreeze(tmp.path(), &python)
        .args(["--entry", "app.py", "--name", "App"])
        .args(["--report", "report.json"])
        .assert()
        .success();

    let report = fs::read_to_string(tmp.path().join("report.json")).unwrap();
    assert!(report.contains("\"name\": \"App\""));
    assert!(report.contains("\"checksum\""));
    assert!(report.contains("\"tool_version\": \"6.6.0\""));
}

#[test]
fn manifest_recipe_drives_build() {
    let tmp = tempfile::tempdir().unwrap();
    let python = write_fake_python(tmp.path(), &FakePython::default());

    // Copy the reference recipe fixture beside a generated icon.
    let fixture = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/pycam");
    fs::copy(fixture.join("pycam.py"), tmp.path().join("pycam.py")).unwrap();
    fs::copy(
        fixture.join("pyfreeze.toml"),
        tmp.path().join("pyfreeze.toml"),
    )
    .unwrap();
    fs::create_dir_all(tmp.path().join("assets")).unwrap();
    fs::copy(
        fixture.join("assets/palette.json"),
        tmp.path().join("assets/palette.json"),
    )
    .unwrap();
    image::RgbaImage::new(32, 32)
        .save(tmp.path().join("pycam.png"))
        .unwrap();

    pyfreeze(tmp.path(), &python).assert().success();

    assert!(tmp.path().join("dist/PyCam/PyCam").is_file());
}
