// The settings file is located through XDG_CONFIG_HOME.
#![cfg(target_os = "linux")]

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn run(config_home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_miyoo-gamelist"))
        .args(args)
        .env("HOME", config_home)
        .env("XDG_CONFIG_HOME", config_home)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run miyoo-gamelist")
}

fn write_settings(config_home: &Path, contents: &str) -> std::path::PathBuf {
    let dir = config_home.join("miyoo-gamelist");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("settings.toml");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn missing_root_exits_with_error() {
    let config = TempDir::new().unwrap();
    let roms = TempDir::new().unwrap();
    let missing = roms.path().join("N64");

    let output = run(
        config.path(),
        &["generate", "--root", missing.to_str().unwrap()],
    );

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error:"), "stderr: {stderr}");
    assert!(stderr.contains(missing.to_str().unwrap()), "stderr: {stderr}");
    assert!(!missing.exists());
}

#[test]
fn no_subcommand_generates_from_settings() {
    let config = TempDir::new().unwrap();
    let roms = TempDir::new().unwrap();
    fs::write(roms.path().join("Mario.z64"), b"\0").unwrap();
    fs::write(roms.path().join("readme.txt"), b"").unwrap();
    write_settings(
        config.path(),
        &format!("[catalog]\nrom_dir = \"{}\"\n", roms.path().display()),
    );

    let output = run(config.path(), &[]);

    assert!(output.status.success(), "{:?}", output);
    let xml = fs::read_to_string(roms.path().join("miyoogamelist.xml")).unwrap();
    assert!(xml.contains("<path>./Mario.z64</path>"));
    assert!(xml.contains("<name>Mario</name>"));
    assert!(!xml.contains("readme"));
}

#[test]
fn dry_run_writes_nothing() {
    let config = TempDir::new().unwrap();
    let roms = TempDir::new().unwrap();
    fs::write(roms.path().join("Zelda.n64"), b"\0").unwrap();

    let output = run(
        config.path(),
        &["generate", "-n", "--root", roms.path().to_str().unwrap()],
    );

    assert!(output.status.success(), "{:?}", output);
    assert!(String::from_utf8_lossy(&output.stdout).contains("Zelda"));
    assert!(!roms.path().join("miyoogamelist.xml").exists());
}

#[test]
fn set_root_keeps_malformed_settings() {
    let config = TempDir::new().unwrap();
    let roms = TempDir::new().unwrap();
    let original = "[catalog]\noutput_name = \"list.xml\"\nextensions = [\".gba\"\n";
    let settings = write_settings(config.path(), original);

    let output = run(
        config.path(),
        &["config", "set-root", roms.path().to_str().unwrap()],
    );

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(fs::read_to_string(&settings).unwrap(), original);
}
