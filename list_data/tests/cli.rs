use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn list_data(cwd: &Path, home: &Path) -> Command {
    let bin = std::env::var("CARGO_BIN_EXE_list_data").expect("binary path not set by cargo");
    let mut cmd = Command::new(bin);
    cmd.current_dir(cwd).env("HOME", home).env("NO_COLOR", "1");
    cmd
}

fn json_entries(output: &Output) -> Vec<String> {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let json: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    json.as_array()
        .expect("json array")
        .iter()
        .map(|v| v.as_str().expect("string entry").to_string())
        .collect()
}

fn sorted(mut entries: Vec<String>) -> Vec<String> {
    entries.sort();
    entries
}

#[test]
fn unset_pwd_lists_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let output = list_data(tmp.path(), tmp.path())
        .env_remove("PWD")
        .arg("--json")
        .output()
        .expect("failed to run list_data");
    assert!(json_entries(&output).is_empty());
}

#[test]
fn missing_root_lists_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let output = list_data(tmp.path(), tmp.path())
        .env("PWD", tmp.path().join("nope"))
        .arg("--json")
        .output()
        .expect("failed to run list_data");
    assert!(json_entries(&output).is_empty());
}

#[test]
fn flat_root_lists_its_files_in_human_mode() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("root");
    let work = tmp.path().join("work");
    fs::create_dir_all(&root).unwrap();
    fs::create_dir_all(&work).unwrap();
    fs::write(root.join("a.txt"), b"a").unwrap();
    fs::write(root.join("b.txt"), b"b").unwrap();

    let output = list_data(&work, tmp.path())
        .env("PWD", &root)
        .output()
        .expect("failed to run list_data");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<String> = stdout.lines().map(String::from).collect();
    assert_eq!(sorted(lines), vec!["a.txt", "b.txt"]);
}

#[test]
fn bare_names_resolve_against_the_working_directory() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("root");
    let work = tmp.path().join("work");
    fs::create_dir_all(root.join("real_subdir")).unwrap();
    fs::write(root.join("real_subdir").join("inside.txt"), b"i").unwrap();
    fs::write(root.join("shared"), b"file in root").unwrap();
    fs::create_dir_all(work.join("shared")).unwrap();
    fs::write(work.join("shared").join("spurious.txt"), b"s").unwrap();

    let output = list_data(&work, tmp.path())
        .env("PWD", &root)
        .arg("--json")
        .output()
        .expect("failed to run list_data");
    let entries = json_entries(&output);

    // The root's own subdirectory is not descended, the working directory's is.
    assert_eq!(entries.len(), 3);
    assert_eq!(sorted(entries[..2].to_vec()), vec!["real_subdir", "shared"]);
    assert_eq!(entries[2], "spurious.txt");

    let output = list_data(&work, tmp.path())
        .env("PWD", &root)
        .args(["--json", "--joined"])
        .output()
        .expect("failed to run list_data --joined");
    let entries = json_entries(&output);
    assert_eq!(entries.len(), 3);
    assert_eq!(sorted(entries[..2].to_vec()), vec!["real_subdir", "shared"]);
    assert_eq!(entries[2], "inside.txt");
}

#[test]
fn self_referencing_name_is_bounded_by_max_depth() {
    let tmp = tempfile::tempdir().unwrap();
    let work = tmp.path().join("work");
    fs::create_dir_all(work.join("loop").join("loop")).unwrap();

    let output = list_data(&work, tmp.path())
        .env("PWD", work.join("loop"))
        .args(["--json", "--max-depth", "3"])
        .output()
        .expect("failed to run list_data");
    assert_eq!(json_entries(&output), vec!["loop"; 4]);
}

#[test]
fn repeated_runs_agree() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("root");
    fs::create_dir_all(root.join("d")).unwrap();
    for name in ["x", "y", "z"] {
        fs::write(root.join(name), name).unwrap();
    }

    let run = || {
        list_data(tmp.path(), tmp.path())
            .env("PWD", &root)
            .arg("--json")
            .output()
            .expect("failed to run list_data")
    };
    assert_eq!(json_entries(&run()), json_entries(&run()));
}

#[test]
fn config_file_selects_traversal_and_format() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("root");
    fs::create_dir_all(root.join("sub")).unwrap();
    fs::write(root.join("sub").join("leaf.txt"), b"l").unwrap();
    let config = tmp.path().join("custom.toml");
    fs::write(
        &config,
        "root_var = \"LIST_ROOT\"\ntraversal = \"joined\"\ndefault_format = \"ndjson\"\n",
    )
    .unwrap();

    let output = list_data(tmp.path(), tmp.path())
        .env_remove("PWD")
        .env("LIST_ROOT", &root)
        .arg("--config")
        .arg(&config)
        .output()
        .expect("failed to run list_data");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "\"sub\"\n\"leaf.txt\"\n"
    );
}

#[test]
fn broken_config_warns_and_still_lists() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("root");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("only.txt"), b"o").unwrap();
    let config_dir = tmp.path().join(".config").join("list_data");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "traversal = 42\n").unwrap();

    let output = list_data(tmp.path(), tmp.path())
        .env("PWD", &root)
        .arg("--json")
        .output()
        .expect("failed to run list_data");
    assert_eq!(json_entries(&output), vec!["only.txt"]);
    assert!(String::from_utf8_lossy(&output.stderr).contains("Ignoring config"));
}

#[test]
fn init_then_set_updates_the_config_file() {
    let tmp = tempfile::tempdir().unwrap();
    let config_path = tmp
        .path()
        .join(".config")
        .join("list_data")
        .join("config.toml");

    let status = list_data(tmp.path(), tmp.path())
        .arg("init")
        .status()
        .expect("failed to run list_data init");
    assert!(status.success());
    assert!(config_path.is_file());

    let status = list_data(tmp.path(), tmp.path())
        .args(["config", "--set", "default_format", "csv"])
        .status()
        .expect("failed to run list_data config --set");
    assert!(status.success());
    let contents = fs::read_to_string(&config_path).unwrap();
    assert!(contents.contains("default_format = \"csv\""));

    let status = list_data(tmp.path(), tmp.path())
        .args(["config", "--set", "traversal", "sideways"])
        .status()
        .expect("failed to run list_data config --set");
    assert!(!status.success());
}

#[test]
fn verbose_reports_on_stderr_only() {
    let tmp = tempfile::tempdir().unwrap();
    let output = list_data(tmp.path(), tmp.path())
        .env_remove("PWD")
        .args(["--json", "-v"])
        .output()
        .expect("failed to run list_data -v");
    assert!(json_entries(&output).is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("PWD is not set"));
    assert!(stderr.contains("0 entries"));
}
