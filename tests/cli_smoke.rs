use std::path::PathBuf;
use std::process::Command;

fn exe() -> PathBuf {
    std::env::var_os("CARGO_BIN_EXE_pagewright")
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let mut p = PathBuf::from("target").join("debug");
            p.push(if cfg!(windows) {
                "pagewright.exe"
            } else {
                "pagewright"
            });
            p
        })
}

fn run(args: &[&str]) -> String {
    let out = Command::new(exe()).args(args).output().unwrap();
    assert!(
        out.status.success(),
        "pagewright {args:?} failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8(out.stdout).unwrap()
}

#[test]
fn cli_dispatch_prints_instructions() {
    let stdout = run(&["dispatch", "--in", "tests/data/home.json"]);
    let v: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let instructions = v.as_array().unwrap();
    assert_eq!(instructions.len(), 6);
    assert_eq!(instructions[1]["anchorId"], "features");
}

#[test]
fn cli_dispatch_honours_opts() {
    let stdout = run(&[
        "dispatch",
        "--in",
        "tests/data/home.json",
        "--opts",
        "tests/data/opts.json",
    ]);
    let v: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(v[0]["props"]["intervalMs"], 4000);
}

#[test]
fn cli_anchors_prints_one_id_per_line() {
    let stdout = run(&["anchors", "--in", "tests/data/scenario.json"]);
    assert_eq!(stdout.lines().collect::<Vec<_>>(), vec!["hero-0", "pricing", "main-2"]);
}

#[test]
fn cli_slugs_and_render_read_a_page_dir() {
    let dir = PathBuf::from("target").join("cli_smoke").join("pages");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("home.json"), include_str!("data/home.json")).unwrap();
    std::fs::write(dir.join("about.json"), include_str!("data/scenario.json")).unwrap();
    let dir_arg = dir.to_string_lossy().to_string();

    let stdout = run(&["slugs", "--dir", dir_arg.as_str()]);
    assert_eq!(stdout.lines().collect::<Vec<_>>(), vec!["/", "about"]);

    let stdout = run(&["render", "--dir", dir_arg.as_str(), "--slug", "about"]);
    let v: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(v.as_array().unwrap().len(), 3);

    let status = Command::new(exe())
        .args(["render", "--dir", dir_arg.as_str(), "--slug", "missing"])
        .output()
        .unwrap()
        .status;
    assert!(!status.success());
}
