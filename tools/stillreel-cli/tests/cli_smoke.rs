use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn fixture(name: &str, stills: &[&str]) -> PathBuf {
    let root = std::env::temp_dir().join(name);
    let _ = std::fs::remove_dir_all(&root);
    std::fs::create_dir_all(root.join("stills")).unwrap();
    std::fs::create_dir_all(root.join("xdg")).unwrap();
    for still in stills {
        std::fs::write(root.join("stills").join(still), b"still").unwrap();
    }
    root
}

fn stillreel(root: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_stillreel"))
        .args(args)
        .env("XDG_CONFIG_HOME", root.join("xdg"))
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

#[test]
fn cli_init_then_populate_title_flicker() {
    let root = fixture("stillreel_cli_populate", &["b.jpg", "a.jpg", "c.jpg"]);
    let project = root.join("reel.json");
    let project_arg = project.to_string_lossy().to_string();
    let stills_arg = root.join("stills").to_string_lossy().to_string();

    let init = stillreel(&root, &["init", &project_arg]);
    assert!(init.status.success(), "{init:?}");

    let populate = stillreel(
        &root,
        &[
            "populate",
            &project_arg,
            &stills_arg,
            "--preset",
            "title-flicker",
        ],
    );
    assert!(populate.status.success(), "{populate:?}");
    assert!(String::from_utf8_lossy(&populate.stdout).contains("Placed 3 still(s)"));

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&project).unwrap()).unwrap();
    let events = saved["tracks"][0]["events"].as_array().unwrap();
    assert_eq!(events.len(), 3);
    let starts: Vec<f64> = events
        .iter()
        .map(|e| e["start_secs"].as_f64().unwrap())
        .collect();
    for (actual, expected) in starts.iter().zip([0.0, 0.1, 0.2]) {
        assert!((actual - expected).abs() < 1e-6);
    }
    assert!(events[0]["media_path"].as_str().unwrap().ends_with("a.jpg"));

    let validate = stillreel(&root, &["validate", &project_arg]);
    assert!(validate.status.success());
    assert!(String::from_utf8_lossy(&validate.stdout).contains("Project is valid."));

    std::fs::remove_dir_all(&root).ok();
}

#[test]
fn cli_plan_prints_json() {
    let root = fixture("stillreel_cli_plan", &["1.png", "2.png"]);
    let stills_arg = root.join("stills").to_string_lossy().to_string();

    let output = stillreel(
        &root,
        &["plan", &stills_arg, "--json", "--seed", "5", "--start", "2"],
    );
    assert!(output.status.success(), "{output:?}");

    let placements: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let placements = placements.as_array().unwrap();
    assert_eq!(placements.len(), 2);
    assert_eq!(placements[0]["start_secs"].as_f64().unwrap(), 2.0);
    assert_eq!(placements[1]["start_secs"].as_f64().unwrap(), 5.75);

    std::fs::remove_dir_all(&root).ok();
}

#[test]
fn cli_rejects_overlap_longer_than_still() {
    let root = fixture("stillreel_cli_overlap", &["1.png"]);
    let stills_arg = root.join("stills").to_string_lossy().to_string();

    let output = stillreel(
        &root,
        &["plan", &stills_arg, "--duration", "1", "--overlap", "2"],
    );
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("overlap"));

    std::fs::remove_dir_all(&root).ok();
}
