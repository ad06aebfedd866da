// tests/ui_sends_events_only.rs
// Fails if the presentation layer takes mutable access to the engine's
// stores. The UI must read state and send request events; only the
// handler systems under src/tables/systems may mutate the registry or
// the layout store.

use std::fs;
use std::path::{Path, PathBuf};

fn collect_rs_files(dir: &Path, files: &mut Vec<PathBuf>) {
    if let Ok(entries) = fs::read_dir(dir) {
        for e in entries.flatten() {
            let p = e.path();
            if p.is_dir() {
                collect_rs_files(&p, files);
            } else if p.extension().map(|s| s == "rs").unwrap_or(false) {
                files.push(p);
            }
        }
    }
}

#[test]
fn ui_never_takes_mutable_engine_state() {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let ui_dir = Path::new(manifest_dir).join("src").join("ui");

    let mut files = Vec::new();
    collect_rs_files(&ui_dir, &mut files);
    assert!(!files.is_empty(), "expected UI sources under src/ui");

    let bad_patterns = [
        "ResMut<TableRegistry>",
        "ResMut<LayoutStore>",
        "ResMut<GridConfig>",
        "ResMut<ProductHierarchy>",
    ];

    let mut offenders: Vec<(String, String)> = Vec::new();

    for file in files {
        let content = match fs::read_to_string(&file) {
            Ok(c) => c,
            Err(_) => continue,
        };
        for pat in &bad_patterns {
            if content.contains(pat) {
                offenders.push((file.to_string_lossy().to_string(), pat.to_string()));
            }
        }
    }

    if !offenders.is_empty() {
        let mut msg = String::from("UI code takes mutable engine state:\n");
        for (file, pat) in offenders {
            msg.push_str(&format!(
                "  {} contains '{}': send a request event instead\n",
                file, pat
            ));
        }
        panic!("{}", msg);
    }
}
