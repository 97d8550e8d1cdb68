//! Integration tests for discovery and status commands
//!
//! Covers `search`, `update-cache`, `list-ports`, `get-installed-ids` and
//! `status`: ordering, record format, installed filtering, broken host
//! state and idempotence.

mod common;

use common::{stderr, stdout, TestWorkspace};
use predicates::prelude::*;

fn populated_workspace() -> TestWorkspace {
    let ws = TestWorkspace::new();
    ws.add_registry_tool("tools", "kos", "core", "KallistiOS SDK");
    ws.add_registry_tool("emulators", "flycast", "emulator", "Dreamcast | emulator");
    ws.add_port("zlib", "Compression | library", &[]);
    ws.add_port("libpng", "PNG library", &["zlib"]);
    ws
}

#[test]
fn test_update_cache_emits_one_record_per_target() {
    let ws = populated_workspace();

    let output = ws.run(&["update-cache"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    let ids: Vec<&str> = lines
        .iter()
        .map(|line| line.split('|').next().unwrap_or_default())
        .collect();
    assert_eq!(ids, vec!["kos", "flycast", "libpng", "zlib"]);

    for line in &lines {
        assert_eq!(line.matches('|').count(), 5, "bad record: {line}");
    }
    assert!(predicate::str::contains("Dreamcast   emulator").eval(out.as_str()));
}

#[test]
fn test_update_cache_skips_sample_scripts() {
    let ws = TestWorkspace::new();
    ws.create_file(
        "kosaio/scripts/registry/tools/template.sh.sample",
        "ID=\"template\"\nTYPE=\"tool\"\n",
    );

    let output = ws.run(&["update_cache"]);
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_search_table_lists_matches() {
    let ws = populated_workspace();

    let output = ws.run(&["search", "png"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(predicate::str::contains("STATUS:").eval(out.as_str()));
    assert!(predicate::str::contains("[PORT]").eval(out.as_str()));
    assert!(predicate::str::contains("libpng").eval(out.as_str()));
    assert!(!predicate::str::contains("flycast").eval(out.as_str()));
}

#[test]
fn test_search_category_alias() {
    let ws = TestWorkspace::new();
    ws.add_port("libGL", "OpenGL implementation", &[]);
    ws.add_port("zlib", "Compression library", &[]);

    let output = ws.run(&["--json", "search", "opengl"]);
    assert!(output.status.success());
    let results: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let ids: Vec<&str> = results
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|entry| entry["id"].as_str())
        .collect();
    assert_eq!(ids, vec!["libGL"]);
}

#[test]
fn test_search_json_carries_status() {
    let ws = populated_workspace();
    ws.create_dir("sdk/extras/flycast");

    let output = ws.run(&["search", "flycast", "--json"]);
    assert!(output.status.success());
    let results: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let entry = &results[0];
    assert_eq!(entry["id"], "flycast");
    assert_eq!(entry["type"], "emulator");
    assert_eq!(entry["status"]["system"], "installed");
    assert_eq!(entry["status"]["host"], "not-present");
    assert_eq!(entry["status"]["active"], "system");
}

#[test]
fn test_search_installed_filter() {
    let ws = populated_workspace();
    ws.create_dir("sdk/extras/flycast");

    let output = ws.run(&["search", "-i"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(predicate::str::contains("flycast").eval(out.as_str()));
    assert!(!predicate::str::contains("libpng").eval(out.as_str()));
}

#[test]
fn test_search_without_matches() {
    let ws = populated_workspace();

    let output = ws.run(&["search", "nothing-matches-this"]);
    assert!(output.status.success());
    assert!(predicate::str::contains("No matches found").eval(stdout(&output).as_str()));
}

#[test]
fn test_list_ports_table() {
    let ws = populated_workspace();
    ws.create_dir("sdk/kos-ports/include");

    let output = ws.run(&["list-ports"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(predicate::str::starts_with("LIBRARY").eval(out.as_str()));
    assert!(predicate::str::contains("libpng").eval(out.as_str()));
    assert!(predicate::str::contains("zlib").eval(out.as_str()));
    assert!(!predicate::str::contains("include").eval(out.as_str()));
}

#[test]
fn test_list_ports_without_container_is_empty() {
    let ws = TestWorkspace::new();

    let output = ws.run(&["list_ports"]);
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_installed_ids() {
    let ws = populated_workspace();
    ws.create_dir("sdk/extras/flycast");
    ws.create_file("sdk/kos-ports/lib/.kos-ports/zlib", "1.3.1\n");
    // Sources only: not installed
    ws.create_dir("sdk/kos");

    let output = ws.run(&["get-installed-ids"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "flycast zlib");
}

#[test]
fn test_status_of_installed_sdk() {
    let ws = populated_workspace();
    ws.create_file("sdk/kos/lib/dreamcast/libkallisti.a", "");

    let output = ws.run(&["status", "kos"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "o|x|system");
}

#[test]
fn test_status_reports_broken_host() {
    let ws = populated_workspace();
    ws.create_dir("sdk/extras/flycast");
    ws.mark_host("flycast");

    let output = ws.run(&["status", "flycast"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "o|!|host");

    let output = ws.run(&["--json", "status", "flycast"]);
    let status: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(status["id"], "flycast");
    assert_eq!(status["host"], "broken");
    assert_eq!(status["active"], "host");
}

#[test]
fn test_status_of_port_uses_canonical_name() {
    let ws = TestWorkspace::new();
    ws.add_port("Lua", "Lua scripting", &[]);
    ws.create_dir("projects/kosaio-dev/kos-ports/Lua/dist");

    let output = ws.run(&["status", "lua"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "x|c|system");
}

#[test]
fn test_status_of_unknown_target_exits_one() {
    let ws = TestWorkspace::new();

    let output = ws.run(&["status", "ghost"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_queries_are_idempotent() {
    let ws = populated_workspace();
    ws.create_dir("sdk/extras/flycast");
    ws.mark_host("kos");

    for args in [
        &["update-cache"][..],
        &["search", ""][..],
        &["status", "kos"][..],
        &["get-installed-ids"][..],
        &["resolve-deps", "libpng"][..],
    ] {
        let first = ws.run(args);
        let second = ws.run(args);
        assert_eq!(first.status.code(), second.status.code());
        assert_eq!(first.stdout, second.stdout, "output of {args:?} changed");
    }
}
