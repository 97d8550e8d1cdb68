//! Integration tests for port commands
//!
//! Covers `resolve-deps` ordering and cycle detection, `port-info` and
//! `resolve-port-name`.

mod common;

use common::{stderr, stdout, TestWorkspace};
use predicates::prelude::*;

#[test]
fn test_libpng_depends_on_zlib() {
    let ws = TestWorkspace::new();
    ws.add_port("zlib", "Compression library", &[]);
    ws.add_port("libpng", "PNG library", &["zlib"]);

    let output = ws.run(&["resolve-deps", "libpng"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "zlib libpng");
}

#[test]
fn test_chain_resolves_dependencies_first() {
    let ws = TestWorkspace::new();
    ws.add_port("a", "A", &["b"]);
    ws.add_port("b", "B", &["c"]);
    ws.add_port("c", "C", &[]);

    let output = ws.run(&["resolve-deps", "a"]);
    assert_eq!(stdout(&output), "c b a");
}

#[test]
fn test_bulk_resolution_has_no_duplicates() {
    let ws = TestWorkspace::new();
    ws.add_port("a", "A", &["b"]);
    ws.add_port("b", "B", &["c"]);
    ws.add_port("c", "C", &[]);

    let output = ws.run(&["resolve_deps", "a", "b", "c"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "c b a");

    let output = ws.run(&["resolve-deps", "c", "a"]);
    assert_eq!(stdout(&output), "c b a");
}

#[test]
fn test_unknown_ports_pass_through() {
    let ws = TestWorkspace::new();

    let output = ws.run(&["resolve-deps", "ghost"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "ghost");
}

#[test]
fn test_cycle_is_reported() {
    let ws = TestWorkspace::new();
    ws.add_port("x", "X", &["y"]);
    ws.add_port("y", "Y", &["x"]);

    let output = ws.run(&["resolve-deps", "x"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(predicate::str::contains("Circular dependency detected: x -> y -> x")
        .eval(stderr(&output).as_str()));
}

#[test]
fn test_port_info_lines() {
    let ws = TestWorkspace::new();
    ws.create_file(
        "sdk/kos-ports/libpng/Makefile",
        "PORTNAME = libpng\n\
         PORTVERSION = 1.6.43\n\
         SHORT_DESC = PNG image library\n\
         GIT_REPOSITORY = https://github.com/pnggroup/libpng.git\n\
         GIT_BRANCH = libpng16\n\
         DEPENDENCIES = zlib # inflate\n",
    );

    let output = ws.run(&["port-info", "libpng"]);
    assert!(output.status.success());
    let lines: Vec<String> = stdout(&output).lines().map(String::from).collect();
    assert_eq!(
        lines,
        vec![
            "PORTNAME=libpng",
            "SHORT_DESC=PNG image library",
            "PORTVERSION=1.6.43",
            "GIT_REPOSITORY=https://github.com/pnggroup/libpng.git",
            "GIT_BRANCH=libpng16",
            "DEPENDENCIES=zlib",
        ]
    );
}

#[test]
fn test_port_info_defaults_and_missing_port() {
    let ws = TestWorkspace::new();
    ws.create_file("sdk/kos-ports/bare/Makefile", "all:\n");

    let output = ws.run(&["port_info", "bare"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(predicate::str::contains("SHORT_DESC=No description").eval(out.as_str()));
    assert!(predicate::str::contains("PORTVERSION=unknown").eval(out.as_str()));

    let output = ws.run(&["port-info", "ghost"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_resolve_port_name_case_insensitive() {
    let ws = TestWorkspace::new();
    ws.add_port("Lua", "Lua scripting", &[]);

    for input in ["Lua", "lua", "LUA"] {
        let output = ws.run(&["resolve-port-name", input]);
        assert!(output.status.success());
        assert_eq!(stdout(&output), "Lua");
    }

    let output = ws.run(&["resolve_port_name", "python"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_resolve_port_name_falls_back_to_host_container() {
    let ws = TestWorkspace::new();
    ws.create_file("projects/kosaio-dev/kos-ports/SDL/Makefile", "SHORT_DESC = SDL\n");

    let output = ws.run(&["resolve-port-name", "sdl"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "SDL");
}
