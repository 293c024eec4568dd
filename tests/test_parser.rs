use act_machines::{Id, MachineMap, ParseError, parse_compiler_list};
use std::collections::BTreeSet;

fn id(value: &str) -> Id {
    Id::new(value).expect("valid id")
}

fn ids(values: &[&str]) -> BTreeSet<Id> {
    values.iter().map(|v| id(v)).collect()
}

#[test]
fn test_parse_empty_list() {
    let machines = parse_compiler_list(Vec::<&str>::new()).expect("parse should succeed");
    assert!(machines.is_empty());
}

#[test]
fn test_parse_groups_compilers_by_machine() {
    let machines = parse_compiler_list([
        "localhost gcc.x86.O0",
        "localhost gcc.x86.O3",
        "localhost clang.x86.O3",
        "farfaraway msvc.x86.O3",
    ])
    .expect("parse should succeed");

    let mut expected = MachineMap::new();
    expected.insert(
        id("localhost"),
        ids(&["gcc.x86.O0", "gcc.x86.O3", "clang.x86.O3"]),
    );
    expected.insert(id("farfaraway"), ids(&["msvc.x86.O3"]));

    assert_eq!(machines, expected);
}

#[test]
fn test_parse_skips_blank_lines() {
    let machines = parse_compiler_list(["", "   ", "m c", "\t"]).expect("parse should succeed");
    assert_eq!(machines.len(), 1);
    assert_eq!(machines[&id("m")], ids(&["c"]));
}

#[test]
fn test_parse_ignores_trailing_tokens() {
    let machines = parse_compiler_list(["m c extra1 extra2"]).expect("parse should succeed");
    assert_eq!(machines.len(), 1);
    assert_eq!(machines[&id("m")], ids(&["c"]));
}

#[test]
fn test_parse_is_deterministic() {
    let lines = vec![
        "b y".to_string(),
        "a x".to_string(),
        "b z".to_string(),
        "a x".to_string(),
    ];
    let first = parse_compiler_list(&lines).expect("first parse");
    let second = parse_compiler_list(&lines).expect("second parse");
    assert_eq!(first, second);
}

#[test]
fn test_parse_rejects_single_token_line() {
    let err = parse_compiler_list(["localhost gcc.x86.O0", "localhost"])
        .expect_err("single token line should fail");

    match err {
        ParseError::MalformedLine { line_number, line } => {
            assert_eq!(line_number, 2);
            assert_eq!(line, "localhost");
        }
        other => panic!("expected malformed line error, got {other:?}"),
    }
}

#[test]
fn test_every_machine_has_a_compiler() {
    let machines = parse_compiler_list(["a x", "", "b y", "a z"]).expect("parse should succeed");
    assert!(machines.values().all(|compilers| !compilers.is_empty()));
}
