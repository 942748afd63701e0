use crate::format::{format_json, format_json_with};
use crate::parser::{Node, parse};

// ── formatting: scalars ──────────────────────────────────────────

#[test]
fn format_keyword_literals() {
    assert_eq!(format_json("true").unwrap(), "true");
    assert_eq!(format_json("false").unwrap(), "false");
    assert_eq!(format_json("null").unwrap(), "null");
}

#[test]
fn format_numbers_verbatim() {
    for n in [
        "-1",
        "0",
        "1",
        "-1.5",
        "-1e5",
        "-1E5",
        "-0.5E5",
        "-0.5e+5",
        "-0.5e-5",
        "1234567890",
    ] {
        assert_eq!(format_json(n).unwrap(), n);
    }
}

#[test]
fn format_number_with_leading_zeros() {
    // Deliberately lenient number grammar: leading zeros pass through.
    assert_eq!(format_json("0012").unwrap(), "0012");
}

#[test]
fn format_string_canonicalizes_escapes() {
    let out = format_json(r#""Hello 世\u754c\"""#).unwrap();
    assert_eq!(out, r#""Hello 世界\"""#);
}

#[test]
fn equivalent_escape_spellings_collapse() {
    assert_eq!(format_json(r#""a""#).unwrap(), r#""a""#);
    assert_eq!(format_json(r#""\u0061""#).unwrap(), r#""a""#);
}

// ── formatting: containers ───────────────────────────────────────

#[test]
fn empty_containers_have_no_internal_whitespace() {
    assert_eq!(format_json("{}").unwrap(), "{}");
    assert_eq!(format_json("[]").unwrap(), "[]");
    assert_eq!(format_json(" { } ").unwrap(), "{}");
}

#[test]
fn format_nested_object() {
    let out = format_json(r#"{"x":1,"y":{"z":2},"u":"v"}"#).unwrap();
    let expected = r#"{
  "x": 1,
  "y": {
    "z": 2
  },
  "u": "v"
}"#;
    assert_eq!(out, expected);
}

#[test]
fn format_nested_array() {
    let out = format_json("[1,[2,3],4]").unwrap();
    let expected = "[\n  1,\n  [\n    2,\n    3\n  ],\n  4\n]";
    assert_eq!(out, expected);
}

#[test]
fn empty_containers_nest_inline() {
    let out = format_json(r#"{"a":{},"b":[]}"#).unwrap();
    assert_eq!(out, "{\n  \"a\": {},\n  \"b\": []\n}");
}

#[test]
fn default_indent_is_two_spaces() {
    let src = r#"{"a":[1]}"#;
    assert_eq!(
        format_json(src).unwrap(),
        format_json_with(src, "  ").unwrap()
    );
}

#[test]
fn indent_unit_applies_once_per_level() {
    let out = format_json_with("[[1]]", "\t").unwrap();
    assert_eq!(out, "[\n\t[\n\t\t1\n\t]\n]");
}

// ── laws ─────────────────────────────────────────────────────────

#[test]
fn formatting_is_idempotent() {
    for src in [
        r#"{"x":1,"y":{"z":2},"u":"v"}"#,
        "[1,[2,3],4]",
        r#"{"s":"a\nb","dup":1,"dup":2,"e":[],"o":{}}"#,
        "  [ true,false , null ]  ",
        "0012",
    ] {
        let once = format_json(src).unwrap();
        assert_eq!(format_json(&once).unwrap(), once);
    }
}

#[test]
fn structural_round_trip() {
    for src in [
        r#"{"x":1,"y":{"z":2},"u":"v"}"#,
        "[1,[2,3],4]",
        r#"[{"a":null},{"a":true},"x"]"#,
    ] {
        let direct = parse(src).unwrap();
        let reparsed = parse(&format_json(src).unwrap()).unwrap();
        assert_eq!(direct, reparsed);
    }
}

#[test]
fn round_trip_preserves_decoded_string_content() {
    // The escape spelling changes but the reparsed node is the canonical
    // spelling of the same content.
    let src = r#"["\u0061"]"#;
    let reparsed = parse(&format_json(src).unwrap()).unwrap();
    assert_eq!(
        reparsed,
        Node::Array(vec![Node::String(r#""a""#.to_string())])
    );
}

#[test]
fn duplicate_keys_survive_formatting() {
    let out = format_json(r#"{"k":1,"k":2}"#).unwrap();
    assert_eq!(out, "{\n  \"k\": 1,\n  \"k\": 2\n}");
}

// ── errors ───────────────────────────────────────────────────────

#[test]
fn format_reports_parse_errors() {
    assert_eq!(format_json("").unwrap_err().message, "expected value");
    assert_eq!(format_json("{").unwrap_err().message, "expected pair");
    assert_eq!(format_json("[1,]").unwrap_err().message, "expected value");
    assert_eq!(format_json("[1").unwrap_err().message, "expected ']'");
}

#[test]
fn syntax_error_display() {
    let err = format_json("{").unwrap_err();
    assert_eq!(err.to_string(), "syntax error: expected pair");
}
