use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;
use serde_json::Value;

use crate::{CliTest, stderr, stdout};

const DICTIONARY: &str = r#"{
  "title": "Dashboard",
  "Auth": {
    "Login": {
      "title": "Sign in",
      "hint": "Welcome back, {{name}}"
    },
    "providers": ["GitHub", "Google"]
  },
  "limit": 10
}"#;

#[test]
fn test_flatten_listing() -> Result<()> {
    let test = CliTest::with_file("en.json", DICTIONARY)?;

    assert_cmd_snapshot!(test.command().args(["flatten", "en.json"]), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    title = "Dashboard"
    Auth = {2 entries}
    limit = 10
    Auth.Login = {2 entries}
    Auth.Login.title = "Sign in"
    Auth.Login.hint = "Welcome back, {{name}}"
    Auth.providers = [2 items]

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_flatten_json() -> Result<()> {
    let test = CliTest::with_file("en.json", DICTIONARY)?;

    let output = test.command().args(["flatten", "en.json", "--json"]).output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let json: Value = serde_json::from_str(&stdout(&output))?;
    let paths: Vec<&str> = json
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(
        paths,
        vec![
            "title",
            "Auth",
            "limit",
            "Auth.Login",
            "Auth.Login.title",
            "Auth.Login.hint",
            "Auth.providers",
        ]
    );
    assert_eq!(json["Auth.Login.title"], "Sign in");
    assert_eq!(json["Auth.providers"][1], "Google");
    assert_eq!(json["Auth"]["Login"]["title"], "Sign in");

    Ok(())
}

#[test]
fn test_flatten_duplicate_path_fails() -> Result<()> {
    let test = CliTest::with_file(
        "en.json",
        r#"{ "a.b": "dotted", "a": { "b": "nested" } }"#,
    )?;

    let output = test.command().args(["flatten", "en.json"]).output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("duplicate path \"a.b\""));

    Ok(())
}

#[test]
fn test_flatten_respects_max_depth() -> Result<()> {
    let test = CliTest::with_file("en.json", DICTIONARY)?;
    test.write_file(".dictumrc.json", r#"{ "maxDepth": 2 }"#)?;

    let output = test.command().args(["flatten", "en.json"]).output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(
        stderr(&output).contains("\"Auth.Login.title\" exceeds the maximum depth of 2"),
        "stderr: {}",
        stderr(&output)
    );

    Ok(())
}

#[test]
fn test_flatten_rejects_non_object_root() -> Result<()> {
    let test = CliTest::with_file("en.json", r#"["not", "a", "dict"]"#)?;

    let output = test.command().args(["flatten", "en.json"]).output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Dictionary root must be a JSON object, found an array"));

    Ok(())
}
