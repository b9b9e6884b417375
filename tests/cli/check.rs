use anyhow::Result;
use insta_cmd::assert_cmd_snapshot;

use crate::{CliTest, stderr, stdout};

#[test]
fn test_consistent_locales() -> Result<()> {
    let test = CliTest::with_file(
        "dictionaries/en.json",
        r#"{ "Common": { "greeting": "Hi {{name}}", "save": "Save" } }"#,
    )?;
    test.write_file(
        "dictionaries/fr.json",
        r#"{ "Common": { "greeting": "Salut {{name}}", "save": "Enregistrer" } }"#,
    )?;

    assert_cmd_snapshot!(test.check_command(), @r"
    success: true
    exit_code: 0
    ----- stdout -----
    ✓ Checked 2 dictionary files - no issues found

    ----- stderr -----
    ");

    Ok(())
}

#[test]
fn test_missing_path_and_placeholder_mismatch() -> Result<()> {
    let test = CliTest::with_file(
        "dictionaries/en.json",
        r#"{ "Common": { "greeting": "Hi {{name}}", "save": "Save" } }"#,
    )?;
    test.write_file(
        "dictionaries/fr.json",
        r#"{ "Common": { "greeting": "Salut {{nom}}" } }"#,
    )?;

    assert_cmd_snapshot!(test.check_command(), @r#"
    success: true
    exit_code: 0
    ----- stdout -----
    warning: "Common.save" is missing in fr  missing-path
      --> ./dictionaries/fr.json
      = note: defined in primary locale en

    warning: "Common.greeting" has different placeholders in fr  placeholder-mismatch
      --> ./dictionaries/fr.json
      = note: en expects [name], fr has [nom]

    ✘ 2 problems (0 errors, 2 warnings)

    ----- stderr -----
    "#);

    Ok(())
}

#[test]
fn test_parse_error_fails_check() -> Result<()> {
    let test = CliTest::with_file("dictionaries/en.json", r#"{ "save": "Save" }"#)?;
    test.write_file("dictionaries/de.json", r#"{ "save": "#)?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(1));

    let out = stdout(&output);
    assert!(out.contains("parse-error"), "stdout: {}", out);
    assert!(out.contains("--> ./dictionaries/de.json"), "stdout: {}", out);
    assert!(out.contains("1 problem (1 error, 0 warnings)"), "stdout: {}", out);

    Ok(())
}

#[test]
fn test_structure_error_fails_check() -> Result<()> {
    let test = CliTest::with_file(
        "dictionaries/en.json",
        r#"{ "a.b": "dotted", "a": { "b": "nested" } }"#,
    )?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("error: duplicate path \"a.b\"  structure"));

    Ok(())
}

#[test]
fn test_locales_compared_per_directory() -> Result<()> {
    let test = CliTest::with_file("dictionaries/app/en.json", r#"{ "title": "App" }"#)?;
    test.write_file("dictionaries/app/fr.json", r#"{ "title": "Appli" }"#)?;
    test.write_file("dictionaries/admin/en.json", r#"{ "users": "Users" }"#)?;
    test.write_file("dictionaries/admin/fr.json", r#"{}"#)?;

    let output = test.check_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let out = stdout(&output);
    assert!(out.contains("\"users\" is missing in fr"), "stdout: {}", out);
    assert!(out.contains("--> ./dictionaries/admin/fr.json"), "stdout: {}", out);
    assert!(!out.contains("title"), "stdout: {}", out);

    Ok(())
}

#[test]
fn test_ignores_pattern() -> Result<()> {
    let test = CliTest::with_file("dictionaries/en.json", r#"{ "save": "Save" }"#)?;
    test.write_file("dictionaries/drafts/en.json", r#"{ broken"#)?;
    test.write_file(".dictumrc.json", r#"{ "ignores": ["drafts/**"] }"#)?;

    let output = test.check_command().output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "\u{2713} Checked 1 dictionary file - no issues found\n"
    );

    Ok(())
}

#[test]
fn test_primary_locale_override() -> Result<()> {
    let test = CliTest::with_file("dictionaries/en.json", r#"{ "a": "A" }"#)?;
    test.write_file("dictionaries/de.json", r#"{ "a": "A", "b": "B" }"#)?;

    let output = test
        .check_command()
        .args(["--primary-locale", "de"])
        .output()?;
    let out = stdout(&output);
    assert!(out.contains("\"b\" is missing in en"), "stdout: {}", out);

    Ok(())
}

#[test]
fn test_missing_primary_locale() -> Result<()> {
    let test = CliTest::with_file("dictionaries/fr.json", r#"{ "a": "A" }"#)?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        stderr(&output),
        "Error: Primary locale 'en' dictionary not found in './dictionaries'\n"
    );

    Ok(())
}

#[test]
fn test_missing_dictionaries_directory() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.check_command().output()?;
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Dictionaries directory './dictionaries' does not exist."));
    assert!(stderr(&output).contains("dictionariesRoot"));

    Ok(())
}

#[test]
fn test_dictionaries_root_flag() -> Result<()> {
    let test = CliTest::with_file("i18n/en.json", r#"{ "a": "A" }"#)?;

    let output = test
        .check_command()
        .args(["--dictionaries-root", "i18n"])
        .output()?;
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    Ok(())
}

#[test]
fn test_verbose_notes() -> Result<()> {
    let test = CliTest::with_file("dictionaries/en.json", r#"{ "a": "A" }"#)?;

    let output = test.check_command().arg("-v").output()?;
    let err = stderr(&output);
    assert!(
        err.contains("Note: No .dictumrc.json found, using default configuration"),
        "stderr: {}",
        err
    );
    assert!(
        err.contains("Note: Found 1 dictionary file(s) in './dictionaries'"),
        "stderr: {}",
        err
    );

    Ok(())
}

#[test]
fn test_help() -> Result<()> {
    let test = CliTest::new()?;

    let output = test.command().arg("--help").output()?;
    assert!(output.status.success());
    let out = stdout(&output);
    for command in ["flatten", "get", "placeholders", "check", "init"] {
        assert!(out.contains(command), "help should list {}", command);
    }

    Ok(())
}
