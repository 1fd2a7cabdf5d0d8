use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::CliTest;

#[test]
fn test_config_file_locales_and_messages_root() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".localegapsrc.json",
        r#"{
            "locales": ["en", "ja"],
            "messagesDir": "./messages"
        }"#,
    )?;
    test.write_file("messages/en.json", r#"{"a": "A", "b": "B"}"#)?;
    test.write_file("messages/ja.json", r#"{"a": "エー"}"#)?;
    // Not configured, so ignored
    test.write_locale("mm", r#"{"zzz": "Z"}"#)?;

    let output = test.run(&mut test.command())?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("JA (1 missing):"));
    assert!(output.stdout.contains(r#"  - b (ref: en: "B")"#));
    assert!(!output.stdout.contains("zzz"));

    Ok(())
}

#[test]
fn test_cli_flags_override_config_file() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".localegapsrc.json", r#"{ "locales": ["en", "mm"] }"#)?;
    test.write_locale("en", r#"{"a": "A"}"#)?;
    test.write_locale("mm", r#"{}"#)?;
    test.write_locale("th", r#"{"a": "ก", "b": "ข"}"#)?;

    let output = test.run(
        test.command()
            .args(["--locales", "th,mm", "--base-locale", "th"]),
    )?;

    assert_eq!(output.code, Some(0));
    // Configured order is th, mm; en is not loaded at all
    assert!(output.stdout.contains("MM (2 missing):"));
    assert!(output.stdout.contains(r#"  - a (ref: th: "ก")"#));
    assert!(output.stdout.contains(r#""b": "ข","#));
    assert!(!output.stdout.contains("EN"));

    Ok(())
}

#[test]
fn test_root_flag() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("app/.localegapsrc.json", r#"{ "locales": ["en", "cn"] }"#)?;
    test.write_file("app/src/i18n/locales/en.json", r#"{"a": "A"}"#)?;
    test.write_file("app/src/i18n/locales/cn.json", r#"{}"#)?;

    let root = test.root().join("app");
    let output = test.run(test.command().arg("--root").arg(&root))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("CN (1 missing):"));
    assert!(output.stdout.contains(r#""a": "A","#));

    Ok(())
}

fn write_nested_project(test: &CliTest) -> Result<()> {
    test.write_file(
        ".localegapsrc.json",
        r#"{"locales": ["en", "ja"], "messagesRoot": "msgs"}"#,
    )?;
    test.write_file("msgs/en.json", r#"{"a": "A", "b": "B"}"#)?;
    test.write_file("msgs/ja.json", r#"{"a": "エー"}"#)?;
    test.write_file("sub/README.md", "")?;
    Ok(())
}

#[test]
fn test_config_found_from_subdirectory() -> Result<()> {
    let test = CliTest::new()?;
    write_nested_project(&test)?;

    let output = test.run(test.command().current_dir(test.root().join("sub")))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("JA (1 missing):"));
    assert!(output.stdout.contains(r#""b": "B","#));

    Ok(())
}

#[test]
fn test_parent_config_messages_root_is_relative_to_config() -> Result<()> {
    let test = CliTest::new()?;
    write_nested_project(&test)?;

    let sub = test.root().join("sub");
    let output = test.run(test.command().arg("--root").arg(&sub))?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("JA (1 missing):"));
    assert!(!output.stderr.contains("messages directory does not exist"));

    Ok(())
}

#[test]
fn test_messages_root_env() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("translations/en.json", r#"{"a": "A"}"#)?;
    test.write_file("translations/th.json", r#"{}"#)?;

    let output = test.run(
        test.command()
            .env("LOCALE_GAPS_MESSAGES_ROOT", "translations"),
    )?;

    assert_eq!(output.code, Some(0));
    assert!(output.stdout.contains("TH (1 missing):"));

    Ok(())
}

#[test]
fn test_invalid_config_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".localegapsrc.json", r#"{ "locales": ["en", "en"] }"#)?;
    test.write_locale("en", r#"{"a": "A"}"#)?;

    let output = test.run(&mut test.command())?;

    assert_eq!(output.code, Some(2));
    assert_eq!(output.stdout, "");
    assert!(output.stderr.contains("Duplicate locale"));

    Ok(())
}

#[test]
fn test_malformed_config_is_fatal() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".localegapsrc.json", r#"{ "locales": "#)?;

    let output = test.run(&mut test.command())?;

    assert_eq!(output.code, Some(2));
    assert!(output.stderr.contains("Failed to parse config file"));

    Ok(())
}
