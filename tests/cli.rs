// SPDX-License-Identifier: MPL-2.0
use std::fs;
use std::process::Command;
use tempfile::tempdir;

/// Runs the binary and returns `(exit code, stdout, stderr)`.
fn run(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_virgo-i18n"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to run virgo-i18n");
    (
        output.status.code().expect("exited with a code"),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

#[test]
fn locales_marks_the_default() {
    let (code, stdout, _) = run(&["locales"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "en\tEnglish (default)\nit\tItaliano\n");
}

#[test]
fn get_prints_the_translation() {
    assert_eq!(run(&["get", "contact.send", "--lang", "it"]).1, "Invia\n");
    let (code, stdout, _) = run(&["get", "contact.send", "--lang", "en"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "Send\n");
}

#[test]
fn get_accepts_full_language_tags() {
    let (code, stdout, stderr) = run(&["get", "contact.send", "--lang", "it-IT"]);
    assert_eq!(code, 0, "{stderr}");
    assert_eq!(stdout, "Invia\n");
}

#[test]
fn get_rejects_unsupported_locale() {
    let (code, stdout, stderr) = run(&["get", "contact.send", "--lang", "fr"]);
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Unsupported locale: fr"), "{stderr}");
}

#[test]
fn get_reports_missing_key() {
    let (code, stdout, stderr) = run(&["get", "contact.fax", "--lang", "en"]);
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Missing translation key 'contact.fax'"), "{stderr}");
}

#[test]
fn keys_lists_sorted_keys() {
    let (code, stdout, _) = run(&["keys", "--lang", "it"]);
    assert_eq!(code, 0);
    let keys: Vec<&str> = stdout.lines().collect();
    assert_eq!(keys.len(), 67);
    assert!(keys.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(keys.contains(&"faqs.question1"));
}

#[test]
fn check_passes_on_embedded_strings() {
    let (code, stdout, _) = run(&["check"]);
    assert_eq!(code, 0);
    assert_eq!(stdout, "ok: 2 locales share the same keys\n");
}

#[test]
fn check_fails_on_key_drift() {
    let dir = tempdir().expect("failed to create temp dir");
    let en = "\"contact.send\" = \"Send\"\n\"contact.name\" = \"Name\"";
    fs::write(dir.path().join("en.toml"), en).expect("write en");
    fs::write(dir.path().join("it.toml"), "\"contact.send\" = \"Invia\"").expect("write it");

    let dir_arg = dir.path().to_str().expect("utf-8 temp path");
    let (code, stdout, stderr) = run(&["check", "--dir", dir_arg]);
    assert_eq!(code, 1);
    assert!(stdout.is_empty());
    assert!(stderr.contains("it is missing [contact.name]"), "{stderr}");
}

#[test]
fn check_accepts_matching_directory() {
    let dir = tempdir().expect("failed to create temp dir");
    fs::write(dir.path().join("en.toml"), "\"contact.send\" = \"Send\"").expect("write en");
    fs::write(dir.path().join("it.toml"), "\"contact.send\" = \"Invia\"").expect("write it");

    let dir_arg = dir.path().to_str().expect("utf-8 temp path");
    assert_eq!(run(&["check", "--dir", dir_arg]).0, 0);
}

#[test]
fn unknown_arguments_exit_with_usage_error() {
    let (code, _, stderr) = run(&["locales", "extra"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("USAGE"), "{stderr}");
}
