//! Tests for config file handling during resolution.

use std::io::Write;

use tempfile::NamedTempFile;

use super::*;

#[test]
fn missing_config_file_is_skipped() {
    let cli = cli(&[
        "--config",
        "nonexistent_file_12345.cfg",
        "--host",
        "h",
    ]);

    let options = resolver().collect(&cli);

    assert_eq!(text(&options, Key::Host), Some("h"));
    assert_eq!(text(&options, Key::Lang), Some("foxdot"));
}

#[test]
fn missing_config_file_still_resolves() {
    let mut prompter = ScriptedPrompter::new(&["", "", "Dan", "pw"]);
    let cli = cli(&["--config", "nonexistent_file_12345.cfg"]);

    let options = resolver().resolve(&cli, &mut prompter).unwrap();

    assert_eq!(text(&options, Key::Host), Some("localhost"));
    assert_eq!(prompter.asked.len(), 4);
}

#[test]
fn complete_config_file_needs_no_prompt() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "host=10.0.0.9\nport=7000\nname=Eve\npassword=pw").unwrap();
    let mut prompter = ScriptedPrompter::new(&[]);
    let cli = cli(&["--config", file.path().to_str().unwrap()]);

    let options = resolver().resolve(&cli, &mut prompter).unwrap();

    assert!(prompter.asked.is_empty());
    assert_eq!(options.get(Key::Port), Some(&Value::Integer(7000)));
    assert_eq!(options.get(Key::GetInfo), Some(&Value::Bool(false)));
}

#[test]
fn file_get_info_is_recomputed() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "host=h\nport=1\nname=n\npassword=p\nget_info=true").unwrap();
    let mut prompter = ScriptedPrompter::new(&[]);
    let cli = cli(&["--config", file.path().to_str().unwrap()]);

    let options = resolver().resolve(&cli, &mut prompter).unwrap();

    assert_eq!(options.get(Key::GetInfo), Some(&Value::Bool(false)));
}

#[test]
fn file_logging_text_is_coerced() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "host=h\nport=1\nname=n\npassword=p\nlogging= True ").unwrap();
    let mut prompter = ScriptedPrompter::new(&[]);
    let cli = cli(&["--config", file.path().to_str().unwrap()]);

    let options = resolver().resolve(&cli, &mut prompter).unwrap();

    assert_eq!(options.get(Key::Logging), Some(&Value::Bool(true)));
}

#[test]
fn invalid_file_port_is_fatal() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "host=h\nport=http\nname=n\npassword=p").unwrap();
    let mut prompter = ScriptedPrompter::new(&[]);
    let cli = cli(&["--config", file.path().to_str().unwrap()]);

    let result = resolver().resolve(&cli, &mut prompter);

    assert!(matches!(result, Err(ConfigError::InvalidPort { .. })));
}

#[test]
fn blank_host_flag_does_not_discard_file_host() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "host=file.example.org\nport=1111").unwrap();
    let mut prompter = ScriptedPrompter::new(&["Fay", "pw"]);
    let cli = cli(&["--config", file.path().to_str().unwrap(), "--host", ""]);

    let options = resolver().resolve(&cli, &mut prompter).unwrap();

    assert_eq!(prompter.asked_fields(), vec![Key::Name, Key::Password]);
    assert_eq!(text(&options, Key::Host), Some("file.example.org"));
    assert_eq!(options.get(Key::Port), Some(&Value::Integer(1111)));
}
