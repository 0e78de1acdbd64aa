//! Tests for the `key=value` configuration file.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::{NamedTempFile, tempdir};

use super::ConfigError;
use super::file::{ConfigFile, default_config_template, write_default_config};
use super::options::{Key, Value};

mod parsing {
    use super::*;

    #[test]
    fn parse_host_and_port() {
        let file = ConfigFile::parse("host=192.168.0.10\nport=57890\n");

        assert_eq!(file.options.len(), 2);
        assert_eq!(
            file.options.get(Key::Host),
            Some(&Value::text("192.168.0.10"))
        );
        assert_eq!(file.options.get(Key::Port), Some(&Value::text("57890")));
    }

    #[test]
    fn whitespace_is_trimmed() {
        let file = ConfigFile::parse("  host =  example.org  \r\n");

        assert_eq!(file.options.get(Key::Host), Some(&Value::text("example.org")));
    }

    #[test]
    fn value_may_contain_equals() {
        let file = ConfigFile::parse("password=a=b\n");

        assert_eq!(file.options.get(Key::Password), Some(&Value::text("a=b")));
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let file = ConfigFile::parse("# server\n\n; old\nhost=h\n");

        assert_eq!(file.options.len(), 1);
    }

    #[test]
    fn malformed_lines_are_ignored() {
        let file = ConfigFile::parse("just some text\nhost=h\n=value\n");

        assert_eq!(file.options.len(), 1);
        assert_eq!(file.options.get(Key::Host), Some(&Value::text("h")));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let file = ConfigFile::parse("colour=blue\nHOST=h\nport=1\n");

        assert_eq!(file.options.len(), 1);
        assert!(file.options.get(Key::Host).is_none());
    }

    #[test]
    fn later_duplicate_wins() {
        let file = ConfigFile::parse("host=first\nhost=second\n");

        assert_eq!(file.options.get(Key::Host), Some(&Value::text("second")));
    }

    #[test]
    fn args_split_on_whitespace() {
        let file = ConfigFile::parse("args=-ghci-script  BootTidal.hs\n");

        assert_eq!(
            file.options.get(Key::Args),
            Some(&Value::List(vec![
                "-ghci-script".to_string(),
                "BootTidal.hs".to_string()
            ]))
        );
    }

    #[test]
    fn whole_vocabulary_is_read() {
        let file = ConfigFile::parse(
            "host=h\nport=1\nname=n\npassword=p\nlang=tidal\nlogging=true\nget_info=false\n",
        );

        assert_eq!(file.options.len(), 7);
        assert_eq!(file.options.get(Key::Logging), Some(&Value::text("true")));
    }

    #[test]
    fn empty_content() {
        assert!(ConfigFile::parse("").options.is_empty());
    }
}

mod loading {
    use super::*;

    #[test]
    fn load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "host=10.1.1.1").unwrap();
        writeln!(file, "port=4000").unwrap();

        let config = ConfigFile::load(file.path()).unwrap();

        assert_eq!(config.options.get(Key::Host), Some(&Value::text("10.1.1.1")));
        assert_eq!(config.options.get(Key::Port), Some(&Value::text("4000")));
    }

    #[test]
    fn load_nonexistent_file_returns_error() {
        let result = ConfigFile::load(Path::new("nonexistent_file_12345.cfg"));

        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    }

    #[test]
    fn load_directory_returns_error() {
        let dir = tempdir().unwrap();

        assert!(matches!(
            ConfigFile::load(dir.path()),
            Err(ConfigError::FileRead { .. })
        ));
    }
}

mod template {
    use super::*;

    #[test]
    fn template_parses_to_host_and_port() {
        let file = ConfigFile::parse(&default_config_template());

        assert_eq!(file.options.len(), 2);
        assert_eq!(file.options.get(Key::Host), Some(&Value::text("localhost")));
        assert_eq!(file.options.get(Key::Port), Some(&Value::text("57890")));
    }

    #[test]
    fn write_default_config_creates_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("client.cfg");

        write_default_config(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("host="));
        assert!(content.contains("port="));
        assert!(!content.contains("\npassword="));
    }

    #[test]
    fn write_default_config_to_invalid_path_returns_error() {
        let path = Path::new("/nonexistent_dir_12345/client.cfg");

        assert!(matches!(
            write_default_config(path),
            Err(ConfigError::FileWrite { .. })
        ));
    }
}
