//! Tests for the logger module

use std::path::PathBuf;

use tempfile::TempDir;

use crate::logger::config::*;
use crate::logger::writer::open_log_file;
use crate::logger::{LoggerError, build_layers};

fn file_output(path: PathBuf, append: bool, format: LogFormat) -> FileOutput {
    FileOutput {
        path,
        append,
        format,
    }
}

mod config_tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = LoggerConfig::default();
        assert_eq!(config.console, Some(ConsoleOutput { colored: true }));
        assert!(config.file.is_none());
        assert_eq!(config.filter, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_no_outputs_is_invalid() {
        let mut config = LoggerConfig::console_only("info", false);
        config.console = None;
        assert!(matches!(config.validate(), Err(LoggerError::NoOutputs)));
    }

    #[test]
    fn test_directive_filters_are_accepted() {
        let config = LoggerConfig::console_only("release_notifier=debug,hyper=warn", false);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_garbage_filter_is_rejected() {
        let config = LoggerConfig::console_only("release_notifier=[", false);
        assert!(matches!(
            config.validate(),
            Err(LoggerError::InvalidFilter { .. })
        ));
    }

    #[test]
    fn test_enabled_file_needs_path() {
        let mut config = LoggerConfig::console_only("info", false);
        config.file = Some(file_output(PathBuf::new(), true, LogFormat::Json));
        assert!(matches!(config.validate(), Err(LoggerError::MissingPath)));
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!("FULL".parse::<LogFormat>().unwrap(), LogFormat::Full);
        assert_eq!("compact".parse::<LogFormat>().unwrap(), LogFormat::Compact);
        assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
        assert!(matches!(
            "yaml".parse::<LogFormat>(),
            Err(LoggerError::UnknownFormat(name)) if name == "yaml"
        ));
    }
}

mod writer_tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_open_log_file_creates_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/deeper/app.log");
        let output = file_output(path.clone(), true, LogFormat::Json);

        let file = open_log_file(&output).unwrap();
        writeln!(file.lock().unwrap(), "hello").unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), "hello\n");
    }

    #[test]
    fn test_truncate_mode_discards_previous_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");
        std::fs::write(&path, "old line\n").unwrap();
        let output = file_output(path.clone(), false, LogFormat::Full);

        let file = open_log_file(&output).unwrap();
        writeln!(file.lock().unwrap(), "new line").unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), "new line\n");
    }

    #[test]
    fn test_append_mode_keeps_previous_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");
        std::fs::write(&path, "old line\n").unwrap();
        let output = file_output(path.clone(), true, LogFormat::Compact);

        let file = open_log_file(&output).unwrap();
        writeln!(file.lock().unwrap(), "new line").unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), "old line\nnew line\n");
    }
}

mod layer_tests {
    use super::*;

    #[test]
    fn test_console_only_builds_one_layer() {
        let layers = build_layers(&LoggerConfig::console_only("info", false)).unwrap();
        assert_eq!(layers.len(), 1);
    }

    #[test]
    fn test_file_and_console_build_two_layers() {
        let dir = TempDir::new().unwrap();
        let mut config = LoggerConfig::console_only("info", false);
        config.file = Some(file_output(dir.path().join("app.log"), true, LogFormat::Json));

        let layers = build_layers(&config).unwrap();
        assert_eq!(layers.len(), 2);
    }

    #[test]
    fn test_unopenable_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let mut config = LoggerConfig::console_only("info", false);
        // a directory cannot be opened as the log file
        config.file = Some(file_output(dir.path().to_path_buf(), true, LogFormat::Full));

        let err = build_layers(&config).err().expect("directory is not a file");
        assert!(matches!(err, LoggerError::OpenFile { .. }));
    }
}
