//! Log file output

use std::fs::{File, OpenOptions};
use std::sync::Mutex;

use crate::logger::config::FileOutput;
use crate::logger::error::LoggerError;

/// Opens the configured log file, creating its directory first.
///
/// The returned `Mutex<File>` is a `MakeWriter` for `tracing-subscriber`.
pub(crate) fn open_log_file(config: &FileOutput) -> Result<Mutex<File>, LoggerError> {
    if let Some(parent) = config.path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|source| LoggerError::OpenFile {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let mut options = OpenOptions::new();
    options.create(true);
    if config.append {
        options.append(true);
    } else {
        options.write(true).truncate(true);
    }

    let file = options
        .open(&config.path)
        .map_err(|source| LoggerError::OpenFile {
            path: config.path.clone(),
            source,
        })?;

    Ok(Mutex::new(file))
}
