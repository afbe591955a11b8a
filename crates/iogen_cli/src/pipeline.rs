//! Shared helpers for CLI commands: config discovery and output writing.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use iogen_config::CONFIG_FILE_NAME;

use crate::GlobalArgs;

/// Walks up from `start` looking for the nearest directory containing `iogen.toml`.
///
/// Returns the directory containing `iogen.toml`, or an error if none is found.
pub fn find_project_root(start: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(CONFIG_FILE_NAME).exists() {
            return Ok(current);
        }
        if !current.pop() {
            return Err(format!(
                "could not find {CONFIG_FILE_NAME} in {} or any parent directory",
                start.display()
            )
            .into());
        }
    }
}

/// Resolves the configuration file from global CLI args.
///
/// If `--config` is specified, uses that path (file as is, dir gets its
/// `iogen.toml`). Otherwise walks up from the current directory looking for
/// `iogen.toml`.
pub fn resolve_config_file(global: &GlobalArgs) -> Result<PathBuf, Box<dyn std::error::Error>> {
    match global.config {
        Some(ref config_path) => {
            let p = PathBuf::from(config_path);
            if p.is_dir() {
                Ok(p.join(CONFIG_FILE_NAME))
            } else {
                Ok(p)
            }
        }
        None => Ok(find_project_root(&std::env::current_dir()?)?.join(CONFIG_FILE_NAME)),
    }
}

/// Writes `text` to `path`, creating parent directories as needed.
pub fn write_file(path: &Path, text: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, text)
}

/// Writes `text` to `path` when given, otherwise to stdout.
pub fn write_output(path: Option<&Path>, text: &str) -> std::io::Result<()> {
    match path {
        Some(path) => {
            write_file(path, text)?;
            tracing::info!(path = %path.display(), "wrote output");
            Ok(())
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()
        }
    }
}
