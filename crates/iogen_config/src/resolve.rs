//! Path resolution: anchoring configured paths at the project directory.

use crate::types::ProjectConfig;
use std::path::{Path, PathBuf};

/// A project configuration with every path resolved against the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProject {
    /// The project name.
    pub name: String,
    /// Signal table path, if configured.
    pub signals: Option<PathBuf>,
    /// Pin table path, if configured.
    pub pins: Option<PathBuf>,
    /// XDC output path.
    pub xdc: PathBuf,
    /// VHDL output path.
    pub vhdl: PathBuf,
}

/// Resolves the configured paths against `root`, the directory holding `iogen.toml`.
///
/// Absolute paths are kept as they are.
pub fn resolve_project(config: &ProjectConfig, root: &Path) -> ResolvedProject {
    ResolvedProject {
        name: config.project.name.clone(),
        signals: config.tables.signals.as_deref().map(|p| root.join(p)),
        pins: config.tables.pins.as_deref().map(|p| root.join(p)),
        xdc: root.join(&config.outputs.xdc),
        vhdl: root.join(&config.outputs.vhdl),
    }
}
